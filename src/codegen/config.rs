//! Render Profiles
//!
//! A RenderProfile carries everything that depends on the target language:
//! how indirection is spelled, where the token type is imported from, the
//! output file name, and how reserved words are escaped.
//!
//! Parsing and indirection decisions are profile-free. Only spelling uses it.

use serde::{Deserialize, Serialize};

/// Supported target languages
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Zig,
    Rust,
}

impl Target {
    /// Default output file name for this target
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Target::Zig => "ast.zig",
            Target::Rust => "ast.rs",
        }
    }

    /// Default location of the lexer's `Token` type
    pub fn default_token_module(&self) -> &'static str {
        match self {
            Target::Zig => "scanner.zig",
            Target::Rust => "crate::scanner",
        }
    }
}

/// Language-specific rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderProfile {
    pub target: Target,
    /// Module (Rust path or Zig import path) that exports `Token`
    pub token_module: String,
    /// Name of the single file written into the output directory
    pub file_name: String,
}

impl RenderProfile {
    pub fn zig() -> Self {
        Self::for_target(Target::Zig)
    }

    pub fn rust() -> Self {
        Self::for_target(Target::Rust)
    }

    pub fn for_target(target: Target) -> Self {
        Self {
            target,
            token_module: target.default_token_module().to_string(),
            file_name: target.default_file_name().to_string(),
        }
    }

    /// Spell the indirect (pointer / box) form of a type
    pub fn indirect(&self, type_name: &str) -> String {
        match self.target {
            Target::Zig => format!("*{}", type_name),
            Target::Rust => format!("Box<{}>", type_name),
        }
    }

    /// Re-spell a self-reference written in another target's indirect form.
    ///
    /// Grammar tables use the Zig pointer sigil (`*Expression`); a raw `*T`
    /// is not a Rust type, so the Rust profile turns it into `Box<T>`.
    pub fn foreign_indirect(&self, ty: &str, base_name: &str) -> Option<String> {
        match self.target {
            Target::Zig => None,
            Target::Rust => ty
                .strip_prefix('*')
                .filter(|inner| *inner == base_name)
                .map(|inner| self.indirect(inner)),
        }
    }

    /// Escape an identifier that collides with a reserved word
    pub fn escape_keyword(&self, name: &str) -> String {
        match self.target {
            Target::Zig if ZIG_KEYWORDS.contains(&name) => format!("@\"{}\"", name),
            Target::Rust if RUST_PATH_KEYWORDS.contains(&name) => format!("{}_", name),
            Target::Rust if RUST_KEYWORDS.contains(&name) => format!("r#{}", name),
            _ => name.to_string(),
        }
    }
}

// =============================================================================
// Keywords
// =============================================================================

const ZIG_KEYWORDS: &[&str] = &[
    "addrspace", "align", "allowzero", "and", "anyframe", "anytype", "asm", "async",
    "await", "break", "callconv", "catch", "comptime", "const", "continue", "defer",
    "else", "enum", "errdefer", "error", "export", "extern", "fn", "for", "if",
    "inline", "linksection", "noalias", "noinline", "nosuspend", "opaque", "or",
    "orelse", "packed", "pub", "resume", "return", "struct", "suspend", "switch",
    "test", "threadlocal", "try", "union", "unreachable", "usingnamespace", "var",
    "volatile", "while",
];

// Cannot be raw identifiers
const RUST_PATH_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "static", "struct",
    "trait", "true", "type", "unsafe", "use", "where", "while",
    "async", "await", "dyn", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
];
