//! AST Declaration Generator
//!
//! Turns a compact grammar table into target-language declarations of an
//! abstract syntax tree: one struct per grammar variant and one tagged union
//! over all of them.
//!
//! ## Pipeline
//!
//! ```text
//! GeneratorConfig ──► Grammar ──► Schema ──► emitter ──► <output_dir>/ast.zig
//!  (astgen.toml)      (parse)    (resolve)   (zig|rust)
//! ```
//!
//! Fields whose type is the base type itself are emitted behind a pointer
//! (`*Expression`) or box (`Box<Expression>`); everything else is copied
//! verbatim.

pub mod checksum;
pub mod codegen;
pub mod config;
pub mod error;
pub mod grammar;
pub mod resolve;

pub use checksum::Checksum;
pub use codegen::{check_output, generate, write_output, Drift, GeneratedOutput, RenderProfile, Target};
pub use config::GeneratorConfig;
pub use error::{GenError, Result};
pub use grammar::{FieldSpec, Grammar, VariantSpec};
pub use resolve::{ResolvedField, ResolvedVariant, Schema};

/// Exit status for command line misuse (sysexits `EX_USAGE`)
pub const EXIT_USAGE: i32 = 64;

/// Parse the configured grammar and render it for the configured target
pub fn generate_from_config(config: &GeneratorConfig) -> Result<GeneratedOutput> {
    let grammar = config.grammar()?;
    Ok(generate(&grammar, &config.profile()))
}
