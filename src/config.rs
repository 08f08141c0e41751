//! Configuration management for the generator
//!
//! The grammar table is configuration, not code. It is loaded from:
//! - Default values (the expression grammar below)
//! - Config file (astgen.toml, .astgen.toml, config/astgen.toml, XDG config dir)
//! - An explicit file passed with `--config`
//! - Environment variables (ASTGEN_*)
//!
//! ## Example config file (astgen.toml):
//! ```toml
//! [grammar]
//! base_name = "Expression"
//! variants = [
//!     "Binary   : left: Expression, operator: Token, right: Expression",
//!     "Grouping : expression: Expression",
//!     "Literal  : value: *Expression",
//!     "Unary    : operator: Token, right: Expression",
//! ]
//!
//! [output]
//! target = "zig"
//! file_name = "ast.zig"
//! token_module = "scanner.zig"
//! ```

use config_crate::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::codegen::{RenderProfile, Target};
use crate::error::Result;
use crate::grammar::Grammar;

/// Main configuration for the generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Grammar table
    #[serde(default)]
    pub grammar: GrammarConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Grammar table configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarConfig {
    /// Name of the recursive umbrella type
    #[serde(default = "default_base_name")]
    pub base_name: String,

    /// Variant specifications, `Name : field: type, ...`
    #[serde(default = "default_variants")]
    pub variants: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Target language
    #[serde(default)]
    pub target: Target,

    /// Output file name (defaults per target)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Module exporting the lexer's `Token` type (defaults per target)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_module: Option<String>,
}

// Default value functions
fn default_base_name() -> String {
    "Expression".to_string()
}

fn default_variants() -> Vec<String> {
    [
        "Binary   : left: Expression, operator: Token, right: Expression",
        "Grouping : expression: Expression",
        "Literal  : value: *Expression",
        "Unary    : operator: Token, right: Expression",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            base_name: default_base_name(),
            variants: default_variants(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration, adding a required file on top of the default locations
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = ["astgen.toml", ".astgen.toml", "config/astgen.toml"];

        for location in config_locations {
            builder = builder.add_source(File::new(location, FileFormat::Toml).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "astgen", "astgen") {
            let xdg_config = config_dir.config_dir().join("astgen.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            tracing::debug!(path = %path.display(), "loading grammar configuration");
            builder = builder.add_source(
                File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
            );
        }

        // ASTGEN_GRAMMAR__BASE_NAME, ASTGEN_OUTPUT__TARGET, ...
        builder = builder.add_source(
            Environment::with_prefix("ASTGEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse the configured grammar table
    pub fn grammar(&self) -> Result<Grammar> {
        Grammar::parse(&self.grammar.base_name, &self.grammar.variants)
    }

    /// Build the render profile for the configured target
    pub fn profile(&self) -> RenderProfile {
        let mut profile = RenderProfile::for_target(self.output.target);
        if let Some(file_name) = &self.output.file_name {
            profile.file_name = file_name.clone();
        }
        if let Some(token_module) = &self.output.token_module {
            profile.token_module = token_module.clone();
        }
        profile
    }
}
