//! Code Generation
//!
//! Turns a parsed Grammar into declaration text and puts it on disk.
//!
//! Architecture:
//! - Schema: the grammar with indirection already decided (see `resolve`)
//! - RenderProfile: per-target spelling (indirection, imports, file name)
//! - Emitters: one module per target language, consuming only Schema + profile
//!
//! Emission is a pure function of its input. Writing and drift checking are
//! the only steps that touch the filesystem.

pub mod config;
pub mod rust;
pub mod zig;

pub use config::{RenderProfile, Target};

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::checksum::Checksum;
use crate::error::{GenError, Result};
use crate::grammar::Grammar;
use crate::resolve::Schema;

// =============================================================================
// Generated Output
// =============================================================================

/// Output from code generation
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    /// File name inside the output directory
    pub file_name: String,
    /// Generated code as a string
    pub code: String,
    /// Number of declarations generated
    pub type_count: usize,
    pub checksum: Checksum,
}

/// Result of comparing generated output with what is on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    UpToDate,
    /// Unified diff from empty text to the generated text
    Missing { diff: String },
    /// Unified diff from the file on disk to the generated text
    Changed { diff: String },
}

impl Drift {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, Drift::UpToDate)
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Generate declaration text for a grammar
pub fn generate(grammar: &Grammar, profile: &RenderProfile) -> GeneratedOutput {
    let schema = Schema::resolve(grammar, profile);

    let code = match profile.target {
        Target::Zig => zig::emit(&schema, profile),
        Target::Rust => rust::emit(&schema, profile),
    };
    let checksum = Checksum::from_content(&code);

    tracing::debug!(
        target_lang = ?profile.target,
        variants = schema.variants.len(),
        %checksum,
        "generated declarations"
    );

    GeneratedOutput {
        file_name: profile.file_name.clone(),
        code,
        type_count: schema.type_count(),
        checksum,
    }
}

/// Write generated output into `output_dir`, creating the directory if needed.
///
/// Any existing file is overwritten. Returns the path written.
pub fn write_output(output_dir: &Path, output: &GeneratedOutput) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| GenError::io(output_dir, e))?;

    let path = output_dir.join(&output.file_name);
    let file = File::create(&path).map_err(|e| GenError::io(&path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(output.code.as_bytes())
        .map_err(|e| GenError::io(&path, e))?;
    writer.flush().map_err(|e| GenError::io(&path, e))?;

    tracing::info!(
        path = %path.display(),
        bytes = output.code.len(),
        checksum = %output.checksum,
        "wrote declarations"
    );

    Ok(path)
}

/// Compare generated output with the file in `output_dir` without writing.
pub fn check_output(output_dir: &Path, output: &GeneratedOutput) -> Result<Drift> {
    let path = output_dir.join(&output.file_name);

    let on_disk = path.display().to_string();

    let existing = match fs::read_to_string(&path) {
        Ok(existing) => existing,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %on_disk, "no generated file on disk");
            return Ok(Drift::Missing {
                diff: unified_diff("", &output.code, &on_disk),
            });
        }
        Err(e) => return Err(GenError::io(&path, e)),
    };

    if output.checksum.verify(&existing) {
        tracing::info!(path = %on_disk, checksum = %output.checksum, "up to date");
        return Ok(Drift::UpToDate);
    }

    tracing::info!(path = %on_disk, "generated file is stale");
    Ok(Drift::Changed {
        diff: unified_diff(&existing, &output.code, &on_disk),
    })
}

fn unified_diff(old: &str, new: &str, old_label: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut unified = diff.unified_diff();
    unified.header(old_label, "generated");
    unified.to_string()
}
