//! Grammar table parsing
//!
//! A grammar is a base type name plus an ordered list of variant
//! specifications, each written as a single line:
//!
//! ```text
//! Binary   : left: Expression, operator: Token, right: Expression
//! ```
//!
//! The variant name is split from the field list on the first `:`, fields are
//! separated by `", "`, and each field is split on its own first `:`. Every
//! token is trimmed.

use std::collections::HashSet;

use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

static IDENTIFIER: OnceCell<Regex> = OnceCell::new();

const FIELD_SEPARATOR: &str = ", ";

/// Names bound by the emitted headers (`std`, `Token`, Rust's `Box`)
const RESERVED_NAMES: &[&str] = &["std", "Token", "Box"];

/// A single field of a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    /// Declared type, exactly as written (after trimming)
    pub ty: String,
}

/// A named alternative of the base type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl VariantSpec {
    /// Tag used for this variant inside the tagged union
    pub fn tag(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A parsed grammar table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    pub base_name: String,
    pub variants: Vec<VariantSpec>,
}

impl Grammar {
    /// Parse every entry of a grammar table, in order.
    ///
    /// Rejects duplicate variant names, variants whose lower-cased tags would
    /// collide in the union, and variants that would shadow the base type or
    /// a name imported by the header.
    pub fn parse<I, S>(base_name: &str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base_name = base_name.trim();
        if !is_identifier(base_name) {
            return Err(GenError::format(
                base_name,
                "base type name is not an identifier",
            ));
        }

        let mut variants: Vec<VariantSpec> = Vec::new();
        let mut names = HashSet::new();
        let mut tags = HashSet::new();

        for entry in entries {
            let entry = entry.as_ref();
            let variant = parse_variant(entry)?;

            if variant.name == base_name {
                return Err(GenError::format(
                    entry,
                    format!("variant `{}` has the same name as the base type", variant.name),
                ));
            }
            if RESERVED_NAMES.contains(&variant.name.as_str()) {
                return Err(GenError::format(
                    entry,
                    format!("variant name `{}` is reserved", variant.name),
                ));
            }
            if !names.insert(variant.name.clone()) {
                return Err(GenError::format(
                    entry,
                    format!("duplicate variant `{}`", variant.name),
                ));
            }
            if !tags.insert(variant.tag()) {
                return Err(GenError::format(
                    entry,
                    format!("variant tag `{}` collides with an earlier variant", variant.tag()),
                ));
            }

            tracing::debug!(
                variant = %variant.name,
                fields = variant.fields.len(),
                "parsed variant"
            );
            variants.push(variant);
        }

        Ok(Self {
            base_name: base_name.to_string(),
            variants,
        })
    }
}

/// Parse one `Name : field: type, ...` entry
pub fn parse_variant(entry: &str) -> Result<VariantSpec> {
    let (name, fields_str) = entry
        .split_once(':')
        .ok_or_else(|| GenError::format(entry, "missing `:` between variant name and fields"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(GenError::format(entry, "empty variant name"));
    }
    if !is_identifier(name) {
        return Err(GenError::format(
            entry,
            format!("variant name `{}` is not an identifier", name),
        ));
    }

    let mut fields: Vec<FieldSpec> = Vec::new();
    for raw in fields_str.trim().split(FIELD_SEPARATOR) {
        let field = parse_field(entry, raw)?;
        if fields.iter().any(|f| f.name == field.name) {
            return Err(GenError::format(
                entry,
                format!("duplicate field `{}`", field.name),
            ));
        }
        fields.push(field);
    }

    Ok(VariantSpec {
        name: name.to_string(),
        fields,
    })
}

fn parse_field(entry: &str, raw: &str) -> Result<FieldSpec> {
    let (name, ty) = raw.split_once(':').ok_or_else(|| {
        GenError::format(entry, format!("field `{}` is missing `:` before its type", raw.trim()))
    })?;

    let name = name.trim();
    let ty = ty.trim();

    if name.is_empty() {
        return Err(GenError::format(entry, "empty field name"));
    }
    if !is_identifier(name) {
        return Err(GenError::format(
            entry,
            format!("field name `{}` is not an identifier", name),
        ));
    }
    if ty.is_empty() {
        return Err(GenError::format(
            entry,
            format!("field `{}` has an empty type", name),
        ));
    }

    Ok(FieldSpec {
        name: name.to_string(),
        ty: ty.to_string(),
    })
}

fn is_identifier(s: &str) -> bool {
    IDENTIFIER
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern compiles"))
        .is_match(s)
}
