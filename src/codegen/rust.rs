//! Rust Code Emitter
//!
//! Variants become plain structs with public fields. The union is an enum whose
//! variant names are the lower-cased tags, so `#[allow(non_camel_case_types)]`
//! is emitted on it.

use super::RenderProfile;
use crate::resolve::{ResolvedVariant, Schema};

const DERIVES: &str = "#[derive(Debug, Clone)]\n";

pub fn emit(schema: &Schema, profile: &RenderProfile) -> String {
    let mut output = String::new();

    output.push_str("#[allow(unused_imports)]\n");
    output.push_str("use std::boxed::Box;\n");
    output.push_str(&format!("use {}::Token;\n\n", profile.token_module));

    for variant in &schema.variants {
        emit_struct(&mut output, variant, profile);
        output.push('\n');
    }

    emit_enum(&mut output, schema, profile);

    output
}

fn emit_struct(output: &mut String, variant: &ResolvedVariant, profile: &RenderProfile) {
    output.push_str(DERIVES);
    output.push_str(&format!("pub struct {} {{\n", variant.name));
    for field in &variant.fields {
        output.push_str(&format!(
            "    pub {}: {},\n",
            profile.escape_keyword(&field.name),
            field.ty
        ));
    }
    output.push_str("}\n");
}

fn emit_enum(output: &mut String, schema: &Schema, profile: &RenderProfile) {
    output.push_str("#[allow(non_camel_case_types)]\n");
    output.push_str(DERIVES);
    output.push_str(&format!("pub enum {} {{\n", schema.base_name));
    for variant in &schema.variants {
        output.push_str(&format!(
            "    {}({}),\n",
            profile.escape_keyword(&variant.tag),
            variant.name
        ));
    }
    output.push_str("}\n");
}
