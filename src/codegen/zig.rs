//! Zig Code Emitter
//!
//! One `const Name = struct { ... };` per variant followed by a
//! `pub const Base = union(enum) { ... };` with lower-cased tags.

use super::RenderProfile;
use crate::resolve::{ResolvedVariant, Schema};

pub fn emit(schema: &Schema, profile: &RenderProfile) -> String {
    let mut output = String::new();

    output.push_str("const std = @import(\"std\");\n");
    output.push_str(&format!(
        "const Token = @import(\"{}\").Token;\n",
        profile.token_module
    ));

    for variant in &schema.variants {
        emit_struct(&mut output, variant, profile);
        output.push_str("\n\n");
    }

    emit_union(&mut output, schema, profile);

    output
}

fn emit_struct(output: &mut String, variant: &ResolvedVariant, profile: &RenderProfile) {
    output.push_str(&format!("const {} = struct {{\n", variant.name));
    for field in &variant.fields {
        output.push_str(&format!(
            "    {}: {},\n",
            profile.escape_keyword(&field.name),
            field.ty
        ));
    }
    output.push_str("};");
}

fn emit_union(output: &mut String, schema: &Schema, profile: &RenderProfile) {
    output.push_str(&format!("pub const {} = union(enum) {{\n", schema.base_name));
    for variant in &schema.variants {
        output.push_str(&format!(
            "    {}: {},\n",
            profile.escape_keyword(&variant.tag),
            variant.name
        ));
    }
    output.push_str("};\n");
}
