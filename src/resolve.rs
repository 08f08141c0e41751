//! Indirection resolution
//!
//! A variant cannot embed the base type by value, so every field whose type is
//! exactly the base type name is rewritten to the profile's indirect form.
//! All other types pass through untouched, including fields already written
//! in indirect form. The match is textual.
//!
//! A self-reference pre-annotated with the grammar's `*` sigil is already
//! indirect; targets that spell indirection differently re-spell it rather
//! than copy a type they cannot compile.

use crate::codegen::RenderProfile;
use crate::grammar::{Grammar, VariantSpec};

/// A field with its emitted type decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub name: String,
    pub ty: String,
    /// Whether the resolver introduced indirection for this field
    pub indirect: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariant {
    pub name: String,
    pub tag: String,
    pub fields: Vec<ResolvedField>,
}

/// Grammar with every field type resolved for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub base_name: String,
    pub variants: Vec<ResolvedVariant>,
}

impl Schema {
    pub fn resolve(grammar: &Grammar, profile: &RenderProfile) -> Self {
        let variants = grammar
            .variants
            .iter()
            .map(|v| resolve_variant(v, &grammar.base_name, profile))
            .collect();

        Self {
            base_name: grammar.base_name.clone(),
            variants,
        }
    }

    /// Number of declarations emitted for this schema (structs plus the union)
    pub fn type_count(&self) -> usize {
        self.variants.len() + 1
    }
}

fn resolve_variant(variant: &VariantSpec, base_name: &str, profile: &RenderProfile) -> ResolvedVariant {
    let fields = variant
        .fields
        .iter()
        .map(|field| {
            let (ty, indirect) = resolve_type(&field.ty, base_name, profile);
            if indirect {
                tracing::debug!(variant = %variant.name, field = %field.name, %ty, "boxed self reference");
            } else if is_misspelled_self_reference(&field.ty, base_name, profile) {
                tracing::warn!(
                    variant = %variant.name,
                    field = %field.name,
                    ty = %field.ty,
                    "type looks like a reference to `{}` but does not match it exactly; emitted unchanged",
                    base_name
                );
            }
            ResolvedField {
                name: field.name.clone(),
                ty,
                indirect,
            }
        })
        .collect();

    ResolvedVariant {
        name: variant.name.clone(),
        tag: variant.tag(),
        fields,
    }
}

/// Decide the emitted type for one declared type.
///
/// Returns the type to emit and whether indirection was added.
pub fn resolve_type(ty: &str, base_name: &str, profile: &RenderProfile) -> (String, bool) {
    if ty == base_name {
        (profile.indirect(base_name), true)
    } else if let Some(respelled) = profile.foreign_indirect(ty, base_name) {
        tracing::debug!(from = %ty, to = %respelled, "re-spelled pre-annotated self reference");
        (respelled, false)
    } else {
        (ty.to_string(), false)
    }
}

// `* Expression`, `Box< Expression >` and the like
fn is_misspelled_self_reference(ty: &str, base_name: &str, profile: &RenderProfile) -> bool {
    let compact: String = ty.chars().filter(|c| !c.is_whitespace()).collect();
    if compact == ty {
        return false;
    }
    compact == base_name || compact == profile.indirect(base_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar(entries: &[&str]) -> Grammar {
        Grammar::parse("Expression", entries.iter().copied()).unwrap()
    }

    #[test]
    fn test_base_type_is_made_indirect() {
        let (ty, indirect) = resolve_type("Expression", "Expression", &RenderProfile::zig());
        assert_eq!(ty, "*Expression");
        assert!(indirect);

        let (ty, _) = resolve_type("Expression", "Expression", &RenderProfile::rust());
        assert_eq!(ty, "Box<Expression>");
    }

    #[test]
    fn test_other_types_pass_through() {
        for ty in ["Token", "u8", "[]const u8", "?*Expression", "Expressions", "expression"] {
            let (out, indirect) = resolve_type(ty, "Expression", &RenderProfile::zig());
            assert_eq!(out, ty);
            assert!(!indirect);
        }
    }

    #[test]
    fn test_pre_annotated_field_is_not_double_wrapped() {
        let schema = Schema::resolve(&grammar(&["Literal : value: *Expression"]), &RenderProfile::zig());
        let field = &schema.variants[0].fields[0];
        assert_eq!(field.ty, "*Expression");
        assert!(!field.indirect);
    }

    #[test]
    fn test_pre_annotated_field_is_boxed_for_rust() {
        let schema = Schema::resolve(&grammar(&["Literal : value: *Expression"]), &RenderProfile::rust());
        let field = &schema.variants[0].fields[0];
        assert_eq!(field.ty, "Box<Expression>");
        assert!(!field.indirect);

        let schema = Schema::resolve(&grammar(&["Literal : value: Box<Expression>"]), &RenderProfile::rust());
        assert_eq!(schema.variants[0].fields[0].ty, "Box<Expression>");

        // other pointer types are left for the author to fix
        let (ty, _) = resolve_type("*Token", "Expression", &RenderProfile::rust());
        assert_eq!(ty, "*Token");
    }

    #[test]
    fn test_resolve_keeps_order_and_tags() {
        let schema = Schema::resolve(
            &grammar(&[
                "Binary   : left: Expression, operator: Token, right: Expression",
                "Grouping : expression: Expression",
            ]),
            &RenderProfile::zig(),
        );
        assert_eq!(schema.variants[0].tag, "binary");
        assert_eq!(schema.variants[1].tag, "grouping");

        let binary: Vec<_> = schema.variants[0]
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.ty.as_str()))
            .collect();
        assert_eq!(
            binary,
            vec![("left", "*Expression"), ("operator", "Token"), ("right", "*Expression")]
        );
        assert_eq!(schema.type_count(), 3);
    }

    #[test]
    fn test_misspelled_self_reference_detection() {
        let zig = RenderProfile::zig();
        assert!(is_misspelled_self_reference("* Expression", "Expression", &zig));
        assert!(!is_misspelled_self_reference("*Expression", "Expression", &zig));
        assert!(!is_misspelled_self_reference("[] Token", "Expression", &zig));

        let rust = RenderProfile::rust();
        assert!(is_misspelled_self_reference("Box< Expression >", "Expression", &rust));
    }
}
