//! Field generation: Rust type and serde attributes per field kind.
//!
//! Each [`FieldDescriptor`] becomes one struct field. The field's kind picks
//! the Rust type, and its optionality picks the `skip_serializing_if`
//! predicate that decides when it is left out of serialized output.
//!
//! ## Mapping (`OptionalStyle::OmitZero`)
//!
//! | Kind | Type | Skipped when (optional only) |
//! |------|------|------------------------------|
//! | string | `String` | empty |
//! | integer / float / boolean | `i64` / `f64` / `bool` | zero / `false` |
//! | list(T), list(object) | `Vec<T>` | empty |
//! | map(string) | `BTreeMap<String, String>` | empty |
//! | object | `Option<T>` (required: `T`) | `None` |
//! | dynamic | `Value` | null |
//!
//! With `OptionalStyle::Presence` every optional field is `Option<T>` and is
//! skipped only when `None`, except `dynamic`: it stays a plain `Value` in
//! both styles, skipped when null. `Option<Value>` cannot tell an explicit
//! `null` from an absent key, since both decode to `None`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tfstruct_define::{FieldDescriptor, FieldKind};

use super::module_docs::doc_lines;
use crate::casing::field_ident;
use crate::options::OptionalStyle;

/// Imports a generated module needs, collected while its fields are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UsedImports {
    /// `std::collections::BTreeMap` is referenced.
    pub btree_map: bool,
    /// `serde_json::Value` is referenced.
    pub value: bool,
}

impl UsedImports {
    /// Returns the `use` items for everything referenced.
    pub fn to_tokens(self) -> TokenStream {
        let btree_map = self
            .btree_map
            .then(|| quote! { use std::collections::BTreeMap; });
        let value = self.value.then(|| quote! { use serde_json::Value; });

        quote! {
            #btree_map
            #value
        }
    }
}

/// Returns the Rust value type for a kind, ignoring optionality.
///
/// `None` means the kind has no generation rule.
pub fn value_type(
    kind: &FieldKind,
    nested_type: Option<&str>,
    imports: &mut UsedImports,
) -> Option<TokenStream> {
    match kind {
        FieldKind::String => Some(quote! { String }),
        FieldKind::Integer => Some(quote! { i64 }),
        FieldKind::Float => Some(quote! { f64 }),
        FieldKind::Boolean => Some(quote! { bool }),
        FieldKind::Dynamic => {
            imports.value = true;
            Some(quote! { Value })
        }
        FieldKind::Map(value) if **value == FieldKind::String => {
            imports.btree_map = true;
            Some(quote! { BTreeMap<String, String> })
        }
        FieldKind::List(elem) if is_list_element(elem) => {
            let elem_ty = value_type(elem, None, imports)?;
            Some(quote! { Vec<#elem_ty> })
        }
        FieldKind::Object => {
            let name = format_ident!("{}", nested_type?);
            Some(quote! { #name })
        }
        FieldKind::ObjectList => {
            let name = format_ident!("{}", nested_type?);
            Some(quote! { Vec<#name> })
        }
        FieldKind::Map(_) | FieldKind::List(_) | FieldKind::Unrecognized(_) => None,
    }
}

/// Kinds allowed as list elements.
fn is_list_element(kind: &FieldKind) -> bool {
    kind.is_scalar() || kind.is_string_map() || *kind == FieldKind::Dynamic
}

/// Returns the `skip_serializing_if` predicate for an optional field in
/// `OmitZero` style.
fn zero_predicate(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::String => "String::is_empty",
        FieldKind::Integer | FieldKind::Float | FieldKind::Boolean => "crate::shared::is_zero",
        FieldKind::List(_) | FieldKind::ObjectList => "Vec::is_empty",
        FieldKind::Map(_) => "BTreeMap::is_empty",
        FieldKind::Object => "Option::is_none",
        FieldKind::Dynamic => "Value::is_null",
        FieldKind::Unrecognized(_) => "Option::is_none",
    }
}

/// Builds the doc lines for a field.
///
/// Each line carries a leading space for proper `///` formatting.
pub fn field_doc_lines(field: &FieldDescriptor) -> Vec<String> {
    let mut lines = field.description.as_deref().map(doc_lines).unwrap_or_default();

    let mut notes = Vec::new();
    if field.required {
        notes.push("Required.");
    }
    if field.computed {
        notes.push("Computed by the provider when not set.");
    }
    if field.deprecated {
        notes.push("Deprecated upstream.");
    }

    if !notes.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!(" {}", notes.join(" ")));
    }

    lines
}

/// Generates one struct field.
///
/// Returns `None` when the field's kind has no generation rule.
///
/// ## Examples
///
/// For `FieldDescriptor::integer("count")` in `OmitZero` style:
/// ```ignore
/// #[serde(rename = "count", default, skip_serializing_if = "crate::shared::is_zero")]
/// pub count: i64,
/// ```
pub fn generate_field(
    field: &FieldDescriptor,
    style: OptionalStyle,
    imports: &mut UsedImports,
) -> Option<TokenStream> {
    let nested_type = field.nested.as_ref().map(|n| n.type_name.as_str());
    let base = value_type(&field.kind, nested_type, imports)?;

    let ident = field_ident(&field.wire_key);
    let wire_key = &field.wire_key;
    let docs = field_doc_lines(field);

    let skip_if = |predicate: &str| {
        quote! { #[serde(rename = #wire_key, default, skip_serializing_if = #predicate)] }
    };

    let (ty, attr) = if field.required {
        (base, quote! { #[serde(rename = #wire_key)] })
    } else {
        match (style, &field.kind) {
            (_, FieldKind::Dynamic) => (base, skip_if(zero_predicate(&field.kind))),
            (OptionalStyle::OmitZero, FieldKind::Object) | (OptionalStyle::Presence, _) => {
                (quote! { Option<#base> }, skip_if("Option::is_none"))
            }
            (OptionalStyle::OmitZero, kind) => (base, skip_if(zero_predicate(kind))),
        }
    };

    Some(quote! {
        #(#[doc = #docs])*
        #attr
        pub #ident: #ty,
    })
}
