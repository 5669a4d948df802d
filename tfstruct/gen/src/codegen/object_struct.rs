//! Struct generation for object definitions.
//!
//! Each top-level definition produces one module. The module holds the
//! top-level struct followed by every nested block struct below it,
//! depth-first in field order.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tfstruct_define::ObjectDefinition;

use super::fields::{UsedImports, generate_field};
use super::module_docs::{ModuleDocBuilder, doc_lines, role_noun};
use crate::options::{GenOptions, OptionalStyle};

/// A field whose kind has no generation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedField {
    /// Dotted wire path from the top-level definition (e.g. `library.maven.coordinates`).
    pub path: String,
    /// The field's kind, as displayed.
    pub kind: String,
}

/// Where a struct sits relative to its parent.
struct Parent<'a> {
    type_name: &'a str,
    wire_key: &'a str,
    path: String,
}

/// Builds the doc lines for a struct.
fn struct_doc_lines(def: &ObjectDefinition, parent: Option<&Parent<'_>>) -> Vec<String> {
    let mut lines = def.description.as_deref().map(doc_lines).unwrap_or_default();

    let origin = match (parent, &def.wire_name) {
        (Some(parent), _) => format!(
            " The `{}` block of [`{}`].",
            parent.wire_key, parent.type_name
        ),
        (None, Some(wire)) => format!(" Configuration for the `{wire}` {}.", role_noun(def.role)),
        (None, None) => return lines,
    };

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(origin);
    lines
}

/// Generates the struct for one definition (nested definitions excluded).
///
/// ## Examples
///
/// ```
/// use tfstruct_define::{FieldDescriptor, ObjectDefinition};
/// use tfstruct_gen::codegen::fields::UsedImports;
/// use tfstruct_gen::codegen::generate_struct;
/// use tfstruct_gen::options::OptionalStyle;
///
/// let def = ObjectDefinition::block("Record")
///     .field(FieldDescriptor::string("name").required())
///     .field(FieldDescriptor::integer("count"));
///
/// let mut imports = UsedImports::default();
/// let tokens = generate_struct(&def, OptionalStyle::OmitZero, &mut imports).unwrap();
/// let code = tokens.to_string();
/// assert!(code.contains("pub struct Record"));
/// assert!(code.contains("pub count : i64"));
/// ```
pub fn generate_struct(
    def: &ObjectDefinition,
    style: OptionalStyle,
    imports: &mut UsedImports,
) -> Result<TokenStream, UnsupportedField> {
    render_struct(def, None, style, imports)
}

fn render_struct(
    def: &ObjectDefinition,
    parent: Option<&Parent<'_>>,
    style: OptionalStyle,
    imports: &mut UsedImports,
) -> Result<TokenStream, UnsupportedField> {
    let name = format_ident!("{}", def.type_name);
    let docs = struct_doc_lines(def, parent);
    let prefix = parent.map(|p| p.path.as_str()).unwrap_or_default();

    let fields = def
        .fields
        .iter()
        .map(|field| {
            generate_field(field, style, imports).ok_or_else(|| UnsupportedField {
                path: join_path(prefix, &field.wire_key),
                kind: field.kind.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        #(#[doc = #docs])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct #name {
            #(#fields)*
        }
    })
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Generates the struct for `def` and every nested block below it.
///
/// Structs are emitted depth-first in field order, so the top-level struct
/// comes first.
pub fn generate_object_types(
    def: &ObjectDefinition,
    style: OptionalStyle,
    imports: &mut UsedImports,
) -> Result<Vec<TokenStream>, UnsupportedField> {
    let mut out = Vec::new();
    collect_types(def, None, style, imports, &mut out)?;
    Ok(out)
}

fn collect_types(
    def: &ObjectDefinition,
    parent: Option<&Parent<'_>>,
    style: OptionalStyle,
    imports: &mut UsedImports,
    out: &mut Vec<TokenStream>,
) -> Result<(), UnsupportedField> {
    out.push(render_struct(def, parent, style, imports)?);

    let prefix = parent.map(|p| p.path.as_str()).unwrap_or_default();
    for field in &def.fields {
        if let Some(nested) = &field.nested {
            let child = Parent {
                type_name: &def.type_name,
                wire_key: &field.wire_key,
                path: join_path(prefix, &field.wire_key),
            };
            collect_types(nested, Some(&child), style, imports, out)?;
        }
    }

    Ok(())
}

/// Generates the complete module for a top-level definition: module docs,
/// imports, and every struct.
pub fn generate_object_module(
    def: &ObjectDefinition,
    options: &GenOptions,
) -> Result<TokenStream, UnsupportedField> {
    let mut imports = UsedImports::default();
    let types = generate_object_types(def, options.optional_style, &mut imports)?;
    let docs = ModuleDocBuilder::new(def, options).build();
    let uses = imports.to_tokens();

    Ok(quote! {
        #docs

        #uses
        use serde::{Deserialize, Serialize};

        #(#types)*
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfstruct_define::{FieldDescriptor, FieldKind};

    fn cluster() -> ObjectDefinition {
        ObjectDefinition::resource("databricks_cluster", "Cluster")
            .with_description("A compute cluster.")
            .field(FieldDescriptor::string("spark_version").required())
            .field(FieldDescriptor::integer("num_workers"))
            .field(FieldDescriptor::object(
                "autoscale",
                ObjectDefinition::block("Autoscale")
                    .field(FieldDescriptor::integer("min_workers"))
                    .field(FieldDescriptor::integer("max_workers")),
            ))
            .field(FieldDescriptor::object_list(
                "library",
                ObjectDefinition::block("Library").field(FieldDescriptor::object(
                    "maven",
                    ObjectDefinition::block("Maven")
                        .field(FieldDescriptor::string("coordinates").required()),
                )),
            ))
            .field(FieldDescriptor::string_map("custom_tags"))
    }

    fn names(tokens: &[TokenStream]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| {
                let item: syn::ItemStruct = syn::parse2(t.clone()).unwrap();
                item.ident.to_string()
            })
            .collect()
    }

    #[test]
    fn nested_structs_follow_depth_first_field_order() {
        let mut imports = UsedImports::default();
        let types =
            generate_object_types(&cluster(), OptionalStyle::OmitZero, &mut imports).unwrap();
        assert_eq!(names(&types), ["Cluster", "Autoscale", "Library", "Maven"]);
        assert!(imports.btree_map);
        assert!(!imports.value);
    }

    #[test]
    fn struct_derives_full_serde_contract() {
        let mut imports = UsedImports::default();
        let tokens = generate_struct(&cluster(), OptionalStyle::OmitZero, &mut imports).unwrap();
        let item: syn::ItemStruct = syn::parse2(tokens).unwrap();

        let derive = item
            .attrs
            .iter()
            .find(|a| a.path().is_ident("derive"))
            .map(|a| quote!(#a).to_string())
            .unwrap();
        for name in ["Debug", "Clone", "Default", "PartialEq", "Serialize", "Deserialize"] {
            assert!(derive.contains(name), "missing {name} in {derive}");
        }
    }

    #[test]
    fn fields_keep_definition_order() {
        let mut imports = UsedImports::default();
        let tokens = generate_struct(&cluster(), OptionalStyle::OmitZero, &mut imports).unwrap();
        let item: syn::ItemStruct = syn::parse2(tokens).unwrap();
        let fields: Vec<_> = item
            .fields
            .iter()
            .map(|f| f.ident.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(
            fields,
            ["spark_version", "num_workers", "autoscale", "library", "custom_tags"]
        );
    }

    #[test]
    fn struct_docs_describe_origin() {
        let def = cluster();
        let lines = struct_doc_lines(&def, None);
        assert_eq!(lines[0], " A compute cluster.");
        assert_eq!(lines[2], " Configuration for the `databricks_cluster` resource.");

        let parent = Parent {
            type_name: "Cluster",
            wire_key: "autoscale",
            path: "autoscale".to_string(),
        };
        let block = ObjectDefinition::block("Autoscale");
        assert_eq!(
            struct_doc_lines(&block, Some(&parent)),
            [" The `autoscale` block of [`Cluster`]."]
        );
    }

    #[test]
    fn unsupported_nested_field_reports_full_path() {
        let def = ObjectDefinition::resource("databricks_job", "Job").field(FieldDescriptor::object(
            "task",
            ObjectDefinition::block("Task").field(FieldDescriptor::new(
                "matrix",
                FieldKind::List(Box::new(FieldKind::List(Box::new(FieldKind::String)))),
            )),
        ));

        let mut imports = UsedImports::default();
        let err = generate_object_types(&def, OptionalStyle::OmitZero, &mut imports).unwrap_err();
        assert_eq!(err.path, "task.matrix");
        assert_eq!(err.kind, "list(list(string))");
    }

    #[test]
    fn module_parses_as_rust_file() {
        let tokens = generate_object_module(&cluster(), &GenOptions::default()).unwrap();
        let file: syn::File = syn::parse2(tokens).unwrap();

        // BTreeMap import, serde import, four structs
        assert_eq!(file.items.len(), 6);
        assert!(!file.attrs.is_empty());
    }

    #[test]
    fn empty_definition_generates_empty_struct() {
        let def = ObjectDefinition::data_source("databricks_current_user", "CurrentUser");
        let mut imports = UsedImports::default();
        let tokens = generate_struct(&def, OptionalStyle::OmitZero, &mut imports).unwrap();
        let item: syn::ItemStruct = syn::parse2(tokens).unwrap();
        assert!(item.fields.is_empty());
        assert_eq!(imports, UsedImports::default());
    }
}
