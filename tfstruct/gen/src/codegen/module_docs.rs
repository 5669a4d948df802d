//! Module documentation generation for generated type modules.
//!
//! This module provides the [`ModuleDocBuilder`] struct for generating
//! module-level documentation for each top-level definition's module. The
//! documentation includes an introduction, the list of types in the module
//! with the wire path that reaches each one, and a round-trip example.

use proc_macro2::TokenStream;
use quote::quote;
use tfstruct_define::{ObjectDefinition, ObjectRole};

use crate::casing::module_name;
use crate::options::GenOptions;

/// Splits free text into `///`-ready doc lines.
///
/// Lines are trimmed so upstream indentation never turns into a rustdoc code
/// block, and code fences are neutralized so they cannot become doctests.
pub fn doc_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!(" {}", line.replace("```", "'''"))
            }
        })
        .collect();

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    while lines.first().is_some_and(String::is_empty) {
        lines.remove(0);
    }

    lines
}

/// Human-readable noun for a role.
pub fn role_noun(role: ObjectRole) -> &'static str {
    match role {
        ObjectRole::Provider => "provider configuration",
        ObjectRole::Resource => "resource",
        ObjectRole::DataSource => "data source",
        ObjectRole::Block => "block",
    }
}

/// Returns the module path of a top-level definition inside the generated crate.
pub fn module_path(def: &ObjectDefinition) -> String {
    let module = module_name(&def.type_name);
    match def.role {
        ObjectRole::Resource => format!("resources::{module}"),
        ObjectRole::DataSource => format!("data_sources::{module}"),
        ObjectRole::Provider | ObjectRole::Block => module,
    }
}

/// Builds module-level documentation for a top-level definition's module.
///
/// The builder generates documentation sections including:
/// - Introduction naming the upstream definition
/// - Types section listing every struct in the module
/// - Example section with a serde round trip
///
/// ## Examples
///
/// ```
/// use tfstruct_define::{FieldDescriptor, ObjectDefinition};
/// use tfstruct_gen::codegen::ModuleDocBuilder;
/// use tfstruct_gen::options::GenOptions;
///
/// let def = ObjectDefinition::resource("databricks_catalog", "Catalog")
///     .field(FieldDescriptor::string("name").required());
/// let options = GenOptions::default();
/// let tokens = ModuleDocBuilder::new(&def, &options).build();
/// assert!(tokens.to_string().contains("databricks_catalog"));
/// ```
pub struct ModuleDocBuilder<'a> {
    def: &'a ObjectDefinition,
    options: &'a GenOptions,
}

impl<'a> ModuleDocBuilder<'a> {
    /// Creates a new module documentation builder for the given definition.
    pub fn new(def: &'a ObjectDefinition, options: &'a GenOptions) -> Self {
        Self { def, options }
    }

    /// Builds the complete module documentation as a token stream.
    ///
    /// The generated tokens are `#![doc = "..."]` attributes, one per line so
    /// the formatted output reads as `//!` comments.
    pub fn build(&self) -> TokenStream {
        let intro = self.intro_paragraph();
        let types_section = self.types_section();
        let example_section = self.example_section();

        quote! {
            #![doc = #intro]
            #![doc = ""]
            #(#![doc = #types_section])*
            #![doc = ""]
            #(#![doc = #example_section])*
        }
    }

    fn intro_paragraph(&self) -> String {
        let noun = role_noun(self.def.role);
        match &self.def.wire_name {
            Some(wire) => format!(" Generated types for the `{wire}` {noun}."),
            None => format!(" Generated types for the `{}` {noun}.", self.def.type_name),
        }
    }

    /// Collects `(type_name, wire_path)` for every struct in the module,
    /// depth-first in field order.
    fn type_paths(&self) -> Vec<(String, String)> {
        fn visit(def: &ObjectDefinition, prefix: &str, out: &mut Vec<(String, String)>) {
            for field in &def.fields {
                if let Some(nested) = &field.nested {
                    let path = if prefix.is_empty() {
                        field.wire_key.clone()
                    } else {
                        format!("{prefix}.{}", field.wire_key)
                    };
                    out.push((nested.type_name.clone(), path.clone()));
                    visit(nested, &path, out);
                }
            }
        }

        let mut out = vec![(self.def.type_name.clone(), String::new())];
        visit(self.def, "", &mut out);
        out
    }

    fn types_section(&self) -> Vec<String> {
        let mut lines = vec![" ## Types".to_string(), String::new()];
        for (type_name, path) in self.type_paths() {
            if path.is_empty() {
                lines.push(format!(" - [`{type_name}`]"));
            } else {
                lines.push(format!(" - [`{type_name}`] at `{path}`"));
            }
        }
        lines
    }

    fn example_section(&self) -> Vec<String> {
        let crate_ident = self.options.crate_ident();
        let path = module_path(self.def);
        let type_name = &self.def.type_name;

        vec![
            " ## Example".to_string(),
            String::new(),
            " ```".to_string(),
            format!(" use {crate_ident}::{path}::{type_name};"),
            String::new(),
            format!(" let value = {type_name}::default();"),
            " let json = serde_json::to_string(&value).unwrap();".to_string(),
            format!(" let back: {type_name} = serde_json::from_str(&json).unwrap();"),
            " assert_eq!(back, value);".to_string(),
            " ```".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfstruct_define::FieldDescriptor;

    fn make_test_def() -> ObjectDefinition {
        ObjectDefinition::resource("databricks_cluster", "Cluster")
            .field(FieldDescriptor::string("cluster_name"))
            .field(FieldDescriptor::object(
                "library",
                ObjectDefinition::block("Library")
                    .field(FieldDescriptor::object("maven", ObjectDefinition::block("Maven"))),
            ))
            .field(FieldDescriptor::object("autoscale", ObjectDefinition::block("Autoscale")))
    }

    #[test]
    fn builder_creates_valid_tokenstream() {
        let def = make_test_def();
        let options = GenOptions::default();
        let tokens = ModuleDocBuilder::new(&def, &options).build();
        assert!(!tokens.is_empty());
        assert!(syn::parse2::<syn::File>(tokens).is_ok());
    }

    #[test]
    fn intro_names_wire_name_and_role() {
        let def = make_test_def();
        let options = GenOptions::default();
        let intro = ModuleDocBuilder::new(&def, &options).intro_paragraph();
        assert_eq!(intro, " Generated types for the `databricks_cluster` resource.");
    }

    #[test]
    fn types_section_lists_nested_paths() {
        let def = make_test_def();
        let options = GenOptions::default();
        let section = ModuleDocBuilder::new(&def, &options).types_section().join("\n");

        assert!(section.contains("- [`Cluster`]\n"));
        assert!(section.contains("- [`Library`] at `library`"));
        assert!(section.contains("- [`Maven`] at `library.maven`"));
        assert!(section.contains("- [`Autoscale`] at `autoscale`"));

        let library = section.find("Library").unwrap();
        let maven = section.find("Maven").unwrap();
        let autoscale = section.find("Autoscale").unwrap();
        assert!(library < maven && maven < autoscale);
    }

    #[test]
    fn example_uses_crate_and_module_path() {
        let def = make_test_def();
        let options = GenOptions::default().with_crate_name("acme-types");
        let example = ModuleDocBuilder::new(&def, &options).example_section().join("\n");
        assert!(example.contains("use acme_types::resources::cluster::Cluster;"));
        assert!(example.contains("Cluster::default()"));
    }

    #[test]
    fn module_path_per_role() {
        let provider = ObjectDefinition::provider("databricks", "Provider");
        let data = ObjectDefinition::data_source("databricks_current_user", "CurrentUser");
        assert_eq!(module_path(&provider), "provider");
        assert_eq!(module_path(&data), "data_sources::current_user");
    }

    #[test]
    fn doc_lines_trim_and_drop_blank_edges() {
        let lines = doc_lines("\n  First line.\n\n    indented\n\n");
        assert_eq!(lines, vec![" First line.", "", " indented"]);
    }

    #[test]
    fn doc_lines_neutralize_code_fences() {
        let lines = doc_lines("```hcl\nresource {}\n```");
        assert!(lines.iter().all(|l| !l.contains("```")));
    }
}
