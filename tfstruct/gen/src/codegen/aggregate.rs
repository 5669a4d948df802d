//! Aggregate types and crate-level modules.
//!
//! The aggregates mirror the layout of a provider configuration document:
//!
//! ```text
//! Root
//! ├── provider: { "<provider>": Provider }
//! ├── resource: Resources { "<wire_name>": { "<instance>": T } }
//! └── data:     DataSources { "<wire_name>": { "<instance>": T } }
//! ```
//!
//! Listings are sorted by module name so output does not depend on the
//! order definitions were declared in.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tfstruct_define::{ObjectDefinition, ObjectRole, SchemaCorpus};

use crate::casing::{module_ident, module_name};

/// Sorts definitions by their module name.
pub fn sorted_by_module<'a>(defs: &[&'a ObjectDefinition]) -> Vec<&'a ObjectDefinition> {
    let mut sorted = defs.to_vec();
    sorted.sort_by_key(|def| module_name(&def.type_name));
    sorted
}

/// Aggregate type name and module docs for a role index module.
fn role_index_names(role: ObjectRole) -> (&'static str, &'static str) {
    match role {
        ObjectRole::DataSource => ("DataSources", "data source"),
        _ => ("Resources", "resource"),
    }
}

/// Generates `resources/mod.rs` or `data_sources/mod.rs`.
///
/// The module declares one submodule per definition and an aggregate struct
/// with one `BTreeMap<String, T>` field per definition, keyed by instance
/// name and serialized under the definition's wire name.
pub fn generate_role_index(
    role: ObjectRole,
    defs: &[&ObjectDefinition],
    provider: &str,
) -> TokenStream {
    let (aggregate, noun) = role_index_names(role);
    let aggregate = format_ident!("{}", aggregate);
    let defs = sorted_by_module(defs);

    let intro = format!(" Generated {noun} types for the `{provider}` provider.");
    let listing: Vec<String> = defs
        .iter()
        .map(|def| {
            let wire = def.wire_name.as_deref().unwrap_or_default();
            format!(" - [`{}`] (`{wire}`)", module_name(&def.type_name))
        })
        .collect();

    let modules = defs.iter().map(|def| module_ident(&def.type_name));

    let fields = defs.iter().map(|def| {
        let module = module_ident(&def.type_name);
        let type_name = format_ident!("{}", def.type_name);
        let wire = def.wire_name.as_deref().unwrap_or_default();
        let doc = format!(" `{wire}` {noun}s keyed by name.");
        quote! {
            #[doc = #doc]
            #[serde(rename = #wire, default, skip_serializing_if = "BTreeMap::is_empty")]
            pub #module: BTreeMap<String, #module::#type_name>,
        }
    });

    let struct_doc =
        format!(" Every `{provider}` {noun}, keyed by {noun} type and then instance name.");

    quote! {
        #![doc = #intro]
        #![doc = ""]
        #(#![doc = #listing])*

        #(pub mod #modules;)*

        use std::collections::BTreeMap;

        use serde::{Deserialize, Serialize};

        #[doc = #struct_doc]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct #aggregate {
            #(#fields)*
        }
    }
}

/// Generates `root.rs`, the top-level configuration document.
pub fn generate_root(
    provider: &str,
    provider_def: Option<&ObjectDefinition>,
    has_resources: bool,
    has_data_sources: bool,
) -> TokenStream {
    let provider_field = provider_def.map(|def| {
        let module = module_ident(&def.type_name);
        let type_name = format_ident!("{}", def.type_name);
        let doc = format!(" Provider configurations keyed by provider name (`{provider}`).");
        quote! {
            #[doc = #doc]
            #[serde(rename = "provider", default, skip_serializing_if = "BTreeMap::is_empty")]
            pub provider: BTreeMap<String, crate::#module::#type_name>,
        }
    });
    let btree_import = provider_def.map(|_| quote! { use std::collections::BTreeMap; });

    let resource_field = has_resources.then(|| {
        quote! {
            /// Managed resources.
            #[serde(rename = "resource", default, skip_serializing_if = "crate::shared::is_zero")]
            pub resource: crate::resources::Resources,
        }
    });

    let data_field = has_data_sources.then(|| {
        quote! {
            /// Data sources.
            #[serde(rename = "data", default, skip_serializing_if = "crate::shared::is_zero")]
            pub data: crate::data_sources::DataSources,
        }
    });

    let struct_doc = format!(" A complete configuration document for the `{provider}` provider.");

    quote! {
        //! The top-level configuration document.

        #btree_import

        use serde::{Deserialize, Serialize};

        #[doc = #struct_doc]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct Root {
            #provider_field
            #resource_field
            #data_field
        }
    }
}

/// Generates `shared.rs` with helpers referenced by generated fields.
pub fn generate_shared() -> TokenStream {
    quote! {
        //! Helpers shared by the generated types.

        /// Returns `true` when `value` equals its type's default value.
        ///
        /// Used as the `skip_serializing_if` predicate for optional scalar
        /// fields, which are left out of serialized output at their zero value.
        pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
            *value == T::default()
        }
    }
}

/// Generates `lib.rs`.
pub fn generate_lib(corpus: &SchemaCorpus, modules: &[&str]) -> TokenStream {
    let intro = format!(
        " Generated configuration types for the `{}` provider.",
        corpus.provider
    );
    let source = corpus.source.as_deref().map(|source| {
        let line = format!(" Source schema: {source}");
        quote! {
            #![doc = ""]
            #![doc = #line]
        }
    });
    let modules = modules.iter().map(|m| format_ident!("{}", m));

    quote! {
        #![doc = #intro]
        #source

        #(pub mod #modules;)*

        pub use root::Root;
    }
}
