//! Code generation modules for tfstruct.
//!
//! This module contains generators that produce Rust source code from
//! object definitions. Each submodule handles a specific component of the
//! generated crate.
//!
//! ## Submodules
//!
//! - [`fields`] - Maps field kinds to Rust types and serde attributes
//! - [`object_struct`] - Generates a struct per definition and per nested block
//! - [`aggregate`] - Generates `Resources`, `DataSources`, `Root`, `lib.rs` and `shared.rs`
//! - [`module_docs`] - Generates module-level documentation
//!
//! ## Code Generation Flow
//!
//! 1. Each top-level definition gets a module via [`generate_object_module`]
//! 2. Resources and data sources are indexed via [`generate_role_index`]
//! 3. The document root is created via [`generate_root`]
//! 4. `lib.rs` and `shared.rs` come from [`generate_lib`] and [`generate_shared`]
//!
//! ## Output Format
//!
//! All generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn::parse2` to ensure correctness
//! - Formatted with `prettyplease` for consistent style
//!
//! See [`crate::output`] for the assembly and file writing logic.

pub mod aggregate;
pub mod fields;
pub mod module_docs;
pub mod object_struct;

pub use aggregate::{generate_lib, generate_role_index, generate_root, generate_shared};
pub use fields::{UsedImports, generate_field};
pub use module_docs::ModuleDocBuilder;
pub use object_struct::{
    UnsupportedField, generate_object_module, generate_object_types, generate_struct,
};
