//! tfstruct code generator library.
//!
//! This crate generates Rust configuration types from provider schema
//! definitions created with `tfstruct-define` (or imported from
//! `terraform providers schema -json`). The generated code includes:
//!
//! - One struct per resource, data source and provider configuration
//! - One struct per nested block, in the module of its top-level definition
//! - `Resources`, `DataSources` and `Root` aggregates keyed by upstream names
//! - serde attributes that fix the wire contract: every field is renamed to
//!   its wire key, required fields always serialize, optional fields are
//!   omitted when unset
//!
//! ## Modules
//!
//! - [`codegen`] - Code generation for individual components (fields, structs, aggregates)
//! - [`output`] - Final assembly, validation, and file writing
//! - [`cargo_gen`] - Cargo.toml generation for the output package
//! - [`parser`] - Terraform provider schema import
//! - [`validation`] - Corpus validation
//! - [`casing`] - Identifier transforms
//! - [`options`] - Generation options
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use tfstruct_definitions::databricks::define_databricks_corpus;
//! use tfstruct_gen::options::GenOptions;
//! use tfstruct_gen::output::{WriteMode, generate_and_write};
//!
//! let corpus = define_databricks_corpus();
//! let output_dir = Path::new("generated/src");
//!
//! let generation =
//!     generate_and_write(&corpus, output_dir, &GenOptions::default(), WriteMode::DryRun).unwrap();
//! println!("{} types", generation.types().len());
//! ```
//!
//! ## Generated Code Structure
//!
//! For a `Record` resource with a required `name` and an optional `count`:
//!
//! ```text
//! #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
//! pub struct Record {
//!     #[serde(rename = "name")]
//!     pub name: String,
//!     #[serde(rename = "count", default, skip_serializing_if = "crate::shared::is_zero")]
//!     pub count: i64,
//! }
//! ```
//!
//! `Record { name: "x".into(), count: 0 }` serializes to `{"name":"x"}`.

pub mod cargo_gen;
pub mod casing;
pub mod codegen;
pub mod errors;
pub mod options;
pub mod output;
pub mod parser;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::{GeneratorError, SchemaError};
pub use options::{GenOptions, OptionalStyle};
pub use output::{Generation, WriteMode, generate, generate_and_write};
