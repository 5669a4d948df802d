// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! Generated configuration types for the `databricks` provider.
//!
//! Source schema: registry.terraform.io/databricks/databricks (curated subset)
pub mod shared;
pub mod provider;
pub mod resources;
pub mod data_sources;
pub mod root;
pub use root::Root;
