//! tfstruct Provider Definitions
//!
//! This crate contains actual provider schema definitions that use the
//! primitives from `tfstruct-define`. Each provider is organized in its own
//! module.
//!
//! ## Available Providers
//!
//! - [`databricks`] - Databricks workspace and Unity Catalog objects
//!
//! ## Examples
//!
//! ```
//! use tfstruct_definitions::databricks::define_databricks_corpus;
//!
//! let corpus = define_databricks_corpus();
//! assert_eq!(corpus.provider, "databricks");
//! assert!(corpus.provider_definition().is_some());
//! ```

pub mod databricks;
pub mod prelude;

// Re-export corpus definition functions for convenience
pub use databricks::define_databricks_corpus;
