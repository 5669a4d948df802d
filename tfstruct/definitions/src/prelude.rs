//! Convenient re-exports for working with provider definitions.
//!
//! ## Examples
//!
//! ```
//! use tfstruct_definitions::prelude::*;
//!
//! let corpus: SchemaCorpus = define_databricks_corpus();
//! assert_eq!(corpus.data_sources().count(), 2);
//! ```

pub use crate::databricks::define_databricks_corpus;

pub use tfstruct_define::SchemaCorpus;
