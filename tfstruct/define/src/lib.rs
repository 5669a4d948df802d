//! tfstruct Definition Library
//!
//! This crate provides the primitives for describing a provider schema as a
//! tree of object definitions. Definitions are consumed by `tfstruct-gen` to
//! generate serde-ready Rust record types.
//!
//! ## Core Types
//!
//! - [`SchemaCorpus`] - All top-level definitions of one provider
//! - [`ObjectDefinition`] - One configuration object (provider, resource, data source, block)
//! - [`ObjectRole`] - Where an object sits in the provider schema
//! - [`FieldDescriptor`] - One attribute of an object
//! - [`FieldKind`] - The value shape of an attribute
//!
//! ## Examples
//!
//! Define a resource with a nested block:
//!
//! ```
//! use tfstruct_define::{FieldDescriptor, FieldKind, ObjectDefinition, SchemaCorpus};
//!
//! let cluster = ObjectDefinition::resource("databricks_cluster", "Cluster")
//!     .field(FieldDescriptor::string("spark_version").required())
//!     .field(FieldDescriptor::integer("num_workers"))
//!     .field(FieldDescriptor::object(
//!         "autoscale",
//!         ObjectDefinition::block("Autoscale")
//!             .field(FieldDescriptor::integer("min_workers"))
//!             .field(FieldDescriptor::integer("max_workers")),
//!     ))
//!     .field(FieldDescriptor::list("ssh_public_keys", FieldKind::String));
//!
//! let corpus = SchemaCorpus::new("databricks").with_definition(cluster);
//! assert_eq!(corpus.resources().count(), 1);
//! ```
//!
//! ## Ownership
//!
//! A nested definition is owned by the field that declares it, so a corpus is
//! always a forest: a definition cannot contain itself.
//!
//! Actual provider definitions live in the separate `tfstruct-definitions`
//! crate.

pub mod corpus;
pub mod field;
pub mod object;
pub mod prelude;

// Re-export main types at crate root
pub use corpus::SchemaCorpus;
pub use field::{FieldDescriptor, FieldKind};
pub use object::{ObjectDefinition, ObjectRole};
