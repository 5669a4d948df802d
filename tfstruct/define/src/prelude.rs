//! Convenient re-exports for writing object definitions.
//!
//! ## Examples
//!
//! ```
//! use tfstruct_define::prelude::*;
//!
//! let corpus = SchemaCorpus::new("acme").with_definition(
//!     ObjectDefinition::resource("acme_bucket", "Bucket")
//!         .field(FieldDescriptor::string("name").required())
//!         .field(FieldDescriptor::list("acl", FieldKind::String)),
//! );
//!
//! assert_eq!(corpus.definitions[0].role, ObjectRole::Resource);
//! ```

pub use crate::corpus::SchemaCorpus;
pub use crate::field::{FieldDescriptor, FieldKind};
pub use crate::object::{ObjectDefinition, ObjectRole};
