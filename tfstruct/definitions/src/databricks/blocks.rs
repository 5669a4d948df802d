//! Nested blocks shared by more than one Databricks definition.

use tfstruct_define::{FieldDescriptor, FieldKind, ObjectDefinition};

/// Autoscaling bounds of a cluster.
pub fn autoscale() -> ObjectDefinition {
    ObjectDefinition::block("Autoscale").fields([
        FieldDescriptor::integer("min_workers")
            .with_description("Minimum number of workers the cluster scales down to."),
        FieldDescriptor::integer("max_workers")
            .with_description("Maximum number of workers the cluster scales up to."),
    ])
}

/// A PyPI package to install.
pub fn pypi() -> ObjectDefinition {
    ObjectDefinition::block("Pypi").fields([
        FieldDescriptor::string("package")
            .required()
            .with_description("Package name, optionally with a version specifier."),
        FieldDescriptor::string("repo").with_description("Index URL to install from."),
    ])
}

/// A Maven artifact to install.
pub fn maven() -> ObjectDefinition {
    ObjectDefinition::block("Maven").fields([
        FieldDescriptor::string("coordinates")
            .required()
            .with_description("Gradle-style coordinates, e.g. `org.jsoup:jsoup:1.7.2`."),
        FieldDescriptor::string("repo"),
        FieldDescriptor::list("exclusions", FieldKind::String),
    ])
}
