//! Shared test utilities for tfstruct-gen tests.
//!
//! This module provides common helper functions for creating test fixtures
//! across the codebase, reducing duplication and ensuring consistency.

use tfstruct_define::{FieldDescriptor, FieldKind, ObjectDefinition, SchemaCorpus};

/// Creates a corpus with a single `Record { name, count }` resource.
///
/// `name` is required and `count` is optional, matching the smallest useful
/// shape for checking the serialization contract.
pub fn make_record_corpus() -> SchemaCorpus {
    SchemaCorpus::new("acme").with_definition(
        ObjectDefinition::resource("acme_record", "Record")
            .field(FieldDescriptor::string("name").required())
            .field(FieldDescriptor::integer("count")),
    )
}

/// Creates the `Autoscale` block used by both cluster definitions.
pub fn make_autoscale() -> ObjectDefinition {
    ObjectDefinition::block("Autoscale")
        .field(FieldDescriptor::integer("min_workers"))
        .field(FieldDescriptor::integer("max_workers"))
}

/// Creates a corpus covering every role.
///
/// Definitions, in order:
/// 1. `Provider` (`databricks`)
/// 2. `Cluster` resource with nested blocks
/// 3. `Catalog` resource
/// 4. `Cluster` data source, sharing type names with the resource
pub fn make_corpus() -> SchemaCorpus {
    SchemaCorpus::new("databricks")
        .with_definition(
            ObjectDefinition::provider("databricks", "Provider")
                .field(FieldDescriptor::string("host"))
                .field(FieldDescriptor::string("token"))
                .field(FieldDescriptor::boolean("skip_verify")),
        )
        .with_definition(
            ObjectDefinition::resource("databricks_cluster", "Cluster")
                .field(FieldDescriptor::string("spark_version").required())
                .field(FieldDescriptor::integer("num_workers"))
                .field(FieldDescriptor::object("autoscale", make_autoscale()))
                .field(FieldDescriptor::object_list(
                    "library",
                    ObjectDefinition::block("Library")
                        .field(FieldDescriptor::string("jar"))
                        .field(FieldDescriptor::object(
                            "maven",
                            ObjectDefinition::block("Maven")
                                .field(FieldDescriptor::string("coordinates").required()),
                        )),
                ))
                .field(FieldDescriptor::string_map("custom_tags"))
                .field(FieldDescriptor::list("ssh_public_keys", FieldKind::String)),
        )
        .with_definition(
            ObjectDefinition::resource("databricks_catalog", "Catalog")
                .field(FieldDescriptor::string("name").required())
                .field(FieldDescriptor::string("comment"))
                .field(FieldDescriptor::string_map("properties")),
        )
        .with_definition(
            ObjectDefinition::data_source("databricks_cluster", "Cluster")
                .field(FieldDescriptor::string("cluster_id"))
                .field(FieldDescriptor::object(
                    "cluster_info",
                    ObjectDefinition::block("ClusterInfo")
                        .field(FieldDescriptor::float("cluster_cores"))
                        .field(FieldDescriptor::object("autoscale", make_autoscale())),
                )),
        )
}
