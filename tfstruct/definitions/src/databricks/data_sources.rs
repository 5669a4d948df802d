//! Databricks data source definitions.

use tfstruct_define::{FieldDescriptor, ObjectDefinition};

use super::blocks::autoscale;

/// `databricks_cluster`: looks up an existing cluster.
pub fn cluster() -> ObjectDefinition {
    ObjectDefinition::data_source("databricks_cluster", "Cluster")
        .with_description("Looks up an existing cluster by id or name.")
        .fields([
            FieldDescriptor::string("cluster_id"),
            FieldDescriptor::string("cluster_name"),
            FieldDescriptor::object(
                "cluster_info",
                ObjectDefinition::block("ClusterInfo").fields([
                    FieldDescriptor::string("cluster_id"),
                    FieldDescriptor::string("cluster_name"),
                    FieldDescriptor::string("spark_version"),
                    FieldDescriptor::integer("num_workers"),
                    FieldDescriptor::float("cluster_cores"),
                    FieldDescriptor::integer("cluster_memory_mb"),
                    FieldDescriptor::string("state"),
                    FieldDescriptor::object("autoscale", autoscale()),
                ]),
            )
            .computed(),
            FieldDescriptor::string("id").computed(),
        ])
}

/// `databricks_current_user`: the identity the provider authenticates as.
pub fn current_user() -> ObjectDefinition {
    ObjectDefinition::data_source("databricks_current_user", "CurrentUser").fields([
        FieldDescriptor::string("user_name").computed(),
        FieldDescriptor::string("home").computed(),
        FieldDescriptor::string("alphanumeric").computed(),
        FieldDescriptor::string("workspace_url").computed(),
        FieldDescriptor::string("acl_principal_id").computed(),
        FieldDescriptor::string("external_id").computed(),
        FieldDescriptor::string("id").computed(),
    ])
}
