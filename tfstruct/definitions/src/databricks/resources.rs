//! Databricks resource definitions.

use tfstruct_define::{FieldDescriptor, FieldKind, ObjectDefinition};

use super::blocks::{autoscale, maven, pypi};

/// `databricks_cluster`: an all-purpose compute cluster.
pub fn cluster() -> ObjectDefinition {
    ObjectDefinition::resource("databricks_cluster", "Cluster")
        .with_description("An all-purpose Databricks compute cluster.")
        .fields([
            FieldDescriptor::string("cluster_name"),
            FieldDescriptor::string("spark_version")
                .required()
                .with_description("Runtime version of the cluster."),
            FieldDescriptor::string("node_type_id").computed(),
            FieldDescriptor::integer("num_workers"),
            FieldDescriptor::integer("autotermination_minutes"),
            FieldDescriptor::boolean("is_pinned"),
            FieldDescriptor::object("autoscale", autoscale()),
            FieldDescriptor::object(
                "aws_attributes",
                ObjectDefinition::block("AwsAttributes").fields([
                    FieldDescriptor::string("availability"),
                    FieldDescriptor::string("zone_id"),
                    FieldDescriptor::integer("first_on_demand"),
                    FieldDescriptor::integer("spot_bid_price_percent"),
                ]),
            ),
            FieldDescriptor::object_list(
                "library",
                ObjectDefinition::block("Library").fields([
                    FieldDescriptor::string("jar"),
                    FieldDescriptor::string("whl"),
                    FieldDescriptor::object("maven", maven()),
                    FieldDescriptor::object("pypi", pypi()),
                ]),
            )
            .with_description("Libraries installed on the cluster."),
            FieldDescriptor::string_map("spark_conf"),
            FieldDescriptor::string_map("custom_tags"),
            FieldDescriptor::list("ssh_public_keys", FieldKind::String),
            FieldDescriptor::string("cluster_id").computed(),
            FieldDescriptor::string("state").computed(),
        ])
}

/// `databricks_sql_endpoint`: a SQL warehouse.
pub fn sql_endpoint() -> ObjectDefinition {
    ObjectDefinition::resource("databricks_sql_endpoint", "SqlEndpoint")
        .with_description("A Databricks SQL warehouse.")
        .fields([
            FieldDescriptor::string("name").required(),
            FieldDescriptor::string("cluster_size")
                .required()
                .with_description("Size of the clusters allocated to the warehouse."),
            FieldDescriptor::integer("min_num_clusters"),
            FieldDescriptor::integer("max_num_clusters"),
            FieldDescriptor::integer("auto_stop_mins"),
            FieldDescriptor::boolean("enable_photon"),
            FieldDescriptor::boolean("enable_serverless_compute"),
            FieldDescriptor::string("warehouse_type"),
            FieldDescriptor::object(
                "channel",
                ObjectDefinition::block("Channel").fields([
                    FieldDescriptor::string("name"),
                    FieldDescriptor::string("dbsql_version"),
                ]),
            ),
            FieldDescriptor::object(
                "tags",
                ObjectDefinition::block("Tags").field(FieldDescriptor::object_list(
                    "custom_tags",
                    ObjectDefinition::block("CustomTags").fields([
                        FieldDescriptor::string("key").required(),
                        FieldDescriptor::string("value").required(),
                    ]),
                )),
            ),
            FieldDescriptor::string("jdbc_url").computed(),
        ])
}

/// `databricks_catalog`: a Unity Catalog catalog.
pub fn catalog() -> ObjectDefinition {
    ObjectDefinition::resource("databricks_catalog", "Catalog")
        .with_description("A Unity Catalog catalog.")
        .fields([
            FieldDescriptor::string("name").required(),
            FieldDescriptor::string("comment"),
            FieldDescriptor::string("storage_root"),
            FieldDescriptor::string("owner").computed(),
            FieldDescriptor::string("isolation_mode"),
            FieldDescriptor::string_map("properties"),
            FieldDescriptor::string_map("options"),
            FieldDescriptor::boolean("force_destroy"),
            FieldDescriptor::string("metastore_id").computed(),
        ])
}

/// `databricks_storage_credential`: cloud credentials for external locations.
pub fn storage_credential() -> ObjectDefinition {
    ObjectDefinition::resource("databricks_storage_credential", "StorageCredential")
        .with_description("Credentials Unity Catalog uses to reach cloud storage.")
        .fields([
            FieldDescriptor::string("name").required(),
            FieldDescriptor::string("comment"),
            FieldDescriptor::string("owner").computed(),
            FieldDescriptor::boolean("read_only"),
            FieldDescriptor::boolean("skip_validation"),
            FieldDescriptor::object(
                "aws_iam_role",
                ObjectDefinition::block("AwsIamRole").fields([
                    FieldDescriptor::string("role_arn").required(),
                    FieldDescriptor::string("external_id").computed(),
                    FieldDescriptor::string("unity_catalog_iam_arn").computed(),
                ]),
            ),
            FieldDescriptor::object(
                "azure_managed_identity",
                ObjectDefinition::block("AzureManagedIdentity").fields([
                    FieldDescriptor::string("access_connector_id").required(),
                    FieldDescriptor::string("managed_identity_id"),
                    FieldDescriptor::string("credential_id").computed(),
                ]),
            ),
        ])
}

/// `databricks_cluster_policy`: limits on cluster creation.
pub fn cluster_policy() -> ObjectDefinition {
    ObjectDefinition::resource("databricks_cluster_policy", "ClusterPolicy")
        .with_description("Limits the settings users may choose when creating clusters.")
        .fields([
            FieldDescriptor::string("name"),
            FieldDescriptor::string("definition")
                .with_description("Policy definition as a JSON string."),
            FieldDescriptor::dynamic("definition_document")
                .with_description("Policy definition as a structured document."),
            FieldDescriptor::string("description"),
            FieldDescriptor::integer("max_clusters_per_user"),
            FieldDescriptor::string("policy_family_id"),
            FieldDescriptor::string("policy_family_definition_overrides").deprecated(),
            FieldDescriptor::object_list(
                "libraries",
                ObjectDefinition::block("Libraries").fields([
                    FieldDescriptor::string("jar"),
                    FieldDescriptor::object("pypi", pypi()),
                ]),
            ),
            FieldDescriptor::string("policy_id").computed(),
        ])
}
