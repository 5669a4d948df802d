//! Databricks provider definition.
//!
//! A hand-maintained subset of the Databricks Terraform provider schema:
//! workspace compute, SQL warehouses and Unity Catalog objects.

mod blocks;
mod data_sources;
mod resources;

use tfstruct_define::{FieldDescriptor, ObjectDefinition, SchemaCorpus};

/// Creates the Databricks corpus.
///
/// ## Definitions
///
/// - provider `databricks` - workspace connection settings
/// - resources `databricks_cluster`, `databricks_sql_endpoint`,
///   `databricks_catalog`, `databricks_storage_credential`,
///   `databricks_cluster_policy`
/// - data sources `databricks_cluster`, `databricks_current_user`
///
/// ## Examples
///
/// ```rust
/// use tfstruct_definitions::databricks::define_databricks_corpus;
///
/// let corpus = define_databricks_corpus();
/// assert_eq!(corpus.provider, "databricks");
/// assert_eq!(corpus.resources().count(), 5);
/// assert_eq!(corpus.data_sources().count(), 2);
/// ```
pub fn define_databricks_corpus() -> SchemaCorpus {
    SchemaCorpus::new("databricks")
        .with_source("registry.terraform.io/databricks/databricks (curated subset)")
        .with_definition(provider())
        .with_definition(resources::cluster())
        .with_definition(resources::sql_endpoint())
        .with_definition(resources::catalog())
        .with_definition(resources::storage_credential())
        .with_definition(resources::cluster_policy())
        .with_definition(data_sources::cluster())
        .with_definition(data_sources::current_user())
}

fn provider() -> ObjectDefinition {
    ObjectDefinition::provider("databricks", "Provider")
        .with_description("Connection settings for a Databricks workspace or account.")
        .fields([
            FieldDescriptor::string("host").with_description("Workspace or account URL."),
            FieldDescriptor::string("token").with_description("Personal access token."),
            FieldDescriptor::string("account_id"),
            FieldDescriptor::string("profile")
                .with_description("Profile name in `~/.databrickscfg`."),
            FieldDescriptor::string("azure_workspace_resource_id"),
            FieldDescriptor::integer("http_timeout_seconds"),
            FieldDescriptor::integer("rate_limit")
                .with_description("Maximum requests per second."),
            FieldDescriptor::boolean("skip_verify"),
            FieldDescriptor::boolean("debug_headers"),
        ])
}
