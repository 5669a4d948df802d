// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! Generated data source types for the `databricks` provider.
//!
//! - [`cluster`] (`databricks_cluster`)
//! - [`current_user`] (`databricks_current_user`)
pub mod cluster;
pub mod current_user;
use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
/// Every `databricks` data source, keyed by data source type and then instance name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSources {
    /// `databricks_cluster` data sources keyed by name.
    #[serde(
        rename = "databricks_cluster",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub cluster: BTreeMap<String, cluster::Cluster>,
    /// `databricks_current_user` data sources keyed by name.
    #[serde(
        rename = "databricks_current_user",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub current_user: BTreeMap<String, current_user::CurrentUser>,
}
