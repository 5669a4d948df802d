// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! Generated resource types for the `databricks` provider.
//!
//! - [`catalog`] (`databricks_catalog`)
//! - [`cluster`] (`databricks_cluster`)
//! - [`cluster_policy`] (`databricks_cluster_policy`)
//! - [`sql_endpoint`] (`databricks_sql_endpoint`)
//! - [`storage_credential`] (`databricks_storage_credential`)
pub mod catalog;
pub mod cluster;
pub mod cluster_policy;
pub mod sql_endpoint;
pub mod storage_credential;
use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
/// Every `databricks` resource, keyed by resource type and then instance name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    /// `databricks_catalog` resources keyed by name.
    #[serde(
        rename = "databricks_catalog",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub catalog: BTreeMap<String, catalog::Catalog>,
    /// `databricks_cluster` resources keyed by name.
    #[serde(
        rename = "databricks_cluster",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub cluster: BTreeMap<String, cluster::Cluster>,
    /// `databricks_cluster_policy` resources keyed by name.
    #[serde(
        rename = "databricks_cluster_policy",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub cluster_policy: BTreeMap<String, cluster_policy::ClusterPolicy>,
    /// `databricks_sql_endpoint` resources keyed by name.
    #[serde(
        rename = "databricks_sql_endpoint",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub sql_endpoint: BTreeMap<String, sql_endpoint::SqlEndpoint>,
    /// `databricks_storage_credential` resources keyed by name.
    #[serde(
        rename = "databricks_storage_credential",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub storage_credential: BTreeMap<String, storage_credential::StorageCredential>,
}
