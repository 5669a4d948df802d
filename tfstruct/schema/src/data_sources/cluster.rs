// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! Generated types for the `databricks_cluster` data source.
//!
//! ## Types
//!
//! - [`Cluster`]
//! - [`ClusterInfo`] at `cluster_info`
//! - [`Autoscale`] at `cluster_info.autoscale`
//!
//! ## Example
//!
//! ```
//! use tfstruct_schema::data_sources::cluster::Cluster;
//!
//! let value = Cluster::default();
//! let json = serde_json::to_string(&value).unwrap();
//! let back: Cluster = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, value);
//! ```
use serde::{Deserialize, Serialize};
/// Looks up an existing cluster by id or name.
///
/// Configuration for the `databricks_cluster` data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    #[serde(rename = "cluster_id", default, skip_serializing_if = "String::is_empty")]
    pub cluster_id: String,
    #[serde(rename = "cluster_name", default, skip_serializing_if = "String::is_empty")]
    pub cluster_name: String,
    /// Computed by the provider when not set.
    #[serde(rename = "cluster_info", default, skip_serializing_if = "Option::is_none")]
    pub cluster_info: Option<ClusterInfo>,
    /// Computed by the provider when not set.
    #[serde(rename = "id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}
/// The `cluster_info` block of [`Cluster`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterInfo {
    #[serde(rename = "cluster_id", default, skip_serializing_if = "String::is_empty")]
    pub cluster_id: String,
    #[serde(rename = "cluster_name", default, skip_serializing_if = "String::is_empty")]
    pub cluster_name: String,
    #[serde(rename = "spark_version", default, skip_serializing_if = "String::is_empty")]
    pub spark_version: String,
    #[serde(
        rename = "num_workers",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub num_workers: i64,
    #[serde(
        rename = "cluster_cores",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub cluster_cores: f64,
    #[serde(
        rename = "cluster_memory_mb",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub cluster_memory_mb: i64,
    #[serde(rename = "state", default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(rename = "autoscale", default, skip_serializing_if = "Option::is_none")]
    pub autoscale: Option<Autoscale>,
}
/// The `autoscale` block of [`ClusterInfo`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Autoscale {
    /// Minimum number of workers the cluster scales down to.
    #[serde(
        rename = "min_workers",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub min_workers: i64,
    /// Maximum number of workers the cluster scales up to.
    #[serde(
        rename = "max_workers",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub max_workers: i64,
}
