// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! Generated types for the `databricks_sql_endpoint` resource.
//!
//! ## Types
//!
//! - [`SqlEndpoint`]
//! - [`Channel`] at `channel`
//! - [`Tags`] at `tags`
//! - [`CustomTags`] at `tags.custom_tags`
//!
//! ## Example
//!
//! ```
//! use tfstruct_schema::resources::sql_endpoint::SqlEndpoint;
//!
//! let value = SqlEndpoint::default();
//! let json = serde_json::to_string(&value).unwrap();
//! let back: SqlEndpoint = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, value);
//! ```
use serde::{Deserialize, Serialize};
/// A Databricks SQL warehouse.
///
/// Configuration for the `databricks_sql_endpoint` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqlEndpoint {
    /// Required.
    #[serde(rename = "name")]
    pub name: String,
    /// Size of the clusters allocated to the warehouse.
    ///
    /// Required.
    #[serde(rename = "cluster_size")]
    pub cluster_size: String,
    #[serde(
        rename = "min_num_clusters",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub min_num_clusters: i64,
    #[serde(
        rename = "max_num_clusters",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub max_num_clusters: i64,
    #[serde(
        rename = "auto_stop_mins",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub auto_stop_mins: i64,
    #[serde(
        rename = "enable_photon",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub enable_photon: bool,
    #[serde(
        rename = "enable_serverless_compute",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub enable_serverless_compute: bool,
    #[serde(
        rename = "warehouse_type",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub warehouse_type: String,
    #[serde(rename = "channel", default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    #[serde(rename = "tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    /// Computed by the provider when not set.
    #[serde(rename = "jdbc_url", default, skip_serializing_if = "String::is_empty")]
    pub jdbc_url: String,
}
/// The `channel` block of [`SqlEndpoint`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(rename = "name", default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "dbsql_version", default, skip_serializing_if = "String::is_empty")]
    pub dbsql_version: String,
}
/// The `tags` block of [`SqlEndpoint`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tags {
    #[serde(rename = "custom_tags", default, skip_serializing_if = "Vec::is_empty")]
    pub custom_tags: Vec<CustomTags>,
}
/// The `custom_tags` block of [`Tags`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomTags {
    /// Required.
    #[serde(rename = "key")]
    pub key: String,
    /// Required.
    #[serde(rename = "value")]
    pub value: String,
}
