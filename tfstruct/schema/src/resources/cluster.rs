// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! Generated types for the `databricks_cluster` resource.
//!
//! ## Types
//!
//! - [`Cluster`]
//! - [`Autoscale`] at `autoscale`
//! - [`AwsAttributes`] at `aws_attributes`
//! - [`Library`] at `library`
//! - [`Maven`] at `library.maven`
//! - [`Pypi`] at `library.pypi`
//!
//! ## Example
//!
//! ```
//! use tfstruct_schema::resources::cluster::Cluster;
//!
//! let value = Cluster::default();
//! let json = serde_json::to_string(&value).unwrap();
//! let back: Cluster = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, value);
//! ```
use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
/// An all-purpose Databricks compute cluster.
///
/// Configuration for the `databricks_cluster` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    #[serde(rename = "cluster_name", default, skip_serializing_if = "String::is_empty")]
    pub cluster_name: String,
    /// Runtime version of the cluster.
    ///
    /// Required.
    #[serde(rename = "spark_version")]
    pub spark_version: String,
    /// Computed by the provider when not set.
    #[serde(rename = "node_type_id", default, skip_serializing_if = "String::is_empty")]
    pub node_type_id: String,
    #[serde(
        rename = "num_workers",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub num_workers: i64,
    #[serde(
        rename = "autotermination_minutes",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub autotermination_minutes: i64,
    #[serde(
        rename = "is_pinned",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub is_pinned: bool,
    #[serde(rename = "autoscale", default, skip_serializing_if = "Option::is_none")]
    pub autoscale: Option<Autoscale>,
    #[serde(rename = "aws_attributes", default, skip_serializing_if = "Option::is_none")]
    pub aws_attributes: Option<AwsAttributes>,
    /// Libraries installed on the cluster.
    #[serde(rename = "library", default, skip_serializing_if = "Vec::is_empty")]
    pub library: Vec<Library>,
    #[serde(rename = "spark_conf", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub spark_conf: BTreeMap<String, String>,
    #[serde(rename = "custom_tags", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_tags: BTreeMap<String, String>,
    #[serde(rename = "ssh_public_keys", default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_public_keys: Vec<String>,
    /// Computed by the provider when not set.
    #[serde(rename = "cluster_id", default, skip_serializing_if = "String::is_empty")]
    pub cluster_id: String,
    /// Computed by the provider when not set.
    #[serde(rename = "state", default, skip_serializing_if = "String::is_empty")]
    pub state: String,
}
/// The `autoscale` block of [`Cluster`].
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
/// The `aws_attributes` block of [`Cluster`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwsAttributes {
    #[serde(rename = "availability", default, skip_serializing_if = "String::is_empty")]
    pub availability: String,
    #[serde(rename = "zone_id", default, skip_serializing_if = "String::is_empty")]
    pub zone_id: String,
    #[serde(
        rename = "first_on_demand",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub first_on_demand: i64,
    #[serde(
        rename = "spot_bid_price_percent",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub spot_bid_price_percent: i64,
}
/// The `library` block of [`Cluster`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    #[serde(rename = "jar", default, skip_serializing_if = "String::is_empty")]
    pub jar: String,
    #[serde(rename = "whl", default, skip_serializing_if = "String::is_empty")]
    pub whl: String,
    #[serde(rename = "maven", default, skip_serializing_if = "Option::is_none")]
    pub maven: Option<Maven>,
    #[serde(rename = "pypi", default, skip_serializing_if = "Option::is_none")]
    pub pypi: Option<Pypi>,
}
/// The `maven` block of [`Library`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Maven {
    /// Gradle-style coordinates, e.g. `org.jsoup:jsoup:1.7.2`.
    ///
    /// Required.
    #[serde(rename = "coordinates")]
    pub coordinates: String,
    #[serde(rename = "repo", default, skip_serializing_if = "String::is_empty")]
    pub repo: String,
    #[serde(rename = "exclusions", default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<String>,
}
/// The `pypi` block of [`Library`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pypi {
    /// Package name, optionally with a version specifier.
    ///
    /// Required.
    #[serde(rename = "package")]
    pub package: String,
    /// Index URL to install from.
    #[serde(rename = "repo", default, skip_serializing_if = "String::is_empty")]
    pub repo: String,
}
