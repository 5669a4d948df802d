// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! Generated types for the `databricks_cluster_policy` resource.
//!
//! ## Types
//!
//! - [`ClusterPolicy`]
//! - [`Libraries`] at `libraries`
//! - [`Pypi`] at `libraries.pypi`
//!
//! ## Example
//!
//! ```
//! use tfstruct_schema::resources::cluster_policy::ClusterPolicy;
//!
//! let value = ClusterPolicy::default();
//! let json = serde_json::to_string(&value).unwrap();
//! let back: ClusterPolicy = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, value);
//! ```
use serde_json::Value;
use serde::{Deserialize, Serialize};
/// Limits the settings users may choose when creating clusters.
///
/// Configuration for the `databricks_cluster_policy` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterPolicy {
    #[serde(rename = "name", default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Policy definition as a JSON string.
    #[serde(rename = "definition", default, skip_serializing_if = "String::is_empty")]
    pub definition: String,
    /// Policy definition as a structured document.
    #[serde(
        rename = "definition_document",
        default,
        skip_serializing_if = "Value::is_null"
    )]
    pub definition_document: Value,
    #[serde(rename = "description", default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(
        rename = "max_clusters_per_user",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub max_clusters_per_user: i64,
    #[serde(
        rename = "policy_family_id",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub policy_family_id: String,
    /// Deprecated upstream.
    #[serde(
        rename = "policy_family_definition_overrides",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub policy_family_definition_overrides: String,
    #[serde(rename = "libraries", default, skip_serializing_if = "Vec::is_empty")]
    pub libraries: Vec<Libraries>,
    /// Computed by the provider when not set.
    #[serde(rename = "policy_id", default, skip_serializing_if = "String::is_empty")]
    pub policy_id: String,
}
/// The `libraries` block of [`ClusterPolicy`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Libraries {
    #[serde(rename = "jar", default, skip_serializing_if = "String::is_empty")]
    pub jar: String,
    #[serde(rename = "pypi", default, skip_serializing_if = "Option::is_none")]
    pub pypi: Option<Pypi>,
}
/// The `pypi` block of [`Libraries`].
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
