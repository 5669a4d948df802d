// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! Generated types for the `databricks_catalog` resource.
//!
//! ## Types
//!
//! - [`Catalog`]
//!
//! ## Example
//!
//! ```
//! use tfstruct_schema::resources::catalog::Catalog;
//!
//! let value = Catalog::default();
//! let json = serde_json::to_string(&value).unwrap();
//! let back: Catalog = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, value);
//! ```
use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
/// A Unity Catalog catalog.
///
/// Configuration for the `databricks_catalog` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Required.
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "comment", default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(rename = "storage_root", default, skip_serializing_if = "String::is_empty")]
    pub storage_root: String,
    /// Computed by the provider when not set.
    #[serde(rename = "owner", default, skip_serializing_if = "String::is_empty")]
    pub owner: String,
    #[serde(
        rename = "isolation_mode",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub isolation_mode: String,
    #[serde(rename = "properties", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    #[serde(rename = "options", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
    #[serde(
        rename = "force_destroy",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub force_destroy: bool,
    /// Computed by the provider when not set.
    #[serde(rename = "metastore_id", default, skip_serializing_if = "String::is_empty")]
    pub metastore_id: String,
}
