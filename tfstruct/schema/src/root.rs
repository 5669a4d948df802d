// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! The top-level configuration document.
use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
/// A complete configuration document for the `databricks` provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
    /// Provider configurations keyed by provider name (`databricks`).
    #[serde(rename = "provider", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub provider: BTreeMap<String, crate::provider::Provider>,
    /// Managed resources.
    #[serde(
        rename = "resource",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub resource: crate::resources::Resources,
    /// Data sources.
    #[serde(rename = "data", default, skip_serializing_if = "crate::shared::is_zero")]
    pub data: crate::data_sources::DataSources,
}
