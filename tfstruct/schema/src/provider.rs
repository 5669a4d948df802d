// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! Generated types for the `databricks` provider configuration.
//!
//! ## Types
//!
//! - [`Provider`]
//!
//! ## Example
//!
//! ```
//! use tfstruct_schema::provider::Provider;
//!
//! let value = Provider::default();
//! let json = serde_json::to_string(&value).unwrap();
//! let back: Provider = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, value);
//! ```
use serde::{Deserialize, Serialize};
/// Connection settings for a Databricks workspace or account.
///
/// Configuration for the `databricks` provider configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Workspace or account URL.
    #[serde(rename = "host", default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    /// Personal access token.
    #[serde(rename = "token", default, skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde(rename = "account_id", default, skip_serializing_if = "String::is_empty")]
    pub account_id: String,
    /// Profile name in `~/.databrickscfg`.
    #[serde(rename = "profile", default, skip_serializing_if = "String::is_empty")]
    pub profile: String,
    #[serde(
        rename = "azure_workspace_resource_id",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub azure_workspace_resource_id: String,
    #[serde(
        rename = "http_timeout_seconds",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub http_timeout_seconds: i64,
    /// Maximum requests per second.
    #[serde(
        rename = "rate_limit",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub rate_limit: i64,
    #[serde(
        rename = "skip_verify",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub skip_verify: bool,
    #[serde(
        rename = "debug_headers",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub debug_headers: bool,
}
