// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! Generated types for the `databricks_current_user` data source.
//!
//! ## Types
//!
//! - [`CurrentUser`]
//!
//! ## Example
//!
//! ```
//! use tfstruct_schema::data_sources::current_user::CurrentUser;
//!
//! let value = CurrentUser::default();
//! let json = serde_json::to_string(&value).unwrap();
//! let back: CurrentUser = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, value);
//! ```
use serde::{Deserialize, Serialize};
/// Configuration for the `databricks_current_user` data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Computed by the provider when not set.
    #[serde(rename = "user_name", default, skip_serializing_if = "String::is_empty")]
    pub user_name: String,
    /// Computed by the provider when not set.
    #[serde(rename = "home", default, skip_serializing_if = "String::is_empty")]
    pub home: String,
    /// Computed by the provider when not set.
    #[serde(rename = "alphanumeric", default, skip_serializing_if = "String::is_empty")]
    pub alphanumeric: String,
    /// Computed by the provider when not set.
    #[serde(rename = "workspace_url", default, skip_serializing_if = "String::is_empty")]
    pub workspace_url: String,
    /// Computed by the provider when not set.
    #[serde(
        rename = "acl_principal_id",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub acl_principal_id: String,
    /// Computed by the provider when not set.
    #[serde(rename = "external_id", default, skip_serializing_if = "String::is_empty")]
    pub external_id: String,
    /// Computed by the provider when not set.
    #[serde(rename = "id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}
