// This code was automatically generated by tfstruct-gen. Do not edit manually.

//! Generated types for the `databricks_storage_credential` resource.
//!
//! ## Types
//!
//! - [`StorageCredential`]
//! - [`AwsIamRole`] at `aws_iam_role`
//! - [`AzureManagedIdentity`] at `azure_managed_identity`
//!
//! ## Example
//!
//! ```
//! use tfstruct_schema::resources::storage_credential::StorageCredential;
//!
//! let value = StorageCredential::default();
//! let json = serde_json::to_string(&value).unwrap();
//! let back: StorageCredential = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, value);
//! ```
use serde::{Deserialize, Serialize};
/// Credentials Unity Catalog uses to reach cloud storage.
///
/// Configuration for the `databricks_storage_credential` resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageCredential {
    /// Required.
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "comment", default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// Computed by the provider when not set.
    #[serde(rename = "owner", default, skip_serializing_if = "String::is_empty")]
    pub owner: String,
    #[serde(
        rename = "read_only",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub read_only: bool,
    #[serde(
        rename = "skip_validation",
        default,
        skip_serializing_if = "crate::shared::is_zero"
    )]
    pub skip_validation: bool,
    #[serde(rename = "aws_iam_role", default, skip_serializing_if = "Option::is_none")]
    pub aws_iam_role: Option<AwsIamRole>,
    #[serde(
        rename = "azure_managed_identity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub azure_managed_identity: Option<AzureManagedIdentity>,
}
/// The `aws_iam_role` block of [`StorageCredential`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwsIamRole {
    /// Required.
    #[serde(rename = "role_arn")]
    pub role_arn: String,
    /// Computed by the provider when not set.
    #[serde(rename = "external_id", default, skip_serializing_if = "String::is_empty")]
    pub external_id: String,
    /// Computed by the provider when not set.
    #[serde(
        rename = "unity_catalog_iam_arn",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub unity_catalog_iam_arn: String,
}
/// The `azure_managed_identity` block of [`StorageCredential`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AzureManagedIdentity {
    /// Required.
    #[serde(rename = "access_connector_id")]
    pub access_connector_id: String,
    #[serde(
        rename = "managed_identity_id",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub managed_identity_id: String,
    /// Computed by the provider when not set.
    #[serde(rename = "credential_id", default, skip_serializing_if = "String::is_empty")]
    pub credential_id: String,
}
