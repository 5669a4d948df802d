//! Object definitions.
//!
//! An [`ObjectDefinition`] describes one configuration object: a provider
//! configuration, a resource, a data source, or a nested block. Its
//! [`ObjectRole`] decides where the generated type lives.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::field::FieldDescriptor;

/// The role an object definition plays in a provider schema.
///
/// ## Examples
///
/// Parse from string:
///
/// ```
/// use std::str::FromStr;
/// use tfstruct_define::ObjectRole;
///
/// let role = ObjectRole::from_str("data_source").unwrap();
/// assert_eq!(role, ObjectRole::DataSource);
/// ```
///
/// Display as snake_case:
///
/// ```
/// use tfstruct_define::ObjectRole;
///
/// assert_eq!(ObjectRole::Resource.to_string(), "resource");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ObjectRole {
    /// Provider configuration block.
    Provider,
    /// A managed resource.
    Resource,
    /// A read-only data source.
    DataSource,
    /// A block nested inside another definition.
    Block,
}

impl ObjectRole {
    /// Returns `true` for the roles allowed at the top level of a corpus.
    pub fn is_top_level(self) -> bool {
        !matches!(self, ObjectRole::Block)
    }
}

/// A schema-level description of one configuration object's shape.
///
/// Field order is kept as given and determines the order of fields in the
/// generated struct.
///
/// ## Examples
///
/// ```
/// use tfstruct_define::{FieldDescriptor, ObjectDefinition, ObjectRole};
///
/// let catalog = ObjectDefinition::resource("databricks_catalog", "Catalog")
///     .with_description("A Unity Catalog catalog")
///     .field(FieldDescriptor::string("name").required())
///     .field(FieldDescriptor::string("comment"))
///     .field(FieldDescriptor::string_map("properties"));
///
/// assert_eq!(catalog.role, ObjectRole::Resource);
/// assert_eq!(catalog.wire_name.as_deref(), Some("databricks_catalog"));
/// assert_eq!(catalog.fields.len(), 3);
/// assert!(catalog.field_by_wire_key("comment").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDefinition {
    /// PascalCase name of the generated struct.
    pub type_name: String,

    /// Where the definition sits in the provider schema.
    pub role: ObjectRole,

    /// Upstream name for top-level definitions (e.g. `databricks_cluster`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wire_name: Option<String>,

    /// Human-readable description, emitted as documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered fields.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl ObjectDefinition {
    /// Creates an empty definition with the given role.
    pub fn new(type_name: impl Into<String>, role: ObjectRole) -> Self {
        Self {
            type_name: type_name.into(),
            role,
            wire_name: None,
            description: None,
            fields: Vec::new(),
        }
    }

    /// Creates a provider configuration definition.
    pub fn provider(wire_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(type_name, ObjectRole::Provider).with_wire_name(wire_name)
    }

    /// Creates a resource definition.
    pub fn resource(wire_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(type_name, ObjectRole::Resource).with_wire_name(wire_name)
    }

    /// Creates a data source definition.
    pub fn data_source(wire_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(type_name, ObjectRole::DataSource).with_wire_name(wire_name)
    }

    /// Creates a nested block definition.
    pub fn block(type_name: impl Into<String>) -> Self {
        Self::new(type_name, ObjectRole::Block)
    }

    /// Sets the upstream name.
    pub fn with_wire_name(mut self, wire_name: impl Into<String>) -> Self {
        self.wire_name = Some(wire_name.into());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Appends a field.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends several fields in order.
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Looks up a field by its wire key.
    pub fn field_by_wire_key(&self, wire_key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.wire_key == wire_key)
    }

    /// Returns the definitions nested directly under this one, in field order.
    pub fn children(&self) -> impl Iterator<Item = &ObjectDefinition> {
        self.fields.iter().filter_map(|f| f.nested.as_ref())
    }

    /// Returns this definition followed by every nested definition below it,
    /// depth-first in field order.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tfstruct_define::{FieldDescriptor, ObjectDefinition};
    ///
    /// let cluster = ObjectDefinition::resource("databricks_cluster", "Cluster")
    ///     .field(FieldDescriptor::object(
    ///         "library",
    ///         ObjectDefinition::block("Library")
    ///             .field(FieldDescriptor::object("maven", ObjectDefinition::block("Maven"))),
    ///     ))
    ///     .field(FieldDescriptor::object("autoscale", ObjectDefinition::block("Autoscale")));
    ///
    /// let names: Vec<_> = cluster.walk().iter().map(|d| d.type_name.as_str()).collect();
    /// assert_eq!(names, ["Cluster", "Library", "Maven", "Autoscale"]);
    /// ```
    pub fn walk(&self) -> Vec<&ObjectDefinition> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.walk());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn object_role_display_snake_case() {
        assert_eq!(ObjectRole::Provider.to_string(), "provider");
        assert_eq!(ObjectRole::Resource.to_string(), "resource");
        assert_eq!(ObjectRole::DataSource.to_string(), "data_source");
        assert_eq!(ObjectRole::Block.to_string(), "block");
    }

    #[test]
    fn object_role_from_str() {
        assert_eq!(ObjectRole::from_str("provider").unwrap(), ObjectRole::Provider);
        assert_eq!(
            ObjectRole::from_str("data_source").unwrap(),
            ObjectRole::DataSource
        );
        assert!(ObjectRole::from_str("DataSource").is_err());
        assert!(ObjectRole::from_str("").is_err());
    }

    #[test]
    fn object_role_iter_all_variants() {
        let roles: Vec<_> = ObjectRole::iter().collect();
        assert_eq!(roles.len(), 4);
        assert_eq!(roles.iter().filter(|r| r.is_top_level()).count(), 3);
    }

    #[test]
    fn object_role_serde_roundtrip() {
        let json = serde_json::to_string(&ObjectRole::DataSource).unwrap();
        assert_eq!(json, "\"data_source\"");
        let back: ObjectRole = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ObjectRole::DataSource);
    }

    #[test]
    fn constructors_set_role_and_wire_name() {
        let provider = ObjectDefinition::provider("databricks", "Provider");
        assert_eq!(provider.role, ObjectRole::Provider);
        assert_eq!(provider.wire_name.as_deref(), Some("databricks"));

        let block = ObjectDefinition::block("Autoscale");
        assert_eq!(block.role, ObjectRole::Block);
        assert!(block.wire_name.is_none());
    }

    #[test]
    fn fields_keep_insertion_order() {
        let def = ObjectDefinition::block("Ordered").fields([
            FieldDescriptor::string("zeta"),
            FieldDescriptor::string("alpha"),
            FieldDescriptor::string("mid"),
        ]);

        let keys: Vec<_> = def.fields.iter().map(|f| f.wire_key.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn children_skips_scalar_fields() {
        let def = ObjectDefinition::block("Parent")
            .field(FieldDescriptor::string("name"))
            .field(FieldDescriptor::object("child", ObjectDefinition::block("Child")));

        let children: Vec<_> = def.children().map(|c| c.type_name.as_str()).collect();
        assert_eq!(children, ["Child"]);
    }
}
