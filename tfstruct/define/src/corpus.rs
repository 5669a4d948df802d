//! The schema corpus: every top-level definition of one provider.

use serde::{Deserialize, Serialize};

use crate::object::{ObjectDefinition, ObjectRole};

/// All top-level object definitions for a single provider.
///
/// ## Examples
///
/// ```
/// use tfstruct_define::{FieldDescriptor, ObjectDefinition, SchemaCorpus};
///
/// let corpus = SchemaCorpus::new("databricks")
///     .with_definition(ObjectDefinition::provider("databricks", "Provider"))
///     .with_definition(
///         ObjectDefinition::resource("databricks_catalog", "Catalog")
///             .field(FieldDescriptor::string("name").required()),
///     )
///     .with_definition(ObjectDefinition::data_source("databricks_current_user", "CurrentUser"));
///
/// assert!(corpus.provider_definition().is_some());
/// assert_eq!(corpus.resources().count(), 1);
/// assert_eq!(corpus.data_sources().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaCorpus {
    /// Provider name (e.g. `databricks`). Upstream resource names carry it as
    /// a `<provider>_` prefix.
    pub provider: String,

    /// Free-form description of where the corpus came from (schema version,
    /// file name). Only used in generated documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Top-level definitions, in the order they were declared.
    #[serde(default)]
    pub definitions: Vec<ObjectDefinition>,
}

impl SchemaCorpus {
    /// Creates an empty corpus for the named provider.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            source: None,
            definitions: Vec::new(),
        }
    }

    /// Records where the corpus came from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Appends a top-level definition.
    pub fn with_definition(mut self, definition: ObjectDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Returns the definitions with the given role, in declaration order.
    pub fn by_role(&self, role: ObjectRole) -> impl Iterator<Item = &ObjectDefinition> {
        self.definitions.iter().filter(move |d| d.role == role)
    }

    /// Returns the provider configuration definition, if any.
    pub fn provider_definition(&self) -> Option<&ObjectDefinition> {
        self.by_role(ObjectRole::Provider).next()
    }

    /// Returns the resource definitions.
    pub fn resources(&self) -> impl Iterator<Item = &ObjectDefinition> {
        self.by_role(ObjectRole::Resource)
    }

    /// Returns the data source definitions.
    pub fn data_sources(&self) -> impl Iterator<Item = &ObjectDefinition> {
        self.by_role(ObjectRole::DataSource)
    }

    /// Strips the `<provider>_` prefix from an upstream name.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tfstruct_define::SchemaCorpus;
    ///
    /// let corpus = SchemaCorpus::new("databricks");
    /// assert_eq!(corpus.strip_provider_prefix("databricks_sql_endpoint"), "sql_endpoint");
    /// assert_eq!(corpus.strip_provider_prefix("databricks"), "databricks");
    /// assert_eq!(corpus.strip_provider_prefix("other_thing"), "other_thing");
    /// ```
    pub fn strip_provider_prefix<'a>(&self, wire_name: &'a str) -> &'a str {
        wire_name
            .strip_prefix(self.provider.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .filter(|rest| !rest.is_empty())
            .unwrap_or(wire_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldDescriptor;

    fn sample() -> SchemaCorpus {
        SchemaCorpus::new("databricks")
            .with_source("unit test")
            .with_definition(ObjectDefinition::resource("databricks_cluster", "Cluster"))
            .with_definition(ObjectDefinition::data_source("databricks_cluster", "Cluster"))
            .with_definition(ObjectDefinition::resource("databricks_catalog", "Catalog"))
    }

    #[test]
    fn by_role_keeps_declaration_order() {
        let corpus = sample();
        let names: Vec<_> = corpus.resources().map(|d| d.type_name.as_str()).collect();
        assert_eq!(names, ["Cluster", "Catalog"]);
        assert!(corpus.provider_definition().is_none());
    }

    #[test]
    fn corpus_json_roundtrip() {
        let corpus = sample().with_definition(
            ObjectDefinition::provider("databricks", "Provider")
                .field(FieldDescriptor::string("host")),
        );

        let json = serde_json::to_string_pretty(&corpus).unwrap();
        let back: SchemaCorpus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, corpus);
    }

    #[test]
    fn minimal_corpus_json_decodes() {
        let json = r#"{"provider":"acme"}"#;
        let corpus: SchemaCorpus = serde_json::from_str(json).unwrap();
        assert_eq!(corpus.provider, "acme");
        assert!(corpus.definitions.is_empty());
    }

    #[test]
    fn strip_prefix_requires_separator() {
        let corpus = SchemaCorpus::new("data");
        assert_eq!(corpus.strip_provider_prefix("databricks_job"), "databricks_job");
        assert_eq!(corpus.strip_provider_prefix("data_job"), "job");
        assert_eq!(corpus.strip_provider_prefix("data_"), "data_");
    }
}
