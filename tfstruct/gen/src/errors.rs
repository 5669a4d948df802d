//! Error types for the tfstruct generator.

use thiserror::Error;

/// A malformed schema corpus.
///
/// Schema errors are detected by [`crate::validation::validate_corpus`]
/// before any code is generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The corpus has no provider name.
    #[error("Corpus provider name is empty")]
    EmptyProvider,

    /// A wire key is empty or not a valid identifier.
    #[error("Malformed wire key '{wire_key}' in '{type_name}': {reason}")]
    MalformedWireKey {
        /// The object definition holding the field.
        type_name: String,
        /// The offending wire key.
        wire_key: String,
        /// Why the key was rejected.
        reason: String,
    },

    /// Two fields of one object share a wire key.
    #[error("Duplicate wire key '{wire_key}' in '{type_name}'")]
    DuplicateWireKey {
        /// The object definition holding the fields.
        type_name: String,
        /// The repeated wire key.
        wire_key: String,
    },

    /// Two fields of one object share a logical name.
    #[error("Duplicate field name '{name}' in '{type_name}'")]
    DuplicateFieldName {
        /// The object definition holding the fields.
        type_name: String,
        /// The repeated name.
        name: String,
    },

    /// Two distinct wire keys map to the same Rust field name.
    #[error(
        "Wire keys '{first}' and '{second}' in '{type_name}' both map to field '{field}'"
    )]
    FieldNameCollision {
        /// The object definition holding the fields.
        type_name: String,
        /// The first wire key.
        first: String,
        /// The second wire key.
        second: String,
        /// The generated Rust field name both keys map to.
        field: String,
    },

    /// A type name is not a PascalCase identifier.
    #[error("Malformed type name '{type_name}': must be PascalCase ASCII alphanumerics")]
    MalformedTypeName {
        /// The offending name.
        type_name: String,
    },

    /// An `object` / `list(object)` field has no nested definition.
    #[error("Field '{field}' in '{type_name}' has kind {kind} but no nested definition")]
    MissingNestedDefinition {
        /// The object definition holding the field.
        type_name: String,
        /// The field's wire key.
        field: String,
        /// The field's kind.
        kind: String,
    },

    /// A non-nested field carries a nested definition.
    #[error("Field '{field}' in '{type_name}' has kind {kind} but carries a nested definition")]
    UnexpectedNestedDefinition {
        /// The object definition holding the field.
        type_name: String,
        /// The field's wire key.
        field: String,
        /// The field's kind.
        kind: String,
    },

    /// A definition appears in a position its role does not allow.
    #[error("Definition '{type_name}' has role '{role}', which is not allowed {position}")]
    MisplacedRole {
        /// The definition.
        type_name: String,
        /// Its role.
        role: String,
        /// Where it was found ("at the top level", "inside a field").
        position: String,
    },

    /// A top-level definition has no upstream name.
    #[error("Top-level definition '{type_name}' has no wire name")]
    MissingWireName {
        /// The definition.
        type_name: String,
    },

    /// More than one provider configuration definition.
    #[error("Corpus has more than one provider definition ('{first}' and '{second}')")]
    DuplicateProvider {
        /// First provider type name.
        first: String,
        /// Second provider type name.
        second: String,
    },

    /// Two top-level definitions with the same role map to one module or wire name.
    #[error("Definitions '{first}' and '{second}' both map to {role} '{name}'")]
    DuplicateDefinition {
        /// The role both definitions share.
        role: String,
        /// The module or wire name they collide on.
        name: String,
        /// First type name.
        first: String,
        /// Second type name.
        second: String,
    },

    /// Two types in one module share a name.
    #[error("Type name '{type_name}' is used more than once in module '{module}'")]
    DuplicateTypeName {
        /// The module scope.
        module: String,
        /// The repeated type name.
        type_name: String,
    },

    /// A type name would shadow a type the generated module refers to.
    #[error("Type name '{type_name}' in module '{module}' shadows a type generated code uses")]
    ReservedTypeName {
        /// The module scope.
        module: String,
        /// The offending name.
        type_name: String,
    },

    /// A top-level definition maps to a file the crate layout owns.
    #[error("{role} '{type_name}' maps to reserved module file '{path}'")]
    ReservedModule {
        /// The definition's role.
        role: String,
        /// The definition.
        type_name: String,
        /// The file it would overwrite.
        path: String,
    },
}

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The corpus failed validation.
    #[error("Invalid schema: {0}")]
    Schema(#[from] SchemaError),

    /// A field kind has no generation rule.
    ///
    /// Only the owning top-level definition fails; unrelated definitions
    /// still generate.
    #[error("Unsupported kind {kind} for field '{field}' in '{type_name}'")]
    UnsupportedKind {
        /// The top-level definition whose module could not be generated.
        type_name: String,
        /// Path of the field from the top-level definition (e.g. `library.maven.coordinates`).
        field: String,
        /// The kind, as displayed.
        kind: String,
    },

    /// One or more definitions failed to generate.
    #[error("Generation incomplete: {} definition(s) failed", .failures.len())]
    Incomplete {
        /// The individual failures.
        failures: Vec<GeneratorError>,
    },

    /// Failed to parse a schema document.
    #[error("Failed to parse schema: {0}")]
    ParseError(String),

    /// Generated code did not parse as Rust.
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to read an input file.
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Generated files on disk differ from fresh output.
    #[error("Generated files are out of date: {}", .paths.join(", "))]
    Stale {
        /// Relative paths of the stale or missing files.
        paths: Vec<String>,
    },
}
