//! Validation module for schema corpora.
//!
//! This module provides pre-generation validation so a malformed corpus is
//! rejected before any code is produced. Generation never starts on a corpus
//! that fails here.
//!
//! ## Validation Checks
//!
//! - **Wire keys**: non-empty, `[A-Za-z_][A-Za-z0-9_]*`, unique within an object
//! - **Field names**: unique within an object, and no two wire keys may map to
//!   the same Rust field name
//! - **Type names**: PascalCase identifiers, unique within a module's scope,
//!   and never one of [`RESERVED_TYPE_NAMES`]
//! - **Nesting**: `object` / `list(object)` fields own a nested `block`
//!   definition; no other field kind carries one
//! - **Roles**: blocks never appear at the top level; at most one provider
//! - **Modules**: top-level definitions of one role never share a module or
//!   wire name, and never land on a file the crate layout owns (`lib.rs`,
//!   `resources/mod.rs`, ...)
//!
//! ## Examples
//!
//! ```
//! use tfstruct_define::{FieldDescriptor, ObjectDefinition, SchemaCorpus};
//! use tfstruct_gen::validation::validate_corpus;
//!
//! let corpus = SchemaCorpus::new("acme").with_definition(
//!     ObjectDefinition::resource("acme_bucket", "Bucket")
//!         .field(FieldDescriptor::string("name").required()),
//! );
//!
//! assert!(validate_corpus(&corpus).is_ok());
//! ```

use std::collections::{HashMap, HashSet};

use tfstruct_define::{ObjectDefinition, ObjectRole, SchemaCorpus};

use crate::casing::{field_name, is_type_name, module_name};
use crate::errors::{GeneratorError, SchemaError};
use crate::output::type_file_path;

/// Type names a generated module refers to without a path.
///
/// A definition with one of these names would shadow the std, serde or
/// `serde_json` item inside its module.
pub const RESERVED_TYPE_NAMES: &[&str] = &[
    "Option",
    "String",
    "Vec",
    "BTreeMap",
    "Value",
    "Serialize",
    "Deserialize",
];

fn reserved_modules(role: ObjectRole) -> &'static [&'static str] {
    match role {
        ObjectRole::Provider => &["lib", "main", "shared", "root", "resources", "data_sources"],
        // The role index imports from these crates by name
        ObjectRole::Resource | ObjectRole::DataSource => &["mod", "std", "serde", "serde_json"],
        ObjectRole::Block => &[],
    }
}

/// Returns `true` when a top-level type of `role` would be written to a
/// module file the generated crate layout already uses.
///
/// ## Examples
///
/// ```
/// use tfstruct_define::ObjectRole;
/// use tfstruct_gen::validation::is_reserved_module;
///
/// assert!(is_reserved_module(ObjectRole::Resource, "Mod"));
/// assert!(is_reserved_module(ObjectRole::Provider, "Lib"));
/// assert!(!is_reserved_module(ObjectRole::Resource, "Lib"));
/// ```
pub fn is_reserved_module(role: ObjectRole, type_name: &str) -> bool {
    let module = module_name(type_name);
    let stem = module.strip_prefix("r#").unwrap_or(&module);
    reserved_modules(role).contains(&stem)
}

/// Validates a corpus before code generation.
///
/// Definitions are checked in declaration order and the first problem found
/// is returned.
///
/// ## Errors
///
/// Returns `GeneratorError::Schema` with the [`SchemaError`] describing the
/// first rule the corpus breaks.
pub fn validate_corpus(corpus: &SchemaCorpus) -> Result<(), GeneratorError> {
    if corpus.provider.trim().is_empty() {
        return Err(SchemaError::EmptyProvider.into());
    }

    let mut provider: Option<&str> = None;
    let mut modules: HashMap<(ObjectRole, String), &str> = HashMap::new();
    let mut wire_names: HashMap<(ObjectRole, &str), &str> = HashMap::new();

    for def in &corpus.definitions {
        if !def.role.is_top_level() {
            return Err(SchemaError::MisplacedRole {
                type_name: def.type_name.clone(),
                role: def.role.to_string(),
                position: "at the top level".to_string(),
            }
            .into());
        }

        check_type_name(&def.type_name)?;

        if is_reserved_module(def.role, &def.type_name) {
            return Err(SchemaError::ReservedModule {
                role: def.role.to_string(),
                type_name: def.type_name.clone(),
                path: type_file_path(def),
            }
            .into());
        }

        let wire_name = match def.wire_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(SchemaError::MissingWireName {
                    type_name: def.type_name.clone(),
                }
                .into());
            }
        };

        if def.role == ObjectRole::Provider {
            if let Some(first) = provider {
                return Err(SchemaError::DuplicateProvider {
                    first: first.to_string(),
                    second: def.type_name.clone(),
                }
                .into());
            }
            provider = Some(def.type_name.as_str());
        }

        let module = module_name(&def.type_name);
        if let Some(first) = modules.insert((def.role, module.clone()), def.type_name.as_str()) {
            return Err(SchemaError::DuplicateDefinition {
                role: def.role.to_string(),
                name: module,
                first: first.to_string(),
                second: def.type_name.clone(),
            }
            .into());
        }

        if let Some(first) = wire_names.insert((def.role, wire_name), def.type_name.as_str()) {
            return Err(SchemaError::DuplicateDefinition {
                role: def.role.to_string(),
                name: wire_name.to_string(),
                first: first.to_string(),
                second: def.type_name.clone(),
            }
            .into());
        }

        let mut scope = HashSet::new();
        validate_object(def, &module, &mut scope)?;
    }

    Ok(())
}

/// Validates one definition and everything nested below it.
///
/// `scope` collects the type names already used in the enclosing module.
fn validate_object<'a>(
    def: &'a ObjectDefinition,
    module: &str,
    scope: &mut HashSet<&'a str>,
) -> Result<(), SchemaError> {
    check_type_name(&def.type_name)?;

    if RESERVED_TYPE_NAMES.contains(&def.type_name.as_str()) {
        return Err(SchemaError::ReservedTypeName {
            module: module.to_string(),
            type_name: def.type_name.clone(),
        });
    }

    if !scope.insert(def.type_name.as_str()) {
        return Err(SchemaError::DuplicateTypeName {
            module: module.to_string(),
            type_name: def.type_name.clone(),
        });
    }

    let mut wire_keys = HashSet::new();
    let mut names = HashSet::new();
    let mut idents: HashMap<String, &str> = HashMap::new();

    for field in &def.fields {
        check_wire_key(&def.type_name, &field.wire_key)?;

        if !wire_keys.insert(field.wire_key.as_str()) {
            return Err(SchemaError::DuplicateWireKey {
                type_name: def.type_name.clone(),
                wire_key: field.wire_key.clone(),
            });
        }

        if !names.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateFieldName {
                type_name: def.type_name.clone(),
                name: field.name.clone(),
            });
        }

        let ident = field_name(&field.wire_key);
        if let Some(first) = idents.insert(ident.clone(), field.wire_key.as_str()) {
            return Err(SchemaError::FieldNameCollision {
                type_name: def.type_name.clone(),
                first: first.to_string(),
                second: field.wire_key.clone(),
                field: ident,
            });
        }

        match (field.kind.is_nested(), &field.nested) {
            (true, None) => {
                return Err(SchemaError::MissingNestedDefinition {
                    type_name: def.type_name.clone(),
                    field: field.wire_key.clone(),
                    kind: field.kind.to_string(),
                });
            }
            (false, Some(_)) => {
                return Err(SchemaError::UnexpectedNestedDefinition {
                    type_name: def.type_name.clone(),
                    field: field.wire_key.clone(),
                    kind: field.kind.to_string(),
                });
            }
            (true, Some(child)) => {
                if child.role != ObjectRole::Block {
                    return Err(SchemaError::MisplacedRole {
                        type_name: child.type_name.clone(),
                        role: child.role.to_string(),
                        position: "inside a field".to_string(),
                    });
                }
                validate_object(child, module, scope)?;
            }
            (false, None) => {}
        }
    }

    Ok(())
}

fn check_type_name(type_name: &str) -> Result<(), SchemaError> {
    if is_type_name(type_name) {
        Ok(())
    } else {
        Err(SchemaError::MalformedTypeName {
            type_name: type_name.to_string(),
        })
    }
}

fn check_wire_key(type_name: &str, wire_key: &str) -> Result<(), SchemaError> {
    let malformed = |reason: &str| SchemaError::MalformedWireKey {
        type_name: type_name.to_string(),
        wire_key: wire_key.to_string(),
        reason: reason.to_string(),
    };

    let Some(first) = wire_key.chars().next() else {
        return Err(malformed("wire key cannot be empty"));
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(malformed("must start with a letter or underscore"));
    }

    if !wire_key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(malformed(
            "must contain only ASCII letters, digits and underscores",
        ));
    }

    let ident = field_name(wire_key);
    if !ident.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(malformed("does not produce a usable field name"));
    }

    Ok(())
}
