//! Terraform provider schema import.
//!
//! Reads the JSON printed by `terraform providers schema -json` and builds a
//! [`SchemaCorpus`] from one provider's schemas.
//!
//! ## Type mapping
//!
//! | Terraform | Field kind |
//! |-----------|------------|
//! | `"string"` | `String` |
//! | `"number"` | `Float` |
//! | `"bool"` | `Boolean` |
//! | `"dynamic"` | `Dynamic` |
//! | `["list", T]`, `["set", T]` | `List(T)` |
//! | `["map", T]` | `Map(T)` |
//! | anything else | `Unrecognized(raw)` |
//!
//! Block types with nesting mode `single`/`group`, or `list`/`set` limited to
//! one item, become `Object`; other `list`/`set` blocks become `ObjectList`.
//!
//! Terraform numbers may be fractional, so `number` is always `f64`.
//!
//! Nested blocks take the PascalCase of their key, or the parent type name
//! plus that when the plain name is taken or is one of
//! [`RESERVED_TYPE_NAMES`](crate::validation::RESERVED_TYPE_NAMES). A
//! top-level type whose name or module file is reserved is prefixed with the
//! provider name (`acme_option` becomes `AcmeOption`).
//!
//! ## Examples
//!
//! ```
//! use tfstruct_define::FieldKind;
//! use tfstruct_gen::parser::parse_provider_schema;
//!
//! let json = r#"{
//!   "format_version": "1.0",
//!   "provider_schemas": {
//!     "registry.terraform.io/acme/acme": {
//!       "resource_schemas": {
//!         "acme_widget": {
//!           "version": 0,
//!           "block": {
//!             "attributes": {
//!               "name": { "type": "string", "required": true },
//!               "size": { "type": "number", "optional": true }
//!             }
//!           }
//!         }
//!       }
//!     }
//!   }
//! }"#;
//!
//! let corpus = parse_provider_schema(json, None).unwrap();
//! assert_eq!(corpus.provider, "acme");
//!
//! let widget = &corpus.definitions[0];
//! assert_eq!(widget.type_name, "Widget");
//! assert_eq!(widget.fields[1].kind, FieldKind::Float);
//! ```

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;
use serde_json::Value;
use tfstruct_define::{FieldDescriptor, FieldKind, ObjectDefinition, ObjectRole, SchemaCorpus};
use tracing::{debug, info};

use crate::casing::to_pascal_case;
use crate::errors::GeneratorError;
use crate::validation::{RESERVED_TYPE_NAMES, is_reserved_module};

#[derive(Debug, Deserialize)]
struct ProviderSchemas {
    #[serde(default)]
    format_version: Option<String>,
    #[serde(default)]
    provider_schemas: BTreeMap<String, ProviderSchema>,
}

#[derive(Debug, Deserialize)]
struct ProviderSchema {
    #[serde(default)]
    provider: Option<SchemaEntry>,
    #[serde(default)]
    resource_schemas: BTreeMap<String, SchemaEntry>,
    #[serde(default)]
    data_source_schemas: BTreeMap<String, SchemaEntry>,
}

#[derive(Debug, Deserialize)]
struct SchemaEntry {
    #[serde(default)]
    version: i64,
    block: Block,
}

#[derive(Debug, Default, Deserialize)]
struct Block {
    #[serde(default)]
    attributes: BTreeMap<String, Attribute>,
    #[serde(default)]
    block_types: BTreeMap<String, BlockType>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    deprecated: bool,
}

#[derive(Debug, Deserialize)]
struct Attribute {
    #[serde(rename = "type", default)]
    ty: Option<Value>,
    #[serde(default)]
    nested_type: Option<NestedType>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    computed: bool,
    #[serde(default)]
    deprecated: bool,
}

#[derive(Debug, Deserialize)]
struct NestedType {
    #[serde(default)]
    attributes: BTreeMap<String, Attribute>,
    #[serde(default)]
    nesting_mode: String,
}

#[derive(Debug, Deserialize)]
struct BlockType {
    #[serde(default)]
    nesting_mode: String,
    #[serde(default)]
    block: Block,
    #[serde(default)]
    min_items: Option<u64>,
    #[serde(default)]
    max_items: Option<u64>,
}

/// Maps a Terraform type expression to a field kind.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use tfstruct_define::FieldKind;
/// use tfstruct_gen::parser::parse_type;
///
/// assert_eq!(parse_type(&json!("number")), FieldKind::Float);
/// assert_eq!(
///     parse_type(&json!(["set", "string"])),
///     FieldKind::List(Box::new(FieldKind::String))
/// );
/// assert!(matches!(parse_type(&json!(["tuple", ["string"]])), FieldKind::Unrecognized(_)));
/// ```
pub fn parse_type(value: &Value) -> FieldKind {
    match value {
        Value::String(name) => match name.as_str() {
            "string" => FieldKind::String,
            "number" => FieldKind::Float,
            "bool" => FieldKind::Boolean,
            "dynamic" => FieldKind::Dynamic,
            _ => FieldKind::Unrecognized(value.to_string()),
        },
        Value::Array(items) if items.len() == 2 => match items[0].as_str() {
            Some("list" | "set") => FieldKind::List(Box::new(parse_type(&items[1]))),
            Some("map") => FieldKind::Map(Box::new(parse_type(&items[1]))),
            _ => FieldKind::Unrecognized(value.to_string()),
        },
        _ => FieldKind::Unrecognized(value.to_string()),
    }
}

/// Picks the provider entry by full source address or by its last segment.
fn select_provider<'a>(
    schemas: &'a ProviderSchemas,
    provider: Option<&str>,
) -> Result<(&'a str, &'a ProviderSchema), GeneratorError> {
    let available = || {
        schemas
            .provider_schemas
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let found = match provider {
        Some(wanted) => schemas.provider_schemas.iter().find(|(address, _)| {
            *address == wanted || address.rsplit('/').next() == Some(wanted)
        }),
        None if schemas.provider_schemas.len() == 1 => schemas.provider_schemas.iter().next(),
        None => {
            return Err(GeneratorError::ConfigError(format!(
                "Schema contains {} providers; choose one with --provider ({})",
                schemas.provider_schemas.len(),
                available()
            )));
        }
    };

    found
        .map(|(address, schema)| (address.as_str(), schema))
        .ok_or_else(|| {
            GeneratorError::ConfigError(format!(
                "Provider '{}' not found in schema. Available: {}",
                provider.unwrap_or_default(),
                available()
            ))
        })
}

/// Hands out nested type names unique within one module.
struct TypeNames {
    taken: HashSet<String>,
}

impl TypeNames {
    fn new(top_level: &str) -> Self {
        let mut taken: HashSet<String> = RESERVED_TYPE_NAMES
            .iter()
            .map(|n| n.to_string())
            .collect();
        taken.insert(top_level.to_string());
        Self { taken }
    }

    /// PascalCase of the key; prefixed with the parent type name when taken,
    /// then suffixed with a counter as a last resort.
    fn claim(&mut self, parent: &str, key: &str) -> String {
        let base = to_pascal_case(key);
        let prefixed = format!("{parent}{base}");

        let mut candidate = base;
        if self.taken.contains(&candidate) {
            candidate = prefixed.clone();
        }
        let mut n = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{prefixed}{n}");
            n += 1;
        }

        self.taken.insert(candidate.clone());
        candidate
    }
}

/// PascalCase of the wire name without the provider prefix, prefixed with
/// the provider when that name is reserved for `role`.
fn top_level_type_name(provider: &str, role: ObjectRole, stripped: &str) -> String {
    let name = to_pascal_case(stripped);
    if RESERVED_TYPE_NAMES.contains(&name.as_str()) || is_reserved_module(role, &name) {
        format!("{}{name}", to_pascal_case(provider))
    } else {
        name
    }
}

fn clean_description(desc: Option<&String>) -> Option<String> {
    desc.map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

enum Member<'a> {
    Attribute(&'a Attribute),
    Block(&'a BlockType),
}

/// Attributes and block types merged and sorted by key.
fn members<'a>(
    attributes: &'a BTreeMap<String, Attribute>,
    block_types: &'a BTreeMap<String, BlockType>,
) -> Vec<(&'a str, Member<'a>)> {
    let mut members: Vec<_> = attributes
        .iter()
        .map(|(k, a)| (k.as_str(), Member::Attribute(a)))
        .chain(block_types.iter().map(|(k, b)| (k.as_str(), Member::Block(b))))
        .collect();
    members.sort_by(|a, b| a.0.cmp(b.0));
    members
}

fn convert_attributes(
    def: ObjectDefinition,
    attributes: &BTreeMap<String, Attribute>,
    names: &mut TypeNames,
) -> ObjectDefinition {
    let empty = BTreeMap::new();
    convert_members(def, attributes, &empty, names)
}

fn convert_members(
    mut def: ObjectDefinition,
    attributes: &BTreeMap<String, Attribute>,
    block_types: &BTreeMap<String, BlockType>,
    names: &mut TypeNames,
) -> ObjectDefinition {
    let parent = def.type_name.clone();

    for (key, member) in members(attributes, block_types) {
        let field = match member {
            Member::Attribute(attr) => convert_attribute(&parent, key, attr, names),
            Member::Block(block) => convert_block(&parent, key, block, names),
        };
        def.fields.push(field);
    }

    def
}

fn convert_attribute(
    parent: &str,
    key: &str,
    attr: &Attribute,
    names: &mut TypeNames,
) -> FieldDescriptor {
    let mut field = match (&attr.nested_type, &attr.ty) {
        (Some(nested), _) => {
            let kind = match nested.nesting_mode.as_str() {
                "single" => FieldKind::Object,
                "list" | "set" => FieldKind::ObjectList,
                other => FieldKind::Unrecognized(format!("nested attribute mode '{other}'")),
            };
            let mut field = FieldDescriptor::new(key, kind.clone());
            if kind.is_nested() {
                let type_name = names.claim(parent, key);
                let child = convert_attributes(
                    ObjectDefinition::block(type_name),
                    &nested.attributes,
                    names,
                );
                field.nested = Some(child);
            }
            field
        }
        (None, Some(ty)) => FieldDescriptor::new(key, parse_type(ty)),
        (None, None) => {
            FieldDescriptor::new(key, FieldKind::Unrecognized("missing type".to_string()))
        }
    };

    field.required = attr.required;
    field.computed = attr.computed;
    field.deprecated = attr.deprecated;
    field.description = clean_description(attr.description.as_ref());
    field
}

fn convert_block(
    parent: &str,
    key: &str,
    block: &BlockType,
    names: &mut TypeNames,
) -> FieldDescriptor {
    let kind = match (block.nesting_mode.as_str(), block.max_items) {
        ("single" | "group", _) => FieldKind::Object,
        ("list" | "set", Some(1)) => FieldKind::Object,
        ("list" | "set", _) => FieldKind::ObjectList,
        (other, _) => FieldKind::Unrecognized(format!("block nesting mode '{other}'")),
    };

    let mut field = FieldDescriptor::new(key, kind.clone());
    if kind.is_nested() {
        let type_name = names.claim(parent, key);
        let mut child = ObjectDefinition::block(type_name);
        if let Some(desc) = clean_description(block.block.description.as_ref()) {
            child = child.with_description(desc);
        }
        field.nested = Some(convert_members(
            child,
            &block.block.attributes,
            &block.block.block_types,
            names,
        ));
    }

    field.required = block.min_items.is_some_and(|n| n >= 1);
    field.deprecated = block.block.deprecated;
    field.description = clean_description(block.block.description.as_ref());
    field
}

fn convert_entry(
    wire_name: &str,
    type_name: String,
    role: ObjectRole,
    entry: &SchemaEntry,
) -> ObjectDefinition {
    let mut names = TypeNames::new(&type_name);
    let mut def = ObjectDefinition::new(type_name, role).with_wire_name(wire_name);
    if let Some(desc) = clean_description(entry.block.description.as_ref()) {
        def = def.with_description(desc);
    }
    debug!(wire_name, role = %role, version = entry.version, "importing schema");
    convert_members(def, &entry.block.attributes, &entry.block.block_types, &mut names)
}

/// Parses `terraform providers schema -json` output into a corpus.
///
/// ## Arguments
///
/// * `json` - The schema document
/// * `provider` - Provider to import, by source address
///   (`registry.terraform.io/databricks/databricks`) or short name
///   (`databricks`). May be omitted when the document has one provider.
///
/// ## Errors
///
/// Returns `GeneratorError::ParseError` for malformed JSON and
/// `GeneratorError::ConfigError` when the provider cannot be chosen.
pub fn parse_provider_schema(
    json: &str,
    provider: Option<&str>,
) -> Result<SchemaCorpus, GeneratorError> {
    let schemas: ProviderSchemas =
        serde_json::from_str(json).map_err(|e| GeneratorError::ParseError(e.to_string()))?;

    let (address, schema) = select_provider(&schemas, provider)?;
    let name = address.rsplit('/').next().unwrap_or(address);

    let mut source = address.to_string();
    if let Some(version) = &schemas.format_version {
        source.push_str(&format!(" (format {version})"));
    }
    let mut corpus = SchemaCorpus::new(name).with_source(source);

    if let Some(entry) = &schema.provider {
        corpus = corpus.with_definition(convert_entry(
            name,
            "Provider".to_string(),
            ObjectRole::Provider,
            entry,
        ));
    }

    for (role, entries) in [
        (ObjectRole::Resource, &schema.resource_schemas),
        (ObjectRole::DataSource, &schema.data_source_schemas),
    ] {
        for (wire_name, entry) in entries {
            let stripped = corpus.strip_provider_prefix(wire_name);
            let type_name = top_level_type_name(&corpus.provider, role, stripped);
            let def = convert_entry(wire_name, type_name, role, entry);
            corpus = corpus.with_definition(def);
        }
    }

    info!(
        provider = %corpus.provider,
        resources = schema.resource_schemas.len(),
        data_sources = schema.data_source_schemas.len(),
        "imported provider schema"
    );

    Ok(corpus)
}
