//! Field descriptors for object definitions.
//!
//! A [`FieldDescriptor`] describes one attribute of an [`ObjectDefinition`]:
//! the key it is serialized under, its [`FieldKind`], whether it is required,
//! and (for nested blocks) the child definition it owns.
//!
//! ## Kinds
//!
//! - Scalars: [`FieldKind::String`], [`FieldKind::Integer`], [`FieldKind::Float`],
//!   [`FieldKind::Boolean`]
//! - Collections: [`FieldKind::List`], [`FieldKind::Map`]
//! - Nested blocks: [`FieldKind::Object`], [`FieldKind::ObjectList`]
//! - Pass-through: [`FieldKind::Dynamic`]
//! - [`FieldKind::Unrecognized`] for upstream type expressions with no mapping

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::object::ObjectDefinition;

/// The shape of a single field's value.
///
/// ## Examples
///
/// ```
/// use tfstruct_define::FieldKind;
///
/// let tags = FieldKind::Map(Box::new(FieldKind::String));
/// assert_eq!(tags.to_string(), "map(string)");
/// assert!(tags.is_string_map());
///
/// let ids = FieldKind::List(Box::new(FieldKind::Integer));
/// assert_eq!(ids.to_string(), "list(integer)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// UTF-8 text.
    String,
    /// Whole number.
    Integer,
    /// Floating-point number.
    Float,
    /// `true` / `false`.
    Boolean,
    /// Ordered sequence of the element kind.
    List(Box<FieldKind>),
    /// String-keyed mapping to the value kind.
    ///
    /// Only `Map(String)` has a generation rule.
    Map(Box<FieldKind>),
    /// A single nested block. The field's `nested` definition describes it.
    Object,
    /// A sequence of nested blocks. The field's `nested` definition describes
    /// each element.
    ObjectList,
    /// Untyped value passed through without interpretation.
    Dynamic,
    /// An upstream type expression that has no mapping, kept verbatim for
    /// error reporting.
    Unrecognized(String),
}

impl FieldKind {
    /// Returns `true` for the scalar kinds (string, integer, float, boolean).
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            FieldKind::String | FieldKind::Integer | FieldKind::Float | FieldKind::Boolean
        )
    }

    /// Returns `true` for the kinds that require a nested definition.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tfstruct_define::FieldKind;
    ///
    /// assert!(FieldKind::Object.is_nested());
    /// assert!(FieldKind::ObjectList.is_nested());
    /// assert!(!FieldKind::String.is_nested());
    /// ```
    pub fn is_nested(&self) -> bool {
        matches!(self, FieldKind::Object | FieldKind::ObjectList)
    }

    /// Returns `true` for the map-of-string-to-string kind.
    pub fn is_string_map(&self) -> bool {
        matches!(self, FieldKind::Map(value) if **value == FieldKind::String)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => write!(f, "string"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Float => write!(f, "float"),
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::List(elem) => write!(f, "list({elem})"),
            FieldKind::Map(value) => write!(f, "map({value})"),
            FieldKind::Object => write!(f, "object"),
            FieldKind::ObjectList => write!(f, "list(object)"),
            FieldKind::Dynamic => write!(f, "dynamic"),
            FieldKind::Unrecognized(raw) => write!(f, "unrecognized({raw})"),
        }
    }
}

/// Describes one attribute of an object definition.
///
/// Fields are optional unless marked [`required`](FieldDescriptor::required).
/// The logical `name` defaults to the wire key.
///
/// ## Examples
///
/// ```
/// use tfstruct_define::{FieldDescriptor, FieldKind, ObjectDefinition};
///
/// let name = FieldDescriptor::string("cluster_name").required();
/// assert!(name.required);
/// assert_eq!(name.name, "cluster_name");
///
/// let autoscale = FieldDescriptor::object(
///     "autoscale",
///     ObjectDefinition::block("Autoscale")
///         .field(FieldDescriptor::integer("min_workers"))
///         .field(FieldDescriptor::integer("max_workers")),
/// )
/// .with_description("Autoscaling bounds");
///
/// assert_eq!(autoscale.kind, FieldKind::Object);
/// assert_eq!(autoscale.nested.as_ref().map(|n| n.fields.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Logical identifier, unique within the parent object.
    pub name: String,

    /// Key used for this field in the serialized document (snake_case).
    pub wire_key: String,

    /// Shape of the value.
    pub kind: FieldKind,

    /// Required fields are always serialized, even at their zero value.
    #[serde(default)]
    pub required: bool,

    /// Child definition for [`FieldKind::Object`] and [`FieldKind::ObjectList`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<ObjectDefinition>,

    /// Human-readable description, emitted as documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The upstream schema marks this field as deprecated.
    #[serde(default)]
    pub deprecated: bool,

    /// The provider may fill this field in when it is not set.
    #[serde(default)]
    pub computed: bool,
}

impl FieldDescriptor {
    /// Creates an optional field of the given kind.
    pub fn new(wire_key: impl Into<String>, kind: FieldKind) -> Self {
        let wire_key = wire_key.into();
        Self {
            name: wire_key.clone(),
            wire_key,
            kind,
            required: false,
            nested: None,
            description: None,
            deprecated: false,
            computed: false,
        }
    }

    /// Creates an optional string field.
    pub fn string(wire_key: impl Into<String>) -> Self {
        Self::new(wire_key, FieldKind::String)
    }

    /// Creates an optional integer field.
    pub fn integer(wire_key: impl Into<String>) -> Self {
        Self::new(wire_key, FieldKind::Integer)
    }

    /// Creates an optional floating-point field.
    pub fn float(wire_key: impl Into<String>) -> Self {
        Self::new(wire_key, FieldKind::Float)
    }

    /// Creates an optional boolean field.
    pub fn boolean(wire_key: impl Into<String>) -> Self {
        Self::new(wire_key, FieldKind::Boolean)
    }

    /// Creates an optional list field with the given element kind.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tfstruct_define::{FieldDescriptor, FieldKind};
    ///
    /// let zones = FieldDescriptor::list("zones", FieldKind::String);
    /// assert_eq!(zones.kind, FieldKind::List(Box::new(FieldKind::String)));
    /// ```
    pub fn list(wire_key: impl Into<String>, element: FieldKind) -> Self {
        Self::new(wire_key, FieldKind::List(Box::new(element)))
    }

    /// Creates an optional map-of-string-to-string field.
    pub fn string_map(wire_key: impl Into<String>) -> Self {
        Self::new(wire_key, FieldKind::Map(Box::new(FieldKind::String)))
    }

    /// Creates an optional untyped field.
    pub fn dynamic(wire_key: impl Into<String>) -> Self {
        Self::new(wire_key, FieldKind::Dynamic)
    }

    /// Creates an optional single nested block owning `nested`.
    pub fn object(wire_key: impl Into<String>, nested: ObjectDefinition) -> Self {
        Self {
            nested: Some(nested),
            ..Self::new(wire_key, FieldKind::Object)
        }
    }

    /// Creates a repeated nested block whose elements are described by `nested`.
    pub fn object_list(wire_key: impl Into<String>, nested: ObjectDefinition) -> Self {
        Self {
            nested: Some(nested),
            ..Self::new(wire_key, FieldKind::ObjectList)
        }
    }

    /// Marks this field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Overrides the logical name (defaults to the wire key).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Marks this field as deprecated upstream.
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Marks this field as computed by the provider.
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }
}
