//! Generation options.

/// Default package name for the generated crate.
pub const DEFAULT_CRATE_NAME: &str = "tfstruct-schema";

/// How optional fields are represented in generated types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionalStyle {
    /// Optional fields use the plain type and are omitted from output when
    /// they hold the zero value. A zero value that was sent explicitly cannot
    /// be told apart from an absent one.
    #[default]
    OmitZero,
    /// Optional fields are `Option<T>` and are omitted only when `None`.
    /// Dynamic fields stay a plain `Value`, omitted when null.
    Presence,
}

/// Options that shape the generated code.
///
/// ## Examples
///
/// ```
/// use tfstruct_gen::options::{GenOptions, OptionalStyle};
///
/// let options = GenOptions::default().with_optional_style(OptionalStyle::Presence);
/// assert_eq!(options.optional_style, OptionalStyle::Presence);
/// assert_eq!(options.crate_name, "tfstruct-schema");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenOptions {
    /// Representation of optional fields.
    pub optional_style: OptionalStyle,
    /// Package name written to the generated Cargo.toml and used in doc examples.
    pub crate_name: String,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            optional_style: OptionalStyle::default(),
            crate_name: DEFAULT_CRATE_NAME.to_string(),
        }
    }
}

impl GenOptions {
    /// Sets the optional field representation.
    pub fn with_optional_style(mut self, style: OptionalStyle) -> Self {
        self.optional_style = style;
        self
    }

    /// Sets the generated package name.
    pub fn with_crate_name(mut self, name: impl Into<String>) -> Self {
        self.crate_name = name.into();
        self
    }

    /// Returns the crate name as a Rust path segment (`-` replaced by `_`).
    pub fn crate_ident(&self) -> String {
        self.crate_name.replace('-', "_")
    }
}
