//! Identifier casing for generated code.
//!
//! Wire keys are snake_case and type names are PascalCase, but upstream
//! schemas are not always consistent. Every generated identifier goes through
//! the fixed transforms in this module so the same input always yields the
//! same name.
//!
//! ## Rules
//!
//! - Words split on `_`, `-`, and CamelCase boundaries ("HTTPServer" -> "HTTP", "Server")
//! - Digits stay attached to the word they follow ("s3_bucket" -> "s3", "bucket")
//! - Field names that collide with Rust keywords become raw identifiers (`r#type`)
//! - `self`, `super` and `crate` cannot be raw, so they get a trailing underscore
//!
//! ## Examples
//!
//! ```
//! use tfstruct_gen::casing::{field_name, to_pascal_case, to_snake_case};
//!
//! assert_eq!(to_pascal_case("aws_attributes"), "AwsAttributes");
//! assert_eq!(to_snake_case("SqlEndpoint"), "sql_endpoint");
//! assert_eq!(field_name("type"), "r#type");
//! assert_eq!(field_name("self"), "self_");
//! ```

use proc_macro2::Ident;
use quote::format_ident;

/// Strict and reserved keywords that need a raw identifier as a field name.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that are not allowed as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

/// Splits an identifier into words.
///
/// Handles the common shapes seen in provider schemas:
/// - "num_workers" -> ["num", "workers"]
/// - "SqlEndpoint" -> ["Sql", "Endpoint"]
/// - "HTTPClient" -> ["HTTP", "Client"]
/// - "s3_bucket" -> ["s3", "bucket"]
/// - "__private" -> ["private"]
pub fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for segment in s.split(['_', '-']).filter(|seg| !seg.is_empty()) {
        let chars: Vec<(usize, char)> = segment.char_indices().collect();
        let mut word_start = 0;

        for i in 1..chars.len() {
            let (idx, current) = chars[i];
            let prev = chars[i - 1].1;

            // "numWorkers" -> "num", "Workers"; "HTTPClient" -> "HTTP", "Client"
            let next_is_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());
            let is_new_word = current.is_uppercase()
                && (prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (next_is_lower && prev.is_uppercase()));

            if is_new_word {
                if idx > word_start {
                    words.push(&segment[word_start..idx]);
                }
                word_start = idx;
            }
        }

        if word_start < segment.len() {
            words.push(&segment[word_start..]);
        }
    }

    words
}

/// Converts an identifier to PascalCase.
///
/// ## Examples
///
/// ```
/// use tfstruct_gen::casing::to_pascal_case;
///
/// assert_eq!(to_pascal_case("sql_endpoint"), "SqlEndpoint");
/// assert_eq!(to_pascal_case("s3"), "S3");
/// assert_eq!(to_pascal_case("AwsIamRole"), "AwsIamRole");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Converts an identifier to snake_case.
///
/// ## Examples
///
/// ```
/// use tfstruct_gen::casing::to_snake_case;
///
/// assert_eq!(to_snake_case("AwsIamRole"), "aws_iam_role");
/// assert_eq!(to_snake_case("num_workers"), "num_workers");
/// assert_eq!(to_snake_case("clusterID"), "cluster_id");
/// ```
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Returns the Rust field name for a wire key, as source text.
///
/// The result may be a raw identifier (`r#type`).
pub fn field_name(wire_key: &str) -> String {
    let snake = to_snake_case(wire_key);

    if NON_RAW_KEYWORDS.contains(&snake.as_str()) {
        format!("{snake}_")
    } else if KEYWORDS.contains(&snake.as_str()) {
        format!("r#{snake}")
    } else {
        snake
    }
}

/// Returns the Rust field identifier for a wire key.
pub fn field_ident(wire_key: &str) -> Ident {
    let name = field_name(wire_key);
    match name.strip_prefix("r#") {
        Some(raw) => Ident::new_raw(raw, proc_macro2::Span::call_site()),
        None => format_ident!("{}", name),
    }
}

/// Returns the module name for a top-level type name.
pub fn module_name(type_name: &str) -> String {
    field_name(type_name)
}

/// Returns the module identifier for a top-level type name.
pub fn module_ident(type_name: &str) -> Ident {
    field_ident(type_name)
}

/// Returns `true` if `s` is a usable PascalCase type name.
///
/// The name must start with an ASCII uppercase letter, contain only ASCII
/// alphanumerics, and not be `Self`.
pub fn is_type_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
        && s != "Self"
}
