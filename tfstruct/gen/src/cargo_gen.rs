//! Cargo.toml generation for the output crate.
//!
//! The generated crate only needs `serde` (derives) and `serde_json`
//! (`Value` for dynamic fields and the doc examples).

use std::path::Path;

use tracing::debug;

use crate::errors::GeneratorError;
use crate::options::GenOptions;
use crate::output::{GeneratedFile, WriteMode, stale_files, write_atomic};

/// Renders the generated crate's Cargo.toml.
///
/// ## Examples
///
/// ```
/// use tfstruct_gen::cargo_gen::generate_cargo_toml;
/// use tfstruct_gen::options::GenOptions;
///
/// let toml = generate_cargo_toml(&GenOptions::default());
/// assert!(toml.contains("name = \"tfstruct-schema\""));
/// assert!(toml.contains("serde_json = \"1.0\""));
/// ```
pub fn generate_cargo_toml(options: &GenOptions) -> String {
    format!(
        r#"[package]
name = "{name}"
version = "0.1.0"
edition = "2024"
license = "AGPL-3.0-only"
description = "Generated configuration types from tfstruct definitions"

# This file was automatically generated by tfstruct-gen.
# Do not edit manually - changes will be overwritten.

[dependencies]
serde = {{ version = "1.0", features = ["derive"] }}
serde_json = "1.0"
"#,
        name = options.crate_name
    )
}

/// Writes, prints, or checks `Cargo.toml` in the generated crate directory.
///
/// ## Arguments
///
/// * `crate_dir` - The crate root (the parent of the generated `src/`)
/// * `options` - Generation options (for the package name)
/// * `mode` - Write, dry run, or check
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` when writing fails and
/// `GeneratorError::Stale` in check mode when the file differs.
pub fn write_cargo_toml(
    crate_dir: &Path,
    options: &GenOptions,
    mode: WriteMode,
) -> Result<(), GeneratorError> {
    let file = GeneratedFile {
        path: "Cargo.toml".to_string(),
        content: generate_cargo_toml(options),
    };

    match mode {
        WriteMode::DryRun => println!("=== {} ===\n{}", file.path, file.content),
        WriteMode::Write => {
            write_atomic(&crate_dir.join(&file.path), &file.content)?;
            debug!(dir = %crate_dir.display(), "wrote Cargo.toml");
        }
        WriteMode::Check => {
            let paths = stale_files(crate_dir, std::slice::from_ref(&file))?;
            if !paths.is_empty() {
                return Err(GeneratorError::Stale { paths });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn cargo_toml_parses_and_names_package() {
        let options = GenOptions::default().with_crate_name("acme-types");
        let parsed: toml::Value = toml::from_str(&generate_cargo_toml(&options)).unwrap();

        assert_eq!(parsed["package"]["name"].as_str(), Some("acme-types"));
        assert_eq!(parsed["package"]["edition"].as_str(), Some("2024"));
        let deps = parsed["dependencies"].as_table().unwrap();
        assert_eq!(deps.len(), 2);
        assert!(deps.contains_key("serde"));
        assert!(deps.contains_key("serde_json"));
    }

    #[test]
    fn write_then_check_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let options = GenOptions::default();

        write_cargo_toml(temp_dir.path(), &options, WriteMode::Write).unwrap();
        write_cargo_toml(temp_dir.path(), &options, WriteMode::Check).unwrap();

        fs::write(temp_dir.path().join("Cargo.toml"), "[package]\n").unwrap();
        assert!(matches!(
            write_cargo_toml(temp_dir.path(), &options, WriteMode::Check),
            Err(GeneratorError::Stale { .. })
        ));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        write_cargo_toml(temp_dir.path(), &GenOptions::default(), WriteMode::DryRun).unwrap();
        assert!(!temp_dir.path().join("Cargo.toml").exists());
    }
}
