//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of code generation: assembling all
//! generated modules into a crate layout, validating each file, formatting it,
//! and writing it to disk atomically.
//!
//! ## Output Structure
//!
//! ```text
//! schema/src/
//! ├── lib.rs              # Module declarations, `pub use root::Root`
//! ├── shared.rs           # `is_zero` helper for skip rules
//! ├── provider.rs         # Provider configuration (when defined)
//! ├── resources/
//! │   ├── mod.rs          # `Resources` aggregate
//! │   └── cluster.rs      # One module per resource
//! ├── data_sources/
//! │   ├── mod.rs          # `DataSources` aggregate
//! │   └── current_user.rs # One module per data source
//! └── root.rs             # `Root` document
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is validated with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes
//! - **No partial output**: Nothing is written while any definition fails

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use proc_macro2::TokenStream;
use tfstruct_define::{ObjectDefinition, ObjectRole, SchemaCorpus};
use tracing::{debug, info, warn};

use crate::casing::module_name;
use crate::codegen::{
    generate_lib, generate_object_module, generate_role_index, generate_root, generate_shared,
};
use crate::errors::GeneratorError;
use crate::options::GenOptions;
use crate::validation::validate_corpus;

/// Header prepended to every generated Rust file.
pub const GENERATED_HEADER: &str =
    "// This code was automatically generated by tfstruct-gen. Do not edit manually.\n\n";

/// Directories that hold per-definition modules.
const ROLE_DIRS: &[&str] = &["resources", "data_sources"];

/// Generated source for one top-level definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedType {
    /// The top-level type name.
    pub type_name: String,
    /// The definition's role.
    pub role: ObjectRole,
    /// Path of the module file relative to the output directory.
    pub path: String,
    /// Formatted source text.
    pub source: String,
}

/// A file to be written, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Relative path using `/` separators.
    pub path: String,
    /// Formatted content.
    pub content: String,
}

/// How [`generate_and_write`] treats the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write every file and remove generated files that are no longer produced.
    #[default]
    Write,
    /// Print every file to stdout and touch nothing.
    DryRun,
    /// Compare with what is on disk and fail with [`GeneratorError::Stale`]
    /// when anything differs.
    Check,
}

/// The result of generating a corpus.
///
/// Holds every successfully generated type module, the crate support files,
/// and the definitions that failed.
#[derive(Debug)]
pub struct Generation {
    types: Vec<GeneratedType>,
    support: Vec<GeneratedFile>,
    failures: Vec<GeneratorError>,
}

impl Generation {
    /// Successfully generated types, in corpus order.
    pub fn types(&self) -> &[GeneratedType] {
        &self.types
    }

    /// Definitions that could not be generated.
    pub fn failures(&self) -> &[GeneratorError] {
        &self.failures
    }

    /// Returns `true` when every definition generated.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Looks up a generated type by its top-level type name and role.
    pub fn find(&self, role: ObjectRole, type_name: &str) -> Option<&GeneratedType> {
        self.types
            .iter()
            .find(|t| t.role == role && t.type_name == type_name)
    }

    /// Every file of the generated crate, sorted by path.
    pub fn files(&self) -> Vec<GeneratedFile> {
        let mut files: Vec<GeneratedFile> = self
            .support
            .iter()
            .cloned()
            .chain(self.types.iter().map(|t| GeneratedFile {
                path: t.path.clone(),
                content: t.source.clone(),
            }))
            .collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }

    /// Turns any failure into [`GeneratorError::Incomplete`].
    ///
    /// ## Errors
    ///
    /// Returns the collected failures when at least one definition failed.
    pub fn into_result(self) -> Result<Self, GeneratorError> {
        if self.failures.is_empty() {
            Ok(self)
        } else {
            Err(GeneratorError::Incomplete {
                failures: self.failures,
            })
        }
    }
}

/// Validates generated code using syn.
///
/// Parses the token stream as a complete Rust file to ensure it's syntactically
/// valid before writing to disk.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the code fails to parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats generated code using prettyplease.
///
/// Converts a parsed syn::File back to a nicely formatted string,
/// prepending [`GENERATED_HEADER`].
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!("{GENERATED_HEADER}{formatted}")
}

fn render(tokens: &TokenStream) -> Result<String, GeneratorError> {
    let file = validate_code(tokens)?;
    Ok(format_code(&file))
}

/// Returns the module file name for a top-level type (raw prefix stripped).
fn module_file(type_name: &str) -> String {
    let module = module_name(type_name);
    let module = module.strip_prefix("r#").unwrap_or(&module);
    format!("{module}.rs")
}

/// Returns the path of a top-level definition's module relative to the
/// output directory.
///
/// ## Examples
///
/// ```
/// use tfstruct_define::ObjectDefinition;
/// use tfstruct_gen::output::type_file_path;
///
/// let def = ObjectDefinition::resource("databricks_sql_endpoint", "SqlEndpoint");
/// assert_eq!(type_file_path(&def), "resources/sql_endpoint.rs");
/// ```
pub fn type_file_path(def: &ObjectDefinition) -> String {
    let file = module_file(&def.type_name);
    match def.role {
        ObjectRole::Resource => format!("resources/{file}"),
        ObjectRole::DataSource => format!("data_sources/{file}"),
        ObjectRole::Provider | ObjectRole::Block => file,
    }
}

/// Generates Rust source for every definition in a corpus.
///
/// The corpus is validated first; a malformed corpus fails before any code
/// is produced. A definition with a field kind that has no generation rule
/// is recorded in [`Generation::failures`] and the remaining definitions
/// still generate.
///
/// Output is deterministic: the same corpus and options always produce
/// byte-identical files.
///
/// ## Errors
///
/// Returns an error if the corpus is invalid (including a type that maps to
/// a file of the crate layout) or a crate support file fails to render.
pub fn generate(corpus: &SchemaCorpus, options: &GenOptions) -> Result<Generation, GeneratorError> {
    validate_corpus(corpus)?;

    let mut types = Vec::new();
    let mut failures = Vec::new();
    let mut generated: Vec<&ObjectDefinition> = Vec::new();

    for def in &corpus.definitions {
        let result = generate_object_module(def, options)
            .map_err(|unsupported| GeneratorError::UnsupportedKind {
                type_name: def.type_name.clone(),
                field: unsupported.path,
                kind: unsupported.kind,
            })
            .and_then(|tokens| render(&tokens));

        match result {
            Ok(source) => {
                let path = type_file_path(def);
                debug!(
                    type_name = %def.type_name,
                    role = %def.role,
                    path = %path,
                    "generated module"
                );
                types.push(GeneratedType {
                    type_name: def.type_name.clone(),
                    role: def.role,
                    path,
                    source,
                });
                generated.push(def);
            }
            Err(err) => {
                warn!(type_name = %def.type_name, error = %err, "definition failed to generate");
                failures.push(err);
            }
        }
    }

    let support = assemble_support_files(corpus, &generated)?;

    info!(
        provider = %corpus.provider,
        types = types.len(),
        failures = failures.len(),
        "generation finished"
    );

    Ok(Generation {
        types,
        support,
        failures,
    })
}

/// Renders `lib.rs`, `shared.rs`, the role index modules and `root.rs` for the
/// definitions that generated.
fn assemble_support_files(
    corpus: &SchemaCorpus,
    generated: &[&ObjectDefinition],
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let of_role = |role: ObjectRole| -> Vec<&ObjectDefinition> {
        generated.iter().copied().filter(|d| d.role == role).collect()
    };
    let provider = generated
        .iter()
        .copied()
        .find(|d| d.role == ObjectRole::Provider);
    let resources = of_role(ObjectRole::Resource);
    let data_sources = of_role(ObjectRole::DataSource);

    let provider_module = provider.map(|p| module_name(&p.type_name));
    let mut modules = vec!["shared"];
    if let Some(module) = &provider_module {
        modules.push(module);
    }
    if !resources.is_empty() {
        modules.push("resources");
    }
    if !data_sources.is_empty() {
        modules.push("data_sources");
    }
    modules.push("root");

    let mut files = vec![
        GeneratedFile {
            path: "lib.rs".to_string(),
            content: render(&generate_lib(corpus, &modules))?,
        },
        GeneratedFile {
            path: "shared.rs".to_string(),
            content: render(&generate_shared())?,
        },
        GeneratedFile {
            path: "root.rs".to_string(),
            content: render(&generate_root(
                &corpus.provider,
                provider,
                !resources.is_empty(),
                !data_sources.is_empty(),
            ))?,
        },
    ];

    for (role, defs) in [
        (ObjectRole::Resource, &resources),
        (ObjectRole::DataSource, &data_sources),
    ] {
        if defs.is_empty() {
            continue;
        }
        let dir = if role == ObjectRole::Resource {
            "resources"
        } else {
            "data_sources"
        };
        files.push(GeneratedFile {
            path: format!("{dir}/mod.rs"),
            content: render(&generate_role_index(role, defs, &corpus.provider))?,
        });
    }

    Ok(files)
}

/// Writes content to a file atomically using temp file + rename.
///
/// This pattern ensures that:
/// - The file is never left in a partially-written state
/// - Other processes see either the old or new content, never a mix
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Reads a file, treating a missing file as `None`.
fn read_existing(path: &Path) -> Result<Option<String>, GeneratorError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GeneratorError::ReadError {
            path: path.display().to_string(),
            source: e,
        }),
    }
}

/// Returns the relative paths of files whose on-disk content differs from
/// `files` (including files that do not exist yet).
///
/// ## Errors
///
/// Returns `GeneratorError::ReadError` if an existing file cannot be read.
pub fn stale_files(
    output_dir: &Path,
    files: &[GeneratedFile],
) -> Result<Vec<String>, GeneratorError> {
    let mut stale = Vec::new();
    for file in files {
        let existing = read_existing(&output_dir.join(&file.path))?;
        if existing.as_deref() != Some(file.content.as_str()) {
            stale.push(file.path.clone());
        }
    }
    Ok(stale)
}

/// Returns the relative paths of previously generated `.rs` files (those
/// starting with [`GENERATED_HEADER`]) that `files` no longer contains.
///
/// Only the output directory and the role directories are scanned.
///
/// ## Errors
///
/// Returns `GeneratorError::ReadError` if a directory or file cannot be read.
pub fn obsolete_files(
    output_dir: &Path,
    files: &[GeneratedFile],
) -> Result<Vec<String>, GeneratorError> {
    let current: HashSet<&str> = files.iter().map(|f| f.path.as_str()).collect();
    let mut obsolete = Vec::new();

    let dirs = std::iter::once(None).chain(ROLE_DIRS.iter().map(|d| Some(*d)));
    for dir in dirs {
        let full = match dir {
            Some(dir) => output_dir.join(dir),
            None => output_dir.to_path_buf(),
        };
        let entries = match fs::read_dir(&full) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(GeneratorError::ReadError {
                    path: full.display().to_string(),
                    source: e,
                });
            }
        };

        for entry in entries {
            let entry = entry.map_err(|e| GeneratorError::ReadError {
                path: full.display().to_string(),
                source: e,
            })?;
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "rs") {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let relative = match dir {
                Some(dir) => format!("{dir}/{name}"),
                None => name,
            };
            if current.contains(relative.as_str()) {
                continue;
            }
            if read_existing(&path)?.is_some_and(|c| c.starts_with(GENERATED_HEADER)) {
                obsolete.push(relative);
            }
        }
    }

    obsolete.sort();
    Ok(obsolete)
}

/// Generates a corpus and writes, prints, or checks the output.
///
/// This is the main entry point for code generation. Output is only touched
/// when every definition generated.
///
/// ## Arguments
///
/// * `corpus` - The definitions to generate
/// * `output_dir` - The `src/` directory of the generated crate
/// * `options` - Generation options
/// * `mode` - Write, dry run, or check
///
/// ## Errors
///
/// Returns an error if:
/// - The corpus is invalid or any definition fails ([`GeneratorError::Incomplete`])
/// - File reading or writing fails
/// - In check mode, any file is stale, missing, or obsolete ([`GeneratorError::Stale`])
pub fn generate_and_write(
    corpus: &SchemaCorpus,
    output_dir: &Path,
    options: &GenOptions,
    mode: WriteMode,
) -> Result<Generation, GeneratorError> {
    let generation = generate(corpus, options)?.into_result()?;
    let files = generation.files();

    match mode {
        WriteMode::DryRun => {
            for file in &files {
                println!("=== {} ===\n{}\n", file.path, file.content);
            }
        }
        WriteMode::Write => {
            for file in &files {
                write_atomic(&output_dir.join(&file.path), &file.content)?;
                debug!(path = %file.path, "wrote file");
            }
            for path in obsolete_files(output_dir, &files)? {
                let full = output_dir.join(&path);
                fs::remove_file(&full).map_err(|e| GeneratorError::WriteError {
                    path: full.display().to_string(),
                    source: e,
                })?;
                info!(path = %path, "removed obsolete generated file");
            }
            info!(dir = %output_dir.display(), files = files.len(), "wrote generated crate");
        }
        WriteMode::Check => {
            let mut paths = stale_files(output_dir, &files)?;
            paths.extend(obsolete_files(output_dir, &files)?);
            if !paths.is_empty() {
                return Err(GeneratorError::Stale { paths });
            }
            info!(dir = %output_dir.display(), "generated files are up to date");
        }
    }

    Ok(generation)
}
