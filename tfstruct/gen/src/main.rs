//! tfstruct Code Generator
//!
//! Generates Rust configuration types from provider schema definitions.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};
use colored::Colorize;
use tfstruct_define::SchemaCorpus;
use tfstruct_definitions::databricks::define_databricks_corpus;
use tfstruct_gen::cargo_gen::write_cargo_toml;
use tfstruct_gen::errors::GeneratorError;
use tfstruct_gen::options::{GenOptions, OptionalStyle};
use tfstruct_gen::output::{WriteMode, generate_and_write};
use tfstruct_gen::parser::parse_provider_schema;
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// tfstruct code generator - transforms provider schemas into typed Rust structs
#[derive(Parser, Debug)]
#[command(name = "tfstruct-gen")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["builtin", "schema", "corpus"])))]
struct Cli {
    /// Built-in corpus to generate (e.g., "databricks")
    #[arg(long)]
    builtin: Option<String>,

    /// Path to `terraform providers schema -json` output
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Path to a corpus JSON file (serialized `SchemaCorpus`)
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Provider to import from a Terraform schema (source address or short name)
    #[arg(long, requires = "schema")]
    provider: Option<String>,

    /// Output directory for generated code (the crate's `src/`)
    #[arg(short, long, default_value = "tfstruct/schema/src")]
    output: PathBuf,

    /// Package name written to the generated Cargo.toml
    #[arg(long, default_value = tfstruct_gen::options::DEFAULT_CRATE_NAME)]
    crate_name: String,

    /// Represent optional fields as `Option<T>` instead of omitting zero values
    #[arg(long)]
    presence: bool,

    /// Print generated code without writing files
    #[arg(long, conflicts_with = "check")]
    dry_run: bool,

    /// Fail if generated files on disk are out of date; writes nothing
    #[arg(long)]
    check: bool,

    /// Do not generate Cargo.toml
    #[arg(long)]
    no_cargo: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing based on verbosity; `RUST_LOG` takes precedence.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,tfstruct_gen=info".to_string(),
            2 => "info,tfstruct_gen=debug".to_string(),
            _ => "debug,tfstruct_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn read_file(path: &Path) -> Result<String, GeneratorError> {
    fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    })
}

fn load_corpus(cli: &Cli) -> Result<SchemaCorpus, GeneratorError> {
    if let Some(name) = &cli.builtin {
        return match name.as_str() {
            "databricks" => Ok(define_databricks_corpus()),
            other => Err(GeneratorError::ConfigError(format!(
                "Unknown built-in corpus: '{}'. Available: databricks",
                other
            ))),
        };
    }

    if let Some(path) = &cli.schema {
        let json = read_file(path)?;
        return parse_provider_schema(&json, cli.provider.as_deref());
    }

    if let Some(path) = &cli.corpus {
        let json = read_file(path)?;
        return serde_json::from_str(&json).map_err(|e| {
            GeneratorError::ParseError(format!("{}: {}", path.display(), e))
        });
    }

    Err(GeneratorError::ConfigError(
        "No input given; use --builtin, --schema or --corpus".to_string(),
    ))
}

fn report_failures(err: &GeneratorError) {
    if let GeneratorError::Incomplete { failures } = err {
        for failure in failures {
            eprintln!("  {} {}", "✗".red(), failure);
        }
    }
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mode = if cli.check {
        WriteMode::Check
    } else if cli.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };

    let style = if cli.presence {
        OptionalStyle::Presence
    } else {
        OptionalStyle::OmitZero
    };
    let options = GenOptions::default()
        .with_optional_style(style)
        .with_crate_name(cli.crate_name.clone());

    let corpus = load_corpus(&cli)?;
    info!(
        provider = %corpus.provider,
        definitions = corpus.definitions.len(),
        output = %cli.output.display(),
        ?mode,
        "generating"
    );

    let generation =
        generate_and_write(&corpus, &cli.output, &options, mode).inspect_err(report_failures)?;

    for ty in generation.types() {
        debug!(type_name = %ty.type_name, role = %ty.role, path = %ty.path, "generated");
    }

    // Cargo.toml lives in the crate root, the parent of src/
    if !cli.no_cargo {
        let crate_dir = cli.output.parent().unwrap_or(Path::new("."));
        write_cargo_toml(crate_dir, &options, mode)?;
    }

    match mode {
        WriteMode::Write => eprintln!(
            "{} Generated {} types into {}",
            "✓".green(),
            generation.types().len(),
            cli.output.display()
        ),
        WriteMode::Check => eprintln!("{} {} is up to date", "✓".green(), cli.output.display()),
        WriteMode::DryRun => {}
    }

    Ok(())
}
