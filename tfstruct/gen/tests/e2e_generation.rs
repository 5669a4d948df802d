//! End-to-end tests: generate code and verify it compiles.
//!
//! These tests exercise the full pipeline from corpus definition to compiled
//! code. The ignored ones are slower since they invoke cargo on the output.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use tfstruct_define::{FieldDescriptor, ObjectDefinition, ObjectRole, SchemaCorpus};
use tfstruct_definitions::databricks::define_databricks_corpus;
use tfstruct_gen::cargo_gen::write_cargo_toml;
use tfstruct_gen::options::{GenOptions, OptionalStyle};
use tfstruct_gen::output::{WriteMode, generate, generate_and_write};
use tfstruct_gen::parser::parse_provider_schema;

/// Generates the built-in corpus into `<temp>/schema` and returns the crate dir.
fn generate_crate(temp_dir: &TempDir, options: &GenOptions) -> std::path::PathBuf {
    let schema_dir = temp_dir.path().join("schema");
    let src_dir = schema_dir.join("src");

    let corpus = define_databricks_corpus();
    generate_and_write(&corpus, &src_dir, options, WriteMode::Write)
        .expect("Failed to generate code");
    write_cargo_toml(&schema_dir, options, WriteMode::Write).expect("Failed to write Cargo.toml");

    schema_dir
}

/// Writes `corpus` as a crate into `<temp>/<provider>` with `test` as
/// `tests/scenario.rs`, and returns the crate dir.
fn write_crate_with_test(
    temp_dir: &TempDir,
    corpus: &SchemaCorpus,
    options: &GenOptions,
    test: &str,
) -> std::path::PathBuf {
    let crate_dir = temp_dir.path().join(&corpus.provider);
    generate_and_write(corpus, &crate_dir.join("src"), options, WriteMode::Write)
        .expect("Failed to generate code");
    write_cargo_toml(&crate_dir, options, WriteMode::Write).expect("Failed to write Cargo.toml");

    fs::create_dir_all(crate_dir.join("tests")).unwrap();
    fs::write(crate_dir.join("tests/scenario.rs"), test).unwrap();
    crate_dir
}

fn run_cargo(schema_dir: &Path, args: &[&str], extra: &[&str]) {
    let output = Command::new("cargo")
        .args(args)
        .arg("--manifest-path")
        .arg(schema_dir.join("Cargo.toml"))
        .args(extra)
        .output()
        .expect("Failed to run cargo");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "cargo {} failed on generated code:\n\nSTDOUT:\n{}\n\nSTDERR:\n{}",
            args.join(" "),
            stdout,
            stderr
        );
    }
}

/// Tests that generated code compiles successfully in both optional styles.
#[test]
#[ignore = "slow: compiles generated code"]
fn generated_code_compiles() {
    for style in [OptionalStyle::OmitZero, OptionalStyle::Presence] {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let options = GenOptions::default().with_optional_style(style);
        let schema_dir = generate_crate(&temp_dir, &options);
        run_cargo(&schema_dir, &["check"], &[]);
    }
}

/// Tests that generated code has no clippy warnings.
#[test]
#[ignore = "slow: runs clippy on generated code"]
fn generated_code_passes_clippy() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let schema_dir = generate_crate(&temp_dir, &GenOptions::default());
    run_cargo(&schema_dir, &["clippy"], &["--", "-D", "warnings"]);
}

/// Runs the round-trip examples embedded in each generated module's docs.
#[test]
#[ignore = "slow: runs doc tests of generated code"]
fn generated_doc_examples_pass() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let schema_dir = generate_crate(&temp_dir, &GenOptions::default());
    run_cargo(&schema_dir, &["test", "--doc"], &[]);
}

/// A required `name` and an optional `count`: `count` is left out at zero.
#[test]
#[ignore = "slow: runs tests of generated code"]
fn record_scenario_serializes_as_documented() {
    let corpus = SchemaCorpus::new("acme").with_definition(
        ObjectDefinition::resource("acme_record", "Record")
            .field(FieldDescriptor::string("name").required())
            .field(FieldDescriptor::integer("count")),
    );
    let options = GenOptions::default().with_crate_name("acme-types");

    let test = r##"
use acme_types::resources::record::Record;

#[test]
fn zero_count_is_omitted() {
    let record = Record { name: "x".to_string(), count: 0 };
    assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"name":"x"}"#);
}

#[test]
fn set_count_is_written() {
    let record = Record { name: "x".to_string(), count: 5 };
    assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"name":"x","count":5}"#);
}

#[test]
fn empty_name_is_still_written() {
    let record = Record::default();
    assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"name":""}"#);
}
"##;
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let crate_dir = write_crate_with_test(&temp_dir, &corpus, &options, test);
    run_cargo(&crate_dir, &["test"], &[]);
}

/// Blocks named `option` and `value` would shadow `Option` and `Value`
/// inside their module; the imported types must still compile, and
/// Terraform numbers must accept fractions.
#[test]
#[ignore = "slow: runs tests of generated code"]
fn imported_schema_with_std_named_blocks_compiles() {
    let schema = r#"{
      "format_version": "1.0",
      "provider_schemas": {
        "registry.terraform.io/acme/acme": {
          "resource_schemas": {
            "acme_option_group": {
              "version": 0,
              "block": {
                "attributes": {
                  "name": { "type": "string", "required": true },
                  "max_price": { "type": "number", "optional": true },
                  "spec": { "type": "dynamic", "optional": true }
                },
                "block_types": {
                  "option": {
                    "nesting_mode": "set",
                    "block": {
                      "attributes": {
                        "option_name": { "type": "string", "required": true },
                        "port": { "type": "number", "optional": true }
                      },
                      "block_types": {
                        "value": {
                          "nesting_mode": "single",
                          "block": {
                            "attributes": { "text": { "type": "string", "optional": true } }
                          }
                        }
                      }
                    }
                  },
                  "settings": {
                    "nesting_mode": "single",
                    "block": {
                      "attributes": { "apply_immediately": { "type": "bool", "optional": true } }
                    }
                  }
                }
              }
            },
            "acme_mod": { "version": 0, "block": {} }
          }
        }
      }
    }"#;
    let corpus = parse_provider_schema(schema, None).expect("schema parses");
    let options = GenOptions::default().with_crate_name("acme-types");

    let test = r##"
use acme_types::resources::option_group::{OptionGroup, OptionGroupOption, Settings};

#[test]
fn std_named_blocks_round_trip() {
    let group = OptionGroup {
        name: "cache".to_string(),
        option: vec![OptionGroupOption {
            option_name: "MEMCACHED".to_string(),
            port: 11211.0,
            ..Default::default()
        }],
        settings: Some(Settings { apply_immediately: true }),
        ..Default::default()
    };

    let json = serde_json::to_string(&group).unwrap();
    let back: OptionGroup = serde_json::from_str(&json).unwrap();
    assert_eq!(back, group);
}

#[test]
fn fractional_numbers_decode() {
    let group: OptionGroup =
        serde_json::from_str(r#"{"name":"cache","max_price":0.5}"#).unwrap();
    assert_eq!(group.max_price, 0.5);
}

#[test]
fn reserved_resource_name_is_prefixed() {
    let _ = acme_types::resources::acme_mod::AcmeMod::default();
}
"##;
    for style in [OptionalStyle::OmitZero, OptionalStyle::Presence] {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let options = options.clone().with_optional_style(style);
        let crate_dir = write_crate_with_test(&temp_dir, &corpus, &options, test);
        match style {
            OptionalStyle::OmitZero => run_cargo(&crate_dir, &["test"], &[]),
            OptionalStyle::Presence => run_cargo(&crate_dir, &["check"], &[]),
        }
    }
}

/// In presence style a dynamic field is a plain `Value`, so `null` and a set
/// value both survive a round trip.
#[test]
#[ignore = "slow: runs tests of generated code"]
fn presence_style_dynamic_round_trips() {
    let corpus = SchemaCorpus::new("acme").with_definition(
        ObjectDefinition::resource("acme_policy", "Policy")
            .field(FieldDescriptor::string("name").required())
            .field(FieldDescriptor::dynamic("spec")),
    );
    let options = GenOptions::default()
        .with_crate_name("acme-types")
        .with_optional_style(OptionalStyle::Presence);

    let test = r##"
use acme_types::resources::policy::Policy;
use serde_json::{Value, json};

#[test]
fn null_spec_round_trips() {
    let policy = Policy { name: "p".to_string(), spec: Value::Null };
    let json = serde_json::to_string(&policy).unwrap();
    assert_eq!(json, r#"{"name":"p"}"#);

    let back: Policy = serde_json::from_str(&json).unwrap();
    assert_eq!(back, policy);

    let explicit: Policy = serde_json::from_str(r#"{"name":"p","spec":null}"#).unwrap();
    assert_eq!(explicit, policy);
}

#[test]
fn set_spec_round_trips() {
    let policy = Policy { name: "p".to_string(), spec: json!({ "max": 3 }) };
    let back: Policy = serde_json::from_str(&serde_json::to_string(&policy).unwrap()).unwrap();
    assert_eq!(back, policy);
}
"##;
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let crate_dir = write_crate_with_test(&temp_dir, &corpus, &options, test);
    run_cargo(&crate_dir, &["test"], &[]);
}

/// Verifies the generated files exist and have expected content.
#[test]
fn generated_files_exist_and_have_expected_structure() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let schema_dir = generate_crate(&temp_dir, &GenOptions::default());
    let src_dir = schema_dir.join("src");

    for path in [
        "lib.rs",
        "shared.rs",
        "provider.rs",
        "root.rs",
        "resources/mod.rs",
        "resources/cluster.rs",
        "resources/sql_endpoint.rs",
        "resources/catalog.rs",
        "resources/storage_credential.rs",
        "resources/cluster_policy.rs",
        "data_sources/mod.rs",
        "data_sources/cluster.rs",
        "data_sources/current_user.rs",
    ] {
        assert!(src_dir.join(path).exists(), "{path} should exist");
    }

    let cargo_content = fs::read_to_string(schema_dir.join("Cargo.toml"))
        .expect("Failed to read Cargo.toml");
    assert!(cargo_content.contains("tfstruct-schema"));
    assert!(cargo_content.contains("edition = \"2024\""));

    let lib_content =
        fs::read_to_string(src_dir.join("lib.rs")).expect("Failed to read lib.rs");
    assert!(lib_content.contains("//!"));
    assert!(lib_content.contains("pub mod resources;"));
    assert!(lib_content.contains("pub use root::Root;"));

    let cluster = fs::read_to_string(src_dir.join("resources/cluster.rs"))
        .expect("Failed to read cluster.rs");
    assert!(cluster.contains("pub struct Cluster {"));
    assert!(cluster.contains("pub struct Autoscale {"));
    assert!(cluster.contains("pub autoscale: Option<Autoscale>,"));
    assert!(cluster.contains("pub library: Vec<Library>,"));
    assert!(cluster.contains("pub custom_tags: BTreeMap<String, String>,"));
    assert!(cluster.contains("use std::collections::BTreeMap;"));

    let resources = fs::read_to_string(src_dir.join("resources/mod.rs"))
        .expect("Failed to read resources/mod.rs");
    assert!(resources.contains("pub struct Resources {"));
    assert!(resources.contains("rename = \"databricks_sql_endpoint\""));
}

/// Resource and data source modules may reuse type names without clashing.
#[test]
fn same_named_types_live_in_separate_modules() {
    let generation = generate(&define_databricks_corpus(), &GenOptions::default()).unwrap();

    let resource = generation.find(ObjectRole::Resource, "Cluster").unwrap();
    let data = generation.find(ObjectRole::DataSource, "Cluster").unwrap();
    assert_eq!(resource.path, "resources/cluster.rs");
    assert_eq!(data.path, "data_sources/cluster.rs");
    assert!(data.source.contains("pub struct ClusterInfo"));
}

#[test]
fn presence_style_changes_only_optional_fields() {
    let options = GenOptions::default().with_optional_style(OptionalStyle::Presence);
    let generation = generate(&define_databricks_corpus(), &options).unwrap();
    let cluster = &generation.find(ObjectRole::Resource, "Cluster").unwrap().source;

    assert!(cluster.contains("pub spark_version: String,"));
    assert!(cluster.contains("pub num_workers: Option<i64>,"));
    assert!(cluster.contains("pub custom_tags: Option<BTreeMap<String, String>>,"));
    assert!(!cluster.contains("crate::shared::is_zero"));
}

#[test]
fn builtin_generation_is_deterministic() {
    let options = GenOptions::default();
    let first = generate(&define_databricks_corpus(), &options).unwrap().files();
    let second = generate(&define_databricks_corpus(), &options).unwrap().files();
    assert_eq!(first, second);
}

/// A corpus stored as JSON generates exactly what the in-code corpus does.
#[test]
fn corpus_json_generates_identical_output() {
    let corpus = define_databricks_corpus();
    let json = serde_json::to_string_pretty(&corpus).unwrap();
    let loaded: SchemaCorpus = serde_json::from_str(&json).unwrap();

    let options = GenOptions::default();
    assert_eq!(
        generate(&corpus, &options).unwrap().files(),
        generate(&loaded, &options).unwrap().files()
    );
}

/// The checked-in `tfstruct-schema` crate is exactly what the generator
/// produces for the built-in corpus.
#[test]
fn checked_in_schema_crate_is_current() {
    let schema_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../schema");
    let options = GenOptions::default();

    generate_and_write(
        &define_databricks_corpus(),
        &schema_dir.join("src"),
        &options,
        WriteMode::Check,
    )
    .expect("tfstruct/schema/src is out of date; run tfstruct-gen --builtin databricks");
    write_cargo_toml(&schema_dir, &options, WriteMode::Check)
        .expect("tfstruct/schema/Cargo.toml is out of date");
}

#[test]
fn check_mode_detects_drift_in_written_crate() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let options = GenOptions::default();
    let schema_dir = generate_crate(&temp_dir, &options);
    let src_dir = schema_dir.join("src");
    let corpus = define_databricks_corpus();

    generate_and_write(&corpus, &src_dir, &options, WriteMode::Check)
        .expect("fresh output is current");
    write_cargo_toml(&schema_dir, &options, WriteMode::Check).expect("fresh Cargo.toml is current");

    let presence = options.clone().with_optional_style(OptionalStyle::Presence);
    let err = generate_and_write(&corpus, &src_dir, &presence, WriteMode::Check).unwrap_err();
    assert!(err.to_string().contains("resources/cluster.rs"));
}
