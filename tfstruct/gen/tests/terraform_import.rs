//! Terraform schema import through to generated code.

use tempfile::TempDir;

use tfstruct_define::{FieldKind, ObjectRole};
use tfstruct_gen::errors::GeneratorError;
use tfstruct_gen::options::GenOptions;
use tfstruct_gen::output::{WriteMode, generate, generate_and_write};
use tfstruct_gen::parser::parse_provider_schema;

const SCHEMA: &str = include_str!("fixtures/databricks_schema.json");

#[test]
fn fixture_imports_every_schema() {
    let corpus = parse_provider_schema(SCHEMA, Some("databricks")).unwrap();

    assert_eq!(corpus.provider, "databricks");
    assert!(corpus.provider_definition().is_some());

    let resources: Vec<_> = corpus.resources().map(|d| d.type_name.as_str()).collect();
    assert_eq!(resources, ["Job", "SecretScope"]);

    let data_sources: Vec<_> = corpus.data_sources().map(|d| d.type_name.as_str()).collect();
    assert_eq!(data_sources, ["NodeType", "Tables"]);
}

#[test]
fn job_blocks_map_to_objects_and_lists() {
    let corpus = parse_provider_schema(SCHEMA, None).unwrap();
    let job = corpus.resources().next().unwrap();

    let email = job.field_by_wire_key("email_notifications").unwrap();
    assert_eq!(email.kind, FieldKind::Object);

    let task = job.field_by_wire_key("task").unwrap();
    assert_eq!(task.kind, FieldKind::ObjectList);

    let tags = job.field_by_wire_key("tags").unwrap();
    assert!(tags.kind.is_string_map());

    let url = job.field_by_wire_key("url").unwrap();
    assert!(url.computed);
    assert!(!url.required);

    let names: Vec<_> = job.walk().into_iter().map(|d| d.type_name.as_str()).collect();
    assert_eq!(
        names,
        ["Job", "EmailNotifications", "NewCluster", "Autoscale", "Task", "TaskNewCluster"]
    );
}

#[test]
fn imported_corpus_generates_completely() {
    let corpus = parse_provider_schema(SCHEMA, None).unwrap();
    let generation = generate(&corpus, &GenOptions::default()).unwrap();

    assert!(generation.is_complete(), "{:?}", generation.failures());

    let job = &generation.find(ObjectRole::Resource, "Job").unwrap().source;
    assert!(job.contains("pub email_notifications: Option<EmailNotifications>,"));
    assert!(job.contains("pub task: Vec<Task>,"));
    assert!(job.contains("pub new_cluster: Option<TaskNewCluster>,"));
    assert!(job.contains("pub max_concurrent_runs: f64,"));

    let scope = &generation.find(ObjectRole::Resource, "SecretScope").unwrap().source;
    assert!(scope.contains("pub name: String,"));
    assert!(scope.contains("#[serde(rename = \"name\")]"));

    let node_type = &generation.find(ObjectRole::DataSource, "NodeType").unwrap().source;
    assert!(node_type.contains("pub local_disk: bool,"));
    assert!(node_type.contains("pub gb_per_core: f64,"));
}

#[test]
fn imported_crate_writes_and_checks_clean() {
    let corpus = parse_provider_schema(SCHEMA, None).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let options = GenOptions::default();

    generate_and_write(&corpus, temp_dir.path(), &options, WriteMode::Write).unwrap();
    generate_and_write(&corpus, temp_dir.path(), &options, WriteMode::Check).unwrap();

    assert!(temp_dir.path().join("resources/secret_scope.rs").exists());
    assert!(temp_dir.path().join("data_sources/node_type.rs").exists());
}

#[test]
fn unmapped_terraform_type_fails_only_its_resource() {
    let schema = SCHEMA.replace(
        r#""backend_type": { "type": "string""#,
        r#""backend_type": { "type": ["tuple", ["string", "number"]]"#,
    );
    assert_ne!(schema, SCHEMA);

    let corpus = parse_provider_schema(&schema, None).unwrap();
    let generation = generate(&corpus, &GenOptions::default()).unwrap();

    assert_eq!(generation.failures().len(), 1);
    assert!(generation.find(ObjectRole::Resource, "Job").is_some());
    assert!(generation.find(ObjectRole::Resource, "SecretScope").is_none());

    match &generation.failures()[0] {
        GeneratorError::UnsupportedKind { type_name, field, .. } => {
            assert_eq!(type_name, "SecretScope");
            assert_eq!(field, "backend_type");
        }
        other => panic!("unexpected failure: {other:?}"),
    }
}
