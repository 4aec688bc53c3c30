//! End-to-end generation runs over real descriptor trees.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use apigen_adapters::{
    DescriptorScanner, DialectStrategyFactory, LocalFilesystem, MemoryFilesystem,
    SimpleRenderer, StaticEnvironment,
    strategy::{DefaultStrategy, StrategyPorts},
};
use apigen_core::{
    application::{GenerationError, GenerationService, ports::*},
    domain::{BundleConfig, ConfigValidator, ResourceDescriptor, StrategyKind},
    error::{RunError, RunResult},
};
use tempfile::TempDir;

const PETS: &str = r#"
controller: PetResource
path: /pets
description: Everything about pets
tags: [pets]
operations:
  - method: GET
    summary: List pets
    operation_id: listPets
    responses:
      "200":
        description: ok
        schema: { type: array, items: { ref: Pet } }
  - method: GET
    path: "{id}"
    summary: Find pet
    parameters:
      - { name: id, in: path, required: true, type: integer, format: int64 }
    responses:
      "200": { description: ok, schema: { ref: Pet } }
definitions:
  Pet:
    properties:
      id: { type: integer }
      price: { ref: Money }
  Money:
    description: minor units
"#;

const CONTROLLER: &str = r#"{
  "controller": "com.example.web.OrderController",
  "mapping": "/orders",
  "operations": [
    { "mapping": "/{id}", "methods": ["GET", "DELETE"], "operationId": "order" },
    { "methods": ["POST"] }
  ]
}"#;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/com/example/pets/PetResource.api.yaml", PETS);
    write(temp.path(), "src/com/example/web/OrderController.api.json", CONTROLLER);
    write(temp.path(), "overrides.txt", "# money is a string on the wire\nMoney : java.lang.String\n");
    write(temp.path(), "doc.tmpl", "# {{TITLE}} {{VERSION}}\n{{ENDPOINTS}}\n({{ENDPOINT_COUNT}} endpoints under {{BASE_PATH}})\n");
    temp
}

fn service(root: &Path) -> GenerationService {
    let filesystem = Arc::new(LocalFilesystem::new());
    GenerationService::new(
        Box::new(StaticEnvironment::new().with_library("swagger-core", "1.5.10")),
        Box::new(LocalFilesystem::new()),
        Box::new(DialectStrategyFactory::new(
            Arc::new(DescriptorScanner::new(root.join("src"))),
            filesystem,
            Arc::new(SimpleRenderer::new()),
        )),
    )
}

fn bundles(yaml: &str) -> Vec<Option<BundleConfig>> {
    serde_yaml::from_str(yaml).unwrap()
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn generic_bundle_writes_document_and_docs() {
    let temp = workspace();
    let root = temp.path().display();
    let config = bundles(&format!(
        r#"
- info: {{ title: Petstore, version: "1.0.0" }}
  base_path: /v1
  publish_base_path_override: /public
  output_path: {root}/site/docs/index.md
  template_path: {root}/doc.tmpl
  model_substitute: {root}/overrides.txt
  output_formats: [json, yaml]
  locations: [com.example.pets]
"#
    ));

    let summary = service(temp.path()).run(Some(&config)).unwrap();
    assert_eq!(summary.bundles[0].strategy, StrategyKind::Default);

    let docs = temp.path().join("site/docs");
    let json = read_json(&docs.join("swagger.json"));
    assert_eq!(json["swagger"], "2.0");
    assert_eq!(json["basePath"], "/public");
    assert_eq!(json["tags"][0]["description"], "Everything about pets");
    assert_eq!(
        json["paths"]["/pets"]["get"]["responses"]["200"]["schema"]["items"]["$ref"],
        "#/definitions/Pet"
    );
    assert_eq!(json["paths"]["/pets/{id}"]["get"]["parameters"][0]["in"], "path");
    assert_eq!(
        json["definitions"]["Pet"]["properties"]["price"]["$ref"],
        "#/definitions/java.lang.String"
    );
    assert!(docs.join("swagger.yaml").is_file());

    let rendered = fs::read_to_string(docs.join("index.md")).unwrap();
    assert!(rendered.starts_with("# Petstore 1.0.0"));
    assert!(rendered.contains("GET /pets - List pets"));
    assert!(rendered.contains("(2 endpoints under /v1)"));
}

#[test]
fn framework_bundle_expands_methods() {
    let temp = workspace();
    let root = temp.path().display();
    let config = bundles(&format!(
        r#"
- info: {{ title: Orders, version: "2.0" }}
  swagger_directory: {root}/out
  locations: [com.example.web.OrderController]
  dialect: framework-specific
"#
    ));

    service(temp.path()).run(Some(&config)).unwrap();

    let json = read_json(&temp.path().join("out/swagger.json"));
    assert_eq!(json["basePath"], "/");
    let item = &json["paths"]["/orders/{id}"];
    assert_eq!(item["get"]["operationId"], "order_get");
    assert_eq!(item["delete"]["operationId"], "order_delete");
    assert_eq!(json["paths"]["/orders"]["post"]["tags"][0], "OrderController");
}

#[test]
fn duplicate_operation_fails_the_run() {
    let temp = workspace();
    write(
        temp.path(),
        "src/com/example/pets/Copy.api.yaml",
        "path: /pets\noperations:\n  - method: get\n",
    );
    let root = temp.path().display();
    let config = bundles(&format!(
        r#"
- info: {{ title: Petstore, version: "1.0.0" }}
  swagger_directory: {root}/out
  locations: [com.example.pets]
"#
    ));

    let err = service(temp.path()).run(Some(&config)).unwrap_err();
    assert!(matches!(
        err,
        RunError::Generation(GenerationError::DuplicateOperation { .. })
    ));
    assert!(err.to_string().contains("GET /pets"));
    assert!(!temp.path().join("out/swagger.json").exists());
}

#[test]
fn template_without_output_path_is_a_generation_error() {
    let temp = workspace();
    let root = temp.path().display();
    let config = bundles(&format!(
        r#"
- info: {{ title: Petstore, version: "1.0.0" }}
  template_path: {root}/doc.tmpl
  swagger_directory: {root}/out
  locations: [com.example.pets]
"#
    ));

    let err = service(temp.path()).run(Some(&config)).unwrap_err();
    assert!(matches!(
        err,
        RunError::Generation(GenerationError::Rendering { .. })
    ));
}

#[test]
fn missing_location_aborts_before_later_bundles() {
    let temp = workspace();
    let root = temp.path().display();
    let config = bundles(&format!(
        r#"
- info: {{ title: Broken, version: "1" }}
  swagger_directory: {root}/broken
  locations: [com.example.nowhere]
- info: {{ title: Petstore, version: "1" }}
  swagger_directory: {root}/pets
  locations: [com.example.pets]
"#
    ));

    let err = service(temp.path()).run(Some(&config)).unwrap_err();
    assert!(err.to_string().contains("com.example.nowhere"));
    assert!(!temp.path().join("pets").exists());
}

// ── In-memory stage checks ──────────────────────────────────────────────────

struct NoResources;

impl SourceScanner for NoResources {
    fn scan(&self, _locations: &[String]) -> RunResult<Vec<ResourceDescriptor>> {
        Ok(Vec::new())
    }
}

fn memory_strategy(fs: &MemoryFilesystem, yaml: &str) -> DefaultStrategy {
    let config: BundleConfig = serde_yaml::from_str(yaml).unwrap();
    DefaultStrategy::new(
        ConfigValidator::validate(Some(&config)).unwrap(),
        StrategyPorts {
            scanner: Arc::new(NoResources),
            filesystem: Arc::new(fs.clone()),
            renderer: Arc::new(SimpleRenderer::new()),
        },
    )
}

#[test]
fn emission_before_loading_is_rejected() {
    let fs = MemoryFilesystem::new();
    let mut strategy = memory_strategy(
        &fs,
        "info: { title: T, version: '1' }\nlocations: [a]\n",
    );

    let err = strategy.emit_specification("/").unwrap_err();
    assert!(matches!(
        err,
        RunError::Generation(GenerationError::StageOrder { .. })
    ));
    assert!(fs.list_files().is_empty());
}

#[test]
fn bad_override_file_names_the_line() {
    let fs = MemoryFilesystem::new();
    fs.insert_file("subst.txt", "Money : String\nnot a pair\n");
    let mut strategy = memory_strategy(
        &fs,
        "info: { title: T, version: '1' }\nlocations: [a]\nmodel_substitute: subst.txt\n",
    );

    let err = strategy.load_overriding_models().unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn empty_model_still_emits_a_document() {
    let fs = MemoryFilesystem::new();
    let mut strategy = memory_strategy(
        &fs,
        "info: { title: T, version: '1' }\nlocations: [a]\nswagger_directory: out\nswagger_file_name: api\n",
    );

    strategy.load_overriding_models().unwrap();
    strategy.load_documents().unwrap();
    strategy.emit_specification("/v9").unwrap();

    let text = fs.read_file(Path::new("out/api.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["basePath"], "/v9");
    assert_eq!(json["paths"], serde_json::json!({}));
}
