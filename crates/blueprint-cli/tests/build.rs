use blueprint_cli::{resolve_to_json, BlueprintCli, Config};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::{fs, path::Path};
use std_util::prelude::*;

fn schema() -> Value {
    json!({
        "tables": [
            { "id": "t1", "name": "users", "timeStamp": true },
            { "id": "t2", "name": "posts", "softDelete": true },
            { "id": "t3", "name": "categories" }
        ],
        "columns": {
            "t1": [
                { "id": "c1", "name": "id", "type": "integer", "autoInc": true },
                { "id": "c2", "name": "email", "type": "string", "length": 120, "unique": true }
            ],
            "t2": [
                { "id": "c3", "name": "id", "type": "integer", "autoInc": true },
                { "id": "c4", "name": "title", "type": "char", "length": 80 },
                {
                    "id": "c5", "name": "author_id", "type": "integer",
                    "foreignKey": { "references": { "id": "c1", "name": "id" }, "on": { "id": "t1", "name": "users" } }
                },
                {
                    "id": "c6", "name": "editor_id", "type": "integer", "nullable": true,
                    "foreignKey": { "references": { "id": "c1", "name": "id" }, "on": { "id": "t1", "name": "users" } }
                }
            ],
            "t3": [
                { "id": "c7", "name": "id", "type": "integer", "autoInc": true },
                { "id": "c8", "name": "parent_id", "type": "integer", "nullable": true }
            ]
        },
        "relations": [
            { "source": { "tableId": "t2", "columnId": "c5" }, "target": { "tableId": "t1", "columnId": "c1" } },
            { "source": { "tableId": "t2", "columnId": "c6" }, "target": { "tableId": "t1", "columnId": "c1" } },
            { "source": { "tableId": "t3", "columnId": "c8" }, "target": { "tableId": "t3", "columnId": "c7" } }
        ]
    })
}

/// Writes the schema and an empty config file into `dir`.
fn setup(dir: &Path) -> (String, String) {
    let schema_path = dir.join("schema.json");
    fs::write(&schema_path, schema().to_string()).unwrap();

    let config_path = dir.join("Blueprint.toml");
    fs::write(&config_path, "").unwrap();

    (
        schema_path.display().to_string(),
        config_path.display().to_string(),
    )
}

fn read_json(path: impl AsRef<Path>) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn build_writes_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let (schema, config) = setup(dir.path());
    let out = dir.path().join("database");

    assert_ok!(BlueprintCli::new().parse_from([
        "blueprint",
        "build",
        &schema,
        "--config",
        &config,
        "--out",
        out.to_str().unwrap(),
    ]));

    for table in ["users", "posts", "categories"] {
        assert!(out.join("migrations").join(format!("{table}.json")).is_file());
    }

    let posts = read_json(out.join("migrations/posts.json"));
    assert_eq!(posts["name"], "posts");
    assert_eq!(posts["softDelete"], true);
    assert_eq!(posts["columns"][1]["dsl"], "table.string('title', 80).notNullable()");

    let factories = read_json(out.join("factory.json"));
    assert_eq!(factories.as_array().unwrap().len(), 3);

    let post = read_json(out.join("models/Post.json"));
    let relations: Vec<_> = post["relations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|rel| rel["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(relations, ["user", "user2"]);
}

#[test]
fn build_with_yes_replaces_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let (schema, config) = setup(dir.path());
    let out = dir.path().join("database");

    fs::create_dir_all(out.join("migrations")).unwrap();
    fs::write(out.join("migrations/stale.json"), "{}").unwrap();
    fs::write(out.join("factory.json"), "[]").unwrap();

    assert_ok!(BlueprintCli::new().parse_from([
        "blueprint",
        "build",
        &schema,
        "--config",
        &config,
        "--out",
        out.to_str().unwrap(),
        "--yes",
    ]));

    assert!(!out.join("migrations/stale.json").exists());
    assert!(out.join("migrations/users.json").is_file());
    assert_eq!(read_json(out.join("factory.json")).as_array().unwrap().len(), 3);
}

#[test]
fn config_file_drives_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let (schema, _) = setup(dir.path());
    let out = dir.path().join("generated");

    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        format!(
            "schema = {schema:?}\noutput = {:?}\n",
            out.display().to_string()
        ),
    )
    .unwrap();

    assert_ok!(BlueprintCli::new().parse_from([
        "blueprint",
        "build",
        "--config",
        config_path.to_str().unwrap(),
    ]));

    assert!(out.join("models/User.json").is_file());
    assert!(out.join("models/Category.json").is_file());
}

#[test]
fn rejected_collision_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (schema, config) = setup(dir.path());
    let out = dir.path().join("database");

    let err = assert_err!(BlueprintCli::new().parse_from([
        "blueprint",
        "build",
        &schema,
        "--config",
        &config,
        "--out",
        out.to_str().unwrap(),
        "--on-collision",
        "reject",
    ]));

    assert!(format!("{err:#}").contains("relationship name `user` is already taken on table `posts`"));
    assert!(!out.exists());
}

#[test]
fn unreadable_schema_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let (_, config) = setup(dir.path());
    let missing = dir.path().join("missing.json");

    let err = assert_err!(BlueprintCli::new().parse_from([
        "blueprint",
        "build",
        missing.to_str().unwrap(),
        "--config",
        &config,
    ]));

    assert!(err.to_string().starts_with("failed to read"));
}

#[test]
fn inspect_renders_resolved_tables() {
    let dir = tempfile::tempdir().unwrap();
    let (schema, _) = setup(dir.path());

    let rendered = assert_ok!(resolve_to_json(Path::new(&schema), &Config::default()));
    let value: Value = serde_json::from_str(&rendered).unwrap();

    let tables = &value["tables"];
    assert_eq!(tables["posts"]["model"], "Post");
    assert_eq!(tables["categories"]["relations"]["parentCategory"]["type"], "belongsTo");
    assert_eq!(tables["users"]["relations"]["posts2"]["type"], "hasMany");
}
