//! End-to-end tests for the Modelsync CLI subcommands.
//!
//! Every test runs the binary inside its own temporary project directory.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const MANIFEST: &str = r#"
[[models]]
name = "post"
fields = [
  { name = "title", kind = "string" },
  { name = "body", kind = "text" },
  { name = "author", kind = "references" },
]
validators = [{ kind = "presence", attributes = ["title"] }]
associations = [{ name = "author", kind = "belongs_to", optional = false }]
"#;

/// Helper to run modelsync with arguments in `dir`
fn run_modelsync(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_modelsync"))
        .current_dir(dir)
        .env_remove("MODELSYNC_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute modelsync binary")
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let init = run_modelsync(dir.path(), &["init", "--minimal"]);
    assert!(init.status.success(), "init failed: {:?}", init);
    fs::write(dir.path().join("config/models.toml"), MANIFEST).unwrap();
    dir
}

fn definitions(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("app/javascript/types/models.d.ts")).unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let output = run_modelsync(dir.path(), &["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["model", "migration", "validations", "init", "info"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}

#[test]
fn test_model_from_attributes() {
    let dir = project();
    let output = run_modelsync(dir.path(), &["model", "blog_post", "title:string", "views:integer"]);
    assert!(output.status.success(), "{:?}", output);

    assert_eq!(
        definitions(&dir),
        "// AUTO-GENERATED for blog_post\ninterface BlogPost {\n  title?: string;\n  views?: number;\n}\n"
    );
}

#[test]
fn test_model_from_manifest_then_validations() {
    let dir = project();
    assert!(run_modelsync(dir.path(), &["model", "post"]).status.success());
    assert!(run_modelsync(dir.path(), &["validations", "post"]).status.success());

    assert_eq!(
        definitions(&dir),
        "// AUTO-GENERATED for post\ninterface Post {\n  title: string;\n  body?: string;\n  author_id: number;\n  author: Author;\n}\n"
    );
}

#[test]
fn test_migration_appends_at_end() {
    let dir = project();
    assert!(run_modelsync(dir.path(), &["model", "post", "title"]).status.success());
    let output = run_modelsync(
        dir.path(),
        &["migration", "AddCategoryToPosts", "category:references"],
    );
    assert!(output.status.success(), "{:?}", output);

    assert!(definitions(&dir).ends_with(
        "}\n// AUTO-GENERATED from migration AddCategoryToPosts\n  category_id: number;\n  category?: Category;\n"
    ));
}

#[test]
fn test_validations_for_unknown_model_fails() {
    let dir = project();
    assert!(run_modelsync(dir.path(), &["model", "post", "title"]).status.success());
    let before = definitions(&dir);

    let output = run_modelsync(dir.path(), &["validations", "ghost"]);
    assert!(!output.status.success());
    assert_eq!(definitions(&dir), before);
}

#[test]
fn test_validations_without_document_succeeds() {
    let dir = project();
    let output = run_modelsync(dir.path(), &["validations", "post"]);
    assert!(output.status.success(), "{:?}", output);
    assert!(!dir.path().join("app/javascript/types/models.d.ts").exists());
}

#[test]
fn test_invalid_attribute_fails() {
    let dir = project();
    let output = run_modelsync(dir.path(), &["model", "post", "title:string{"]);
    assert!(!output.status.success());
}

#[test]
fn test_output_override() {
    let dir = project();
    let output = run_modelsync(
        dir.path(),
        &["model", "user", "email", "--output", "web/types.d.ts"],
    );
    assert!(output.status.success(), "{:?}", output);
    assert!(dir.path().join("web/types.d.ts").is_file());
}

#[test]
fn test_info_json() {
    let dir = project();
    let output = run_modelsync(dir.path(), &["-q", "info", "--format", "json"]);
    assert!(output.status.success(), "{:?}", output);

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["models"][0]["interface"], "Post");
    assert_eq!(
        info["models"][0]["required"],
        serde_json::json!(["author", "author_id", "title"])
    );
    assert_eq!(info["document_exists"], false);
}

#[test]
fn test_validations_with_models_override() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("manifest.toml"), MANIFEST).unwrap();
    let output_path = dir.path().join("models.d.ts");
    fs::write(&output_path, "interface Post {\n  title?: string;\n}\n").unwrap();

    let output = run_modelsync(
        dir.path(),
        &["--models", "manifest.toml", "--output", "models.d.ts", "validations", "post"],
    );
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "interface Post {\n  title: string;\n}\n"
    );
}
