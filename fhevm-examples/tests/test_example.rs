mod common;

use common::{run_in, stderr, stdout, subdirs, write};

#[test]
fn generates_project_with_default_category() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "base-template/hardhat.config.ts", "export default {};\n");
    write(dir.path(), "base-template/package.json", "{\"name\":\"base\"}\n");

    let output = run_in(dir.path(), &["example", "counter"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let project = dir.path().join("examples/counter");
    assert_eq!(
        subdirs(&project),
        ["artifacts", "contracts", "scripts", "test"]
    );
    assert_eq!(
        std::fs::read_to_string(project.join("package.json")).unwrap(),
        "{\"name\":\"base\"}\n"
    );
    let readme = std::fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.contains("**Category**: basic"));
    assert!(stdout(&output).contains("Next steps:"));
}

#[test]
fn missing_templates_warn_and_continue() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["example", "vault", "advanced"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let project = dir.path().join("examples/vault");
    assert!(project.join("tsconfig.json").is_file());
    assert!(!project.join("hardhat.config.ts").exists());
    assert!(stderr(&output).contains("base template file not found"));
}

#[test]
fn require_templates_fails_with_config_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["example", "vault", "--require-templates"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("hardhat.config.ts"));
    assert!(!dir.path().join("examples").exists());
}

#[test]
fn no_name_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["example"]);
    assert_eq!(output.status.code(), Some(64));
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn path_like_name_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["example", "../escape"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("escape").exists());
}
