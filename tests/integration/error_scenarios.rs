use anyhow::Result;
use dfl_components_cli::registry::FilePayload;
use dfl_components_cli::test_utils::{entry, payload};
use predicates::prelude::*;

use crate::common::{FileAssert, TestProject, TestRegistry};

#[test]
fn test_add_without_config_fails() -> Result<()> {
    let project = TestProject::new()?;

    project
        .command()
        .args(["add", "button"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No dfl-components.json found"))
        .stderr(predicate::str::contains("dfl-components init"));
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let project = TestProject::new()?;
    project.create_file("dfl-components.json", "{ not json")?;

    project
        .run(&["add", "button"])?
        .assert_failure()
        .assert_stderr_contains("Invalid configuration file");
    Ok(())
}

#[test]
fn test_missing_registry_index_is_fatal() -> Result<()> {
    let project = TestProject::initialized()?;

    project
        .run(&["add", "button"])?
        .assert_failure()
        .assert_stderr_contains("registry.json");

    FileAssert::not_exists(project.project_path().join("src"));
    Ok(())
}

#[test]
fn test_no_names_without_terminal_fails() -> Result<()> {
    let project = TestProject::initialized()?;
    project.publish(&TestRegistry::new().item("button", "Components", &[]))?;

    project
        .run(&["add"])?
        .assert_failure()
        .assert_stderr_contains("No components specified");
    Ok(())
}

#[test]
fn test_failing_item_does_not_stop_others() -> Result<()> {
    let project = TestProject::initialized()?;
    project.publish(
        &TestRegistry::new()
            .item("card", "Components", &["badge"])
            .unpublished("badge", "Components")
            .item("use-toggle", "Hooks", &[]),
    )?;

    project
        .run(&["add", "card", "use-toggle"])?
        .assert_success()
        .assert_stdout_contains("Errors:")
        .assert_stdout_contains("badge: Failed to fetch");

    let root = project.project_path();
    FileAssert::exists(root.join("src/components/dfl/card.tsx"));
    FileAssert::exists(root.join("src/hooks/use-toggle.ts"));
    FileAssert::not_exists(root.join("src/components/dfl/badge.tsx"));
    Ok(())
}

#[test]
fn test_path_traversal_payload_rejected() -> Result<()> {
    let project = TestProject::initialized()?;
    let mut evil = payload("evil", &[("evil.tsx", "")]);
    evil.files.push(FilePayload {
        path: "../../../outside.txt".to_string(),
        content: "escaped".to_string(),
        ..Default::default()
    });
    project.publish(&TestRegistry::new().with_payload(entry("evil", "Components", &[]), evil))?;

    project
        .run(&["add", "evil"])?
        .assert_success()
        .assert_stdout_contains("Invalid payload for 'evil'");

    FileAssert::not_exists(project.project_path().join("src/components/dfl/evil.tsx"));
    FileAssert::not_exists(project.project_path().join("outside.txt"));
    Ok(())
}

#[test]
fn test_config_escaping_project_is_rejected() -> Result<()> {
    let project = TestProject::new()?;
    let config = serde_json::json!({
        "sourceRoot": "../outside",
        "aliases": { "hooks": "@/../../escaped" },
        "registry": project.registry_url()
    });
    project.create_file("dfl-components.json", &config.to_string())?;
    project.publish(&TestRegistry::new().item("use-x", "Hooks", &[]))?;

    project
        .run(&["add", "use-x"])?
        .assert_failure()
        .assert_stderr_contains("Invalid configuration file")
        .assert_stderr_contains("sourceRoot");

    FileAssert::not_exists(project.project_path().join("../outside"));
    Ok(())
}
