use anyhow::Result;
use predicates::prelude::*;

use crate::common::{FileAssert, TestProject};

#[test]
fn test_init_writes_default_config() -> Result<()> {
    let project = TestProject::new()?;

    project.run(&["init", "--yes"])?.assert_success().assert_stdout_contains("Next steps:");

    let config_path = project.project_path().join("dfl-components.json");
    FileAssert::exists(&config_path);

    let config: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;
    assert_eq!(config["aliases"]["components"], "@/components/dfl");
    assert_eq!(config["aliases"]["hooks"], "@/hooks");
    assert_eq!(config["aliases"]["providers"], "@/providers");
    assert_eq!(config["aliases"]["pages"], "@/pages");
    assert_eq!(config["typescript"], true);
    Ok(())
}

#[test]
fn test_init_without_terminal_uses_defaults() -> Result<()> {
    let project = TestProject::new()?;

    project.run(&["init"])?.assert_success();

    FileAssert::exists(project.project_path().join("dfl-components.json"));
    Ok(())
}

#[test]
fn test_init_keeps_existing_config_without_force() -> Result<()> {
    let project = TestProject::new()?;
    project.create_file("dfl-components.json", "{\"registry\": \"custom\"}")?;

    project
        .command()
        .args(["init", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    FileAssert::equals(
        project.project_path().join("dfl-components.json"),
        "{\"registry\": \"custom\"}",
    );
    Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
    let project = TestProject::new()?;
    project.create_file("dfl-components.json", "{\"registry\": \"custom\"}")?;

    project.run(&["init", "--yes", "--force"])?.assert_success();

    let content = std::fs::read_to_string(project.project_path().join("dfl-components.json"))?;
    assert!(content.contains("\"components\": \"@/components/dfl\""));
    assert!(!content.contains("custom"));
    Ok(())
}

#[test]
fn test_init_with_cwd() -> Result<()> {
    let project = TestProject::new()?;

    project.run(&["init", "--yes", "--cwd", "apps/web"])?.assert_success();

    FileAssert::exists(project.project_path().join("apps/web/dfl-components.json"));
    Ok(())
}
