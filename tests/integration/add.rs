use anyhow::Result;
use dfl_components_cli::registry::FilePayload;
use dfl_components_cli::test_utils::{entry, payload};
use predicates::prelude::*;

use crate::common::{FileAssert, TestProject, TestRegistry};

fn ui_registry() -> TestRegistry {
    TestRegistry::new()
        .item("form", "Components", &["input", "use-form"])
        .item("input", "Components", &[])
        .item("use-form", "Hooks", &[])
        .item("theme", "Providers", &[])
        .item("dashboard", "Pages", &["theme"])
}

#[test]
fn test_add_installs_dependencies_by_category() -> Result<()> {
    let project = TestProject::initialized()?;
    project.publish(&ui_registry())?;

    project
        .run(&["add", "form"])?
        .assert_success()
        .assert_stdout_contains("Files created:")
        .assert_stdout_contains("src/components/dfl/form.tsx");

    let root = project.project_path();
    FileAssert::equals(root.join("src/components/dfl/form.tsx"), "// form\n");
    FileAssert::exists(root.join("src/components/dfl/input.tsx"));
    FileAssert::exists(root.join("src/hooks/use-form.ts"));
    FileAssert::not_exists(root.join("src/providers/theme.tsx"));
    Ok(())
}

#[test]
fn test_add_all() -> Result<()> {
    let project = TestProject::initialized()?;
    project.publish(&ui_registry())?;

    project.run(&["add", "--all"])?.assert_success();

    let root = project.project_path();
    FileAssert::exists(root.join("src/providers/theme.tsx"));
    FileAssert::exists(root.join("src/pages/dashboard.tsx"));
    FileAssert::exists(root.join("src/hooks/use-form.ts"));
    Ok(())
}

#[test]
fn test_add_from_subdirectory_uses_project_root() -> Result<()> {
    let project = TestProject::initialized()?;
    project.publish(&ui_registry())?;
    std::fs::create_dir_all(project.project_path().join("src/app"))?;

    project.run(&["add", "theme", "--cwd", "src/app"])?.assert_success();

    FileAssert::exists(project.project_path().join("src/providers/theme.tsx"));
    FileAssert::not_exists(project.project_path().join("src/app/src"));
    Ok(())
}

#[test]
fn test_existing_files_kept_with_yes() -> Result<()> {
    let project = TestProject::initialized()?;
    project.publish(&ui_registry())?;
    project.create_file("src/components/dfl/input.tsx", "my input")?;

    project
        .run(&["add", "input", "--yes"])?
        .assert_success()
        .assert_stdout_contains("Skipped:")
        .assert_stdout_contains("src/components/dfl/input.tsx (already exists)");

    FileAssert::equals(project.project_path().join("src/components/dfl/input.tsx"), "my input");
    Ok(())
}

#[test]
fn test_existing_files_kept_without_terminal() -> Result<()> {
    let project = TestProject::initialized()?;
    project.publish(&ui_registry())?;
    project.create_file("src/components/dfl/input.tsx", "my input")?;

    project
        .command()
        .args(["add", "input"])
        .assert()
        .success()
        .stderr(predicate::str::contains("--overwrite"));

    FileAssert::equals(project.project_path().join("src/components/dfl/input.tsx"), "my input");
    Ok(())
}

#[test]
fn test_overwrite_replaces_existing_files() -> Result<()> {
    let project = TestProject::initialized()?;
    project.publish(&ui_registry())?;
    project.create_file("src/components/dfl/input.tsx", "my input")?;

    project.run(&["add", "input", "--overwrite", "--yes"])?.assert_success();

    FileAssert::equals(project.project_path().join("src/components/dfl/input.tsx"), "// input\n");
    Ok(())
}

#[test]
fn test_explicit_target_and_custom_alias() -> Result<()> {
    let project = TestProject::new()?;
    let config = serde_json::json!({
        "aliases": { "pages": "@/views" },
        "registry": project.registry_url()
    });
    project.create_file("dfl-components.json", &config.to_string())?;

    let mut login = payload("login", &[("login.tsx", "page")]);
    login.files.push(FilePayload {
        path: "route.tsx".to_string(),
        target: Some("app/login/page.tsx".to_string()),
        content: "route".to_string(),
        ..Default::default()
    });
    project.publish(&TestRegistry::new().with_payload(entry("login", "Pages", &[]), login))?;

    project.run(&["add", "login"])?.assert_success();

    let root = project.project_path();
    FileAssert::equals(root.join("src/views/login.tsx"), "page");
    FileAssert::equals(root.join("src/app/login/page.tsx"), "route");
    Ok(())
}

#[test]
fn test_unknown_names_warn_and_continue() -> Result<()> {
    let project = TestProject::initialized()?;
    project.publish(&ui_registry())?;

    project
        .run(&["add", "input", "ghost"])?
        .assert_success()
        .assert_stderr_contains("Component 'ghost' not found in registry");

    FileAssert::exists(project.project_path().join("src/components/dfl/input.tsx"));
    Ok(())
}

#[test]
fn test_only_unknown_names_installs_nothing() -> Result<()> {
    let project = TestProject::initialized()?;
    project.publish(&ui_registry())?;

    project
        .run(&["add", "ghost"])?
        .assert_success()
        .assert_stdout_contains("No valid components to install.");

    FileAssert::not_exists(project.project_path().join("src"));
    Ok(())
}

#[test]
fn test_registry_flag_overrides_config() -> Result<()> {
    let project = TestProject::new()?;
    project.write_config("https://registry.invalid/unused")?;
    project.publish(&ui_registry())?;

    project
        .run(&["add", "theme", "--registry", &project.registry_url()])?
        .assert_success();

    FileAssert::exists(project.project_path().join("src/providers/theme.tsx"));
    Ok(())
}

#[test]
fn test_external_packages_are_listed() -> Result<()> {
    let project = TestProject::initialized()?;
    let mut chart = entry("chart", "Components", &[]);
    chart.dependencies = vec!["recharts".to_string()];
    project.publish(
        &TestRegistry::new().with_payload(chart, payload("chart", &[("chart.tsx", "")])),
    )?;

    project
        .run(&["add", "chart"])?
        .assert_success()
        .assert_stdout_contains("Install these packages: recharts");
    Ok(())
}
