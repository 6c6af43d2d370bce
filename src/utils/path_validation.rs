//! Path validation for registry-supplied file paths.
//!
//! Item payloads come from a remote registry, so every `path` and `target`
//! they carry is checked before anything touches the filesystem: it must be
//! relative and must not climb out of the directory it is joined onto.

use anyhow::{Result, anyhow};
use std::path::{Component, Path};

/// Ensure `path` is relative and contains no `..`, root or prefix components.
///
/// # Examples
///
/// ```rust
/// use dfl_components_cli::utils::path_validation::validate_relative_path;
/// use std::path::Path;
///
/// assert!(validate_relative_path(Path::new("ui/button.tsx")).is_ok());
/// assert!(validate_relative_path(Path::new("../outside.tsx")).is_err());
/// assert!(validate_relative_path(Path::new("/etc/passwd")).is_err());
/// ```
///
/// # Errors
///
/// Returns an error naming the offending path when validation fails.
pub fn validate_relative_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(anyhow!("Path is empty"));
    }

    for component in path.components() {
        match component {
            Component::ParentDir => {
                return Err(anyhow!(
                    "Path contains parent directory reference (..): {}",
                    path.display()
                ));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(anyhow!("Path must be relative: {}", path.display()));
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }
    Ok(())
}
