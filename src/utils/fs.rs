//! File system helpers for writing installed files.
//!
//! Directory creation is recursive and idempotent. Individual file writes go
//! through a uniquely named temporary file and a rename, so a reader never observes a
//! half-written component file. Writes across several files are not
//! transactional.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;

/// Create `path` and any missing parents.
///
/// # Examples
///
/// ```rust,no_run
/// use dfl_components_cli::utils::fs::ensure_dir;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// ensure_dir(Path::new("src/components/dfl"))?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the directory cannot be created, or if `path` exists
/// and is not a directory.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).with_context(|| {
            format!(
                "Failed to create directory: {}\n\nCheck directory permissions and path validity",
                path.display()
            )
        })?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Writes content to a uniquely named temporary file in the target's directory
/// 2. Syncs the temporary file to disk
/// 3. Persists it over the target
///
/// Parent directories are created as needed. The temporary name never
/// collides with an existing file, so neighbours of the target are left alone.
///
/// # Errors
///
/// Returns an error if any step fails; the temporary file is removed when
/// the write does not complete.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = NamedTempFile::new_in(parent).with_context(|| {
        format!(
            "Failed to create temp file in: {}\n\nCheck file permissions and that directory exists",
            parent.display()
        )
    })?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write to temp file: {}", temp.path().display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

/// Atomically writes a string to a file. See [`atomic_write`].
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Display `path` relative to `base` when it lies inside it.
#[must_use]
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}
