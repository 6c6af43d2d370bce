//! Writing an item's files into the project.
//!
//! For each file the destination is either its explicit target under the
//! source root, or the category's alias directory joined with the file's
//! relative path. A destination that does not exist yet is always written.
//! An existing one is handled by the run's [`WritePolicy`]:
//!
//! | Policy | Existing file |
//! |---|---|
//! | [`WritePolicy::ForceOverwrite`] | overwritten |
//! | [`WritePolicy::AutoSkip`] | left alone, recorded as skipped |
//! | [`WritePolicy::AskPerFile`] | overwritten iff the [`ConfirmOverwrite`] answer is yes |
//!
//! Skipping is an outcome, not an error. Files are written one at a time; if
//! a write fails partway through an item, files already written for it stay
//! on disk and the error propagates to the caller.

use anyhow::{Context, Result};
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::context::InstallContext;
use crate::core::DflError;
use crate::registry::{FilePayload, ItemPayload};
use crate::utils::fs::atomic_write;

/// How to treat a destination file that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Always overwrite (`--overwrite`)
    ForceOverwrite,
    /// Never overwrite; accept-defaults mode (`--yes` without `--overwrite`)
    AutoSkip,
    /// Ask once per conflicting file
    AskPerFile,
}

impl WritePolicy {
    /// Policy selected by the `add` command flags. `--overwrite` wins over `--yes`.
    #[must_use]
    pub const fn from_flags(overwrite: bool, yes: bool) -> Self {
        if overwrite {
            Self::ForceOverwrite
        } else if yes {
            Self::AutoSkip
        } else {
            Self::AskPerFile
        }
    }
}

/// Answers "overwrite this existing file?" for [`WritePolicy::AskPerFile`].
///
/// The terminal prompt lives in the CLI; any `FnMut(&Path) -> bool` closure
/// also works, which is how tests script the answers.
pub trait ConfirmOverwrite {
    /// Decide for exactly one existing destination path.
    ///
    /// # Errors
    ///
    /// Implementations may fail if the answer cannot be obtained; the error
    /// aborts the run.
    fn confirm_overwrite(&mut self, path: &Path) -> impl Future<Output = Result<bool>> + Send;
}

impl<F> ConfirmOverwrite for F
where
    F: FnMut(&Path) -> bool,
{
    fn confirm_overwrite(&mut self, path: &Path) -> impl Future<Output = Result<bool>> + Send {
        std::future::ready(Ok(self(path)))
    }
}

/// Files written and skipped for one item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeOutcome {
    /// Absolute paths written, in payload order
    pub written: Vec<PathBuf>,
    /// Absolute paths left untouched because they already existed
    pub skipped: Vec<PathBuf>,
}

/// Absolute destination of `file` for an entry in `category`.
#[must_use]
pub fn target_path(file: &FilePayload, category: &str, ctx: &InstallContext<'_>) -> PathBuf {
    match &file.target {
        Some(target) => ctx.project_dir.join(ctx.mapper.explicit_target(target)),
        None => ctx
            .project_dir
            .join(ctx.mapper.target_dir(category, ctx.aliases))
            .join(&file.path),
    }
}

/// Write `payload`'s files for an entry of `category` according to `ctx.policy`.
///
/// `category` is the catalog entry's category, not the payload's.
///
/// # Errors
///
/// Returns an error if a file or directory cannot be written, or if
/// `prompt` fails. Files written before the failure are left in place.
pub async fn materialize<P: ConfirmOverwrite>(
    payload: &ItemPayload,
    category: &str,
    ctx: &InstallContext<'_>,
    prompt: &mut P,
) -> Result<MaterializeOutcome> {
    let mut outcome = MaterializeOutcome::default();

    for file in &payload.files {
        let path = target_path(file, category, ctx);

        if path.exists() && !should_overwrite(&path, ctx, prompt).await? {
            info!("Skipping {} (already exists)", path.display());
            outcome.skipped.push(path);
            continue;
        }

        atomic_write(&path, file.content.as_bytes())
            .map_err(|e| {
                e.context(DflError::FileSystemError {
                    operation: format!("writing {}", payload.name),
                    path: path.display().to_string(),
                })
            })
            .with_context(|| format!("Failed to install '{}'", payload.name))?;

        debug!("Wrote {}", path.display());
        outcome.written.push(path);
    }

    Ok(outcome)
}

async fn should_overwrite<P: ConfirmOverwrite>(
    path: &Path,
    ctx: &InstallContext<'_>,
    prompt: &mut P,
) -> Result<bool> {
    match ctx.policy {
        WritePolicy::ForceOverwrite => Ok(true),
        WritePolicy::AutoSkip => Ok(false),
        WritePolicy::AskPerFile => prompt.confirm_overwrite(path).await,
    }
}
