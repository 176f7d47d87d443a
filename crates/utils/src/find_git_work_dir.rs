use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Work tree root of the git repository containing `current_dir`, found with gix.
///
/// # Errors
/// Returns error if `current_dir` is not inside a git work tree.
pub fn find_git_work_dir(current_dir: &Path) -> Result<PathBuf> {
    let repo = gix::discover(current_dir)?;
    let work_dir = repo
        .workdir()
        .context("Not a git working directory")?
        .to_path_buf();
    Ok(work_dir)
}
