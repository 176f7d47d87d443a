use std::path::{Path, PathBuf};

use crate::find_git_work_dir;

/// Entries that mark a directory as the root project.
const ROOT_MARKERS: [&str; 3] = [".pomkit", "settings.gradle.kts", "settings.gradle"];

/// Root project directory for `current_dir`.
///
/// The nearest ancestor (inclusive) holding a root marker wins, then the git work tree,
/// then `current_dir` itself.
pub fn find_project_root(current_dir: &Path) -> PathBuf {
    if let Some(root) = current_dir
        .ancestors()
        .find(|dir| ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists()))
    {
        return root.to_path_buf();
    }
    match find_git_work_dir(current_dir) {
        Ok(work_dir) => work_dir,
        Err(e) => {
            tracing::debug!("No git work tree for {}: {e}", current_dir.display());
            current_dir.to_path_buf()
        }
    }
}
