use std::path::PathBuf;

use serde::Serialize;

/// A software component (the main jar and its dependency metadata).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub name: String,
    pub path: PathBuf,
}

/// A build output attached next to the main component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Name of the task that produces the artifact
    pub task: String,
    pub path: PathBuf,
    pub classifier: Option<String>,
}

/// The build whose outputs a publication is assembled from.
///
/// Lookups are best effort: `None` means the publication is assembled without it.
pub trait PublishingHost {
    fn find_component(&self, name: &str) -> Option<Component>;
    fn find_artifact(&self, task: &str) -> Option<Artifact>;
}
