use pomkit_core::{Artifact, ArtifactEntry, Component, Config, PublishingHost};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Build outputs declared in `.pomkit/config.json`, resolved against the project root.
#[derive(Debug, Clone)]
pub struct ProjectHost {
    root: PathBuf,
    components: BTreeMap<String, PathBuf>,
    artifacts: BTreeMap<String, ArtifactEntry>,
}

impl ProjectHost {
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            root: root.into(),
            components: config.components.clone(),
            artifacts: config.artifacts.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PublishingHost for ProjectHost {
    fn find_component(&self, name: &str) -> Option<Component> {
        self.components.get(name).map(|path| Component {
            name: name.to_string(),
            path: self.root.join(path),
        })
    }

    fn find_artifact(&self, task: &str) -> Option<Artifact> {
        self.artifacts.get(task).map(|entry| Artifact {
            task: task.to_string(),
            path: self.root.join(&entry.path),
            classifier: entry.classifier.clone(),
        })
    }
}
