use serde::{Deserialize, Serialize};

use crate::{javadoc::JavadocDescriptor, pom::PomDescriptor};

/// A publication as declared in `.pomkit/config.json`.
///
/// Coordinates left empty here fall back to the project defaults when the publication is
/// assembled.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicationDescriptor {
    /// Publication name, also used as the POM `name`
    pub name: String,

    /// Append `-SNAPSHOT` to the resolved version
    #[serde(default)]
    pub is_snapshot: bool,

    #[serde(default)]
    pub group_id: Option<String>,

    #[serde(default)]
    pub artifact_id: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    /// Software component attached to the publication (default: "java")
    #[serde(default = "default_component")]
    pub component: String,

    #[serde(default)]
    pub javadoc: JavadocTasks,

    pub pom: PomDescriptor,

    #[serde(default)]
    pub javadoc_info: Option<JavadocDescriptor>,
}

fn default_component() -> String {
    "java".to_string()
}

impl PublicationDescriptor {
    pub fn new(name: impl Into<String>, pom: PomDescriptor) -> Self {
        Self {
            name: name.into(),
            is_snapshot: false,
            group_id: None,
            artifact_id: None,
            version: None,
            component: default_component(),
            javadoc: JavadocTasks::default(),
            pom,
            javadoc_info: None,
        }
    }
}

/// Names of the jar tasks whose outputs are attached as javadoc and sources artifacts.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JavadocTasks {
    #[serde(default = "default_javadoc_task")]
    pub javadoc_task: Option<String>,

    #[serde(default = "default_source_task")]
    pub source_task: Option<String>,
}

fn default_javadoc_task() -> Option<String> {
    Some("java-jar-javadoc".to_string())
}

fn default_source_task() -> Option<String> {
    Some("java-jar-sources".to_string())
}

impl Default for JavadocTasks {
    fn default() -> Self {
        Self {
            javadoc_task: default_javadoc_task(),
            source_task: default_source_task(),
        }
    }
}

impl JavadocTasks {
    /// Task names in attach order: javadoc first, then sources.
    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        [self.javadoc_task.as_deref(), self.source_task.as_deref()]
            .into_iter()
            .flatten()
    }
}
