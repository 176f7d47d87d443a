use serde::{Deserialize, Serialize};

/// Project-level coordinates used when a publication leaves group or version unset.
///
/// The defaults mirror an unconfigured Gradle project: empty group, version `unspecified`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectDefaults {
    pub group: String,
    pub version: String,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        Self {
            group: String::new(),
            version: "unspecified".to_string(),
        }
    }
}

impl ProjectDefaults {
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }
}
