use serde::{Deserialize, Serialize};

use crate::scm::ScmDescriptor;

/// POM metadata of a publication, copied into the generated `pom.xml`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PomDescriptor {
    /// Project homepage, also the SCM fallback when the SCM url is blank
    pub artifact_url: String,

    /// Artifact identifier, used when the publication has none of its own
    #[serde(default)]
    pub artifact_id: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub licenses: Vec<LicenseDescriptor>,

    #[serde(default)]
    pub developers: Vec<DeveloperDescriptor>,

    #[serde(default)]
    pub scm: Option<ScmDescriptor>,
}

impl PomDescriptor {
    pub fn new(artifact_url: impl Into<String>) -> Self {
        Self {
            artifact_url: artifact_url.into(),
            artifact_id: None,
            description: None,
            licenses: Vec::new(),
            developers: Vec::new(),
            scm: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LicenseDescriptor {
    #[serde(default = "default_license_name")]
    pub name: String,

    #[serde(default = "default_license_url")]
    pub url: String,
}

fn default_license_name() -> String {
    "MIT".to_string()
}

fn default_license_url() -> String {
    "https://opensource.org/licenses/MIT".to_string()
}

impl Default for LicenseDescriptor {
    fn default() -> Self {
        Self {
            name: default_license_name(),
            url: default_license_url(),
        }
    }
}

/// A contributor entry. Only `id` is required.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperDescriptor {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub organization_url: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl DeveloperDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}
