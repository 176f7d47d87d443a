use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::publication::PublicationDescriptor;

/// Loaded from `.pomkit/config.json`: project coordinates, build outputs and publications.
///
/// Secrets never live here. `signing` and `repository` only name the property keys the
/// values are looked up under.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Project group, used by publications without a groupId
    #[serde(default)]
    pub group: Option<String>,

    /// Project version, used by publications without a version
    #[serde(default)]
    pub version: Option<String>,

    /// Software components by name (e.g. "java" -> "build/libs/lib.jar")
    #[serde(default)]
    pub components: BTreeMap<String, PathBuf>,

    /// Extra build outputs by producing task name
    #[serde(default)]
    pub artifacts: BTreeMap<String, ArtifactEntry>,

    #[serde(default)]
    pub publications: Vec<PublicationDescriptor>,

    #[serde(default)]
    pub signing: SigningKeys,

    #[serde(default)]
    pub repository: RepositoryKeys,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactEntry {
    pub path: PathBuf,
    #[serde(default)]
    pub classifier: Option<String>,
}

/// Property keys holding the in-memory PGP signing material.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SigningKeys {
    pub key_id_key: String,
    pub password_key: String,
    /// Key holding the base64 encoded armored secret key
    pub key_key: String,
}

impl Default for SigningKeys {
    fn default() -> Self {
        Self {
            key_id_key: "SIGNING_KEY_ID".to_string(),
            password_key: "SIGNING_PASSWORD".to_string(),
            key_key: "SIGNING_PGP_B64".to_string(),
        }
    }
}

/// Property keys holding the Sonatype (OSSRH) staging credentials.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RepositoryKeys {
    pub profile_id_key: String,
    pub username_key: String,
    pub password_key: String,
}

impl Default for RepositoryKeys {
    fn default() -> Self {
        Self {
            profile_id_key: "OSSRH_PROFILE_ID".to_string(),
            username_key: "OSSRH_USERNAME".to_string(),
            password_key: "OSSRH_PASSWORD".to_string(),
        }
    }
}
