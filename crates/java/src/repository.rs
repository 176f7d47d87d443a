use pomkit_core::RepositoryKeys;
use pomkit_utils::PropertyOverlay;
use secrecy::{ExposeSecret, SecretString};

/// Sonatype (OSSRH) staging credentials handed to the upload tool.
#[derive(Debug)]
pub struct RepositoryCredentials {
    pub staging_profile_id: Option<String>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    keys: RepositoryKeys,
}

impl RepositoryCredentials {
    /// Look up the credentials; blank values count as absent.
    pub fn from_overlay(overlay: &PropertyOverlay, keys: &RepositoryKeys) -> Self {
        let lookup = |key: &str| {
            overlay
                .get(key)
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string)
        };
        Self {
            staging_profile_id: lookup(&keys.profile_id_key),
            username: lookup(&keys.username_key),
            password: lookup(&keys.password_key).map(SecretString::from),
            keys: keys.clone(),
        }
    }

    /// Property keys without a value.
    pub fn missing(&self) -> Vec<&str> {
        let mut missing = Vec::new();
        if self.staging_profile_id.is_none() {
            missing.push(self.keys.profile_id_key.as_str());
        }
        if self.username.is_none() {
            missing.push(self.keys.username_key.as_str());
        }
        if self
            .password
            .as_ref()
            .is_none_or(|p| p.expose_secret().is_empty())
        {
            missing.push(self.keys.password_key.as_str());
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}
