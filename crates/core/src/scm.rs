use serde::{Deserialize, Serialize};

const GIT_SUFFIX: &str = ".git";
const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Version control coordinates of a publication.
///
/// `valid_url` and `valid_connection` derive the POM `scm` values from the stored
/// fields and never cache anything.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScmDescriptor {
    /// Repository url, usually the browsable https url (may be blank)
    #[serde(default)]
    pub url: String,

    /// Branch linked from the browsable url (default: "main")
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Explicit read-only connection, used verbatim when set
    #[serde(default)]
    pub connection: Option<String>,

    /// Explicit developer connection, used verbatim when set
    #[serde(default)]
    pub developer_connection: Option<String>,
}

fn default_branch() -> String {
    "main".to_string()
}

impl Default for ScmDescriptor {
    fn default() -> Self {
        Self {
            url: String::new(),
            branch: default_branch(),
            connection: None,
            developer_connection: None,
        }
    }
}

impl ScmDescriptor {
    pub fn new(url: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            branch: branch.into(),
            ..Default::default()
        }
    }

    /// Copy of this descriptor pointing at `url`, keeping branch and explicit connections.
    #[must_use]
    pub fn with_url(&self, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..self.clone()
        }
    }

    /// Browsable url: one trailing `.git` (or else one trailing `/`) removed, then `/tree/<branch>`.
    #[must_use]
    pub fn valid_url(&self) -> String {
        let base = self
            .url
            .strip_suffix(GIT_SUFFIX)
            .or_else(|| self.url.strip_suffix('/'))
            .unwrap_or(&self.url);
        format!("{base}/tree/{}", self.branch)
    }

    /// Maven SCM connection string.
    ///
    /// Explicit connections win: the developer connection (then the plain connection) when
    /// `ssh` is set, the plain connection otherwise.
    #[must_use]
    pub fn valid_connection(&self, ssh: bool) -> String {
        let explicit = if ssh {
            self.developer_connection.as_ref().or(self.connection.as_ref())
        } else {
            self.connection.as_ref()
        };
        if let Some(connection) = explicit {
            return connection.clone();
        }

        let mut location = self.url.as_str();
        for scheme in SCHEMES {
            if let Some(rest) = location.strip_prefix(scheme) {
                location = rest;
            }
        }

        let prefix = if ssh { "scm:git:ssh:" } else { "scm:git:" };
        if location.ends_with(GIT_SUFFIX) {
            format!("{prefix}{location}")
        } else {
            format!("{prefix}{location}{GIT_SUFFIX}")
        }
    }
}
