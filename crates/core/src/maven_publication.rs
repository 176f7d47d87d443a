use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;

use crate::host::{Artifact, Component};

/// An assembled publication: resolved coordinates, attached files and POM metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenPublication {
    pub name: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub component: Option<Component>,
    pub artifacts: Vec<Artifact>,
    pub pom: Pom,
}

impl MavenPublication {
    /// `group:artifact:version`
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with("-SNAPSHOT")
    }
}

impl Display for MavenPublication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.name.bold(),
            self.coordinates().bright_black()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pom {
    pub url: String,
    pub name: String,
    pub description: Option<String>,
    pub licenses: Vec<PomLicense>,
    pub developers: Vec<PomDeveloper>,
    pub scm: Option<PomScm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomLicense {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PomDeveloper {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub organization_url: Option<String>,
    pub roles: Vec<String>,
    pub timezone: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PomScm {
    pub url: String,
    pub connection: String,
    pub developer_connection: String,
}
