use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PublishError {
    #[error("Publication '{publication}' has no artifactId (set it on the publication or its pom)")]
    MissingArtifactId { publication: String },

    #[error("Publication '{0}' is already registered")]
    DuplicatePublication(String),

    #[error("Publication '{0}' not found")]
    UnknownPublication(String),
}
