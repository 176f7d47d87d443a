//! # pomkit-core
//!
//! Declarative publication descriptors, the assembled Maven publication model, and the
//! [`PublishingHost`] seam that artifact lookups go through.

pub mod config;
pub mod defaults;
pub mod error;
pub mod host;
pub mod javadoc;
pub mod maven_publication;
pub mod pom;
pub mod publication;
pub mod publishing;
pub mod scm;

pub use config::{ArtifactEntry, Config, RepositoryKeys, SigningKeys};
pub use defaults::ProjectDefaults;
pub use error::PublishError;
pub use host::{Artifact, Component, PublishingHost};
pub use javadoc::{JavadocDescriptor, OutputLevel};
pub use maven_publication::{MavenPublication, Pom, PomDeveloper, PomLicense, PomScm};
pub use pom::{DeveloperDescriptor, LicenseDescriptor, PomDescriptor};
pub use publication::{JavadocTasks, PublicationDescriptor};
pub use publishing::Publishing;
pub use scm::ScmDescriptor;
