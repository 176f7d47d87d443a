//! # pomkit-java
//!
//! Maven publishing for JVM projects: assembles publications from their descriptors,
//! renders `pom.xml`, and sources signing and repository credentials from the property
//! overlay. Project group and version are read from Gradle build files when the config
//! leaves them out.

pub mod assembler;
pub mod pom_writer;
pub mod project_defaults;
pub mod project_host;
pub mod repository;
pub mod signing;

pub use assembler::{assemble, register_publications};
pub use pom_writer::{pom_output_path, render_pom};
pub use project_defaults::{
    detect_project_defaults, find_group_in_build_script, find_version_in_build_script,
};
pub use project_host::ProjectHost;
pub use repository::RepositoryCredentials;
pub use signing::{SigningDescriptor, SigningError, SigningPlan};
