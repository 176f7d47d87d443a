use anyhow::{Context, Result};
use pomkit_core::{Config, ProjectDefaults, Publishing};
use pomkit_java::{ProjectHost, detect_project_defaults, register_publications};
use pomkit_utils::{PropertyOverlay, find_project_root, get_pomkit_config};
use std::path::PathBuf;

/// Everything a command needs, resolved once per invocation.
pub struct CommandContext {
    pub root: PathBuf,
    pub config: Config,
    pub overlay: PropertyOverlay,
    pub defaults: ProjectDefaults,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the current directory or the config cannot be read.
    pub async fn new() -> Result<Self> {
        let root = find_project_root(&Self::current_dir()?);
        let config = get_pomkit_config(&root).await?;
        let overlay = PropertyOverlay::load(&root).await;
        let defaults = detect_project_defaults(&root, &config, &overlay).await;
        tracing::debug!(
            "Project root {} (group '{}', version '{}')",
            root.display(),
            defaults.group,
            defaults.version
        );

        Ok(Self {
            root,
            config,
            overlay,
            defaults,
        })
    }

    pub fn host(&self) -> ProjectHost {
        ProjectHost::new(&self.root, &self.config)
    }

    /// Assemble every configured publication.
    ///
    /// # Errors
    /// Returns error if any publication cannot be assembled.
    pub fn publishing(&self) -> Result<Publishing> {
        register_publications(&self.config.publications, &self.defaults, &self.host())
            .context("Failed to assemble publications")
    }

    /// # Errors
    /// Returns error if retrieving the current directory fails.
    pub fn current_dir() -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }
}
