//! Layered key/value lookups: root-level `.properties`/`.env` files, then the environment.
//!
//! Invariants:
//! - Files are scanned one level deep in file-name order; later files overwrite earlier keys.
//! - The environment is overlaid after every scan and wins over file values.
//! - A file is parsed at most once per overlay; keys are never removed.
//! - A file that fails to read or parse is logged and skipped, the scan goes on; the next
//!   refresh tries it again.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use glob::Pattern;
use std::sync::LazyLock;

use crate::properties::read_properties_file;

static PROPERTY_FILE_PATTERNS: LazyLock<[Pattern; 2]> = LazyLock::new(|| {
    [
        Pattern::new("*.properties").expect("hardcoded glob must compile"),
        Pattern::new("*.env").expect("hardcoded glob must compile"),
    ]
});

/// Whether a file name is picked up by the overlay scan.
pub fn is_property_file_name(file_name: &str) -> bool {
    PROPERTY_FILE_PATTERNS
        .iter()
        .any(|pattern| pattern.matches(file_name))
}

#[derive(Debug)]
pub struct PropertyOverlay {
    root: PathBuf,
    cache: HashMap<String, String>,
    loaded_files: HashSet<PathBuf>,
    /// Injected environment; `None` reads the process environment on each scan
    environment: Option<Vec<(String, String)>>,
    refreshed: bool,
}

impl PropertyOverlay {
    /// Overlay rooted at `root` using the process environment.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
            loaded_files: HashSet::new(),
            environment: None,
            refreshed: false,
        }
    }

    /// Overlay rooted at `root` with a fixed environment instead of the process one.
    pub fn with_environment<I, K, V>(root: impl Into<PathBuf>, environment: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            environment: Some(
                environment
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            ..Self::new(root)
        }
    }

    /// Build an overlay and run the first scan.
    pub async fn load(root: impl Into<PathBuf>) -> Self {
        let mut overlay = Self::new(root);
        overlay.refresh().await;
        overlay
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files merged so far, sorted.
    pub fn loaded_files(&self) -> Vec<&Path> {
        let mut files: Vec<&Path> = self.loaded_files.iter().map(PathBuf::as_path).collect();
        files.sort();
        files
    }

    /// Scan the root for new property files, merge them, then overlay the environment.
    ///
    /// Returns how many files were merged by this scan.
    pub async fn refresh(&mut self) -> usize {
        let mut merged = 0;
        for file in self.property_files().await {
            if self.loaded_files.contains(&file) {
                continue;
            }
            tracing::info!("Loading \"{}\"", file.display());
            match read_properties_file(&file).await {
                Ok(entries) => {
                    self.cache.extend(entries);
                    self.loaded_files.insert(file);
                    merged += 1;
                }
                Err(e) => {
                    tracing::warn!("\"{}\" failed: {e}", file.display());
                }
            }
        }

        self.attach_environment();
        self.refreshed = true;
        merged
    }

    /// Look up `key`, scanning first if this overlay has never been refreshed.
    pub async fn lookup(&mut self, key: &str) -> Option<String> {
        if !self.refreshed {
            self.refresh().await;
        }
        self.cache.get(key).cloned()
    }

    pub async fn lookup_or(&mut self, key: &str, default: &str) -> String {
        self.lookup(key)
            .await
            .unwrap_or_else(|| default.to_string())
    }

    /// Read-only lookup on an already refreshed overlay.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cache.get(key).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn is_refreshed(&self) -> bool {
        self.refreshed
    }

    async fn property_files(&self) -> Vec<PathBuf> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to list \"{}\": {e}", self.root.display());
                return Vec::new();
            }
        };

        let mut files = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let is_file = entry
                        .file_type()
                        .await
                        .map(|t| t.is_file())
                        .unwrap_or(false);
                    let matches = entry
                        .file_name()
                        .to_str()
                        .is_some_and(is_property_file_name);
                    if is_file && matches {
                        files.push(entry.path());
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!("Failed to list \"{}\": {e}", self.root.display());
                    break;
                }
            }
        }
        files.sort();
        files
    }

    fn attach_environment(&mut self) {
        match &self.environment {
            Some(environment) => {
                for (key, value) in environment {
                    self.cache.insert(key.clone(), value.clone());
                }
            }
            None => {
                for (key, value) in std::env::vars_os() {
                    if let (Some(key), Some(value)) = (key.to_str(), value.to_str()) {
                        self.cache.insert(key.to_string(), value.to_string());
                    }
                }
            }
        }
    }
}
