use pomkit_core::{Config, ProjectDefaults};
use pomkit_utils::PropertyOverlay;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static GROUP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*group\s*=\s*['"]([^'"]+)['"]"#).expect("hardcoded regex must compile")
});

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*version\s*=\s*['"]([^'"]+)['"]"#).expect("hardcoded regex must compile")
});

const BUILD_SCRIPTS: [&str; 2] = ["build.gradle.kts", "build.gradle"];

/// `group = "..."` in build script content (Kotlin or Groovy DSL)
pub fn find_group_in_build_script(content: &str) -> Option<String> {
    capture(&GROUP_PATTERN, content)
}

/// `version = "..."` in build script content (Kotlin or Groovy DSL)
pub fn find_version_in_build_script(content: &str) -> Option<String> {
    capture(&VERSION_PATTERN, content)
}

fn capture(pattern: &Regex, content: &str) -> Option<String> {
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Resolve project group and version.
///
/// Each field is taken from the first source that has it: the config, the overlay (`group`,
/// `version`, e.g. from `gradle.properties`), then the root build script.
pub async fn detect_project_defaults(
    root: &Path,
    config: &Config,
    overlay: &PropertyOverlay,
) -> ProjectDefaults {
    let mut group = config
        .group
        .clone()
        .or_else(|| overlay.get("group").map(str::to_string));
    let mut version = config
        .version
        .clone()
        .or_else(|| overlay.get("version").map(str::to_string));

    if group.is_none() || version.is_none() {
        for script in BUILD_SCRIPTS {
            let Ok(content) = tokio::fs::read_to_string(root.join(script)).await else {
                continue;
            };
            group = group.or_else(|| find_group_in_build_script(&content));
            version = version.or_else(|| find_version_in_build_script(&content));
            break;
        }
    }

    let defaults = ProjectDefaults::default();
    ProjectDefaults {
        group: group.unwrap_or(defaults.group),
        version: version.unwrap_or(defaults.version),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    #[case("group = \"com.example\"\n", Some("com.example"))]
    #[case("group = 'com.example'\n", Some("com.example"))]
    #[case("  group=\"com.example\"", Some("com.example"))]
    #[case("// group = \"commented\"\n", None)]
    #[case("groupId = \"other\"\n", None)]
    fn test_find_group_in_build_script(#[case] content: &str, #[case] expected: Option<&str>) {
        assert_eq!(find_group_in_build_script(content).as_deref(), expected);
    }

    #[test]
    fn test_find_version_in_build_script() {
        let content = r#"
plugins {
    `java-library`
}

group = "com.github.example"
version = "1.0.0b4"
"#;
        assert_eq!(
            find_version_in_build_script(content).as_deref(),
            Some("1.0.0b4")
        );
        assert_eq!(
            find_group_in_build_script(content).as_deref(),
            Some("com.github.example")
        );
    }

    fn empty_overlay(dir: &TempDir) -> PropertyOverlay {
        PropertyOverlay::with_environment(dir.path(), Vec::<(String, String)>::new())
    }

    #[tokio::test]
    async fn test_detect_from_build_script() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("build.gradle.kts"),
            "group = \"com.example\"\nversion = \"0.3.0\"\n",
        )
        .unwrap();
        let mut overlay = empty_overlay(&temp_dir);
        overlay.refresh().await;

        let defaults = detect_project_defaults(temp_dir.path(), &Config::default(), &overlay).await;
        assert_eq!(defaults, ProjectDefaults::new("com.example", "0.3.0"));
    }

    #[tokio::test]
    async fn test_detect_precedence() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("build.gradle.kts"),
            "group = \"from.script\"\nversion = \"0.0.1\"\n",
        )
        .unwrap();
        fs::write(temp_dir.path().join("gradle.properties"), "version=0.2.0\n").unwrap();
        let mut overlay = empty_overlay(&temp_dir);
        overlay.refresh().await;
        let config = Config {
            group: Some("from.config".to_string()),
            ..Default::default()
        };

        let defaults = detect_project_defaults(temp_dir.path(), &config, &overlay).await;
        assert_eq!(defaults, ProjectDefaults::new("from.config", "0.2.0"));
    }

    #[tokio::test]
    async fn test_detect_without_sources_uses_gradle_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut overlay = empty_overlay(&temp_dir);
        overlay.refresh().await;

        let defaults = detect_project_defaults(temp_dir.path(), &Config::default(), &overlay).await;
        assert_eq!(defaults, ProjectDefaults::default());
        assert_eq!(defaults.version, "unspecified");
    }
}
