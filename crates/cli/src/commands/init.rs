use tokio::fs::{create_dir_all, write};

use anyhow::Result;
use clap::Args;
use pomkit_core::{
    ArtifactEntry, Config, LicenseDescriptor, PomDescriptor, PublicationDescriptor, ScmDescriptor,
};
use pomkit_utils::{find_project_root, get_pomkit_config_path, get_pomkit_dir};
use std::path::{Path, PathBuf};

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Initialize a new pomkit project")]
pub struct InitArgs {
    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Starter config for the project in `root`.
fn template_config(root: &Path) -> Config {
    let name = root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("library")
        .to_string();
    let libs = PathBuf::from("build").join("libs");

    let mut config = Config::default();
    config
        .components
        .insert("java".to_string(), libs.join(format!("{name}.jar")));
    for (task, classifier) in [("java-jar-javadoc", "javadoc"), ("java-jar-sources", "sources")] {
        config.artifacts.insert(
            task.to_string(),
            ArtifactEntry {
                path: libs.join(format!("{name}-{classifier}.jar")),
                classifier: Some(classifier.to_string()),
            },
        );
    }

    let mut pom = PomDescriptor::new(format!("https://github.com/example/{name}.git"));
    pom.licenses.push(LicenseDescriptor::default());
    pom.scm = Some(ScmDescriptor::default());
    config.publications.push(PublicationDescriptor {
        artifact_id: Some(name),
        ..PublicationDescriptor::new("release", pom)
    });
    config
}

/// Initialize a new pomkit project
///
/// # Errors
/// Returns error if the project is already initialized or writing the config fails.
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    let root = find_project_root(&CommandContext::current_dir()?);
    let pomkit_dir = get_pomkit_dir(&root);
    let config_file = get_pomkit_config_path(&root);
    if config_file.exists() {
        return Err(anyhow::anyhow!("pomkit project already initialized"));
    }

    if !args.dry_run {
        create_dir_all(&pomkit_dir).await?;
        let content = serde_json::to_string_pretty(&template_config(&root))?;
        write(&config_file, content).await?;
    }

    println!("pomkit project initialized in {}", pomkit_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        init: InitArgs,
    }

    #[test]
    fn test_init_args_dry_run() {
        let cli = TestCli::parse_from(["test", "--dry-run"]);
        assert!(cli.init.dry_run);
    }

    #[test]
    fn test_template_config_uses_directory_name() {
        let config = template_config(Path::new("/work/jvm-utilities"));
        assert_eq!(
            config.components["java"],
            PathBuf::from("build/libs/jvm-utilities.jar")
        );
        assert_eq!(
            config.artifacts["java-jar-sources"].path,
            PathBuf::from("build/libs/jvm-utilities-sources.jar")
        );
        let publication = &config.publications[0];
        assert_eq!(publication.name, "release");
        assert_eq!(publication.artifact_id.as_deref(), Some("jvm-utilities"));
    }

    #[test]
    fn test_template_config_round_trips_through_json() {
        let config = template_config(Path::new("/work/lib"));
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
