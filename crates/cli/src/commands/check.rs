use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pomkit_core::{MavenPublication, PublicationDescriptor, Publishing};
use pomkit_java::{RepositoryCredentials, SigningDescriptor, SigningPlan};
use serde::Serialize;

use crate::{context::CommandContext, options::FormatOptions};

#[derive(Args, Debug)]
#[command(about = "Check publications, signing and repository credentials")]
pub struct CheckArgs {
    #[arg(long, default_value = "stdout")]
    format: FormatOptions,

    /// Fail when signing or repository credentials are not ready
    #[arg(short, long)]
    strict: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PublicationReport {
    name: String,
    coordinates: String,
    component: Option<String>,
    /// Jar tasks the publication asks for that the build does not declare
    missing_tasks: Vec<String>,
    /// Declared outputs not present on disk yet
    missing_files: Vec<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    publications: Vec<PublicationReport>,
    signing_error: Option<String>,
    missing_repository_keys: Vec<String>,
}

impl CheckReport {
    fn is_ready(&self) -> bool {
        self.signing_error.is_none() && self.missing_repository_keys.is_empty()
    }
}

fn publication_report(
    descriptor: &PublicationDescriptor,
    publication: &MavenPublication,
) -> PublicationReport {
    let attached: Vec<&str> = publication
        .artifacts
        .iter()
        .map(|artifact| artifact.task.as_str())
        .collect();
    let missing_tasks = descriptor
        .javadoc
        .task_names()
        .filter(|task| !attached.contains(task))
        .map(str::to_string)
        .collect();
    let missing_files = publication
        .component
        .iter()
        .map(|component| &component.path)
        .chain(publication.artifacts.iter().map(|artifact| &artifact.path))
        .filter(|path| !path.exists())
        .map(|path| path.display().to_string())
        .collect();

    PublicationReport {
        name: publication.name.clone(),
        coordinates: publication.coordinates(),
        component: publication.component.as_ref().map(|c| c.name.clone()),
        missing_tasks,
        missing_files,
    }
}

fn build_report(context: &CommandContext, publishing: &Publishing) -> CheckReport {
    let publications = context
        .config
        .publications
        .iter()
        .filter_map(|descriptor| {
            publishing
                .get(&descriptor.name)
                .map(|publication| publication_report(descriptor, publication))
        })
        .collect();

    let signing = SigningDescriptor::from_overlay(&context.overlay, &context.config.signing);
    let signing_error = SigningPlan::new(&signing, &publishing.names())
        .err()
        .map(|e| e.to_string());

    let repository =
        RepositoryCredentials::from_overlay(&context.overlay, &context.config.repository);
    let missing_repository_keys = repository
        .missing()
        .into_iter()
        .map(str::to_string)
        .collect();

    CheckReport {
        publications,
        signing_error,
        missing_repository_keys,
    }
}

fn print_report(report: &CheckReport) {
    println!("Found {} publications", report.publications.len());
    for publication in &report.publications {
        println!(
            "  {} {}",
            publication.name.bold(),
            publication.coordinates.bright_black()
        );
        match &publication.component {
            Some(component) => println!("    component {}", component.green()),
            None => println!("    {}", "no component attached".yellow()),
        }
        for task in &publication.missing_tasks {
            println!("    {} {}", "task not declared:".yellow(), task);
        }
        for file in &publication.missing_files {
            println!("    {} {}", "file not built yet:".yellow(), file);
        }
    }
    match &report.signing_error {
        None => println!("Signing {}", "ready".green()),
        Some(e) => println!("Signing {} ({e})", "not ready".red()),
    }
    if report.missing_repository_keys.is_empty() {
        println!("Repository credentials {}", "ready".green());
    } else {
        println!(
            "Repository credentials {} (missing {})",
            "not ready".red(),
            report.missing_repository_keys.join(", ")
        );
    }
}

/// Check configured publications
///
/// # Errors
/// Returns error if a publication cannot be assembled, or with `--strict` when signing or
/// repository credentials are not ready.
pub async fn handle_check(args: &CheckArgs) -> Result<()> {
    let context = CommandContext::new().await?;
    let publishing = context.publishing()?;
    let report = build_report(&context, &publishing);

    match args.format {
        FormatOptions::Stdout => print_report(&report),
        FormatOptions::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if args.strict && !report.is_ready() {
        return Err(anyhow::anyhow!("publishing credentials are not ready"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pomkit_core::{Artifact, Component, Pom, PomDescriptor};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        check: CheckArgs,
    }

    #[test]
    fn test_check_args_parsing() {
        let cli = TestCli::parse_from(["test", "--format", "json", "--strict"]);
        assert!(matches!(cli.check.format, FormatOptions::Json));
        assert!(cli.check.strict);
    }

    #[test]
    fn test_publication_report() {
        let temp_dir = TempDir::new().unwrap();
        let jar = temp_dir.path().join("lib.jar");
        std::fs::write(&jar, "").unwrap();
        let javadoc_jar = temp_dir.path().join("lib-javadoc.jar");

        let descriptor =
            PublicationDescriptor::new("release", PomDescriptor::new("https://example.com"));
        let publication = MavenPublication {
            name: "release".to_string(),
            group_id: "com.example".to_string(),
            artifact_id: "lib".to_string(),
            version: "1.0.0".to_string(),
            component: Some(Component {
                name: "java".to_string(),
                path: jar,
            }),
            artifacts: vec![Artifact {
                task: "java-jar-javadoc".to_string(),
                path: javadoc_jar.clone(),
                classifier: Some("javadoc".to_string()),
            }],
            pom: Pom::default(),
        };

        let report = publication_report(&descriptor, &publication);
        assert_eq!(report.coordinates, "com.example:lib:1.0.0");
        assert_eq!(report.component.as_deref(), Some("java"));
        assert_eq!(report.missing_tasks, vec!["java-jar-sources"]);
        assert_eq!(
            report.missing_files,
            vec![PathBuf::from(&javadoc_jar).display().to_string()]
        );
    }

    #[test]
    fn test_report_readiness() {
        let ready = CheckReport {
            publications: Vec::new(),
            signing_error: None,
            missing_repository_keys: Vec::new(),
        };
        assert!(ready.is_ready());

        let not_ready = CheckReport {
            signing_error: Some("Missing signing value SIGNING_KEY_ID".to_string()),
            ..ready
        };
        assert!(!not_ready.is_ready());
    }
}
