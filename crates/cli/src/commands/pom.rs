use anyhow::Result;
use clap::Args;
use pomkit_core::MavenPublication;
use pomkit_java::{pom_output_path, render_pom};
use tokio::fs::{create_dir_all, write};

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Render the pom.xml of configured publications")]
pub struct PomArgs {
    /// Only render this publication
    #[arg(short, long)]
    publication: Option<String>,

    /// Write to build/publications/<name>/pom-default.xml instead of stdout
    #[arg(short, long)]
    write: bool,
}

/// Render publication POMs
///
/// # Errors
/// Returns error if a publication cannot be assembled, rendered or written.
pub async fn handle_pom(args: &PomArgs) -> Result<()> {
    let context = CommandContext::new().await?;
    let publishing = context.publishing()?;

    let selected: Vec<&MavenPublication> = match &args.publication {
        Some(name) => vec![publishing.require(name)?],
        None => publishing.publications().iter().collect(),
    };
    if selected.is_empty() {
        println!("No publications configured");
        return Ok(());
    }

    for publication in selected {
        let xml = render_pom(publication)?;
        if args.write {
            let path = pom_output_path(&context.root, publication);
            if let Some(parent) = path.parent() {
                create_dir_all(parent).await?;
            }
            write(&path, xml).await?;
            println!("{} -> {}", publication, path.display());
        } else {
            print!("{xml}");
        }
    }
    Ok(())
}
