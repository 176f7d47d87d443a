use anyhow::Result;
use clap::Args;
use pomkit_core::PublicationDescriptor;
use pomkit_utils::{find_project_root, get_pomkit_config};

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Print javadoc options of configured publications")]
pub struct JavadocArgs {
    /// Only print this publication
    #[arg(short, long)]
    publication: Option<String>,
}

fn javadoc_options(descriptor: &PublicationDescriptor) -> Vec<String> {
    descriptor
        .javadoc_info
        .clone()
        .unwrap_or_default()
        .options(&descriptor.name)
}

/// Print javadoc options, one publication per line
///
/// # Errors
/// Returns error if the config cannot be read or the publication does not exist.
pub async fn handle_javadoc(args: &JavadocArgs) -> Result<()> {
    let root = find_project_root(&CommandContext::current_dir()?);
    let config = get_pomkit_config(&root).await?;

    let descriptors: Vec<&PublicationDescriptor> = config
        .publications
        .iter()
        .filter(|p| args.publication.as_ref().is_none_or(|name| &p.name == name))
        .collect();
    if let (Some(name), true) = (&args.publication, descriptors.is_empty()) {
        return Err(anyhow::anyhow!("Publication '{name}' not found"));
    }

    for descriptor in descriptors {
        let options = javadoc_options(descriptor)
            .into_iter()
            .map(|option| {
                if option.contains(char::is_whitespace) {
                    format!("'{option}'")
                } else {
                    option
                }
            })
            .collect::<Vec<_>>();
        println!("{}: {}", descriptor.name, options.join(" "));
    }
    Ok(())
}
