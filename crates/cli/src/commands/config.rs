use anyhow::Result;
use clap::Args;
use pomkit_utils::{find_project_root, get_pomkit_config};

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Show pomkit configuration")]
pub struct ConfigArgs {}

/// Display pomkit configuration
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(_args: &ConfigArgs) -> Result<()> {
    let root = find_project_root(&CommandContext::current_dir()?);
    let config = get_pomkit_config(&root).await?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
