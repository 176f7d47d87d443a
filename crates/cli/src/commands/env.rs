use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args;
use pomkit_utils::{PropertyOverlay, find_project_root};

use crate::{context::CommandContext, options::FormatOptions};

#[derive(Args, Debug)]
#[command(about = "Look up a value from root property files and the environment")]
pub struct EnvArgs {
    /// Property or environment variable name
    key: String,

    /// Value printed when the key is not set
    #[arg(short, long)]
    default: Option<String>,

    #[arg(long, default_value = "stdout")]
    format: FormatOptions,
}

/// Print the overlay value of a key
///
/// # Errors
/// Returns error if the key is unset and no default was given.
pub async fn handle_env(args: &EnvArgs) -> Result<()> {
    let root = find_project_root(&CommandContext::current_dir()?);
    let mut overlay = PropertyOverlay::new(&root);
    let value = resolve(&mut overlay, args).await?;
    println!("{}", render(args, &value)?);
    Ok(())
}

/// The bare value, or a one-entry JSON object keyed by the looked-up name.
fn render(args: &EnvArgs, value: &str) -> Result<String> {
    let json = serde_json::to_string(&BTreeMap::from([(&args.key, value)]))?;
    Ok(args.format.select(value, &json).to_string())
}

async fn resolve(overlay: &mut PropertyOverlay, args: &EnvArgs) -> Result<String> {
    match (overlay.lookup(&args.key).await, &args.default) {
        (Some(value), _) => Ok(value),
        (None, Some(default)) => Ok(default.clone()),
        (None, None) => Err(anyhow::anyhow!("{} is not set", args.key)),
    }
}
