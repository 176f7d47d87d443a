use anyhow::Result;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::commands::{
    CheckArgs, ConfigArgs, EnvArgs, InitArgs, JavadocArgs, PomArgs, handle_check, handle_config,
    handle_env, handle_init, handle_javadoc, handle_pom,
};
pub mod commands;
pub mod context;
pub mod options;

#[derive(Parser, Debug)]
#[command(
    name = "pomkit",
    author,
    version,
    about = "Layered build properties and Maven publication metadata for JVM libraries",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Init(InitArgs),
    Config(ConfigArgs),
    Env(EnvArgs),
    Pom(PomArgs),
    Javadoc(JavadocArgs),
    Check(CheckArgs),
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    // Already initialized when main runs more than once in a process
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Init(args) => handle_init(&args).await?,
        Commands::Config(args) => handle_config(&args).await?,
        Commands::Env(args) => handle_env(&args).await?,
        Commands::Pom(args) => handle_pom(&args).await?,
        Commands::Javadoc(args) => handle_javadoc(&args).await?,
        Commands::Check(args) => handle_check(&args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "warn")]
    #[case(1, "info")]
    #[case(2, "debug")]
    #[case(5, "debug")]
    fn test_default_log_level(#[case] verbose: u8, #[case] expected: &str) {
        assert_eq!(default_log_level(verbose), expected);
    }

    #[test]
    fn test_cli_parsing_init() {
        let cli = Cli::parse_from(["pomkit", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parsing_config() {
        let cli = Cli::parse_from(["pomkit", "config"]);
        assert!(matches!(cli.command, Commands::Config(_)));
    }

    #[test]
    fn test_cli_parsing_env() {
        let cli = Cli::parse_from(["pomkit", "env", "SIGNING_KEY_ID"]);
        assert!(matches!(cli.command, Commands::Env(_)));
    }

    #[test]
    fn test_cli_parsing_pom() {
        let cli = Cli::parse_from(["pomkit", "pom", "--write"]);
        assert!(matches!(cli.command, Commands::Pom(_)));
    }

    #[test]
    fn test_cli_parsing_javadoc() {
        let cli = Cli::parse_from(["pomkit", "javadoc", "-p", "release"]);
        assert!(matches!(cli.command, Commands::Javadoc(_)));
    }

    #[test]
    fn test_cli_parsing_check_with_verbose() {
        let cli = Cli::parse_from(["pomkit", "check", "-vv", "--format", "json"]);
        assert!(matches!(cli.command, Commands::Check(_)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["pomkit"]).is_err());
    }
}
