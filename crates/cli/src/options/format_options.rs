use clap::ValueEnum;

/// CLI output format selection.
///
/// Controls whether commands print human-readable output or JSON for CI integration.
#[derive(Debug, Clone, ValueEnum)]
pub enum FormatOptions {
    /// JSON format for CI/CD pipelines
    #[value(name = "json")]
    Json,
    /// Human-readable colored terminal output
    #[value(name = "stdout")]
    Stdout,
}

impl FormatOptions {
    /// The message matching this format.
    pub fn select<'a>(&self, stdout_msg: &'a str, json_msg: &'a str) -> &'a str {
        match self {
            Self::Stdout => stdout_msg,
            Self::Json => json_msg,
        }
    }
}
