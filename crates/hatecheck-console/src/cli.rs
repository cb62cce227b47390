use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hatecheck")]
#[command(
    author,
    version,
    about = "Classify text as hate speech, offensive language, or neither"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "hatecheck.yaml")]
    pub config: String,

    /// Classification service base URL
    #[arg(short, long, global = true, env = "HATECHECK_BASE_URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (0 = wait forever)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Do not render a placeholder result when the service call fails
    #[arg(long, global = true)]
    pub no_fallback: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the classification service is up
    Probe,

    /// Classify one piece of text and exit
    Analyze {
        /// Text to classify
        #[arg(short, long)]
        text: String,
    },

    /// Interactive session: probe once, then read text from stdin
    Interactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_with_overrides() {
        let cli = Cli::parse_from([
            "hatecheck",
            "analyze",
            "--text",
            "some words",
            "--base-url",
            "http://127.0.0.1:5001",
            "--no-fallback",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:5001"));
        assert!(cli.no_fallback);
        assert!(matches!(cli.command, Commands::Analyze { ref text } if text == "some words"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["hatecheck", "probe"]);
        assert_eq!(cli.config, "hatecheck.yaml");
        assert_eq!(cli.timeout_secs, None);
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Probe));
    }
}
