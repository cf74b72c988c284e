use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aduan")]
#[command(about = "Report issues to your local council, in English or Bahasa Malaysia")]
#[command(version)]
pub struct Args {
    /// Council chat service base URL
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Language to start in (en, ms)
    #[arg(short = 'l', long = "lang", global = true)]
    pub lang: Option<String>,

    /// Suppress status messages and the progress spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print diagnostic logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start a complaint conversation (default)
    Chat,
    /// Configure the default endpoint and language
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported language codes
    Languages,
}
