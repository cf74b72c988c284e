use anyhow::Result;
use clap::Parser;

use aduan_cli::cli::commands::{chat, configure};
use aduan_cli::cli::{Args, Command};
use aduan_cli::i18n::{Language, print_languages};
use aduan_cli::logging;
use aduan_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose);

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Chat) | None => {
            let language = args
                .lang
                .as_deref()
                .map(str::parse::<Language>)
                .transpose()?;

            let options = chat::ChatOptions {
                endpoint: args.endpoint,
                language,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}
