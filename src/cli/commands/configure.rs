//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::validator::Validation;
use inquire::{CustomUserError, Select, Text};

use crate::config::{AduanConfig, ConfigFile, ConfigManager, validate_endpoint};
use crate::i18n::{Language, SUPPORTED_LANGUAGES};
use crate::status;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current defaults. Otherwise prompts for the
/// endpoint and starting language and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        let config = manager.load_or_default()?;
        print_current_defaults(&config);
        println!(
            "  {}      {}",
            Style::label("file"),
            Style::secondary(manager.config_path().display())
        );
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);
    println!();

    let endpoint = prompt_endpoint(config.aduan.endpoint.as_deref())?;
    let language = select_language(config.aduan.language)?;

    config.aduan = AduanConfig {
        endpoint: Some(endpoint),
        language: Some(language),
    };

    manager.save(&config)?;

    println!();
    status!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config
            .aduan
            .endpoint
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("language"),
        config
            .aduan
            .language
            .map_or_else(|| Style::secondary("(not set, en)"), Style::value)
    );
}

fn prompt_endpoint(default: Option<&str>) -> Result<String> {
    let mut prompt = Text::new("Chat service endpoint:")
        .with_help_message("Base URL, e.g. http://localhost:3000")
        .with_validator(|input: &str| {
            let validation = validate_endpoint(input.trim()).map_or_else(
                |e| Validation::Invalid(e.to_string().into()),
                |()| Validation::Valid,
            );
            Ok::<_, CustomUserError>(validation)
        });

    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    Ok(prompt.prompt()?.trim().to_string())
}

fn select_language(default: Option<Language>) -> Result<Language> {
    let options: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect();

    let default_index = default
        .and_then(|d| SUPPORTED_LANGUAGES.iter().position(|(code, _)| *code == d.code()))
        .unwrap_or(0);

    let selection = Select::new("Starting language:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    let code = selection.split(" - ").next().unwrap_or("en");
    code.parse()
}
