use inquire::autocompletion::{Autocomplete, Replacement};

use crate::i18n::{Language, QuickActionKind};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current session settings"),
    ("/garbage", "Report uncollected garbage"),
    ("/help", "Show available commands"),
    ("/lang", "Switch language (en / ms)"),
    ("/parking", "Report illegal parking"),
    ("/pothole", "Report a pothole"),
    ("/quit", "Exit"),
    ("/streetlight", "Report a broken streetlight"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    Quit,
    /// Toggle when no language is given.
    Lang(Option<Language>),
    /// Language argument that is not a supported code.
    InvalidLang(String),
    QuickAction(QuickActionKind),
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

/// Classifies one line of prompt input.
///
/// Complaint text is returned as typed; only blank lines count as empty.
pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    let command = match parts.as_slice() {
        ["config"] => SlashCommand::Config,
        ["help"] => SlashCommand::Help,
        ["quit" | "exit" | "q"] => SlashCommand::Quit,
        ["lang"] => SlashCommand::Lang(None),
        ["lang", code] => code
            .parse()
            .map_or_else(|_| SlashCommand::InvalidLang((*code).to_string()), |lang| {
                SlashCommand::Lang(Some(lang))
            }),
        [name] => QuickActionKind::from_command(name)
            .map_or_else(|| SlashCommand::Unknown(parts.join(" ")), SlashCommand::QuickAction),
        _ => SlashCommand::Unknown(parts.join(" ")),
    };

    Input::Command(command)
}
