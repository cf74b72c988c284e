use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::controller::{RejectReason, SessionController, SubmitTrigger};
use super::ui;
use super::view::{self, TranscriptView};
use crate::backend::{ChatRequest, ComplaintService};
use crate::i18n::{Language, QuickActionKind, strings};
use crate::ui::{Spinner, is_prompt_cancelled};

/// Interactive terminal front end for one complaint conversation.
///
/// Reads intents from the prompt, hands them to the controller, and prints
/// whatever the transcript gained.
pub struct ChatRepl<S> {
    controller: SessionController<S>,
    transcript: TranscriptView,
    endpoint: String,
}

impl<S: ComplaintService> ChatRepl<S> {
    pub fn new(controller: SessionController<S>, endpoint: String) -> Self {
        Self {
            controller,
            transcript: TranscriptView::new(view::DEFAULT_WIDTH),
            endpoint,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_banner();
        self.print_header();
        self.print_transcript();
        self.print_quick_actions();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let t = strings(self.language());
            let input = Text::new("")
                .with_render_config(render_config)
                .with_placeholder(t.placeholder)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(&format!(
                    "Enter to {}, /help for commands, Ctrl+C to quit",
                    t.send.to_lowercase()
                ))
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.controller.set_draft(text);
                        if self.controller.can_submit() {
                            let started = self.controller.begin_submit_draft();
                            self.run_turn(started).await;
                        }
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye(self.language());
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                let session = self.controller.session();
                ui::print_config(
                    &self.endpoint,
                    session.language(),
                    session.conversation_id(),
                );
            }
            SlashCommand::Help => ui::print_help(self.language()),
            SlashCommand::Quit => return false,
            SlashCommand::Lang(language) => {
                match language {
                    Some(language) => self.controller.set_language(language),
                    None => {
                        self.controller.toggle_language();
                    }
                }
                ui::print_language_changed(self.language());
                self.print_header();
                self.print_quick_actions();
            }
            SlashCommand::InvalidLang(code) => {
                ui::print_error(&format!("Unknown language: {code} (use en or ms)"));
            }
            SlashCommand::QuickAction(kind) => self.run_quick_action(kind).await,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    async fn run_quick_action(&mut self, kind: QuickActionKind) {
        let text = kind.query(self.language());
        let started = self
            .controller
            .begin_submit(text, SubmitTrigger::QuickAction(kind));
        self.run_turn(started).await;
    }

    /// Runs one turn, showing the pending indicator while the service works.
    async fn run_turn(&mut self, started: Result<ChatRequest, RejectReason>) {
        let request = match started {
            Ok(request) => request,
            Err(RejectReason::QuickActionsUnavailable) => {
                ui::print_error(&RejectReason::QuickActionsUnavailable.to_string());
                return;
            }
            Err(_) => return,
        };
        self.print_transcript();

        let spinner = view::show_pending_indicator(self.controller.session())
            .then(|| Spinner::new("..."));
        let result = self.controller.service().send(&request).await;
        if let Some(spinner) = spinner {
            spinner.stop();
        }

        self.controller.complete_submit(result);
        self.print_transcript();
    }

    fn print_header(&self) {
        println!("{}", view::render_header(self.language()));
    }

    fn print_quick_actions(&self) {
        if view::show_quick_actions(self.controller.session()) {
            println!("{}", view::render_quick_actions(self.language()));
        }
    }

    fn print_transcript(&mut self) {
        if let Some(rendered) = self.transcript.render_new(self.controller.session()) {
            println!("{rendered}");
        }
    }

    const fn language(&self) -> Language {
        self.controller.session().language()
    }
}
