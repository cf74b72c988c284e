//! Rendering of session state for the terminal.
//!
//! Everything here reads a `Session` and produces text; nothing mutates it.

use unicode_width::UnicodeWidthStr;

use super::message::{ClassificationMetadata, DetectedLanguage, Message, Role, Urgency};
use super::session::Session;
use crate::i18n::{Language, QuickActionKind, strings};
use crate::ui::Style;

/// Terminal columns the transcript is laid out in.
pub const DEFAULT_WIDTH: usize = 72;

/// A single classification tag shown above an assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    IssueType(String),
    Urgency(Urgency),
    Language(DetectedLanguage),
}

impl Badge {
    /// Plain badge text, without styling.
    pub fn text(&self) -> String {
        match self {
            Self::IssueType(issue) => issue.clone(),
            Self::Urgency(urgency) => match urgency {
                Urgency::High => format!("⚠️ {}", urgency.as_str()),
                Urgency::Emergency => format!("🚨 {}", urgency.as_str()),
                _ => urgency.as_str().to_string(),
            },
            Self::Language(DetectedLanguage::Ms) => "🇲🇾 MS".to_string(),
            Self::Language(_) => "🇬🇧 EN".to_string(),
        }
    }

    pub fn render(&self) -> String {
        let text = self.text();
        match self {
            Self::IssueType(_) => Style::badge_info(text),
            Self::Urgency(Urgency::High | Urgency::Emergency) => Style::badge_alert(text),
            Self::Urgency(Urgency::Medium) => Style::badge_caution(text),
            Self::Urgency(_) => Style::badge_calm(text),
            Self::Language(_) => Style::badge_neutral(text),
        }
    }
}

/// Badges for the fields that are present and not `unknown`.
pub fn badges(metadata: &ClassificationMetadata) -> Vec<Badge> {
    let mut badges = Vec::new();
    if let Some(issue) = metadata.known_issue_type() {
        badges.push(Badge::IssueType(issue.to_string()));
    }
    if let Some(urgency) = metadata.known_urgency() {
        badges.push(Badge::Urgency(urgency));
    }
    if let Some(language) = metadata.known_language() {
        badges.push(Badge::Language(language));
    }
    badges
}

/// Renders one message bubble: user messages on the right, assistant on the left.
pub fn render_message(message: &Message, width: usize) -> String {
    let bubble_width = (width * 4 / 5).max(20);
    let time = message.timestamp.format("%H:%M").to_string();

    let mut lines: Vec<(String, String)> = Vec::new();

    if message.role == Role::Assistant
        && let Some(metadata) = &message.metadata
    {
        let tags = badges(metadata);
        if !tags.is_empty() {
            let plain = tags.iter().map(|b| format!("[{}]", b.text())).collect::<Vec<_>>();
            let styled = tags.iter().map(Badge::render).collect::<Vec<_>>();
            lines.push((plain.join(" "), styled.join(" ")));
        }
    }

    for line in wrap(&message.content, bubble_width) {
        lines.push((line.clone(), line));
    }

    let marker = match message.role {
        Role::User => Style::user("❯"),
        Role::Assistant => Style::assistant("◆"),
    };
    lines.push((format!("  {time}"), format!("  {}", Style::secondary(&time))));

    let mut out = String::new();
    for (i, (plain, styled)) in lines.iter().enumerate() {
        let lead = if i == 0 { format!("{marker} ") } else { "  ".to_string() };
        let indent = match message.role {
            Role::User => width.saturating_sub(plain.width() + 2),
            Role::Assistant => 0,
        };
        out.push_str(&" ".repeat(indent));
        out.push_str(&lead);
        out.push_str(styled);
        out.push('\n');
    }
    out
}

/// Title, subtitle, and the language toggle hint.
pub fn render_header(language: Language) -> String {
    let t = strings(language);
    format!(
        "{}  {}\n{}\n",
        Style::header(t.title),
        Style::hint(format!("/lang → {}", language.toggle_label())),
        Style::secondary(t.subtitle)
    )
}

/// Quick example shortcuts, one slash command per line.
pub fn render_quick_actions(language: Language) -> String {
    let t = strings(language);
    let mut out = format!("{}\n", Style::label(t.examples));
    for kind in QuickActionKind::ALL {
        let command = format!("/{}", kind.command());
        out.push_str(&format!(
            "  {} {}\n",
            Style::command(format!("{command:<14}")),
            kind.label(language)
        ));
    }
    out
}

/// Quick actions are offered only before the first turn.
pub fn show_quick_actions(session: &Session) -> bool {
    session.is_fresh()
}

pub const fn show_pending_indicator(session: &Session) -> bool {
    session.is_pending()
}

pub const fn input_enabled(session: &Session) -> bool {
    !session.is_pending()
}

pub fn send_enabled(session: &Session) -> bool {
    input_enabled(session) && !session.draft().trim().is_empty()
}

/// Keeps the terminal scrolled to the newest message by emitting each message once.
#[derive(Debug)]
pub struct TranscriptView {
    rendered: usize,
    width: usize,
}

impl TranscriptView {
    pub const fn new(width: usize) -> Self {
        Self { rendered: 0, width }
    }

    /// Renders the messages appended since the last call.
    ///
    /// Returns `None` when the transcript length has not changed.
    pub fn render_new(&mut self, session: &Session) -> Option<String> {
        let messages = session.messages().as_slice();
        if messages.len() <= self.rendered {
            return None;
        }

        let out = messages[self.rendered..]
            .iter()
            .map(|m| render_message(m, self.width))
            .collect::<Vec<_>>()
            .join("\n");
        self.rendered = messages.len();
        Some(out)
    }
}

fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        let mut current = String::new();
        for word in raw.split_whitespace() {
            if !current.is_empty() && current.width() + 1 + word.width() > max {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
