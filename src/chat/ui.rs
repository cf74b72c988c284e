//! Chat mode UI components.

use crate::backend::ConversationId;
use crate::i18n::{Language, QuickActionKind, strings};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_banner() {
    println!(
        "{} {}",
        Style::header("aduan"),
        Style::version(format!("v{VERSION}"))
    );
}

pub fn print_goodbye(language: Language) {
    let text = match language {
        Language::En => "Goodbye!",
        Language::Ms => "Selamat tinggal!",
    };
    println!("{}", Style::success(text));
}

pub fn print_config(endpoint: &str, language: Language, conversation_id: Option<&ConversationId>) {
    println!("{}", Style::header("Session"));
    println!(
        "  {}      {}",
        Style::label("endpoint"),
        Style::secondary(endpoint)
    );
    println!(
        "  {}      {}",
        Style::label("language"),
        Style::value(language)
    );
    println!(
        "  {}  {}",
        Style::label("conversation"),
        conversation_id.map_or_else(|| Style::secondary("(not started)"), Style::value)
    );
    println!();
}

pub fn print_help(language: Language) {
    let t = strings(language);
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}         {}",
        Style::command("/lang"),
        Style::secondary("Toggle language, or /lang en | /lang ms")
    );
    for kind in QuickActionKind::ALL {
        println!(
            "  {}  {}",
            Style::command(format!("{:<12}", format!("/{}", kind.command()))),
            Style::secondary(format!(
                "{} (before the first message only)",
                t.example(kind)
            ))
        );
    }
    println!(
        "  {}       {}",
        Style::command("/config"),
        Style::secondary("Show current session settings")
    );
    println!(
        "  {}         {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}         {}",
        Style::command("/quit"),
        Style::secondary("Exit")
    );
    println!();
}

pub fn print_language_changed(language: Language) {
    println!(
        "{} Language set to {}\n",
        Style::success("✓"),
        Style::value(language)
    );
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
