//! The complaint conversation: transcript, session state, controller, and view.

/// Slash command parsing and autocomplete.
pub mod command;
pub mod controller;
mod message;
mod repl;
mod session;
mod store;
mod ui;
pub mod view;

pub use controller::{RejectReason, SessionController, SubmitOutcome, SubmitTrigger};
pub use message::{ClassificationMetadata, DetectedLanguage, Message, MessageId, Role, Urgency};
pub use repl::ChatRepl;
pub use session::{Session, TurnState};
pub use store::MessageStore;
