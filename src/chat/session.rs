use super::message::Message;
use super::store::MessageStore;
use crate::backend::ConversationId;
use crate::i18n::{Language, WELCOME_MESSAGE};

/// Request lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Pending,
}

/// State of the single active conversation.
///
/// Only `SessionController` mutates a session; everything else reads it.
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) messages: MessageStore,
    pub(super) language: Language,
    pub(super) conversation_id: Option<ConversationId>,
    pub(super) pending: bool,
    pub(super) draft: String,
    pub(super) revision: u64,
}

impl Session {
    /// Starts a session holding only the bilingual welcome message.
    pub fn new(language: Language) -> Self {
        let mut messages = MessageStore::new();
        messages.append(Message::welcome(WELCOME_MESSAGE));

        Self {
            messages,
            language,
            conversation_id: None,
            pending: false,
            draft: String::new(),
            revision: 0,
        }
    }

    pub const fn messages(&self) -> &MessageStore {
        &self.messages
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub const fn conversation_id(&self) -> Option<&ConversationId> {
        self.conversation_id.as_ref()
    }

    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    pub const fn state(&self) -> TurnState {
        if self.pending {
            TurnState::Pending
        } else {
            TurnState::Idle
        }
    }

    /// Staged input text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Incremented on every append; the view re-scrolls when it changes.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// True until the first turn has been submitted.
    pub fn is_fresh(&self) -> bool {
        self.messages.len() <= 1
    }

    pub(super) fn append(&mut self, message: Message) {
        self.messages.append(message);
        self.revision += 1;
    }
}
