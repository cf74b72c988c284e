//! The session controller: the single writer of conversation state.
//!
//! A turn runs `Idle -> Pending -> Idle`. `begin_submit` performs the
//! synchronous half (append the user message, clear the draft, mark pending
//! and build the outbound request); `complete_submit` folds the service result
//! back in. `submit` runs both halves around the service call.

use anyhow::Result;

use super::message::Message;
use super::session::Session;
use super::view;
use crate::backend::{ChatRequest, ChatResponse, ComplaintService, ConversationId};
use crate::i18n::{APOLOGY_MESSAGE, Language, QuickActionKind};

/// What caused a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    Typed,
    QuickAction(QuickActionKind),
}

/// Why a submission was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("message is empty")]
    Empty,
    #[error("a request is already pending")]
    Pending,
    #[error("quick examples are only available before the conversation starts")]
    QuickActionsUnavailable,
    #[error("no turn is pending")]
    NotPending,
}

/// Result of one `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service replied and its answer was appended.
    Replied,
    /// The turn failed and the apology was appended.
    Failed,
    /// Nothing happened.
    Rejected(RejectReason),
}

pub struct SessionController<S> {
    session: Session,
    service: S,
}

impl<S: ComplaintService> SessionController<S> {
    /// Creates the session with its welcome message.
    pub fn new(language: Language, service: S) -> Self {
        Self {
            session: Session::new(language),
            service,
        }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Changes the language used for UI strings and subsequent requests.
    pub fn set_language(&mut self, language: Language) {
        tracing::debug!(from = %self.session.language, to = %language, "language changed");
        self.session.language = language;
    }

    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.session.language.toggle());
        self.session.language
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.session.draft = text.into();
    }

    /// Whether the send affordance should be enabled for the staged draft.
    pub fn can_submit(&self) -> bool {
        view::send_enabled(&self.session)
    }

    /// Starts a turn. On rejection the session is left untouched.
    pub fn begin_submit(
        &mut self,
        text: &str,
        trigger: SubmitTrigger,
    ) -> Result<ChatRequest, RejectReason> {
        if let Err(reason) = self.check_submit(text, trigger) {
            tracing::debug!(%reason, ?trigger, "submission ignored");
            return Err(reason);
        }

        self.session.append(Message::user(text));
        self.session.draft.clear();
        self.session.pending = true;

        tracing::debug!(
            ?trigger,
            language = %self.session.language,
            conversation_id = ?self.session.conversation_id,
            "dispatching turn"
        );

        Ok(ChatRequest {
            message: text.to_string(),
            language: self.session.language,
            conversation_id: self.session.conversation_id.clone(),
        })
    }

    /// Starts a turn from the staged draft as typed input.
    pub fn begin_submit_draft(&mut self) -> Result<ChatRequest, RejectReason> {
        let text = self.session.draft.clone();
        self.begin_submit(&text, SubmitTrigger::Typed)
    }

    /// Finishes the pending turn with the service result.
    ///
    /// Always clears the pending flag. Ignored when no turn is pending.
    pub fn complete_submit(&mut self, result: Result<ChatResponse>) -> SubmitOutcome {
        if !self.session.pending {
            tracing::warn!("completion received with no pending turn");
            return SubmitOutcome::Rejected(RejectReason::NotPending);
        }

        let outcome = match result {
            Ok(reply) => {
                self.adopt_conversation_id(reply.conversation_id);
                self.session
                    .append(Message::assistant(reply.response, reply.metadata));
                SubmitOutcome::Replied
            }
            Err(err) => {
                tracing::warn!("turn failed: {err:#}");
                self.session.append(Message::assistant(APOLOGY_MESSAGE, None));
                SubmitOutcome::Failed
            }
        };

        self.session.pending = false;
        outcome
    }

    /// Runs a full turn against the service.
    pub async fn submit(&mut self, text: &str, trigger: SubmitTrigger) -> SubmitOutcome {
        let started = self.begin_submit(text, trigger);
        self.run_started(started).await
    }

    /// Submits the staged draft as typed input.
    pub async fn submit_draft(&mut self) -> SubmitOutcome {
        let started = self.begin_submit_draft();
        self.run_started(started).await
    }

    /// Submits a quick-action phrase in the current language.
    pub async fn submit_quick_action(&mut self, kind: QuickActionKind) -> SubmitOutcome {
        let text = kind.query(self.session.language);
        self.submit(text, SubmitTrigger::QuickAction(kind)).await
    }

    async fn run_started(
        &mut self,
        started: Result<ChatRequest, RejectReason>,
    ) -> SubmitOutcome {
        let request = match started {
            Ok(request) => request,
            Err(reason) => return SubmitOutcome::Rejected(reason),
        };

        let result = self.service.send(&request).await;
        self.complete_submit(result)
    }

    fn check_submit(&self, text: &str, trigger: SubmitTrigger) -> Result<(), RejectReason> {
        if self.session.pending {
            return Err(RejectReason::Pending);
        }
        if text.trim().is_empty() {
            return Err(RejectReason::Empty);
        }
        if matches!(trigger, SubmitTrigger::QuickAction(_)) && !self.session.is_fresh() {
            return Err(RejectReason::QuickActionsUnavailable);
        }
        Ok(())
    }

    fn adopt_conversation_id(&mut self, issued: Option<ConversationId>) {
        // An empty id means the backend did not start a conversation.
        let Some(issued) = issued.filter(|id| !id.as_str().is_empty()) else {
            return;
        };

        match &self.session.conversation_id {
            None => {
                tracing::debug!(conversation_id = %issued, "conversation started");
                self.session.conversation_id = Some(issued);
            }
            Some(current) if *current != issued => {
                tracing::warn!(
                    current = %current,
                    issued = %issued,
                    "ignoring different conversation id for an active conversation"
                );
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::chat::{ClassificationMetadata, DetectedLanguage, Role, TurnState, Urgency};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replies from a fixed script and records every request it receives.
    #[derive(Default)]
    struct ScriptedService {
        replies: Mutex<VecDeque<Result<ChatResponse>>>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedService {
        fn with_replies(replies: Vec<Result<ChatResponse>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::default(),
            }
        }

        fn requests(&self) -> Vec<ChatRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ComplaintService for ScriptedService {
        async fn send(&self, request: &ChatRequest) -> Result<ChatResponse> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow::anyhow!("no scripted reply")))
        }
    }

    fn reply(text: &str, conversation_id: Option<&str>) -> Result<ChatResponse> {
        Ok(ChatResponse {
            response: text.to_string(),
            conversation_id: conversation_id.map(ConversationId::new),
            metadata: None,
        })
    }

    fn pothole_reply() -> Result<ChatResponse> {
        Ok(ChatResponse {
            response: "I've noted the pothole. Which street is it on?".to_string(),
            conversation_id: Some(ConversationId::new("abc123")),
            metadata: Some(ClassificationMetadata {
                issue_type: Some("pothole".to_string()),
                urgency: Some(Urgency::Medium),
                language: Some(DetectedLanguage::En),
            }),
        })
    }

    #[tokio::test]
    async fn test_first_turn_adopts_conversation_id() {
        let service = ScriptedService::with_replies(vec![pothole_reply()]);
        let mut controller = SessionController::new(Language::En, service);

        let outcome = controller
            .submit("There's a pothole on my street", SubmitTrigger::Typed)
            .await;

        assert_eq!(outcome, SubmitOutcome::Replied);

        let requests = controller.service().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].message, "There's a pothole on my street");
        assert_eq!(requests[0].language, Language::En);
        assert!(requests[0].conversation_id.is_none());

        let session = controller.session();
        assert_eq!(session.messages().len(), 3);
        let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, [Role::Assistant, Role::User, Role::Assistant]);

        let metadata = session.messages().last().unwrap().metadata.clone().unwrap();
        assert_eq!(metadata.known_issue_type(), Some("pothole"));
        assert_eq!(metadata.known_urgency(), Some(Urgency::Medium));
        assert_eq!(metadata.known_language(), Some(DetectedLanguage::En));

        assert_eq!(
            session.conversation_id().map(ConversationId::as_str),
            Some("abc123")
        );
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn test_second_turn_sends_conversation_id_after_language_switch() {
        let service =
            ScriptedService::with_replies(vec![pothole_reply(), reply("Terima kasih", None)]);
        let mut controller = SessionController::new(Language::En, service);

        controller
            .submit("There's a pothole on my street", SubmitTrigger::Typed)
            .await;
        controller.set_language(Language::Ms);
        controller
            .submit("Jalan Universiti", SubmitTrigger::Typed)
            .await;

        let requests = controller.service().requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].language, Language::Ms);
        assert_eq!(
            requests[1].conversation_id,
            Some(ConversationId::new("abc123"))
        );
    }

    #[tokio::test]
    async fn test_conversation_id_is_fixed_once_adopted() {
        let service = ScriptedService::with_replies(vec![
            reply("one", Some("abc123")),
            reply("two", Some("zzz999")),
            reply("three", None),
        ]);
        let mut controller = SessionController::new(Language::En, service);

        for text in ["first", "second", "third"] {
            controller.submit(text, SubmitTrigger::Typed).await;
            assert_eq!(
                controller
                    .session()
                    .conversation_id()
                    .map(ConversationId::as_str),
                Some("abc123")
            );
        }

        let requests = controller.service().requests();
        assert!(requests[1..]
            .iter()
            .all(|r| r.conversation_id == Some(ConversationId::new("abc123"))));
    }

    #[tokio::test]
    async fn test_empty_conversation_id_is_not_adopted() {
        let service = ScriptedService::with_replies(vec![
            reply("one", Some("")),
            reply("two", Some("abc123")),
            reply("three", None),
        ]);
        let mut controller = SessionController::new(Language::En, service);

        controller.submit("a", SubmitTrigger::Typed).await;
        assert!(controller.session().conversation_id().is_none());

        controller.submit("b", SubmitTrigger::Typed).await;
        controller.submit("c", SubmitTrigger::Typed).await;

        assert_eq!(
            controller
                .session()
                .conversation_id()
                .map(ConversationId::as_str),
            Some("abc123")
        );

        let requests = controller.service().requests();
        assert!(requests[1].conversation_id.is_none());
        assert_eq!(
            requests[2].conversation_id,
            Some(ConversationId::new("abc123"))
        );
    }

    #[tokio::test]
    async fn test_failure_appends_apology_and_clears_pending() {
        let service =
            ScriptedService::with_replies(vec![Err(anyhow::anyhow!("connection refused"))]);
        let mut controller = SessionController::new(Language::En, service);

        let outcome = controller
            .submit("Broken streetlight", SubmitTrigger::Typed)
            .await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        let session = controller.session();
        assert_eq!(session.messages().len(), 3);
        let last = session.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, APOLOGY_MESSAGE);
        assert!(last.metadata.is_none());
        assert!(!session.is_pending());
        assert!(session.conversation_id().is_none());
    }

    #[tokio::test]
    async fn test_can_continue_after_failure() {
        let service = ScriptedService::with_replies(vec![
            Err(anyhow::anyhow!("timeout")),
            reply("Got it", Some("abc123")),
        ]);
        let mut controller = SessionController::new(Language::En, service);

        controller.submit("first try", SubmitTrigger::Typed).await;
        let outcome = controller.submit("second try", SubmitTrigger::Typed).await;

        assert_eq!(outcome, SubmitOutcome::Replied);
        assert_eq!(controller.session().messages().len(), 5);
        assert_eq!(controller.service().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_and_whitespace_submissions_are_ignored() {
        let mut controller = SessionController::new(Language::En, ScriptedService::default());

        for text in ["", "   ", "\n\t"] {
            let outcome = controller.submit(text, SubmitTrigger::Typed).await;
            assert_eq!(outcome, SubmitOutcome::Rejected(RejectReason::Empty));
        }

        assert_eq!(controller.session().messages().len(), 1);
        assert!(controller.service().requests().is_empty());
        assert_eq!(controller.session().revision(), 0);
    }

    #[tokio::test]
    async fn test_submit_while_pending_is_rejected() {
        let service = ScriptedService::with_replies(vec![reply("ok", Some("abc123"))]);
        let mut controller = SessionController::new(Language::En, service);

        let request = controller
            .begin_submit("Illegal parking", SubmitTrigger::Typed)
            .unwrap();
        assert_eq!(controller.session().state(), TurnState::Pending);
        let len = controller.session().messages().len();

        let outcome = controller.submit("again", SubmitTrigger::Typed).await;
        assert_eq!(outcome, SubmitOutcome::Rejected(RejectReason::Pending));
        assert_eq!(controller.session().messages().len(), len);
        assert!(controller.service().requests().is_empty());

        let result = controller.service().send(&request).await;
        assert_eq!(controller.complete_submit(result), SubmitOutcome::Replied);
        assert_eq!(controller.session().state(), TurnState::Idle);
        assert_eq!(controller.service().requests().len(), 1);
    }

    #[test]
    fn test_begin_submit_appends_user_message_and_clears_draft() {
        let mut controller = SessionController::new(Language::En, ScriptedService::default());
        controller.set_draft("Garbage not collected");

        let request = controller
            .begin_submit("Garbage not collected", SubmitTrigger::Typed)
            .unwrap();

        let session = controller.session();
        assert_eq!(request.message, "Garbage not collected");
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages().last().unwrap().role, Role::User);
        assert!(session.draft().is_empty());
        assert!(session.is_pending());
        assert_eq!(session.revision(), 1);
    }

    #[test]
    fn test_complete_without_pending_is_ignored() {
        let mut controller = SessionController::new(Language::En, ScriptedService::default());

        let outcome = controller.complete_submit(reply("stray", Some("abc123")));

        assert_eq!(outcome, SubmitOutcome::Rejected(RejectReason::NotPending));
        assert_eq!(controller.session().messages().len(), 1);
        assert!(controller.session().conversation_id().is_none());
    }

    #[tokio::test]
    async fn test_set_language_keeps_history_and_conversation() {
        let service = ScriptedService::with_replies(vec![reply("ok", Some("abc123"))]);
        let mut controller = SessionController::new(Language::En, service);
        controller.submit("hello", SubmitTrigger::Typed).await;

        let before: Vec<String> = controller
            .session()
            .messages()
            .iter()
            .map(|m| m.content.clone())
            .collect();
        let revision = controller.session().revision();

        assert_eq!(controller.toggle_language(), Language::Ms);

        let after: Vec<String> = controller
            .session()
            .messages()
            .iter()
            .map(|m| m.content.clone())
            .collect();
        assert_eq!(before, after);
        assert_eq!(controller.session().revision(), revision);
        assert_eq!(
            controller
                .session()
                .conversation_id()
                .map(ConversationId::as_str),
            Some("abc123")
        );
        assert_eq!(controller.service().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_draft_uses_staged_text() {
        let service = ScriptedService::with_replies(vec![reply("ok", None)]);
        let mut controller = SessionController::new(Language::En, service);

        controller.set_draft("   ");
        assert!(!controller.can_submit());
        assert_eq!(
            controller.submit_draft().await,
            SubmitOutcome::Rejected(RejectReason::Empty)
        );

        controller.set_draft("Noisy construction at night");
        assert!(controller.can_submit());
        assert_eq!(controller.submit_draft().await, SubmitOutcome::Replied);
        assert!(controller.session().draft().is_empty());
        assert_eq!(
            controller.service().requests()[0].message,
            "Noisy construction at night"
        );
    }

    #[test]
    fn test_begin_submit_draft_keeps_draft_on_rejection() {
        let mut controller = SessionController::new(Language::En, ScriptedService::default());

        controller.set_draft("Broken drain cover");
        let request = controller.begin_submit_draft().unwrap();
        assert_eq!(request.message, "Broken drain cover");
        assert!(controller.session().draft().is_empty());

        controller.set_draft("Still waiting");
        assert!(!controller.can_submit());
        assert_eq!(
            controller.begin_submit_draft().unwrap_err(),
            RejectReason::Pending
        );
        assert_eq!(controller.session().draft(), "Still waiting");
        assert_eq!(controller.session().messages().len(), 2);
    }

    #[tokio::test]
    async fn test_quick_action_uses_current_language() {
        let service = ScriptedService::with_replies(vec![reply("ok", Some("abc123"))]);
        let mut controller = SessionController::new(Language::Ms, service);

        let outcome = controller
            .submit_quick_action(QuickActionKind::Streetlight)
            .await;

        assert_eq!(outcome, SubmitOutcome::Replied);
        let requests = controller.service().requests();
        assert_eq!(requests[0].message, "Lampu jalan rosak dekat rumah saya");
        assert_eq!(requests[0].language, Language::Ms);
    }

    #[tokio::test]
    async fn test_quick_action_unavailable_after_first_turn() {
        let service = ScriptedService::with_replies(vec![reply("ok", None)]);
        let mut controller = SessionController::new(Language::En, service);
        controller.submit("hello", SubmitTrigger::Typed).await;

        let outcome = controller
            .submit_quick_action(QuickActionKind::Parking)
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(RejectReason::QuickActionsUnavailable)
        );
        assert_eq!(controller.session().messages().len(), 3);
    }

    #[tokio::test]
    async fn test_message_ids_unique_across_turns() {
        let service = ScriptedService::with_replies(vec![
            reply("a", None),
            Err(anyhow::anyhow!("boom")),
            reply("c", None),
        ]);
        let mut controller = SessionController::new(Language::En, service);
        for text in ["one", "two", "three"] {
            controller.submit(text, SubmitTrigger::Typed).await;
        }

        let mut ids: Vec<&str> = controller
            .session()
            .messages()
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 7);
    }
}
