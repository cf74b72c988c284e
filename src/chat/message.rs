//! Transcript records and the classification metadata attached to replies.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, session-unique message identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// Id reserved for the welcome message.
    pub const WELCOME: &'static str = "welcome";

    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn welcome() -> Self {
        Self(Self::WELCOME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Urgency assigned by the classifier.
///
/// Values the client does not recognise decode as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Emergency,
    Unknown,
}

impl From<String> for Urgency {
    fn from(value: String) -> Self {
        match value.as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "emergency" => Self::Emergency,
            _ => Self::Unknown,
        }
    }
}

impl Urgency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Emergency => "emergency",
            Self::Unknown => "unknown",
        }
    }
}

/// Language the classifier detected in the user's complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DetectedLanguage {
    En,
    Ms,
    Unknown,
}

impl From<String> for DetectedLanguage {
    fn from(value: String) -> Self {
        match value.as_str() {
            "en" => Self::En,
            "ms" => Self::Ms,
            _ => Self::Unknown,
        }
    }
}

/// Server-derived tags on an assistant reply. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<DetectedLanguage>,
}

impl ClassificationMetadata {
    /// Issue type worth displaying: present, non-empty, and not `"unknown"`.
    pub fn known_issue_type(&self) -> Option<&str> {
        self.issue_type
            .as_deref()
            .filter(|issue| !issue.is_empty() && *issue != "unknown")
    }

    pub fn known_urgency(&self) -> Option<Urgency> {
        self.urgency.filter(|u| *u != Urgency::Unknown)
    }

    pub fn known_language(&self) -> Option<DetectedLanguage> {
        self.language.filter(|l| *l != DetectedLanguage::Unknown)
    }
}

/// One entry of the transcript. Never edited once appended.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
    pub metadata: Option<ClassificationMetadata>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::User,
            content: content.into(),
            timestamp: Local::now(),
            metadata: None,
        }
    }

    pub fn assistant(content: impl Into<String>, metadata: Option<ClassificationMetadata>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Local::now(),
            metadata,
        }
    }

    pub fn welcome(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::welcome(),
            ..Self::assistant(content, None)
        }
    }
}
