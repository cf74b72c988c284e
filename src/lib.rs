//! # aduan - Council complaint chat client
//!
//! `aduan` is a terminal chat client for reporting municipal issues (potholes,
//! broken streetlights, illegal parking, uncollected garbage) to a local
//! council, in English or Bahasa Malaysia. Replies from the council service
//! carry classification tags (issue type, urgency, detected language) that
//! are shown as badges above each answer.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start a conversation
//! aduan --endpoint http://localhost:3000
//!
//! # Start in Bahasa Malaysia
//! aduan --lang ms
//!
//! # Save defaults
//! aduan configure
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/aduan/config.toml`:
//!
//! ```toml
//! [aduan]
//! endpoint = "http://localhost:3000"
//! language = "en"
//! ```

/// Council chat service client.
pub mod backend;

/// Conversation state, controller, and terminal view.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// UI languages and static strings.
pub mod i18n;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
