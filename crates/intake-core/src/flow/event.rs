//! Inbound event vocabulary.
//!
//! The dispatcher decodes platform traffic (commands, menu callbacks, free
//! text) into this closed set once, at the boundary; the flow machine only
//! ever pattern-matches these variants.

use serde::{Deserialize, Serialize};

/// One inbound event from the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Entry command from a new or returning user.
    Start {
        /// Display name from the platform, for the greeting.
        #[serde(default)]
        display_name: Option<String>,
    },
    /// A language picked from the language menu.
    LanguageChosen { code: String },
    /// An issue category picked from the issue menu (zero-based).
    IssueChosen { index: usize },
    /// The back button of the current step.
    Back,
    /// Free-text wallet identifier.
    WalletSubmitted { text: String },
    /// The in-conversation restart button. Equivalent to [`Event::Start`].
    Restart {
        /// Display name from the platform, for the greeting.
        #[serde(default)]
        display_name: Option<String>,
    },
    /// Health probe; never mutates the session.
    StatusQuery,
}
