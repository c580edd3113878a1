//! Session domain model.
//!
//! This module contains the core Session entity that represents one remote
//! user's progress through the intake conversation.

use serde::{Deserialize, Serialize};

use crate::catalog::Lang;

/// Position of a conversation within the intake flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// No conversation has been started yet.
    Uninitialized,
    /// The greeting was sent; waiting for a language pick.
    AwaitingLanguage,
    /// A language is set; waiting for an issue-category pick.
    AwaitingIssue,
    /// An issue is set; waiting for the wallet identifier.
    AwaitingWallet,
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Uninitialized
    }
}

/// Per-user conversation progress record.
///
/// A session is created implicitly on the first event from a new user and
/// discarded either by an explicit restart or by the periodic store sweep.
/// `language` is only meaningful once the user has left `Uninitialized`;
/// `issue` is only meaningful at `AwaitingWallet`. `issue` holds a copy of
/// the catalog label, never an index, so it stays valid even if the catalog
/// were swapped between selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Current position in the conversation.
    pub stage: Stage,
    /// Display name carried over from the last start/restart, for greetings.
    pub display_name: Option<String>,
    /// Selected language; persists until reset.
    pub language: Option<Lang>,
    /// Selected issue label (a copy of the catalog string).
    pub issue: Option<String>,
    /// Timestamp when the session was created (RFC 3339).
    pub created_at: String,
    /// Timestamp of the last state change (RFC 3339).
    pub updated_at: String,
}

impl Session {
    /// Creates a fresh `Uninitialized` session.
    pub fn new() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            stage: Stage::Uninitialized,
            display_name: None,
            language: None,
            issue: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Records a state change on this session.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
