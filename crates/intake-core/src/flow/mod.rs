//! Intake flow state machine.
//!
//! This module defines the event and action vocabularies exchanged with the
//! dispatcher and the pure transition function between them. The machine has
//! no hidden state and performs no I/O: given the current session and one
//! inbound event it produces the next session plus an ordered action list,
//! and the caller owns everything else (persisting the session, executing
//! the actions, timing).
//!
//! # Module Structure
//!
//! - `event`: Inbound event vocabulary (`Event`)
//! - `action`: Outbound action vocabulary (`Action`, `Menu`, `Button`, `Token`)
//! - `machine`: The transition function (`transition`, `Outcome`)

mod action;
mod event;
mod machine;

// Re-export public API
pub use action::{Action, Button, Menu, Token};
pub use event::Event;
pub use machine::{FRAME_GAP_MS, HANDOFF_GAP_MS, MAX_WALLET_CHARS, Outcome, transition};
