//! Session domain module.
//!
//! This module contains the per-user conversation state and the store that
//! holds it for the lifetime of the process.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`, `Stage`)
//! - `store`: Store trait and the in-memory implementation
//!   (`SessionStore`, `MemorySessionStore`)

mod model;
mod store;

// Re-export public API
pub use model::{Session, Stage};
pub use store::{MemorySessionStore, SessionStore, UserId};
