//! Application layer for the intake flow engine.
//!
//! This crate coordinates the domain pieces from `intake-core`: the use case
//! that applies inbound events against the session store, and the background
//! sweeper that periodically expires every session.

pub mod intake_usecase;
pub mod sweeper;

pub use intake_usecase::IntakeUseCase;
pub use sweeper::ExpirySweeper;
