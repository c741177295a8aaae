//! Round orchestration and session state management.
//!
//! This module wires the core rules into a playable session:
//!
//! - [`ChoiceGenerator`] - Random computer choices
//! - [`GameSession`] - Session guard plus round resolution
//! - [`SessionStats`] - In-memory tally for the current process
//!
//! # Round Flow
//!
//! 1. A trigger calls [`GameSession::begin_round`]; the guard rejects it
//!    if a round is already open
//! 2. The caller collects the player's text and passes it to
//!    [`GameSession::resolve_round`]
//! 3. The session normalizes the input, draws the computer's choice,
//!    resolves the outcome, and returns a [`RoundRecord`]
//! 4. The guard returns to idle on every exit path, including fallback
//!    input and [`GameSession::abort_round`]

pub use self::{choice_generator::*, session::*, session_stats::*};

mod choice_generator;
mod session;
mod session_stats;
