//! Core game rules.
//!
//! Pure data types and total functions with no I/O and no randomness:
//!
//! - [`Choice`] - The closed set of hand shapes
//! - [`Outcome`] - Result of comparing two choices
//! - [`normalize`] - Raw text to [`Choice`] with a documented fallback
//! - [`result_message`] - Human-readable round verdicts

pub use self::{choice::*, input::*, message::*, outcome::*};

mod choice;
mod input;
mod message;
mod outcome;
