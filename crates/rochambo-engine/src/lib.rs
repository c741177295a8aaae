pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("a round is already in progress")]
pub struct RoundInProgressError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("no round in progress")]
pub struct RoundNotStartedError;
