use rochambo_engine::GameSession;

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;
mod screen;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the computer's choices (random when omitted)
    #[clap(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { seed } = arg;

    let session = seed.map_or_else(GameSession::new, GameSession::from_seed);
    let mut app = PlayApp::new(session);
    Tui::new().run(&mut app)
}
