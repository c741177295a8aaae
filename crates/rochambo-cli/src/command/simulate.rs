use rand::{Rng as _, SeedableRng as _, prelude::StdRng};
use rochambo_engine::{Choice, GameSession, SessionStats};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Number of rounds to play
    #[arg(long, default_value_t = 1000)]
    rounds: usize,
    /// Seed for both the computer and the simulated player
    #[arg(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg { rounds, seed } = arg;

    log::info!("simulating {rounds} rounds");
    let stats = simulate(*rounds, *seed)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

/// Plays `rounds` rounds with a uniformly random player.
///
/// The simulated player submits the proper uppercase choice names, so no
/// fallback rounds are recorded.
fn simulate(rounds: usize, seed: Option<u64>) -> anyhow::Result<SessionStats> {
    let mut session = seed.map_or_else(GameSession::new, GameSession::from_seed);
    // Decorrelate the player from the computer when both are seeded.
    let mut player_rng = seed.map_or_else(StdRng::from_os_rng, |seed| {
        StdRng::seed_from_u64(seed.wrapping_add(1))
    });

    for _ in 0..rounds {
        let player = Choice::ALL[player_rng.random_range(0..Choice::LEN)];
        session.begin_round()?;
        session.resolve_round(&player.to_string())?;
    }
    Ok(*session.stats())
}
