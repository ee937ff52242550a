//! Random Quantum Tic-Tac-Toe game
//!
//! Two players alternate random moves on a 3x3 board, then the board is
//! collapsed and the result is printed.
//!
//! Usage:
//! ```bash
//! cargo run -p qttt_env --example random_game -- [seed] [moves]
//! ```

use anyhow::{Context, Result};
use qttt_env::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(s) => s.parse().context("seed must be an integer")?,
        None => 42,
    };
    let num_moves: usize = match args.next() {
        Some(s) => s.parse().context("moves must be an integer")?,
        None => 9,
    };

    let config = EnvConfig::default_3x3().with_seed(seed);
    println!("{}", config);

    let mut env = QuantumTicTacToeEnv::new(config)?;
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    env.reset()?;

    let mut total_reward = 0.0;
    for turn in 0..num_moves {
        let player = if turn % 2 == 0 { 1 } else { 2 };
        let id = rng.gen_range(0..env.action_space_size());
        let entry = env.moves().lookup(id)?.clone();

        let step = env.step(id)?;
        total_reward += step.reward;

        println!(
            "turn {:>2}  player {}  move {:>2}  {:<14}  {}",
            turn + 1,
            player,
            id,
            entry.operation.to_string(),
            env.outcome_probabilities()?
        );
    }

    let resolution = env.resolve()?;
    println!("\nhistory: {}", env.status_id());
    println!("reward:  {:.1}", total_reward);
    println!("\n{}", resolution);

    Ok(())
}
