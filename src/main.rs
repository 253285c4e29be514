mod io;
mod model;
mod simulation;

use crate::model::generator::PieceGenerator;
use crate::simulation::session::Session;
use anyhow::Result;
use clap::Parser;
use log::info;
use std::io::{stdin, stdout};

/// Interactive simulator for the Tetris upcoming-piece queue.
#[derive(Parser, Debug)]
#[command(name = "tetris-stack", version, about)]
struct Args {
    /// Seed for the piece generator; a random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // The random source is seeded exactly once, here at startup.
    let generator = match args.seed {
        Some(seed) => {
            info!("using fixed seed {seed}");
            PieceGenerator::seeded(seed)
        }
        None => PieceGenerator::new(),
    };

    let stdin = stdin();
    let stdout = stdout();
    let mut session = Session::new(generator, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
