// src/model/generator.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::piece::{Piece, Shape};

/// Produces the stream of upcoming pieces.
///
/// Owns the only id counter and the only random source in the process: ids
/// are assigned in generation order and never reused, and the rng is seeded
/// exactly once when the generator is built. Generic over the rng so tests
/// can inject a fixed-seed source.
#[derive(Debug)]
pub struct PieceGenerator<R: Rng> {
    rng: R,
    next_id: u32,
}

impl PieceGenerator<StdRng> {
    /// Generator seeded from OS entropy, for normal interactive runs.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Generator with a fixed seed, so the shape sequence of a whole run
    /// can be reproduced.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PieceGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, next_id: 0 }
    }

    /// Draws one shape uniformly from [`Shape::ALL`] and stamps it with the
    /// next id. Exactly one rng draw and one counter increment per call,
    /// whether or not the piece ends up in the queue.
    pub fn next_piece(&mut self) -> Piece {
        let shape = Shape::ALL[self.rng.gen_range(0..Shape::ALL.len())];
        let piece = Piece {
            shape,
            id: self.next_id,
        };
        self.next_id += 1;
        piece
    }
}
