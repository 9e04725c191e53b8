//! Mutable state shared by every phase.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::input::InputQueue;
use crate::score::Score;

/// Everything outside a phase that a phase may read or change: the running
/// score, pending inputs and the random source for enemy placement.
#[derive(Clone, Debug)]
pub struct GameContext {
    pub score: Score,
    pub input: InputQueue,
    pub rng: StdRng,
}

impl GameContext {
    /// A fixed `seed` makes every wave reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        GameContext {
            score: Score::new(),
            input: InputQueue::new(),
            rng,
        }
    }
}
