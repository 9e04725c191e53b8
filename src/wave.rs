//! Endless enemy waves.

use rand::Rng;
use tracing::debug;

use crate::constants::{BASE_WAVE_SIZE, ESCAPE_THRESHOLD_Y};
use crate::entities::Enemy;
use crate::score::Score;
use crate::surface::Surface;

/// The enemies currently on their way down, plus how many waves have been
/// sent so far.  Every wave is one enemy larger than the last.
#[derive(Clone, Debug)]
pub struct EnemyWave {
    pub enemies: Vec<Enemy>,
    pub waves_generated: u32,
    pub base_size: usize,
}

impl Default for EnemyWave {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyWave {
    pub fn new() -> Self {
        EnemyWave {
            enemies: Vec::new(),
            waves_generated: 0,
            base_size: BASE_WAVE_SIZE,
        }
    }

    /// Size of the next wave `generate` will append.
    pub fn next_wave_size(&self) -> usize {
        self.base_size + self.waves_generated as usize
    }

    pub fn generate(&mut self, rng: &mut impl Rng) {
        let size = self.next_wave_size();
        self.enemies.extend((0..size).map(|_| Enemy::spawn(rng)));
        self.waves_generated += 1;
        debug!(wave = self.waves_generated, size, "enemy wave generated");
    }

    /// Move every enemy down by `dy`, report escapes to `score`, and send a
    /// new wave once nothing is left.  Returns the number of escapes.
    pub fn advance_all(&mut self, dy: i32, score: &mut Score, rng: &mut impl Rng) -> u32 {
        for enemy in &mut self.enemies {
            enemy.sprite.move_by(0, dy);
        }

        let before = self.enemies.len();
        self.enemies.retain(|e| e.sprite.y <= ESCAPE_THRESHOLD_Y);
        let escaped = (before - self.enemies.len()) as u32;
        for _ in 0..escaped {
            score.register_escape();
        }

        if self.enemies.is_empty() {
            self.generate(rng);
        }
        escaped
    }

    pub fn draw_all(&self, surface: &mut impl Surface) {
        for enemy in &self.enemies {
            enemy.sprite.draw(surface);
        }
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}
