//! Fixed-rate frame driver.

use crate::context::GameContext;
use crate::input::Action;
use crate::phase::{GameStateMachine, PhaseKind};
use crate::surface::Surface;

/// Owns the state machine and its context and runs one frame per [`tick`].
///
/// There is no delta time: every tick advances the simulation by exactly one
/// step, whatever the wall-clock interval between ticks was.
///
/// [`tick`]: Game::tick
#[derive(Clone, Debug)]
pub struct Game {
    pub machine: GameStateMachine,
    pub ctx: GameContext,
    pub frame: u64,
}

impl Game {
    pub fn new(seed: Option<u64>) -> Self {
        Game {
            machine: GameStateMachine::new(),
            ctx: GameContext::new(seed),
            frame: 0,
        }
    }

    /// Queue an action; it is consumed on a later tick, one per tick.
    pub fn push_action(&mut self, action: Action) {
        self.ctx.input.push_action(action);
    }

    pub fn phase(&self) -> PhaseKind {
        self.machine.kind()
    }

    /// Clear the surface, then input, update and draw on the current phase.
    /// A transition during input means update and draw already run on the
    /// new phase.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        self.frame += 1;
        surface.clear();
        self.machine.handle_input(&mut self.ctx);
        self.machine.update(&mut self.ctx);
        self.machine.draw(&self.ctx, surface);
    }
}
