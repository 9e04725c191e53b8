//! The game-state machine and its three phases.
//!
//! ```text
//!   Start ──Enter──▶ Active ──5 escapes──▶ End
//!                      ▲                    │
//!                      └──────Enter─────────┘  (score reset)
//! ```
//!
//! Each phase offers the same three per-tick operations.  An operation that
//! wants to leave the phase returns the replacement, and
//! [`GameStateMachine`] swaps it in; the old phase is dropped, never paused.

use tracing::info;

use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, ENEMY_MOVEMENT_SPEED, FONT_SIZE, TITLE_FONT_SIZE,
};
use crate::context::GameContext;
use crate::collision::resolve_pairwise_collisions;
use crate::entities::{Player, Sprite};
use crate::input::{Action, InputEvent};
use crate::surface::{Surface, TextColor, TextStyle};
use crate::wave::EnemyWave;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    Start,
    Active,
    End,
}

// ── Text helpers ──────────────────────────────────────────────────────────────

const HUD_TEXT: TextStyle = TextStyle {
    size: FONT_SIZE,
    color: TextColor::Ruby,
};

/// Draw `text` horizontally centered, at row `y` or, when `None`, vertically
/// centered as well.
fn draw_centered_text(surface: &mut impl Surface, text: &str, size: u32, y: Option<i32>) {
    let (width, height) = surface.measure_text(text, size);
    let x = CANVAS_WIDTH / 2 - width / 2;
    let y = y.unwrap_or(CANVAS_HEIGHT / 2 - height / 2);
    let style = TextStyle {
        size,
        color: TextColor::White,
    };
    surface.draw_text(text, x, y, style);
}

/// Pop the next input and report whether it was Enter.
fn confirm_pressed(ctx: &mut GameContext) -> bool {
    matches!(ctx.input.pop(), Some(InputEvent::Keyboard(Action::Confirm)))
}

// ── Start ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct StartPhase {
    pub background: Sprite,
}

impl Default for StartPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl StartPhase {
    pub fn new() -> Self {
        StartPhase {
            background: Sprite::start_background(),
        }
    }

    pub fn handle_input(&mut self, ctx: &mut GameContext) -> Option<Phase> {
        if confirm_pressed(ctx) {
            return Some(Phase::Active(ActivePhase::new(ctx)));
        }
        None
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        self.background.draw(surface);
        draw_centered_text(surface, "[ Press ENTER to Play ]", FONT_SIZE, Some(290));
    }
}

// ── Active ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct ActivePhase {
    pub player: Player,
    pub enemies: EnemyWave,
    pub background: Sprite,
    pub castle: Sprite,
    pub ruby: Sprite,
}

impl ActivePhase {
    /// Fresh round: new player and scenery, first wave already on its way.
    pub fn new(ctx: &mut GameContext) -> Self {
        let mut enemies = EnemyWave::new();
        enemies.generate(&mut ctx.rng);
        ActivePhase {
            player: Player::new(),
            enemies,
            background: Sprite::background(),
            castle: Sprite::castle(),
            ruby: Sprite::ruby(),
        }
    }

    pub fn handle_input(&mut self, ctx: &mut GameContext) {
        let Some(InputEvent::Keyboard(action)) = ctx.input.pop() else {
            return;
        };
        match action {
            Action::Left => {
                self.player.move_left();
            }
            Action::Right => {
                self.player.move_right();
            }
            Action::Fire => {
                self.player.fire();
            }
            Action::Confirm => {}
        }
    }

    pub fn update(&mut self, ctx: &mut GameContext) -> Option<Phase> {
        self.player.tick_cooldown();
        self.enemies
            .advance_all(ENEMY_MOVEMENT_SPEED, &mut ctx.score, &mut ctx.rng);
        self.player.advance_arrows();

        let score = &mut ctx.score;
        resolve_pairwise_collisions(&mut self.player.arrows, &mut self.enemies.enemies, || {
            score.register_kill()
        });

        if ctx.score.is_lost() {
            info!(rubies = ctx.score.current_score(), "game over");
            return Some(Phase::End(EndPhase::new()));
        }
        None
    }

    pub fn draw(&self, ctx: &GameContext, surface: &mut impl Surface) {
        self.background.draw(surface);
        self.enemies.draw_all(surface);
        self.castle.draw(surface);
        self.player.draw_arrows(surface);
        self.player.draw(surface);
        self.ruby.draw(surface);

        let text_y = CANVAS_HEIGHT - 22;
        let score = ctx.score.current_score().to_string();
        surface.draw_text(&score, 150, text_y, HUD_TEXT);
        surface.draw_text(&ctx.score.escapes_label(), CANVAS_WIDTH - 170, text_y, HUD_TEXT);
    }
}

// ── End ───────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct EndPhase {
    pub background: Sprite,
}

impl Default for EndPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl EndPhase {
    pub fn new() -> Self {
        EndPhase {
            background: Sprite::end_background(),
        }
    }

    pub fn handle_input(&mut self, ctx: &mut GameContext) -> Option<Phase> {
        if confirm_pressed(ctx) {
            ctx.score.reset();
            return Some(Phase::Active(ActivePhase::new(ctx)));
        }
        None
    }

    pub fn draw(&self, ctx: &GameContext, surface: &mut impl Surface) {
        self.background.draw(surface);
        draw_centered_text(surface, "GAME OVER", TITLE_FONT_SIZE, None);
        let score = format!("Score: {}", ctx.score.current_score());
        draw_centered_text(surface, &score, FONT_SIZE, Some(290));
        draw_centered_text(surface, "[ Press ENTER to Play Again ]", FONT_SIZE, Some(400));
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub enum Phase {
    Start(StartPhase),
    Active(ActivePhase),
    End(EndPhase),
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Start(_) => PhaseKind::Start,
            Phase::Active(_) => PhaseKind::Active,
            Phase::End(_) => PhaseKind::End,
        }
    }

    /// Consume at most one queued input.
    pub fn handle_input(&mut self, ctx: &mut GameContext) -> Option<Phase> {
        match self {
            Phase::Start(p) => p.handle_input(ctx),
            Phase::Active(p) => {
                p.handle_input(ctx);
                None
            }
            Phase::End(p) => p.handle_input(ctx),
        }
    }

    pub fn update(&mut self, ctx: &mut GameContext) -> Option<Phase> {
        match self {
            Phase::Active(p) => p.update(ctx),
            Phase::Start(_) | Phase::End(_) => None,
        }
    }

    pub fn draw(&self, ctx: &GameContext, surface: &mut impl Surface) {
        match self {
            Phase::Start(p) => p.draw(surface),
            Phase::Active(p) => p.draw(ctx, surface),
            Phase::End(p) => p.draw(ctx, surface),
        }
    }
}

/// Holds exactly one phase at a time.
#[derive(Clone, Debug)]
pub struct GameStateMachine {
    current: Phase,
}

impl Default for GameStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateMachine {
    /// Machine sitting on the start screen.
    pub fn new() -> Self {
        GameStateMachine {
            current: Phase::Start(StartPhase::new()),
        }
    }

    pub fn current(&self) -> &Phase {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Phase {
        &mut self.current
    }

    pub fn kind(&self) -> PhaseKind {
        self.current.kind()
    }

    pub fn set_phase(&mut self, next: Phase) {
        info!(from = ?self.current.kind(), to = ?next.kind(), "phase transition");
        self.current = next;
    }

    pub fn handle_input(&mut self, ctx: &mut GameContext) {
        if let Some(next) = self.current.handle_input(ctx) {
            self.set_phase(next);
        }
    }

    pub fn update(&mut self, ctx: &mut GameContext) {
        if let Some(next) = self.current.update(ctx) {
            self.set_phase(next);
        }
    }

    pub fn draw(&self, ctx: &GameContext, surface: &mut impl Surface) {
        self.current.draw(ctx, surface);
    }
}
