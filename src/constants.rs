//! Fixed game rules.  All speeds are in logical pixels per tick.

// ── Surface ───────────────────────────────────────────────────────────────────

pub const CANVAS_WIDTH: i32 = 800;
pub const CANVAS_HEIGHT: i32 = 500;

/// Inset from either canvas edge that the player may not cross.
pub const MOVEMENT_BOUNDARY_SIZE: i32 = 170;

// ── Timing ────────────────────────────────────────────────────────────────────

/// Default tick length (≈60 FPS).
pub const FRAME_INTERVAL_MS: f64 = 16.66;

/// Minimum real time between two arrows.
pub const ARROW_DELAY_MS: f64 = 150.0;

/// `ARROW_DELAY_MS` expressed in ticks (150 / 16.66 = 9).
pub const ARROW_COOLDOWN_TICKS: u32 = (ARROW_DELAY_MS / FRAME_INTERVAL_MS) as u32;

// ── Speeds ────────────────────────────────────────────────────────────────────

pub const PLAYER_MOVEMENT_SPEED: i32 = 80;
pub const ENEMY_MOVEMENT_SPEED: i32 = 4;
pub const ARROW_MOVEMENT_SPEED: i32 = 10;

// ── Waves ─────────────────────────────────────────────────────────────────────

pub const BASE_WAVE_SIZE: usize = 5;

/// An enemy whose `y` exceeds this has escaped.
pub const ESCAPE_THRESHOLD_Y: i32 = 400;

/// An arrow whose `y` drops below this is discarded.
pub const ARROW_DESPAWN_Y: i32 = -50;

// ── Score ─────────────────────────────────────────────────────────────────────

pub const TRIGGER_LOSS_AMOUNT: u32 = 5;
pub const SCORE_TO_RUBIES: u32 = 1250;

// ── Text ──────────────────────────────────────────────────────────────────────

pub const FONT_SIZE: u32 = 20;
pub const TITLE_FONT_SIZE: u32 = 30;
