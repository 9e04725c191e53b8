//! Sprites and the entities built on them.
//!
//! Every visual thing in the game is a [`Sprite`]: a rectangle plus the image
//! painted into it.  The entity types wrap a sprite and add only the data
//! their behaviour needs.

use rand::Rng;

use crate::constants::{
    ARROW_COOLDOWN_TICKS, ARROW_DESPAWN_Y, ARROW_MOVEMENT_SPEED, CANVAS_HEIGHT, CANVAS_WIDTH,
    MOVEMENT_BOUNDARY_SIZE, PLAYER_MOVEMENT_SPEED,
};
use crate::surface::{ImageId, Rect, Surface};

/// Anything with a collision rectangle.
pub trait Bounded {
    fn bounds(&self) -> Rect;
}

// ── Sprite ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub image: ImageId,
}

impl Sprite {
    pub fn new(x: i32, y: i32, width: i32, height: i32, image: ImageId) -> Self {
        Sprite {
            x,
            y,
            width,
            height,
            image,
        }
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.draw_image(self.image, self.bounds());
    }

    /// Sprite covering the whole surface.
    fn full_screen(image: ImageId) -> Self {
        Sprite::new(0, 0, CANVAS_WIDTH, CANVAS_HEIGHT, image)
    }

    pub fn background() -> Self {
        Self::full_screen(ImageId::Background)
    }

    pub fn start_background() -> Self {
        Self::full_screen(ImageId::StartBackground)
    }

    pub fn end_background() -> Self {
        Self::full_screen(ImageId::EndBackground)
    }

    /// Castle walls are drawn over the enemies, hiding them as they reach the gate.
    pub fn castle() -> Self {
        Self::full_screen(ImageId::Castle)
    }

    /// HUD icon next to the score.
    pub fn ruby() -> Self {
        Sprite::new(110, CANVAS_HEIGHT - 40, 24, 24, ImageId::Ruby)
    }
}

impl Bounded for Sprite {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Arrow ─────────────────────────────────────────────────────────────────────

pub const ARROW_WIDTH: i32 = 5;
pub const ARROW_HEIGHT: i32 = 80;

#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub sprite: Sprite,
}

impl Arrow {
    pub fn new(x: i32, y: i32) -> Self {
        Arrow {
            sprite: Sprite::new(x, y, ARROW_WIDTH, ARROW_HEIGHT, ImageId::Arrow),
        }
    }

    /// True once the arrow has left the top of the screen.
    pub fn is_gone(&self) -> bool {
        self.sprite.y < ARROW_DESPAWN_Y
    }
}

impl Bounded for Arrow {
    fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

pub const ENEMY_WIDTH: i32 = 125;
pub const ENEMY_HEIGHT: i32 = 150;

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub sprite: Sprite,
}

impl Enemy {
    /// Enemy at a fixed position.
    pub fn at(x: i32, y: i32) -> Self {
        Enemy {
            sprite: Sprite::new(x, y, ENEMY_WIDTH, ENEMY_HEIGHT, ImageId::Enemy),
        }
    }

    /// Enemy somewhere above the visible area so a wave arrives staggered.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let x = rng.gen_range(100..=CANVAS_WIDTH - ENEMY_WIDTH - 100);
        let y = rng.gen_range(-800..=-100);
        Enemy::at(x, y)
    }
}

impl Bounded for Enemy {
    fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: i32 = 30;
pub const PLAYER_HEIGHT: i32 = 100;

/// Leftmost and rightmost `x` the player may occupy.
pub const PLAYER_MIN_X: i32 = MOVEMENT_BOUNDARY_SIZE;
pub const PLAYER_MAX_X: i32 = CANVAS_WIDTH - MOVEMENT_BOUNDARY_SIZE - PLAYER_WIDTH;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub sprite: Sprite,
    pub arrows: Vec<Arrow>,
    /// Ticks left before the next arrow may be fired.
    pub cooldown: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Player {
            sprite: Sprite::new(
                CANVAS_WIDTH / 2 - 25,
                CANVAS_HEIGHT / 2 + 100,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
                ImageId::Player,
            ),
            arrows: Vec::new(),
            cooldown: 0,
        }
    }

    /// Step left; refused if it would cross the left boundary.
    pub fn move_left(&mut self) -> bool {
        self.step(-PLAYER_MOVEMENT_SPEED)
    }

    /// Step right; refused if it would cross the right boundary.
    pub fn move_right(&mut self) -> bool {
        self.step(PLAYER_MOVEMENT_SPEED)
    }

    fn step(&mut self, dx: i32) -> bool {
        let target = self.sprite.x + dx;
        if !(PLAYER_MIN_X..=PLAYER_MAX_X).contains(&target) {
            return false;
        }
        self.sprite.move_by(dx, 0);
        true
    }

    pub fn can_fire(&self) -> bool {
        self.cooldown == 0
    }

    /// Loose an arrow from the player's horizontal centre.  Returns `false`
    /// while the cooldown is running.
    pub fn fire(&mut self) -> bool {
        if !self.can_fire() {
            return false;
        }
        let x = self.sprite.x + self.sprite.width / 2;
        self.arrows.push(Arrow::new(x, self.sprite.y));
        self.cooldown = ARROW_COOLDOWN_TICKS;
        true
    }

    /// Count the cooldown down by one tick.
    pub fn tick_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Fly every arrow upward and drop those that left the screen.
    pub fn advance_arrows(&mut self) {
        for arrow in &mut self.arrows {
            arrow.sprite.move_by(0, -ARROW_MOVEMENT_SPEED);
        }
        self.arrows.retain(|a| !a.is_gone());
    }

    pub fn draw_arrows(&self, surface: &mut impl Surface) {
        for arrow in &self.arrows {
            arrow.sprite.draw(surface);
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        self.sprite.draw(surface);
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }
}
