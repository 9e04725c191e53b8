//! Drawing-surface interface the game draws against.
//!
//! The simulation never touches a terminal or window directly.  It issues
//! image and text draw calls in logical pixels (800×500) through [`Surface`],
//! and asks the same surface how large a string renders so it can center
//! text.  [`FrameRecorder`] is an in-memory surface that simply remembers the
//! calls, which is what the tests draw into.

/// Opaque handle to a loaded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageId {
    Player,
    Enemy,
    Arrow,
    Background,
    Castle,
    Ruby,
    StartBackground,
    EndBackground,
}

/// Axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    /// Inclusive on all four edges.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextColor {
    /// `#ea3150`, used for the in-game HUD.
    Ruby,
    White,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub size: u32,
    pub color: TextColor,
}

/// Width and height of `text` rendered in bold Courier New at `size` px.
pub fn monospace_metrics(text: &str, size: u32) -> (i32, i32) {
    // Glyphs are 0.6em wide, lines 1.15em tall, rounded half-up.
    let chars = text.chars().count() as i32;
    let size = size as i32;
    let width = (chars * size * 6 + 5) / 10;
    let height = (size * 115 + 50) / 100;
    (width, height)
}

pub trait Surface {
    /// Wipe everything drawn since the last clear.
    fn clear(&mut self);

    fn draw_image(&mut self, image: ImageId, bounds: Rect);

    /// `x`/`y` is the top-left corner of the text box.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle);

    fn measure_text(&self, text: &str, size: u32) -> (i32, i32) {
        monospace_metrics(text, size)
    }
}

// ── Recording surface ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Image {
        image: ImageId,
        bounds: Rect,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        style: TextStyle,
    },
}

/// Surface that keeps the draw calls of the current frame.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub commands: Vec<DrawCommand>,
    pub clears: usize,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> Vec<ImageId> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { image, .. } => Some(*image),
                DrawCommand::Text { .. } => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Image { .. } => None,
            })
            .collect()
    }

    pub fn text_command(&self, wanted: &str) -> Option<&DrawCommand> {
        self.commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Text { text, .. } if text == wanted))
    }
}

impl Surface for FrameRecorder {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn draw_image(&mut self, image: ImageId, bounds: Rect) {
        self.commands.push(DrawCommand::Image { image, bounds });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style,
        });
    }
}
