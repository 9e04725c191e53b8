//! Rendering layer — all terminal I/O lives here.
//!
//! [`TerminalSurface`] implements the game's [`Surface`] on a grid of
//! terminal cells.  The game draws in 800×500 logical pixels; each draw call
//! is scaled onto the grid and painted with glyphs, and [`present`] writes
//! the finished frame to the terminal in one go.
//!
//! [`present`]: TerminalSurface::present

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use castle_defender::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use castle_defender::surface::{ImageId, Rect, Surface, TextColor, TextStyle};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_FIELD: Color = Color::DarkGreen;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_ARROW: Color = Color::Cyan;
const C_CASTLE: Color = Color::DarkGrey;
const C_RUBY: Color = Color::Rgb { r: 0xea, g: 0x31, b: 0x50 };
const C_TITLE: Color = Color::Yellow;
const C_END_FIELD: Color = Color::DarkRed;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: Color::Reset,
};

pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl TerminalSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        let mut surface = TerminalSurface {
            cols: 0,
            rows: 0,
            cells: Vec::new(),
        };
        surface.resize(cols, rows);
        surface
    }

    /// Follow the terminal size; a no-op when unchanged.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        let cols = cols.max(1);
        let rows = rows.max(1);
        if cols == self.cols && rows == self.rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![BLANK; cols as usize * rows as usize];
    }

    // ── Coordinate mapping ────────────────────────────────────────────────────

    fn col_of(&self, x: i32) -> i64 {
        (x as i64 * self.cols as i64).div_euclid(CANVAS_WIDTH as i64)
    }

    fn row_of(&self, y: i32) -> i64 {
        (y as i64 * self.rows as i64).div_euclid(CANVAS_HEIGHT as i64)
    }

    /// Cell span of a logical rectangle; never narrower than one cell.
    fn cell_span(&self, r: Rect) -> (i64, i64, i64, i64) {
        let c0 = self.col_of(r.x);
        let r0 = self.row_of(r.y);
        let c1 = self.col_of(r.x + r.width).max(c0 + 1);
        let r1 = self.row_of(r.y + r.height).max(r0 + 1);
        (c0, r0, c1, r1)
    }

    fn put(&mut self, col: i64, row: i64, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells[idx] = cell;
    }

    fn fill(&mut self, r: Rect, ch: char, fg: Color) {
        let (c0, r0, c1, r1) = self.cell_span(r);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, Cell { ch, fg });
            }
        }
    }

    fn write_str(&mut self, col: i64, row: i64, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i64, row, Cell { ch, fg });
        }
    }

    // ── Images ────────────────────────────────────────────────────────────────

    /// Sparse dotted field so the play area reads as ground.
    fn draw_field(&mut self, fg: Color) {
        for row in 0..self.rows as i64 {
            for col in 0..self.cols as i64 {
                let ch = if (col * 7 + row * 13) % 11 == 0 { '.' } else { ' ' };
                self.put(col, row, Cell { ch, fg });
            }
        }
    }

    /// Battlements across the bottom of the screen, leaving the HUD row free.
    fn draw_castle(&mut self) {
        let top = self.row_of(CANVAS_HEIGHT - 70);
        let bottom = self.row_of(CANVAS_HEIGHT - 30);
        for col in 0..self.cols as i64 {
            let merlon = if col % 4 < 2 { '█' } else { '▄' };
            self.put(col, top, Cell { ch: merlon, fg: C_CASTLE });
            for row in top + 1..bottom {
                self.put(col, row, Cell { ch: '▓', fg: C_CASTLE });
            }
        }
    }

    fn draw_title(&mut self, text: &str, fg: Color) {
        let row = self.rows as i64 / 4;
        let col = (self.cols as i64 - text.chars().count() as i64) / 2;
        self.write_str(col, row, text, fg);
    }

    fn draw_sprite(&mut self, r: Rect, head: char, body: char, fg: Color) {
        self.fill(r, body, fg);
        let (c0, r0, c1, _) = self.cell_span(r);
        self.put((c0 + c1 - 1) / 2, r0, Cell { ch: head, fg });
    }

    // ── Output ────────────────────────────────────────────────────────────────

    /// Write the current frame to `out`.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut current: Option<Color> = None;
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            for cell in &self.cells[start..start + self.cols as usize] {
                if current != Some(cell.fg) {
                    out.queue(style::SetForegroundColor(cell.fg))?;
                    current = Some(cell.fg);
                }
                out.queue(Print(cell.ch))?;
            }
        }

        // Park cursor in a harmless spot and flush
        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn row_text(&self, row: u16) -> String {
        let start = row as usize * self.cols as usize;
        self.cells[start..start + self.cols as usize]
            .iter()
            .map(|c| c.ch)
            .collect()
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn draw_image(&mut self, image: ImageId, bounds: Rect) {
        match image {
            ImageId::Background => self.draw_field(C_FIELD),
            ImageId::StartBackground => {
                self.draw_field(C_FIELD);
                self.draw_title("C A S T L E   D E F E N D E R", C_TITLE);
            }
            ImageId::EndBackground => self.draw_field(C_END_FIELD),
            ImageId::Castle => self.draw_castle(),
            ImageId::Player => self.draw_sprite(bounds, '▲', '█', C_PLAYER),
            ImageId::Enemy => self.draw_sprite(bounds, '▼', '▒', C_ENEMY),
            ImageId::Arrow => self.draw_sprite(bounds, '↑', '│', C_ARROW),
            ImageId::Ruby => self.draw_sprite(bounds, '◆', '◆', C_RUBY),
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) {
        let fg = match style.color {
            TextColor::Ruby => C_RUBY,
            TextColor::White => Color::White,
        };
        let col = self.col_of(x);
        let row = self.row_of(y);
        self.write_str(col, row, text, fg);
    }

    /// One glyph per cell, so text width is measured in cells.
    fn measure_text(&self, text: &str, _size: u32) -> (i32, i32) {
        let cell_w = CANVAS_WIDTH / self.cols as i32;
        let cell_h = CANVAS_HEIGHT / self.rows as i32;
        (text.chars().count() as i32 * cell_w, cell_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lands_on_scaled_cell() {
        let mut s = TerminalSurface::new(80, 25);
        let style = TextStyle {
            size: 20,
            color: TextColor::White,
        };
        s.draw_text("hi", 400, 100, style);
        assert_eq!(&s.row_text(5)[40..42], "hi");
    }

    #[test]
    fn offscreen_sprites_are_clipped() {
        let mut s = TerminalSurface::new(80, 25);
        s.draw_image(ImageId::Enemy, Rect::new(300, -700, 125, 150));
        assert!(s.cells.iter().all(|c| *c == BLANK));
    }

    #[test]
    fn clear_blanks_every_cell() {
        let mut s = TerminalSurface::new(10, 5);
        s.draw_image(ImageId::Background, Rect::new(0, 0, 800, 500));
        s.clear();
        assert!(s.cells.iter().all(|c| *c == BLANK));
    }
}
