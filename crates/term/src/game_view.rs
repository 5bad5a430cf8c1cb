//! GameView: paints a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Board layout in the terminal.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up a typical terminal glyph.
        Self::new(2, 1)
    }
}

/// Position and size of the bordered playfield.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Always a full repaint; nothing is carried over from the previous frame.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.frame(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, frame, border);

        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match snap.resolved(x, y) {
                    Some((color, active)) => self.draw_block(fb, frame, x, y, color, active),
                    None => self.draw_empty(fb, frame, x, y),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_game_over(fb, frame, snap.score);
        }
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;
        Frame { x, y, w, h }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);
        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        self.fill_cell(fb, f, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, color: Color, active: bool) {
        let style = CellStyle::new(color_rgb(color), PLAYFIELD_BG);
        let style = if active { style.bold() } else { style };
        self.fill_cell(fb, f, x, y, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, ch: char, style: CellStyle) {
        let px = f.x + 1 + (x as u16) * self.cell_w;
        let py = f.y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let help = value.dim();

        let mut y = f.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        for line in ["\u{2190}\u{2192} move", "\u{2191}  rotate", "\u{2193}  drop", "r  restart", "q  quit"] {
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, f: Frame, score: u32) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = f.y + f.h / 2;

        let center = |text_w: u16| f.x + f.w.saturating_sub(text_w) / 2;

        let title = "GAME OVER";
        fb.put_str(center(title.len() as u16), mid_y - 1, title, style);

        let label = "SCORE ";
        let w = label.len() as u16 + digit_count(score);
        let x = center(w);
        fb.put_str(x, mid_y, label, style);
        fb.put_u32(x + label.len() as u16, mid_y, score, style);

        let hint = "R restart  Q quit";
        fb.put_str(center(hint.len() as u16), mid_y + 1, hint, style.dim());
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Terminal color for a cell color.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
        Color::Cyan => Rgb::new(80, 220, 220),
    }
}
