//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Position, Shape};

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const LOCKED_FG: Rgb = Rgb::new(150, 150, 160);
const PANEL_WIDTH: u16 = 14;

/// Lays the board out centered, with a score/next panel on its right.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns; 2 roughly squares the glyphs.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let board_w = snap.width as u16 * self.cell_w;
        let board_h = snap.height as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_WIDTH) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            board_w,
            board_h,
            ' ',
            CellStyle::new(LOCKED_FG, PLAY_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..snap.height {
            for col in 0..snap.width {
                let pos = Position::new(row as i8, col as i8);
                let (ch, fg) = if snap.is_active_cell(pos) {
                    let shape = snap.active.map(|a| a.shape).unwrap_or(Shape::I);
                    ('█', shape_color(shape))
                } else if snap.is_locked_cell(pos) {
                    ('▓', LOCKED_FG)
                } else {
                    ('·', Rgb::new(70, 70, 80))
                };
                let x = start_x + 1 + col as u16 * self.cell_w;
                let y = start_y + 1 + row as u16;
                fb.fill_rect(x, y, self.cell_w, 1, ch, CellStyle::new(fg, PLAY_BG));
            }
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + 2, start_y);

        if snap.game_over {
            let mid = start_y + frame_h / 2;
            draw_centered(fb, start_x, frame_w, mid, "GAME OVER");
            draw_centered(fb, start_x, frame_w, mid + 1, "n: new game");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &snap.score.to_string(), value);
        fb.put_str(x, y + 3, "LEVEL", label);
        fb.put_str(x, y + 4, &snap.level.to_string(), value);

        fb.put_str(x, y + 6, "NEXT", label);
        if let Some(shape) = snap.next {
            let style = CellStyle::new(shape_color(shape), Rgb::new(0, 0, 0));
            fb.put_str(x, y + 7, &shape.as_str().to_ascii_uppercase(), style);
        } else {
            fb.put_str(x, y + 7, "-", value);
        }

        if snap.soft_drop_active {
            fb.put_str(x, y + 9, "SOFT DROP", value);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}

pub fn shape_color(shape: Shape) -> Rgb {
    match shape {
        Shape::I => Rgb::new(80, 220, 220),
        Shape::O => Rgb::new(240, 220, 80),
        Shape::T => Rgb::new(200, 120, 220),
        Shape::S => Rgb::new(100, 220, 120),
        Shape::Z => Rgb::new(220, 80, 80),
        Shape::J => Rgb::new(80, 120, 220),
        Shape::L => Rgb::new(255, 165, 0),
    }
}
