//! GameView: maps a core `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: the bordered board, then a side panel with the hold
//! preview box and the score. Empty board cells are painted as a checkerboard
//! that fades toward the bottom row.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PREVIEW_HEIGHT, PREVIEW_WIDTH};

const CHECKER_BRIGHT: Rgb = Rgb::new(32, 32, 64);
const CHECKER_DARK: Rgb = Rgb::new(16, 16, 16);
const PREVIEW_BG: Rgb = Rgb::new(16, 16, 16);
const SCREEN_BG: Rgb = Rgb::new(32, 0, 64);
const BLOCK: char = '█';

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Empty-cell color at (x, y): checkerboard, darkening linearly with depth.
pub fn background_color(x: u16, y: u16, grid_height: u16) -> Rgb {
    let base = if x % 2 == y % 2 {
        CHECKER_BRIGHT
    } else {
        CHECKER_DARK
    };
    base.scaled(grid_height.saturating_sub(y), grid_height.max(1))
}

/// Color used for the landing shadow of a piece
pub fn shadow_color(color: Rgb) -> Rgb {
    color.scaled(1, 3)
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board frame landed on screen for one render.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::new(SCREEN_BG, SCREEN_BG),
        });

        let grid = &snap.grid;
        let grid_w = grid.width() as u16;
        let grid_h = grid.height() as u16;
        let frame_w = grid_w * self.cell_w + 2;
        let frame_h = grid_h * self.cell_h + 2;

        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w + self.panel_width()) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        self.draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        // Settled cells and background.
        for y in 0..grid_h {
            for x in 0..grid_w {
                let color = match grid.get(x as i8, y as i8) {
                    Some(cell) if cell.occupied => cell.color,
                    _ => background_color(x, y, grid_h),
                };
                self.fill_board_cell(fb, frame, x as i8, y as i8, color);
            }
        }

        // Shadow under the active piece.
        if let (Some(active), Some(ghost)) = (snap.active, snap.ghost) {
            let color = shadow_color(active.color());
            for &(x, y) in ghost.iter() {
                if grid.contains(x, y) {
                    self.fill_board_cell(fb, frame, x, y, color);
                }
            }
        }

        // Active piece.
        if let Some(active) = snap.active {
            for &(x, y) in active.cells().iter() {
                if grid.contains(x, y) {
                    self.fill_board_cell(fb, frame, x, y, active.color());
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over() {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Columns the side panel needs, including the gap after the board.
    fn panel_width(&self) -> u16 {
        2 + PREVIEW_WIDTH as u16 * self.cell_w
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

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

    fn fill_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, color: Rgb) {
        let px = frame.x + 1 + x as u16 * self.cell_w;
        let py = frame.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(
            px,
            py,
            self.cell_w,
            self.cell_h,
            BLOCK,
            CellStyle::new(color, color),
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(self.panel_width() - 2) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "HOLDING", label);
        y = y.saturating_add(1);

        let box_w = PREVIEW_WIDTH as u16 * self.cell_w;
        let box_h = PREVIEW_HEIGHT as u16 * self.cell_h;
        fb.fill_rect(
            panel_x,
            y,
            box_w,
            box_h,
            ' ',
            CellStyle::new(PREVIEW_BG, PREVIEW_BG),
        );
        if let Some(held) = snap.hold {
            self.draw_preview_piece(fb, panel_x, y, &held);
        }
        y = y.saturating_add(box_h).saturating_add(1);

        fb.put_str(panel_x, y, "POINTS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        if !snap.can_swap && !snap.game_over() {
            fb.put_str(panel_x, y, "hold used", CellStyle::new(Rgb::new(140, 140, 160), SCREEN_BG));
        }
    }

    fn draw_preview_piece(&self, fb: &mut FrameBuffer, box_x: u16, box_y: u16, piece: &Piece) {
        let color = piece.color();
        for &(x, y) in piece.cells() {
            if x < 0 || y < 0 || x as u8 >= PREVIEW_WIDTH || y as u8 >= PREVIEW_HEIGHT {
                continue;
            }
            fb.fill_rect(
                box_x + x as u16 * self.cell_w,
                box_y + y as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                BLOCK,
                CellStyle::new(color, color),
            );
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_fades_toward_bottom() {
        let top = background_color(0, 0, 19);
        let bottom = background_color(0, 18, 19);
        assert_eq!(top, CHECKER_BRIGHT);
        assert!(bottom.b < top.b);
    }

    #[test]
    fn background_alternates_like_a_checkerboard() {
        assert_eq!(background_color(0, 0, 1), CHECKER_BRIGHT);
        assert_eq!(background_color(1, 0, 1), CHECKER_DARK);
        assert_eq!(background_color(1, 1, 2), Rgb::new(16, 16, 32));
    }

    #[test]
    fn shadow_is_a_third_of_the_color() {
        assert_eq!(shadow_color(Rgb::new(192, 128, 0)), Rgb::new(64, 42, 0));
    }
}
