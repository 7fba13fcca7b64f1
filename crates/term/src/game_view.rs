//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::board::SIZE;
use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const LOCKED_FG: Rgb = Rgb::new(60, 90, 230);
const ACTIVE_FG: Rgb = Rgb::new(230, 60, 60);
const GRID_FG: Rgb = Rgb::new(90, 90, 100);

const BLOCK: char = '█';
const EMPTY: char = '·';

const KEY_HELP: [&str; 4] = ["←/→  move", "↓    drop", "r    restart", "q    quit"];

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

/// Renders the board, the active piece and a side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    /// Zero sizes are bumped to 1.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            SIZE as u16 * self.cell_w + 2,
            SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let layout = Layout {
            origin_x,
            origin_y,
            frame_w,
            frame_h,
        };

        self.draw_border(fb, &layout, Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)));

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let glyph = if cell.is_filled() {
                    Glyph::new(BLOCK, Style::new(LOCKED_FG, BOARD_BG))
                } else {
                    Glyph::new(EMPTY, Style::new(GRID_FG, BOARD_BG).dim())
                };
                self.fill_cell(fb, &layout, x as u16, y as u16, glyph);
            }
        }

        // Cells above the top edge are not drawn.
        let active = Glyph::new(BLOCK, Style::new(ACTIVE_FG, BOARD_BG).bold());
        for (x, y) in snap.active.board_cells() {
            if (0..SIZE as i8).contains(&x) && (0..SIZE as i8).contains(&y) {
                self.fill_cell(fb, &layout, x as u16, y as u16, active);
            }
        }

        self.draw_side_panel(fb, snap, &layout, viewport);

        if !snap.can_fit {
            self.draw_banner(fb, &layout, "NO ROOM");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout, style: Style) {
        let Layout {
            origin_x: x,
            origin_y: y,
            frame_w: w,
            frame_h: h,
        } = *layout;

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

    fn fill_cell(&self, fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16, glyph: Glyph) {
        let px = layout.origin_x + 1 + x * self.cell_w;
        let py = layout.origin_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph.ch, glyph.style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &Layout,
        viewport: Viewport,
    ) {
        let panel_x = layout
            .origin_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = layout.origin_y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("ROWS", snap.rows_cleared),
            ("PIECES", snap.pieces_locked),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        for line in KEY_HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value.dim());
            y += 1;
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let mid_y = layout.origin_y + layout.frame_h / 2;
        let text_w = text.chars().count() as u16;
        let x = layout.origin_x + layout.frame_w.saturating_sub(text_w) / 2;
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

#[derive(Debug, Clone, Copy)]
struct Layout {
    origin_x: u16,
    origin_y: u16,
    frame_w: u16,
    frame_h: u16,
}
