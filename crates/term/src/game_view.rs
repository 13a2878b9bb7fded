//! GameView: maps a core `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Attr, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS, VISIBLE_ROWS};

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

/// Renders a snapshot centered in the viewport, with a side panel on the right.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Top-left corner of the border for a viewport
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Border size in terminal cells (only visible rows are drawn)
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (VISIBLE_ROWS as u16) * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully redrawn.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let bg = CellStyle {
            bg: PLAYFIELD_BG,
            ..CellStyle::plain(Rgb::new(80, 80, 90))
        };
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        self.draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::plain(Rgb::new(200, 200, 200)),
        );

        // Locked cells.
        for y in HIDDEN_ROWS as usize..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                match snap.board[y][x] {
                    Some(attr) => self.draw_cell(fb, start_x, start_y, x as i8, y as i8, attr),
                    None => self.draw_empty_cell(fb, start_x, start_y, x as i8, y as i8),
                }
            }
        }

        // Ghost first so the active piece covers it where they overlap.
        if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
            for (x, y) in active.minos_at(ghost_y) {
                self.draw_cell(fb, start_x, start_y, x, y, snap.ghost_attr);
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.minos() {
                self.draw_cell(fb, start_x, start_y, x, y, active.attr);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8) {
        let style = CellStyle {
            bg: PLAYFIELD_BG,
            ..CellStyle::plain(Rgb::new(90, 90, 100)).dim()
        };
        self.fill_board_cell(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8, attr: Attr) {
        let (ch, style) = attr_glyph(attr);
        self.fill_board_cell(fb, start_x, start_y, x, y, ch, style);
    }

    /// Draw one board cell; cells in the hidden rows or off the board are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < HIDDEN_ROWS as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let row = (y as u16) - HIDDEN_ROWS as u16;
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200));
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        let ms = snap.speed.as_millis().min(u32::MAX as u128) as u32;
        fb.put_u32(panel_x, y, ms, value);
        fb.put_str(panel_x + digits(ms) + 1, y, "ms", hint);
        y = y.saturating_add(2);

        for line in ["\u{2190} \u{2192}  move", "z x  rotate", "\u{2193}    drop", "q    quit"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::plain(Rgb::new(255, 255, 255)).bold());
    }
}

/// Terminal glyph for a display attribute
pub fn attr_glyph(attr: Attr) -> (char, CellStyle) {
    let fg = match attr {
        Attr::Cyan => Rgb::new(80, 220, 220),
        Attr::OrangeBold | Attr::Orange => Rgb::new(255, 165, 0),
        Attr::Magenta => Rgb::new(200, 120, 220),
        Attr::Green => Rgb::new(100, 220, 120),
        Attr::Red => Rgb::new(220, 80, 80),
        Attr::Blue => Rgb::new(80, 120, 220),
        Attr::Ghost => Rgb::new(140, 140, 140),
    };
    let style = CellStyle {
        fg,
        bg: PLAYFIELD_BG,
        bold: attr == Attr::OrangeBold,
        dim: attr == Attr::Ghost,
    };
    let ch = if attr == Attr::Ghost { '░' } else { '█' };
    (ch, style)
}

fn digits(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
