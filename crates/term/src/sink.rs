//! Render sink that draws snapshots into the real terminal.

use anyhow::Result;
use term_tetris_core::{GameSnapshot, RenderSink};
use tracing::warn;

use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Owns the terminal for the duration of a session.
///
/// Per-frame failures are logged and dropped; only entering and leaving the
/// terminal report errors.
pub struct TerminalSink {
    view: GameView,
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    failed_frames: u64,
}

impl TerminalSink {
    pub fn new(view: GameView) -> Self {
        Self {
            view,
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
            failed_frames: 0,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Frames whose draw failed and was skipped
    pub fn failed_frames(&self) -> u64 {
        self.failed_frames
    }

    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size()?;
        self.view.render_into(snapshot, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl RenderSink for TerminalSink {
    fn render(&mut self, snapshot: &GameSnapshot) {
        if let Err(e) = self.draw(snapshot) {
            self.failed_frames += 1;
            self.renderer.invalidate();
            warn!(error = %e, failed = self.failed_frames, "frame dropped");
        }
    }
}
