//! Session module - one game from the first spawn to game over
//!
//! The session owns the board, the piece queue, the active piece and its anchor,
//! and walks a small state machine:
//!
//! ```text
//! Spawning ──► Falling ──(landed)──► Locking ──► LineClearing ──► Falling
//!    │                                  │              │
//!    └────────────► GameOver ◄──────────┴──────────────┘
//! ```
//!
//! `Locking` and `LineClearing` are transient: they run to completion inside the
//! call that triggered them, so callers only ever observe `Falling` or `GameOver`
//! between calls. Quitting ends the session without changing the phase.
//!
//! Every committed anchor is collision free. Moves and rotations that would
//! collide are reverted silently.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::board::Board;
use crate::ghost::project_from;
use crate::piece::ActivePiece;
use crate::queue::PieceQueue;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, GHOST_ATTR};
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    LineClearing,
    GameOver,
}

/// Final outcome of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub score: u32,
    pub reason: EndReason,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    queue: PieceQueue,
    active: ActivePiece,
    x: i8,
    y: i8,
    ghost_y: Option<i8>,
    /// Current gravity interval
    speed: Duration,
    last_gravity: Instant,
    /// Set by hard drop so the next `update` steps regardless of elapsed time
    gravity_due: bool,
    /// Cumulative cleared rows
    score: u32,
    phase: Phase,
    end: Option<EndReason>,
    diagnostics: Vec<Diagnostic>,
}

impl Session {
    /// Start a session on an empty board
    pub fn new(seed: u64, now: Instant) -> Self {
        Self::with_board(Board::new(), PieceQueue::new(seed), now)
    }

    /// Start a session on a prepared board and queue.
    ///
    /// The first piece is spawned immediately; if it cannot be placed the
    /// session is already over when this returns.
    pub fn with_board(board: Board, mut queue: PieceQueue, now: Instant) -> Self {
        let active = ActivePiece::new(queue.draw());
        let mut session = Self {
            board,
            queue,
            active,
            x: SPAWN_X,
            y: SPAWN_Y,
            ghost_y: None,
            speed: Duration::from_millis(BASE_GRAVITY_MS),
            last_gravity: now,
            gravity_due: false,
            score: 0,
            phase: Phase::Spawning,
            end: None,
            diagnostics: Vec::new(),
        };
        session.settle();
        session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// Anchor of the active piece
    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn ghost_y(&self) -> Option<i8> {
        self.ghost_y
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end
    }

    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }

    /// Final score and loss diagnostics, once the session has ended
    pub fn report(&self) -> Option<Report> {
        let reason = self.end?;
        Some(Report {
            score: self.score,
            reason,
            diagnostics: self.diagnostics.clone(),
        })
    }

    /// Apply one player command.
    ///
    /// Returns true if the command changed the session. Commands are ignored
    /// once the session has ended.
    pub fn apply(&mut self, action: GameAction) -> bool {
        if self.is_finished() || self.phase != Phase::Falling {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_shift(-1),
            GameAction::MoveRight => self.try_shift(1),
            GameAction::RotateLeft => self.try_rotate(RotateDirection::Left),
            GameAction::RotateRight => self.try_rotate(RotateDirection::Right),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Quit => {
                info!(score = self.score, "player quit");
                self.end = Some(EndReason::Quit);
                true
            }
        }
    }

    /// Advance gravity if the current interval has elapsed since the last step.
    ///
    /// The timer restarts at `now` every time it fires, so a long stall still
    /// produces exactly one step. Returns true if a gravity step ran.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.is_finished() || self.phase != Phase::Falling {
            return false;
        }

        if !self.gravity_due && now.saturating_duration_since(self.last_gravity) < self.speed {
            return false;
        }

        self.gravity_due = false;
        self.last_gravity = now;
        self.gravity_step();
        true
    }

    /// One loop iteration: at most one command, then the gravity check
    pub fn step(&mut self, action: Option<GameAction>, now: Instant) {
        if let Some(action) = action {
            self.apply(action);
        }
        self.update(now);
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        let x = self.x + dx;
        if self.board.collides(self.active.cells(), x, self.y) {
            return false;
        }
        self.x = x;
        self.refresh_ghost();
        true
    }

    /// Rotations that would overlap the stack or leave the board are reverted;
    /// there are no wall kicks.
    fn try_rotate(&mut self, direction: RotateDirection) -> bool {
        self.active.rotate(direction);
        if self.board.collides(self.active.cells(), self.x, self.y) {
            self.active.rotate(direction.opposite());
            return false;
        }
        self.refresh_ghost();
        true
    }

    fn hard_drop(&mut self) -> bool {
        if let Some(ghost_y) = self.ghost_y {
            self.y = ghost_y;
        }
        self.gravity_due = true;
        true
    }

    fn gravity_step(&mut self) {
        let shape = self.active.cells();
        let below = self.y + 1;

        if self.board.has_landed(shape, self.x, below) || self.board.collides(shape, self.x, below)
        {
            self.phase = Phase::Locking;
            self.settle();
        } else {
            self.y = below;
        }
    }

    /// Run transient phases until the session rests in `Falling` or `GameOver`
    fn settle(&mut self) {
        loop {
            match self.phase {
                Phase::Spawning => self.finish_spawn(LossStage::InitialSpawn, Phase::Falling),
                Phase::Locking => self.lock(),
                Phase::LineClearing => self.clear_lines(),
                Phase::Falling | Phase::GameOver => return,
            }
        }
    }

    fn lock(&mut self) {
        self.board
            .place(self.active.cells(), self.x, self.y, self.active.attr());
        debug!(
            piece = self.active.kind().as_str(),
            x = self.x,
            y = self.y,
            rotation = self.active.rotation(),
            "piece locked"
        );
        self.active.reset();

        self.active = ActivePiece::new(self.queue.draw());
        self.finish_spawn(LossStage::AfterLock, Phase::LineClearing);
    }

    /// Put the active piece at the spawn anchor and either move on to `next` or
    /// end the session
    fn finish_spawn(&mut self, stage: LossStage, next: Phase) {
        self.x = SPAWN_X;
        self.y = SPAWN_Y;
        self.refresh_ghost();
        debug!(piece = self.active.kind().as_str(), "piece spawned");

        if !self.check_loss(stage) {
            self.phase = next;
        }
    }

    fn clear_lines(&mut self) {
        let rows = self.board.cleared_rows();

        // Rows come top to bottom, so shifting one never moves a later one.
        for &row in &rows {
            self.board.shift_down(row);
            self.score += 1;

            if self.score % DIFFICULTY_LINES == 0 {
                self.speed = self.speed.mul_f64(DIFFICULTY_FACTOR);
                info!(
                    score = self.score,
                    interval_ms = self.speed.as_millis() as u64,
                    "gravity sped up"
                );
            }
        }

        if !rows.is_empty() {
            info!(cleared = rows.len(), score = self.score, "rows cleared");
            self.refresh_ghost();
        }

        if !self.check_loss(LossStage::AfterLineClear) {
            self.phase = Phase::Falling;
        }
    }

    /// Record a diagnostic and end the session if the active piece cannot be
    /// placed at its anchor. Returns true on loss.
    fn check_loss(&mut self, stage: LossStage) -> bool {
        let Some(cause) = self.board.loss_cause(self.active.cells(), self.x, self.y) else {
            return false;
        };

        let diagnostic = Diagnostic { cause, stage };
        info!(score = self.score, %diagnostic, "game over");
        self.diagnostics.push(diagnostic);
        self.phase = Phase::GameOver;
        self.end = Some(EndReason::ToppedOut);
        true
    }

    fn refresh_ghost(&mut self) {
        self.ghost_y = project_from(&self.board, self.active.cells(), self.x, self.y);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.active = match self.phase {
            Phase::GameOver => None,
            _ => Some(ActiveSnapshot {
                kind: self.active.kind(),
                rotation: self.active.rotation(),
                cells: *self.active.cells(),
                attr: self.active.attr(),
                x: self.x,
                y: self.y,
            }),
        };
        out.ghost_y = out.active.and(self.ghost_y);
        out.ghost_attr = GHOST_ATTR;
        out.score = self.score;
        out.speed = self.speed;
        out.phase = self.phase;
        out.finished = self.is_finished();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
