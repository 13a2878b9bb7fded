//! Integration tests for whole sessions and the loop driver

use std::time::{Duration, Instant};

use term_tetris::core::{
    run, Board, Clock, GameSnapshot, ManualClock, Phase, PieceQueue, RenderSink, ScriptedInput,
    Session,
};
use term_tetris::types::{
    Attr, Diagnostic, EndReason, GameAction, LossCause, LossStage, PieceKind, BOARD_WIDTH,
    SPAWN_X, SPAWN_Y,
};

/// A queue whose first piece is `kind`
fn queue_starting_with(kind: PieceKind) -> PieceQueue {
    (0..)
        .map(PieceQueue::new)
        .find(|q| q.peek() == Some(kind))
        .unwrap()
}

fn occupied(board: &Board) -> usize {
    board.cells().iter().filter(|c| c.is_some()).count()
}

#[test]
fn test_square_spawns_on_empty_board() {
    let now = Instant::now();
    let session = Session::with_board(Board::new(), queue_starting_with(PieceKind::O), now);

    assert_eq!(session.phase(), Phase::Falling);
    assert_eq!(session.active().kind(), PieceKind::O);
    assert_eq!(session.position(), (SPAWN_X, SPAWN_Y));
    assert!(session.diagnostics().is_empty());
    assert!(!session.is_finished());
}

#[test]
fn test_blocked_spawn_area_ends_game_immediately() {
    let mut board = Board::new();
    board.fill_row(0, Attr::Blue);
    board.fill_row(1, Attr::Blue);
    let session = Session::with_board(board, PieceQueue::new(1), Instant::now());

    assert_eq!(session.phase(), Phase::GameOver);
    assert_eq!(session.end_reason(), Some(EndReason::ToppedOut));
    assert_eq!(
        session.diagnostics(),
        &[Diagnostic {
            cause: LossCause::SpawnBlocked,
            stage: LossStage::InitialSpawn,
        }]
    );

    let report = session.report().unwrap();
    assert_eq!(report.score, 0);
    assert_eq!(report.reason, EndReason::ToppedOut);
}

#[test]
fn test_hard_drop_onto_full_bottom_row_clears_it() {
    let now = Instant::now();
    let mut board = Board::new();
    board.fill_row(21, Attr::Cyan);
    let mut session = Session::with_board(board, queue_starting_with(PieceKind::O), now);

    assert!(session.apply(GameAction::HardDrop));
    assert!(session.update(now));

    assert_eq!(session.score(), 1);
    assert_eq!(session.phase(), Phase::Falling);
    assert_eq!(occupied(session.board()), 4);
    assert!(session.board().row(0).iter().all(|c| c.is_none()));
    // The square rested on rows 19-20 and moved down with the cleared row.
    for x in [SPAWN_X, SPAWN_X + 1] {
        assert_eq!(session.board().get(x, 20), Some(Some(Attr::OrangeBold)));
        assert_eq!(session.board().get(x, 21), Some(Some(Attr::OrangeBold)));
    }
}

#[test]
fn test_five_cleared_rows_speed_up_gravity() {
    let now = Instant::now();
    let mut board = Board::new();
    for y in 17..22 {
        board.fill_row(y, Attr::Green);
    }
    let mut session = Session::with_board(board, queue_starting_with(PieceKind::T), now);
    assert_eq!(session.speed(), Duration::from_millis(1000));

    session.apply(GameAction::HardDrop);
    session.update(now);

    assert_eq!(session.score(), 5);
    assert_eq!(session.speed().as_millis(), 800);
}

/// Score and gravity interval after hard-dropping a T onto `rows` full rows
fn clear_full_rows(rows: usize) -> (u32, Duration) {
    let now = Instant::now();
    let mut board = Board::new();
    for y in 22 - rows..22 {
        board.fill_row(y, Attr::Green);
    }
    let mut session = Session::with_board(board, queue_starting_with(PieceKind::T), now);
    session.apply(GameAction::HardDrop);
    session.update(now);
    assert_eq!(session.phase(), Phase::Falling);
    (session.score(), session.speed())
}

#[test]
fn test_speed_unchanged_below_threshold() {
    let (score, speed) = clear_full_rows(4);
    assert_eq!(score, 4);
    assert_eq!(speed, Duration::from_millis(1000));
}

#[test]
fn test_speed_up_applies_once_per_threshold() {
    let (score, speed) = clear_full_rows(10);
    assert_eq!(score, 10);
    assert_eq!(speed.as_millis(), 640);
}

#[test]
fn test_move_left_stops_at_wall() {
    let now = Instant::now();
    let mut session = Session::with_board(Board::new(), queue_starting_with(PieceKind::L), now);

    let mut moves = 0;
    while session.apply(GameAction::MoveLeft) {
        moves += 1;
        assert!(moves <= BOARD_WIDTH, "piece walked through the wall");
    }

    let (x, y) = session.position();
    let leftmost = session.active().cells().iter().map(|&(dx, _)| x + dx).min();
    assert_eq!(leftmost, Some(0));
    assert_eq!(y, SPAWN_Y);
    assert!(!session.apply(GameAction::MoveLeft));
    assert_eq!(session.position(), (x, y));
}

#[test]
fn test_hard_drop_lands_where_ghost_shows() {
    let now = Instant::now();
    let mut board = Board::new();
    board.set(4, 15, Some(Attr::Red));
    board.set(5, 18, Some(Attr::Red));
    let mut session = Session::with_board(board, PieceQueue::new(77), now);

    let piece = *session.active();
    let (x, _) = session.position();
    let ghost = session.ghost_y().unwrap();

    session.apply(GameAction::HardDrop);
    session.update(now);

    for &(dx, dy) in piece.cells() {
        assert_eq!(session.board().get(x + dx, ghost + dy), Some(Some(piece.attr())));
    }
    assert_eq!(occupied(session.board()), 6);
}

#[test]
fn test_long_stall_gives_single_gravity_step() {
    let now = Instant::now();
    let mut session = Session::new(4, now);

    assert!(session.update(now + Duration::from_secs(10)));
    assert_eq!(session.position().1, SPAWN_Y + 1);
    assert!(!session.update(now + Duration::from_secs(10)));
    assert_eq!(session.position().1, SPAWN_Y + 1);
}

#[test]
fn test_piece_falls_and_locks_on_floor() {
    let start = Instant::now();
    let mut session = Session::with_board(Board::new(), queue_starting_with(PieceKind::O), start);

    let mut now = start;
    let mut steps = 0;
    while occupied(session.board()) == 0 {
        now += Duration::from_secs(1);
        session.update(now);
        steps += 1;
        assert!(steps < 30, "piece never locked");
    }

    assert_eq!(session.board().get(SPAWN_X, 21), Some(Some(Attr::OrangeBold)));
    assert_eq!(session.board().get(SPAWN_X + 1, 20), Some(Some(Attr::OrangeBold)));
    assert_eq!(session.position(), (SPAWN_X, SPAWN_Y));
}

#[test]
fn test_stacking_until_top_out() {
    let now = Instant::now();
    let mut session = Session::new(99, now);

    // Dropping everything in the spawn column fills the well within a few bags.
    for _ in 0..100 {
        if session.is_finished() {
            break;
        }
        session.apply(GameAction::HardDrop);
        session.update(now);
    }

    assert!(session.is_finished());
    assert_eq!(session.phase(), Phase::GameOver);
    let report = session.report().unwrap();
    assert_eq!(report.reason, EndReason::ToppedOut);
    // No row can complete, so the loss shows up as soon as a piece locks.
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic {
            cause: LossCause::SpawnBlocked,
            stage: LossStage::AfterLock,
        }]
    );
    assert!(session.snapshot().active.is_none());
}

#[test]
fn test_line_clear_can_push_stack_into_spawn_area() {
    let start = Instant::now();
    let mut board = Board::new();
    board.fill_row(21, Attr::Red);
    board.set(0, 21, None);
    // Harmless at row 0, blocking once the clear shifts them to row 1.
    board.set(3, 0, Some(Attr::Blue));
    board.set(4, 0, Some(Attr::Blue));
    let mut session = Session::with_board(board, queue_starting_with(PieceKind::I), start);
    assert_eq!(session.phase(), Phase::Falling);

    // Fall two rows so the vertical state fits below the top edge.
    session.update(start + Duration::from_secs(1));
    session.update(start + Duration::from_secs(2));
    assert!(session.apply(GameAction::RotateRight));
    while session.apply(GameAction::MoveLeft) {}
    let (x, _) = session.position();
    assert!(session.active().cells().iter().all(|&(dx, _)| x + dx == 0));

    session.apply(GameAction::HardDrop);
    session.update(start + Duration::from_secs(2));

    assert_eq!(session.score(), 1);
    assert_eq!(session.phase(), Phase::GameOver);
    assert_eq!(
        session.diagnostics(),
        &[Diagnostic {
            cause: LossCause::SpawnBlocked,
            stage: LossStage::AfterLineClear,
        }]
    );
    assert_eq!(session.board().get(3, 1), Some(Some(Attr::Blue)));
}

#[derive(Default)]
struct Recorder {
    frames: Vec<GameSnapshot>,
}

impl RenderSink for Recorder {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.frames.push(snapshot.clone());
    }
}

#[test]
fn test_run_until_quit_reports_score() {
    let clock = ManualClock::with_step(Duration::from_millis(16));
    let mut session = Session::new(5, clock.now());
    let mut input = ScriptedInput::new([
        Some(GameAction::MoveLeft),
        None,
        Some(GameAction::HardDrop),
        Some(GameAction::Quit),
    ]);
    let mut sink = Recorder::default();

    let report = run(&mut session, &mut input, &mut sink, &clock);

    assert_eq!(report.reason, EndReason::Quit);
    assert_eq!(report.score, 0);
    assert!(report.diagnostics.is_empty());
    assert_eq!(sink.frames.len(), 4);
    assert!(sink.frames.last().unwrap().finished);
    assert_eq!(occupied(session.board()), 4);
}
