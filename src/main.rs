//! Terminal runner (default binary).
//!
//! Sets up logging and the terminal, drives one session until the player quits
//! or tops out, restores the terminal and prints the final report.

use anyhow::Result;
use tracing::info;

use term_tetris::config::Config;
use term_tetris::core::{game_loop, Clock, MonotonicClock, Report, Session};
use term_tetris::input::TerminalInput;
use term_tetris::logging;
use term_tetris::term::{GameView, TerminalSink};
use term_tetris::types::EndReason;

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;

    let mut sink = TerminalSink::new(GameView::default());
    sink.enter()?;

    let report = run(&config, &mut sink);

    // Always try to restore terminal state.
    let restored = sink.exit();
    let report = report?;
    restored?;

    print_report(&report);
    Ok(())
}

fn run(config: &Config, sink: &mut TerminalSink) -> Result<Report> {
    let clock = MonotonicClock;
    let mut input = TerminalInput::new(config.frame);
    let mut session = Session::new(config.seed_or_random(), clock.now());
    info!(seed = session.queue().seed(), "session started");

    let report = game_loop::run(&mut session, &mut input, sink, &clock);
    info!(
        score = report.score,
        reason = ?report.reason,
        dropped_frames = sink.failed_frames(),
        "session ended"
    );
    Ok(report)
}

fn print_report(report: &Report) {
    match report.reason {
        EndReason::Quit => println!("Quit. Lines cleared: {}", report.score),
        EndReason::ToppedOut => println!("Game over. Lines cleared: {}", report.score),
    }
    for diagnostic in &report.diagnostics {
        println!("{diagnostic}");
    }
}
