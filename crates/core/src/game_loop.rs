//! Loop driver and the collaborator seams it talks to.
//!
//! The driver never blocks on its own: each iteration polls at most one input
//! event, feeds it and the current time into the session, then asks the sink to
//! draw. How long a poll may wait is up to the input source.

use std::collections::VecDeque;

use crate::clock::Clock;
use crate::session::{Report, Session};
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

/// Non-blocking source of player commands
pub trait InputSource {
    /// Next pending command, or `None` if nothing is pending
    fn poll(&mut self) -> Option<GameAction>;
}

/// Consumer of render snapshots.
///
/// Drawing failures stay inside the sink; they must never end a session.
pub trait RenderSink {
    fn render(&mut self, snapshot: &GameSnapshot);
}

/// Drive `session` until it ends and return its report
pub fn run<I, R, C>(session: &mut Session, input: &mut I, sink: &mut R, clock: &C) -> Report
where
    I: InputSource + ?Sized,
    R: RenderSink + ?Sized,
    C: Clock + ?Sized,
{
    let mut snapshot = GameSnapshot::default();

    loop {
        if let Some(report) = session.report() {
            return report;
        }

        let action = input.poll();
        session.step(action, clock.now());

        session.snapshot_into(&mut snapshot);
        sink.render(&snapshot);
    }
}

/// Input source replaying a fixed script, one entry per poll.
///
/// Once the script runs out every poll reports `Quit`, so a scripted run
/// always terminates.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<GameAction>>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Option<GameAction>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Option<GameAction> {
        self.script.pop_front().unwrap_or(Some(GameAction::Quit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::types::EndReason;
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct CountingSink {
        frames: usize,
        last: Option<GameSnapshot>,
    }

    impl RenderSink for CountingSink {
        fn render(&mut self, snapshot: &GameSnapshot) {
            self.frames += 1;
            self.last = Some(snapshot.clone());
        }
    }

    #[test]
    fn renders_once_per_iteration_until_quit() {
        let clock = ManualClock::new();
        let mut session = Session::new(1, clock.now());
        let mut input = ScriptedInput::new([None, Some(GameAction::MoveLeft), None]);
        let mut sink = CountingSink::default();

        let report = run(&mut session, &mut input, &mut sink, &clock);

        assert_eq!(report.reason, EndReason::Quit);
        assert_eq!(report.score, 0);
        assert!(report.diagnostics.is_empty());
        // Three scripted polls plus the implicit quit.
        assert_eq!(sink.frames, 4);
        assert!(sink.last.unwrap().finished);
    }

    #[test]
    fn gravity_follows_the_clock() {
        let clock = ManualClock::with_step(Duration::from_millis(500));
        let start: Instant = clock.now();
        let mut session = Session::new(2, start);
        let mut input = ScriptedInput::new([None; 4]);
        let mut sink = CountingSink::default();

        run(&mut session, &mut input, &mut sink, &clock);

        // Polls at +0.5s, +1.0s, +1.5s, +2.0s: two gravity steps.
        assert_eq!(session.position().1, crate::types::SPAWN_Y + 2);
    }
}
