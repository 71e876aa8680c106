// clock.rs - Fixed-delay stepping under a variable frame rate
//
// Frame time accumulates until it reaches the delay. At that point the
// accumulator goes back to zero and at most one generation is due, however
// much time piled up. A slow frame therefore slows the simulation down
// instead of triggering catch-up steps.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }

    /// Label for the control that switches away from this state.
    pub fn button_label(self) -> &'static str {
        match self {
            RunState::Running => "Stop Simulation",
            RunState::Paused => "Start Simulation",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimClock {
    delay: Duration,
    accumulated: Duration,
    state: RunState,
}

impl SimClock {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            accumulated: Duration::ZERO,
            state: RunState::Paused,
        }
    }

    /// Adds one frame's worth of elapsed time and reports whether a
    /// generation should be computed this frame.
    ///
    /// The accumulator is reset whenever the delay is reached, including
    /// while paused.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated < self.delay {
            return false;
        }
        self.accumulated = Duration::ZERO;
        self.state.is_running()
    }

    pub fn toggle(&mut self) -> RunState {
        self.state = match self.state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
        self.state
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_starts_paused_and_empty() {
        let clock = SimClock::new(ms(500));
        assert_eq!(clock.state(), RunState::Paused);
        assert_eq!(clock.accumulated(), Duration::ZERO);
        assert_eq!(clock.delay(), ms(500));
    }

    #[test]
    fn test_one_step_per_delay() {
        let mut clock = SimClock::new(ms(500));
        clock.toggle();
        let due: Vec<bool> = (0..6).map(|_| clock.advance(ms(100))).collect();
        assert_eq!(due, vec![false, false, false, false, true, false]);
        assert_eq!(clock.accumulated(), ms(100));
    }

    #[test]
    fn test_accumulator_resets_only_when_due() {
        let mut clock = SimClock::new(ms(500));
        clock.toggle();
        for _ in 0..4 {
            clock.advance(ms(100));
        }
        assert_eq!(clock.accumulated(), ms(400));
        assert!(clock.advance(ms(100)));
        assert_eq!(clock.accumulated(), Duration::ZERO);
    }

    #[test]
    fn test_long_frame_does_not_catch_up() {
        let mut clock = SimClock::new(ms(100));
        clock.toggle();
        assert!(clock.advance(ms(1000)));
        assert_eq!(clock.accumulated(), Duration::ZERO);
        assert!(!clock.advance(ms(50)));
    }

    #[test]
    fn test_paused_clock_still_drains() {
        let mut clock = SimClock::new(ms(300));
        assert!(!clock.advance(ms(300)));
        assert_eq!(clock.accumulated(), Duration::ZERO);
    }

    #[test]
    fn test_resume_does_not_replay_missed_steps() {
        let mut clock = SimClock::new(ms(100));
        for _ in 0..10 {
            assert!(!clock.advance(ms(100)));
        }
        assert_eq!(clock.toggle(), RunState::Running);
        assert!(!clock.advance(ms(50)));
        assert!(clock.advance(ms(50)));
    }

    #[test]
    fn test_zero_delay_steps_every_frame() {
        let mut clock = SimClock::new(Duration::ZERO);
        clock.toggle();
        assert!(clock.advance(Duration::ZERO));
        assert!(clock.advance(ms(16)));
    }

    #[test]
    fn test_button_labels() {
        let mut clock = SimClock::new(ms(500));
        assert_eq!(clock.state().button_label(), "Start Simulation");
        clock.toggle();
        assert_eq!(clock.state().button_label(), "Stop Simulation");
    }
}
