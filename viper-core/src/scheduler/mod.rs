//! Game loop scheduling
//!
//! The firmware runs a fixed-period loop and feeds the elapsed time in.
//! The scheduler decides, per iteration, whether to move the snake, reset
//! after a game over, or do nothing.

/// Counts elapsed milliseconds up to the movement delay
#[derive(Debug, Clone, Copy)]
pub struct MoveTimer {
    delay_ms: u32,
    elapsed_ms: u32,
}

impl MoveTimer {
    pub const fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            elapsed_ms: 0,
        }
    }

    /// Add `delta_ms`; returns true once the delay is reached and restarts
    /// the count
    pub fn tick(&mut self, delta_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        if self.elapsed_ms >= self.delay_ms {
            self.elapsed_ms = 0;
            true
        } else {
            false
        }
    }

    /// Start counting from zero
    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

/// What the game loop should do this iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopAction {
    /// Nothing due yet
    Wait,
    /// Run one engine tick and redraw
    Advance,
    /// Start a new game
    Reset,
}

/// Per-iteration decision logic for the game loop
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    timer: MoveTimer,
}

impl Scheduler {
    pub const fn new(move_delay_ms: u32) -> Self {
        Self {
            timer: MoveTimer::new(move_delay_ms),
        }
    }

    /// Decide the next action
    ///
    /// While the game is over the move timer is frozen and any held button
    /// requests a reset.
    pub fn poll(&mut self, delta_ms: u32, game_over: bool, any_button_held: bool) -> LoopAction {
        if game_over {
            if any_button_held {
                self.timer.restart();
                return LoopAction::Reset;
            }
            return LoopAction::Wait;
        }

        if self.timer.tick(delta_ms) {
            LoopAction::Advance
        } else {
            LoopAction::Wait
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MOVE_DELAY_MS;

    #[test]
    fn test_timer_fires_at_delay() {
        let mut timer = MoveTimer::new(250);
        for _ in 0..249 {
            assert!(!timer.tick(1));
        }
        assert!(timer.tick(1));
        assert_eq!(timer.elapsed_ms(), 0);
    }

    #[test]
    fn test_timer_large_step() {
        let mut timer = MoveTimer::new(250);
        assert!(timer.tick(1000));
        assert!(!timer.tick(10));
    }

    #[test]
    fn test_one_advance_per_delay() {
        let mut scheduler = Scheduler::new(MOVE_DELAY_MS);
        let advances = (0..1000)
            .filter(|_| scheduler.poll(1, false, false) == LoopAction::Advance)
            .count();
        assert_eq!(advances, 4);
    }

    #[test]
    fn test_game_over_waits_for_button() {
        let mut scheduler = Scheduler::new(MOVE_DELAY_MS);
        for _ in 0..1000 {
            assert_eq!(scheduler.poll(1, true, false), LoopAction::Wait);
        }
        assert_eq!(scheduler.poll(1, true, true), LoopAction::Reset);
    }

    #[test]
    fn test_reset_restarts_timer() {
        let mut scheduler = Scheduler::new(10);
        for _ in 0..9 {
            scheduler.poll(1, false, false);
        }
        assert_eq!(scheduler.poll(0, true, true), LoopAction::Reset);
        assert_eq!(scheduler.poll(1, false, false), LoopAction::Wait);
    }

    #[test]
    fn test_buttons_ignored_while_playing() {
        let mut scheduler = Scheduler::new(MOVE_DELAY_MS);
        assert_eq!(scheduler.poll(1, false, true), LoopAction::Wait);
    }
}
