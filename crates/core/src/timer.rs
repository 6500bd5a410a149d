//
// ─── COUNTDOWN TIMER ───────────────────────────────────────────────────────────
//

/// Outcome of a single one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// The timer was not running (or already at zero); nothing changed.
    Idle,
    /// One second elapsed; the timer keeps running.
    Ticked,
    /// The decrement reached zero. Fired at most once per run; the timer
    /// stops itself and will not tick again until restarted.
    Completed,
}

/// A restartable, pausable countdown from a configured duration to zero.
///
/// The timer holds no clock of its own: the host drives it by calling
/// [`CountdownTimer::tick`] once per second while it owns the timer. Dropping
/// the driver (and with it the timer) is how ticking is cancelled, so a
/// discarded timer can never fire against state that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    duration: u32,
    remaining: u32,
    running: bool,
}

impl CountdownTimer {
    /// Creates a stopped timer with `duration_secs` on the clock.
    #[must_use]
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration: duration_secs,
            remaining: duration_secs,
            running: false,
        }
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts the countdown.
    ///
    /// No-op while already running, and no-op at zero so a finished run can
    /// never fire a second spurious completion.
    pub fn start(&mut self) {
        if !self.running && self.remaining > 0 {
            self.running = true;
        }
    }

    /// Stops the countdown, keeping the remaining seconds.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Puts `new_duration` (or the configured duration) back on the clock
    /// and stops the countdown. Safe to call from any state.
    ///
    /// Passing a duration also becomes the configured duration for later
    /// `reset(None)` calls.
    pub fn reset(&mut self, new_duration: Option<u32>) {
        if let Some(duration) = new_duration {
            self.duration = duration;
        }
        self.remaining = self.duration;
        self.running = false;
    }

    /// Advances the countdown by one second.
    ///
    /// Returns [`TimerTick::Completed`] exactly once per run, on the tick
    /// that reaches zero; that tick also stops the timer.
    pub fn tick(&mut self) -> TimerTick {
        if !self.running || self.remaining == 0 {
            return TimerTick::Idle;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            return TimerTick::Completed;
        }
        TimerTick::Ticked
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
