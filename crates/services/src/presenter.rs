//! The live-presentation state machine.
//!
//! A [`Presenter`] sequences through a loaded question set one question at a
//! time: a per-question countdown runs, the correct answer is revealed when
//! the countdown expires (or the presenter forces it), and the session either
//! waits for a manual advance or chains into the next question automatically
//! after a fixed delay. The manual and automatic presentation modes are the
//! same machine; only the `auto_advance` setting differs.
//!
//! The machine holds no clock. The host calls [`Presenter::tick`] once per
//! second for as long as a session is on screen; both the question countdown
//! and the auto-advance delay are driven by that same tick, which makes every
//! scenario deterministic and keeps cancellation trivial (drop the driver, or
//! exit the session, and nothing can fire late).

use tracing::{debug, info};

use quiz_core::model::{PresenterSettings, Question, QuestionSet, SettingsError};
use quiz_core::{CountdownTimer, TimerTick};

/// Seconds the revealed answer stays on screen before auto-advance moves on.
pub const AUTO_ADVANCE_DELAY_SECS: u32 = 3;

/// Phase of a loaded session. An unloaded presenter has no phase at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterPhase {
    /// Timer not running, answer hidden. Entered on load, pause, restart and
    /// (in manual mode) after an advance.
    AwaitingStart,
    /// The question countdown is ticking.
    Running,
    /// The correct answer is on screen. Either waiting for a manual advance
    /// or counting down the auto-advance delay.
    Revealed,
    /// Reveal happened on the final question and the presenter finished.
    Complete,
}

/// What a one-second tick did, mostly for hosts that want to log or react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing user-visible changed.
    Idle,
    /// The question countdown lost one second.
    Counted,
    /// The question countdown expired; the answer is now revealed.
    Revealed,
    /// The auto-advance delay expired; the session moved to the next question.
    AutoAdvanced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Session {
    set: QuestionSet,
    current_index: usize,
    phase: PresenterPhase,
    timer: CountdownTimer,
    /// Remaining seconds of a pending auto-advance, armed on reveal.
    /// `None` means no advance is scheduled.
    auto_advance_in: Option<u32>,
}

/// The presentation controller: settings plus, when a set is loaded, the
/// session state. `session == None` is the unloaded state.
///
/// Commands issued in a phase where they do not apply are no-ops; the
/// machine never panics on out-of-order input from the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presenter {
    settings: PresenterSettings,
    session: Option<Session>,
}

impl Presenter {
    #[must_use]
    pub fn new(settings: PresenterSettings) -> Self {
        Self {
            settings,
            session: None,
        }
    }

    //
    // ─── COMMANDS ──────────────────────────────────────────────────────────
    //

    /// Loads a question set, replacing any session in progress.
    pub fn load(&mut self, set: QuestionSet) {
        info!(questions = set.len(), "question set loaded");
        self.session = Some(Session {
            timer: CountdownTimer::new(self.settings.timer_duration_secs()),
            current_index: 0,
            phase: PresenterPhase::AwaitingStart,
            auto_advance_in: None,
            set,
        });
    }

    /// Discards the session and returns to the unloaded state. Any pending
    /// countdown or auto-advance dies with it.
    pub fn exit(&mut self) {
        if self.session.take().is_some() {
            info!("session exited");
        }
    }

    /// Starts the countdown for the current question.
    pub fn start(&mut self) {
        if let Some(session) = &mut self.session
            && session.phase == PresenterPhase::AwaitingStart
        {
            session.timer.start();
            if session.timer.is_running() {
                session.phase = PresenterPhase::Running;
            }
        }
    }

    /// Pauses the countdown, keeping the remaining seconds.
    pub fn pause(&mut self) {
        if let Some(session) = &mut self.session
            && session.phase == PresenterPhase::Running
        {
            session.timer.pause();
            session.phase = PresenterPhase::AwaitingStart;
        }
    }

    /// Start/pause flip, accepted only while the answer is hidden.
    pub fn toggle(&mut self) {
        match self.phase() {
            Some(PresenterPhase::AwaitingStart) => self.start(),
            Some(PresenterPhase::Running) => self.pause(),
            _ => {}
        }
    }

    /// Shows the answer now, without waiting for the countdown.
    pub fn reveal(&mut self) {
        let auto = self.settings.auto_advance();
        if let Some(session) = &mut self.session
            && matches!(
                session.phase,
                PresenterPhase::AwaitingStart | PresenterPhase::Running
            )
        {
            session.enter_revealed(auto);
        }
    }

    /// Moves to the next question, or finishes the session on the last one.
    ///
    /// Accepted only while revealed. A manual advance cancels any pending
    /// auto-advance atomically, so a stale advance can never fire against
    /// the question that is now current.
    pub fn advance(&mut self) {
        let settings = self.settings;
        if let Some(session) = &mut self.session
            && session.phase == PresenterPhase::Revealed
        {
            session.advance(&settings);
        }
    }

    /// Back to question one, answer hidden, timer reloaded.
    pub fn restart(&mut self) {
        if let Some(session) = &mut self.session {
            session.current_index = 0;
            session.phase = PresenterPhase::AwaitingStart;
            session.auto_advance_in = None;
            session
                .timer
                .reset(Some(self.settings.timer_duration_secs()));
        }
    }

    /// Changes the per-question duration.
    ///
    /// A running or paused countdown is immediately reset to the new value;
    /// there is no partial-time carryover. The current position is kept.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidDuration` for a zero duration; nothing
    /// changes.
    pub fn set_timer_duration(&mut self, secs: u32) -> Result<(), SettingsError> {
        self.settings.set_timer_duration(secs)?;
        if let Some(session) = &mut self.session {
            session.timer.reset(Some(secs));
            if session.phase == PresenterPhase::Running {
                session.phase = PresenterPhase::AwaitingStart;
            }
        }
        Ok(())
    }

    /// Enables or disables unattended progression. Disabling while an
    /// advance is pending disarms it.
    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.settings.set_auto_advance(enabled);
        if !enabled && let Some(session) = &mut self.session {
            session.auto_advance_in = None;
        }
    }

    //
    // ─── TICK ──────────────────────────────────────────────────────────────
    //

    /// Advances the session by one second. The host calls this at 1 Hz
    /// while a session is on screen.
    pub fn tick(&mut self) -> TickEvent {
        let settings = self.settings;
        let Some(session) = &mut self.session else {
            return TickEvent::Idle;
        };
        match session.phase {
            PresenterPhase::Running => match session.timer.tick() {
                TimerTick::Ticked => TickEvent::Counted,
                TimerTick::Completed => {
                    session.enter_revealed(settings.auto_advance());
                    TickEvent::Revealed
                }
                TimerTick::Idle => TickEvent::Idle,
            },
            PresenterPhase::Revealed => {
                let Some(left) = session.auto_advance_in else {
                    return TickEvent::Idle;
                };
                if left > 1 {
                    session.auto_advance_in = Some(left - 1);
                    TickEvent::Idle
                } else {
                    session.advance(&settings);
                    TickEvent::AutoAdvanced
                }
            }
            PresenterPhase::AwaitingStart | PresenterPhase::Complete => TickEvent::Idle,
        }
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Option<PresenterPhase> {
        self.session.as_ref().map(|session| session.phase)
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.phase() == Some(PresenterPhase::Revealed)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        let session = self.session.as_ref()?;
        session.set.get(session.current_index)
    }

    /// 1-based position of the current question.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.session
            .as_ref()
            .map(|session| session.current_index + 1)
    }

    #[must_use]
    pub fn total(&self) -> Option<usize> {
        self.session.as_ref().map(|session| session.set.len())
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.current_index == session.set.last_index())
    }

    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        self.session
            .as_ref()
            .map(|session| session.timer.remaining_secs())
    }

    #[must_use]
    pub fn settings(&self) -> &PresenterSettings {
        &self.settings
    }

    #[must_use]
    pub fn question_set(&self) -> Option<&QuestionSet> {
        self.session.as_ref().map(|session| &session.set)
    }
}

impl Session {
    fn enter_revealed(&mut self, auto_advance: bool) {
        self.timer.pause();
        self.phase = PresenterPhase::Revealed;
        // Never armed on the last question: the only way forward from there
        // is the presenter's explicit finish.
        self.auto_advance_in = if auto_advance && self.current_index < self.set.last_index() {
            Some(AUTO_ADVANCE_DELAY_SECS)
        } else {
            None
        };
        debug!(index = self.current_index, "answer revealed");
    }

    fn advance(&mut self, settings: &PresenterSettings) {
        self.auto_advance_in = None;
        if self.current_index < self.set.last_index() {
            self.current_index += 1;
            self.timer.reset(Some(settings.timer_duration_secs()));
            if settings.auto_advance() {
                self.timer.start();
                self.phase = PresenterPhase::Running;
            } else {
                self.phase = PresenterPhase::AwaitingStart;
            }
            debug!(index = self.current_index, "advanced to next question");
        } else {
            self.phase = PresenterPhase::Complete;
            info!("session complete");
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
