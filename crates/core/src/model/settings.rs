use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("timer duration must be > 0 seconds")]
    InvalidDuration,
}

/// Presenter configuration, applied uniformly to every question.
///
/// Both knobs are mutable at any point in a session; the presenter reacts
/// (a duration change resets the running timer) without touching position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenterSettings {
    timer_duration_secs: u32,
    auto_advance: bool,
}

impl PresenterSettings {
    pub const DEFAULT_TIMER_SECS: u32 = 30;

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidDuration` for a zero duration.
    pub fn new(timer_duration_secs: u32, auto_advance: bool) -> Result<Self, SettingsError> {
        if timer_duration_secs == 0 {
            return Err(SettingsError::InvalidDuration);
        }
        Ok(Self {
            timer_duration_secs,
            auto_advance,
        })
    }

    #[must_use]
    pub fn timer_duration_secs(&self) -> u32 {
        self.timer_duration_secs
    }

    #[must_use]
    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidDuration` for a zero duration; the
    /// previous value is kept.
    pub fn set_timer_duration(&mut self, secs: u32) -> Result<(), SettingsError> {
        if secs == 0 {
            return Err(SettingsError::InvalidDuration);
        }
        self.timer_duration_secs = secs;
        Ok(())
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
    }
}

impl Default for PresenterSettings {
    fn default() -> Self {
        Self {
            timer_duration_secs: Self::DEFAULT_TIMER_SECS,
            auto_advance: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_rejected_on_construction_and_update() {
        assert_eq!(
            PresenterSettings::new(0, false).unwrap_err(),
            SettingsError::InvalidDuration
        );

        let mut settings = PresenterSettings::default();
        assert_eq!(
            settings.set_timer_duration(0).unwrap_err(),
            SettingsError::InvalidDuration
        );
        assert_eq!(
            settings.timer_duration_secs(),
            PresenterSettings::DEFAULT_TIMER_SECS
        );
    }

    #[test]
    fn defaults_are_manual_thirty_seconds() {
        let settings = PresenterSettings::default();
        assert_eq!(settings.timer_duration_secs(), 30);
        assert!(!settings.auto_advance());
    }
}
