//! The unlock countdown state machine.

use serde::Serialize;

/// Observable state of an unlock countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UnlockState {
    /// Still waiting; gated links are inert.
    Counting {
        /// Seconds left before the unlock.
        remaining: u32,
    },
    /// Terminal. Gated links are navigable and stay that way.
    Complete,
}

impl UnlockState {
    /// Whether the countdown has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Seconds left, zero once complete.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        match self {
            Self::Counting { remaining } => *remaining,
            Self::Complete => 0,
        }
    }
}

/// Per-view countdown from an item's wait time down to [`UnlockState::Complete`].
///
/// The timer itself knows nothing about wall-clock time; something else calls
/// [`UnlockTimer::tick`] once per elapsed second (see [`super::Countdown`]).
/// The completion signal is latched: [`UnlockTimer::take_completion`] returns
/// `true` exactly once, after the transition to `Complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockTimer {
    wait_seconds: u32,
    state: UnlockState,
    completion_pending: bool,
}

impl UnlockTimer {
    /// Start a countdown of `wait_seconds`.
    ///
    /// A zero wait completes immediately, with the completion signal pending.
    #[must_use]
    pub fn new(wait_seconds: u32) -> Self {
        if wait_seconds == 0 {
            Self {
                wait_seconds,
                state: UnlockState::Complete,
                completion_pending: true,
            }
        } else {
            Self {
                wait_seconds,
                state: UnlockState::Counting {
                    remaining: wait_seconds,
                },
                completion_pending: false,
            }
        }
    }

    /// Advance by one second. A no-op once complete.
    pub fn tick(&mut self) -> UnlockState {
        if let UnlockState::Counting { remaining } = self.state {
            let remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                self.state = UnlockState::Complete;
                self.completion_pending = true;
            } else {
                self.state = UnlockState::Counting { remaining };
            }
        }
        self.state
    }

    /// Consume the completion signal. `true` at most once per timer.
    pub fn take_completion(&mut self) -> bool {
        std::mem::take(&mut self.completion_pending)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> UnlockState {
        self.state
    }

    /// The wait this timer started with.
    #[must_use]
    pub fn wait_seconds(&self) -> u32 {
        self.wait_seconds
    }

    /// Elapsed share of the wait, 0 to 100.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.wait_seconds, self.state)
    }
}

/// Elapsed share of `wait_seconds` given `state`, 0 to 100.
#[must_use]
pub fn progress_percent(wait_seconds: u32, state: UnlockState) -> u8 {
    if wait_seconds == 0 || state.is_complete() {
        return 100;
    }
    let elapsed = u64::from(wait_seconds.saturating_sub(state.remaining()));
    let percent = elapsed * 100 / u64::from(wait_seconds);
    u8::try_from(percent).unwrap_or(100)
}
