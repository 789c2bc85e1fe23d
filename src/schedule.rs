//! Refresh scheduling policy.
//!
//! The policy is a pure function from a fetch outcome to the next delay, so
//! the timing rules are testable without a runtime: success waits the normal
//! interval, a recoverable failure waits the short retry delay, and an
//! authentication failure stops scheduling entirely until the operator fixes
//! the configuration. There is no backoff growth and no retry cap.

use crate::config::WidgetConfig;
use crate::fetch::error::FetchError;
use std::time::Duration;

/// How a single fetch attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Success,
    RecoverableFailure,
    AuthFailure,
}

impl From<&FetchError> for FetchOutcome {
    fn from(err: &FetchError) -> Self {
        if err.is_recoverable() {
            FetchOutcome::RecoverableFailure
        } else {
            FetchOutcome::AuthFailure
        }
    }
}

/// Scheduler lifecycle: `Halted` is terminal until the process restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Idle,
    Fetching,
    Halted,
}

/// The two delays driving the refresh loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub update_interval: Duration,
    pub retry_delay: Duration,
}

impl RefreshPolicy {
    pub fn from_config(config: &WidgetConfig) -> Self {
        RefreshPolicy {
            update_interval: config.update_interval,
            retry_delay: config.retry_delay,
        }
    }

    /// Delay before the next fetch, or `None` when scheduling must halt.
    pub fn next_delay(&self, outcome: FetchOutcome) -> Option<Duration> {
        match outcome {
            FetchOutcome::Success => Some(self.update_interval),
            FetchOutcome::RecoverableFailure => Some(self.retry_delay),
            FetchOutcome::AuthFailure => None,
        }
    }

    /// State after a fetch attempt finishes.
    pub fn next_state(&self, outcome: FetchOutcome) -> SchedulerState {
        match outcome {
            FetchOutcome::AuthFailure => SchedulerState::Halted,
            _ => SchedulerState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RefreshPolicy {
        RefreshPolicy {
            update_interval: Duration::from_secs(600),
            retry_delay: Duration::from_secs(5),
        }
    }

    #[test]
    fn success_waits_the_normal_interval() {
        assert_eq!(
            policy().next_delay(FetchOutcome::Success),
            Some(Duration::from_secs(600))
        );
    }

    #[test]
    fn recoverable_failure_waits_exactly_the_retry_delay() {
        assert_eq!(
            policy().next_delay(FetchOutcome::RecoverableFailure),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn auth_failure_halts_scheduling() {
        assert_eq!(policy().next_delay(FetchOutcome::AuthFailure), None);
        assert_eq!(
            policy().next_state(FetchOutcome::AuthFailure),
            SchedulerState::Halted
        );
    }

    #[test]
    fn outcome_classification_follows_recoverability() {
        assert_eq!(
            FetchOutcome::from(&FetchError::Unauthorized),
            FetchOutcome::AuthFailure
        );
        let parse = FetchError::Parse(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(FetchOutcome::from(&parse), FetchOutcome::RecoverableFailure);
    }
}
