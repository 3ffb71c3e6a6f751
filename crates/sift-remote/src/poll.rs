use crate::{config::RemoteConfig, error::PollError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

///
/// WithdrawalStatus
///
/// Lifecycle states a withdrawal request moves through. `Completed` and
/// `Failed` are terminal; polling stops once either is observed.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl WithdrawalStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

///
/// PollStep
///
/// Outcome of feeding one observed status to a tracker.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PollStep {
    /// Non-terminal status; keep polling.
    Continue,

    /// First terminal status observed. Emitted exactly once.
    Settled(WithdrawalStatus),
}

///
/// StatusTracker
///
/// Latches the first terminal status. Further observations after
/// settlement, terminal or not, are `Continue`; a settled withdrawal
/// never reopens.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct StatusTracker {
    settled: Option<WithdrawalStatus>,
}

impl StatusTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { settled: None }
    }

    #[must_use]
    pub const fn settled(&self) -> Option<WithdrawalStatus> {
        self.settled
    }

    pub fn observe(&mut self, status: WithdrawalStatus) -> PollStep {
        if self.settled.is_some() || !status.is_terminal() {
            return PollStep::Continue;
        }

        self.settled = Some(status);
        PollStep::Settled(status)
    }
}

///
/// StatusSource
///
/// Where the poller reads the current status from, typically a REST
/// endpoint. Injected so tests can script status sequences.
///

#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn current_status(&self) -> Result<WithdrawalStatus, PollError>;
}

/// Poll a source on the configured interval until a terminal status.
///
/// The first poll runs immediately. Source errors propagate; a
/// configured attempt cap exhausting first yields
/// [`PollError::AttemptsExhausted`].
pub async fn watch(
    source: &dyn StatusSource,
    config: &RemoteConfig,
) -> Result<WithdrawalStatus, PollError> {
    let mut tracker = StatusTracker::new();
    let mut interval = tokio::time::interval(config.poll_interval());
    let mut attempts: u32 = 0;

    loop {
        interval.tick().await;
        attempts = attempts.saturating_add(1);

        let status = source.current_status().await?;
        debug!(?status, attempts, "withdrawal status polled");

        if let PollStep::Settled(status) = tracker.observe(status) {
            info!(?status, attempts, "withdrawal settled");
            return Ok(status);
        }

        if config.max_poll_attempts.is_some_and(|max| attempts >= max) {
            return Err(PollError::AttemptsExhausted { attempts });
        }
    }
}
