//! Simulated GitHub Projects sync.
//!
//! The board never talks to a real remote. Every mutation goes through a
//! [`SyncBackend`], and [`SimulatedSync`] stands in for GitHub with a fixed
//! non-blocking delay and a configurable failure policy.

use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::SyncConfig;
use crate::error::{KanbanError, Result};
use crate::types::{Issue, IssueStatus};

/// Remote side of the board. Implementations must be cheap to share between
/// tasks; the controller holds one behind an `Arc`.
pub trait SyncBackend: Send + Sync + 'static {
    /// Push a status change for an existing issue
    fn update_status(
        &self,
        issue_id: &str,
        status: IssueStatus,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Push a newly created issue
    fn create_issue(&self, issue: &Issue) -> impl Future<Output = Result<()>> + Send;

    /// Reload the board from the remote
    fn refresh(&self) -> impl Future<Output = Result<()>> + Send;
}

/// When simulated mutations fail.
///
/// Written in config as `never`, `always` or `every N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FailurePolicy {
    /// Every call succeeds
    #[default]
    Never,
    /// Every call fails
    Always,
    /// Every n-th mutation fails, counting from 1
    EveryNth(u64),
}

impl FailurePolicy {
    /// Whether the `call`-th mutation (1-based) should fail
    pub fn fails(self, call: u64) -> bool {
        match self {
            FailurePolicy::Never => false,
            FailurePolicy::Always => true,
            FailurePolicy::EveryNth(0) => false,
            FailurePolicy::EveryNth(n) => call % n == 0,
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Never => write!(f, "never"),
            FailurePolicy::Always => write!(f, "always"),
            FailurePolicy::EveryNth(n) => write!(f, "every {n}"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "never" => return Ok(FailurePolicy::Never),
            "always" => return Ok(FailurePolicy::Always),
            _ => {}
        }
        s.strip_prefix("every")
            .and_then(|n| n.trim().parse::<u64>().ok())
            .map(FailurePolicy::EveryNth)
            .ok_or_else(|| {
                KanbanError::Config(format!(
                    "invalid failure policy '{s}', expected 'never', 'always' or 'every N'"
                ))
            })
    }
}

impl TryFrom<String> for FailurePolicy {
    type Error = KanbanError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FailurePolicy> for String {
    fn from(policy: FailurePolicy) -> Self {
        policy.to_string()
    }
}

/// Stand-in for the GitHub Projects API.
///
/// Mutations share one call counter so `EveryNth` applies across moves and
/// creates alike. Refreshes only wait.
#[derive(Debug)]
pub struct SimulatedSync {
    move_delay: Duration,
    create_delay: Duration,
    refresh_delay: Duration,
    policy: FailurePolicy,
    calls: AtomicU64,
}

impl Default for SimulatedSync {
    fn default() -> Self {
        Self::from_config(&SyncConfig::default())
    }
}

impl SimulatedSync {
    pub fn from_config(config: &SyncConfig) -> Self {
        Self {
            move_delay: Duration::from_millis(config.move_delay_ms),
            create_delay: Duration::from_millis(config.create_delay_ms),
            refresh_delay: Duration::from_millis(config.refresh_delay_ms),
            policy: config.failure,
            calls: AtomicU64::new(0),
        }
    }

    /// Replace the failure policy
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Number of mutations attempted so far
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_call_fails(&self) -> bool {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.policy.fails(call)
    }
}

impl SyncBackend for SimulatedSync {
    async fn update_status(&self, issue_id: &str, status: IssueStatus) -> Result<()> {
        let fail = self.next_call_fails();
        tokio::time::sleep(self.move_delay).await;

        if fail {
            return Err(KanbanError::SyncFailed {
                id: issue_id.to_string(),
                reason: "simulated GitHub API failure".to_string(),
            });
        }

        tracing::info!(issue = issue_id, status = %status, "synced status change to GitHub");
        Ok(())
    }

    async fn create_issue(&self, issue: &Issue) -> Result<()> {
        let fail = self.next_call_fails();
        tokio::time::sleep(self.create_delay).await;

        if fail {
            return Err(KanbanError::CreateFailed {
                id: issue.id.clone(),
                reason: "simulated GitHub API failure".to_string(),
            });
        }

        tracing::info!(issue = %issue.id, title = %issue.title, "created issue on GitHub");
        Ok(())
    }

    async fn refresh(&self) -> Result<()> {
        tokio::time::sleep(self.refresh_delay).await;
        tracing::debug!("refreshed board from GitHub");
        Ok(())
    }
}
