//! Sync indicator state

use jiff::Timestamp;

/// What the sync indicator shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncState {
    /// Nothing outstanding; carries the time of the last successful sync
    Idle { last_sync: Option<Timestamp> },
    /// At least one sync call is outstanding
    Syncing,
    /// The most recent sync failed and nothing has succeeded since
    Error(String),
}

impl Default for SyncState {
    fn default() -> Self {
        SyncState::Idle { last_sync: None }
    }
}

impl SyncState {
    /// Derive the indicator from controller bookkeeping. An error wins over
    /// outstanding calls so a failure is not hidden by a later move.
    pub fn derive(pending: usize, last_error: Option<&str>, last_sync: Option<Timestamp>) -> Self {
        if let Some(error) = last_error {
            SyncState::Error(error.to_string())
        } else if pending > 0 {
            SyncState::Syncing
        } else {
            SyncState::Idle { last_sync }
        }
    }

    pub fn is_syncing(&self) -> bool {
        matches!(self, SyncState::Syncing)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SyncState::Error(_))
    }

    /// Short label for the header badge
    pub fn label(&self) -> String {
        match self {
            SyncState::Idle {
                last_sync: Some(at),
            } => format!("Synced {}", at.strftime("%H:%M:%S")),
            SyncState::Idle { last_sync: None } => "Synced".to_string(),
            SyncState::Syncing => "Syncing...".to_string(),
            SyncState::Error(_) => "Sync error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_takes_priority() {
        let state = SyncState::derive(2, Some("boom"), None);
        assert_eq!(state, SyncState::Error("boom".to_string()));
        assert!(state.is_error());
    }

    #[test]
    fn test_syncing_and_idle() {
        assert!(SyncState::derive(1, None, None).is_syncing());
        let at: Timestamp = "2024-01-15T10:00:00Z".parse().unwrap();
        let idle = SyncState::derive(0, None, Some(at));
        assert_eq!(idle, SyncState::Idle { last_sync: Some(at) });
        assert_eq!(SyncState::default().label(), "Synced");
    }
}
