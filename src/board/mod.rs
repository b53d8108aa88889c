//! Board controller
//!
//! Owns the [`IssueStore`] and runs every mutation as an optimistic update
//! followed by a call to the [`SyncBackend`]. Observers receive a fresh
//! [`BoardSnapshot`] over a `watch` channel after each change.

pub mod status;
pub mod sync;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use jiff::Timestamp;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::error::Result;
use crate::store::IssueStore;
use crate::types::{Issue, IssueDraft, IssueStatus};

pub use status::SyncState;
pub use sync::{FailurePolicy, SimulatedSync, SyncBackend};

/// Read-only copy of the board published to observers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSnapshot {
    pub issues: Vec<Issue>,
    /// Project the board is scoped to, if any
    pub project_id: Option<String>,
    pub sync: SyncState,
    pub loading: bool,
}

impl BoardSnapshot {
    /// Issues shown in a column: matching status and in the selected project
    pub fn column(&self, status: IssueStatus) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| i.status == status)
            .filter(|i| match self.project_id.as_deref() {
                Some(project) => i.in_project(project),
                None => true,
            })
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }
}

/// Result of a [`BoardController::move_issue`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Unknown id or the issue already had the target status
    Unchanged,
    /// The move was applied and the sync succeeded
    Synced,
    /// The sync failed and the status was put back
    Reverted { error: String },
    /// A newer move on the same issue started before this one finished
    Superseded,
}

/// Result of a [`BoardController::create_issue`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The title was empty after trimming; nothing was created
    Rejected,
    Synced(Issue),
    /// The sync failed; the issue stays on the board
    Failed { issue: Issue, error: String },
}

impl CreateOutcome {
    /// The created issue, if any
    pub fn issue(&self) -> Option<&Issue> {
        match self {
            CreateOutcome::Rejected => None,
            CreateOutcome::Synced(issue) | CreateOutcome::Failed { issue, .. } => Some(issue),
        }
    }
}

#[derive(Debug, Default)]
struct Shared {
    store: IssueStore,
    project_id: Option<String>,
    pending: usize,
    last_error: Option<String>,
    last_sync: Option<Timestamp>,
    loading: bool,
}

impl Shared {
    fn sync_state(&self) -> SyncState {
        SyncState::derive(self.pending, self.last_error.as_deref(), self.last_sync)
    }

    fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            issues: self.store.issues().to_vec(),
            project_id: self.project_id.clone(),
            sync: self.sync_state(),
            loading: self.loading,
        }
    }

    fn record_success(&mut self) {
        self.last_error = None;
        self.last_sync = Some(Timestamp::now());
    }
}

/// Moves outstanding on one issue
#[derive(Debug, Clone, Copy)]
struct InFlight {
    /// Generation of the newest move
    generation: u64,
    /// Last status the backend accepted, or the status before the first
    /// outstanding move
    confirmed: IssueStatus,
}

struct Inner<B> {
    shared: Mutex<Shared>,
    backend: B,
    in_flight: DashMap<String, InFlight>,
    generation: AtomicU64,
    tx: watch::Sender<BoardSnapshot>,
}

/// Cloneable handle to the board. All clones share one store.
pub struct BoardController<B> {
    inner: Arc<Inner<B>>,
}

impl<B> Clone for BoardController<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: SyncBackend> BoardController<B> {
    pub fn new(store: IssueStore, backend: B) -> Self {
        let shared = Shared {
            store,
            ..Default::default()
        };
        let (tx, _rx) = watch::channel(shared.snapshot());
        Self {
            inner: Arc::new(Inner {
                shared: Mutex::new(shared),
                backend,
                in_flight: DashMap::new(),
                generation: AtomicU64::new(0),
                tx,
            }),
        }
    }

    /// Scope the board to a project from the start
    pub fn with_project(self, project_id: impl Into<String>) -> Self {
        self.set_project(Some(project_id.into()));
        self
    }

    pub fn backend(&self) -> &B {
        &self.inner.backend
    }

    /// Receiver that sees every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<BoardSnapshot> {
        self.inner.tx.subscribe()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.inner.shared.lock().snapshot()
    }

    /// Issues with `status` across all projects, in store order
    pub fn list_by_status(&self, status: IssueStatus) -> Vec<Issue> {
        self.inner
            .shared
            .lock()
            .store
            .list_by_status(status)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Issues with `status` in the selected project
    pub fn visible_by_status(&self, status: IssueStatus) -> Vec<Issue> {
        let shared = self.inner.shared.lock();
        shared
            .store
            .list_by_status_in(shared.project_id.as_deref(), status)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Issue> {
        self.inner.shared.lock().store.get(id).cloned()
    }

    pub fn project(&self) -> Option<String> {
        self.inner.shared.lock().project_id.clone()
    }

    pub fn set_project(&self, project_id: Option<String>) {
        {
            let mut shared = self.inner.shared.lock();
            if shared.project_id == project_id {
                return;
            }
            tracing::debug!(project = ?project_id, "board project changed");
            shared.project_id = project_id;
        }
        self.publish();
    }

    pub fn sync_state(&self) -> SyncState {
        self.inner.shared.lock().sync_state()
    }

    /// Whether any sync call is outstanding
    pub fn is_syncing(&self) -> bool {
        self.inner.shared.lock().pending > 0
    }

    pub fn is_loading(&self) -> bool {
        self.inner.shared.lock().loading
    }

    /// Move an issue to `status`.
    ///
    /// The store is updated before the sync call starts. Only the newest move
    /// on an issue decides the outcome: if its sync fails, the status goes back
    /// to the last one the backend accepted (or the one before the first
    /// overlapping move) while `updated_at` stays advanced. Older moves report
    /// [`MoveOutcome::Superseded`]; a successful one still counts as accepted.
    pub async fn move_issue(&self, id: &str, status: IssueStatus) -> MoveOutcome {
        let (previous, generation) = {
            let mut shared = self.inner.shared.lock();
            let Some(previous) = shared.store.set_status(id, status, Timestamp::now()) else {
                return MoveOutcome::Unchanged;
            };
            let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
            self.inner
                .in_flight
                .entry(id.to_string())
                .and_modify(|moves| moves.generation = generation)
                .or_insert(InFlight {
                    generation,
                    confirmed: previous,
                });
            shared.pending += 1;
            (previous, generation)
        };
        tracing::debug!(issue = id, from = %previous, to = %status, "moving issue");
        self.publish();

        let result = self.inner.backend.update_status(id, status).await;

        let outcome = {
            let mut shared = self.inner.shared.lock();
            shared.pending = shared.pending.saturating_sub(1);
            let latest = self
                .inner
                .in_flight
                .remove_if(id, |_, moves| moves.generation == generation)
                .map(|(_, moves)| moves);
            match (latest, result) {
                (None, Ok(())) => {
                    if let Some(mut moves) = self.inner.in_flight.get_mut(id) {
                        moves.confirmed = status;
                    }
                    tracing::debug!(issue = id, "move superseded by a newer move");
                    MoveOutcome::Superseded
                }
                (None, Err(e)) => {
                    tracing::warn!(
                        issue = id,
                        to = %status,
                        error = %e,
                        "superseded move failed to sync"
                    );
                    MoveOutcome::Superseded
                }
                (Some(_), Ok(())) => {
                    shared.record_success();
                    MoveOutcome::Synced
                }
                (Some(moves), Err(e)) => {
                    let error = e.to_string();
                    tracing::error!(
                        issue = id,
                        revert_to = %moves.confirmed,
                        error = %error,
                        "failed to sync issue move, reverting"
                    );
                    // No newer move exists, so the store still holds `status`.
                    shared.store.revert_status(id, moves.confirmed);
                    shared.last_error = Some(error.clone());
                    MoveOutcome::Reverted { error }
                }
            }
        };
        self.publish();
        outcome
    }

    /// Create an issue from a draft and sync it.
    ///
    /// A blank title creates nothing. The new issue is placed at the front of
    /// the board before the sync call, and stays there if the sync fails.
    pub async fn create_issue(&self, draft: IssueDraft) -> Result<CreateOutcome> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Ok(CreateOutcome::Rejected);
        }

        let issue = {
            let mut shared = self.inner.shared.lock();
            let now = Timestamp::now();
            let issue = Issue {
                id: shared.store.generate_id()?,
                title: title.to_string(),
                description: draft.description.filter(|d| !d.trim().is_empty()),
                status: draft.status,
                labels: draft.labels,
                assignees: draft.assignees,
                url: draft.url,
                number: Some(shared.store.next_number()),
                created_at: now,
                updated_at: now,
                project_id: shared.project_id.clone(),
            };
            shared.store.prepend(issue.clone())?;
            shared.pending += 1;
            issue
        };
        tracing::debug!(issue = %issue.id, "created issue locally");
        self.publish();

        let result = self.inner.backend.create_issue(&issue).await;

        let outcome = {
            let mut shared = self.inner.shared.lock();
            shared.pending = shared.pending.saturating_sub(1);
            match result {
                Ok(()) => {
                    shared.record_success();
                    CreateOutcome::Synced(issue)
                }
                Err(e) => {
                    let error = e.to_string();
                    tracing::error!(issue = %issue.id, error = %error, "failed to create issue");
                    shared.last_error = Some(error.clone());
                    CreateOutcome::Failed { issue, error }
                }
            }
        };
        self.publish();
        Ok(outcome)
    }

    /// Reload the board. The loading flag is set for the duration.
    pub async fn refresh(&self) -> Result<()> {
        self.inner.shared.lock().loading = true;
        self.publish();

        let result = self.inner.backend.refresh().await;

        {
            let mut shared = self.inner.shared.lock();
            shared.loading = false;
            match &result {
                Ok(()) => shared.record_success(),
                Err(e) => {
                    tracing::error!(error = %e, "failed to refresh board");
                    shared.last_error = Some(e.to_string());
                }
            }
        }
        self.publish();
        result
    }

    fn publish(&self) {
        let snapshot = self.inner.shared.lock().snapshot();
        self.inner.tx.send_replace(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_issues;

    fn controller() -> BoardController<SimulatedSync> {
        BoardController::new(
            IssueStore::with_issues(sample_issues()),
            SimulatedSync::default(),
        )
    }

    #[test]
    fn test_snapshot_column_scoped_by_project() {
        let board = controller();
        assert_eq!(board.snapshot().column(IssueStatus::Done).len(), 2);

        board.set_project(Some("project_2".to_string()));
        assert!(board.snapshot().column(IssueStatus::Done).is_empty());
        assert!(board.visible_by_status(IssueStatus::Done).is_empty());
        assert_eq!(board.list_by_status(IssueStatus::Done).len(), 2);
    }

    #[test]
    fn test_create_outcome_issue() {
        assert!(CreateOutcome::Rejected.issue().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_move_unknown_issue_is_unchanged() {
        let board = controller();
        let before = board.snapshot();
        assert_eq!(
            board.move_issue("missing", IssueStatus::Done).await,
            MoveOutcome::Unchanged
        );
        assert_eq!(board.snapshot(), before);
        assert_eq!(board.backend().calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_optimistic_update() {
        let board = controller();
        let mut rx = board.subscribe();

        let task = {
            let board = board.clone();
            tokio::spawn(async move { board.move_issue("issue_1", IssueStatus::Done).await })
        };

        rx.changed().await.unwrap();
        {
            let snapshot = rx.borrow_and_update();
            assert_eq!(snapshot.get("issue_1").unwrap().status, IssueStatus::Done);
            assert!(snapshot.sync.is_syncing());
        }

        assert_eq!(task.await.unwrap(), MoveOutcome::Synced);
        assert!(!board.snapshot().sync.is_syncing());
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_failure_is_logged() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .with_writer({
                let logs = logs.clone();
                move || logs.clone()
            })
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let board = BoardController::new(
            IssueStore::with_issues(sample_issues()),
            SimulatedSync::default().with_policy(FailurePolicy::Always),
        );
        let (first, second) = tokio::join!(
            board.move_issue("issue_1", IssueStatus::InProgress),
            board.move_issue("issue_1", IssueStatus::Done),
        );
        assert_eq!(first, MoveOutcome::Superseded);
        assert!(matches!(second, MoveOutcome::Reverted { .. }));

        let output = String::from_utf8(logs.0.lock().clone()).unwrap();
        assert!(output.contains("superseded move failed to sync"));
        assert!(output.contains("issue_1"));
        assert!(output.contains("failed to sync issue move, reverting"));
    }
}
