//! Folds write outcomes into UI notices

use tracing::{info, warn};

use super::persister::{SyncEvent, WriteKind};

/// What the UI should do about a finished write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncNotice {
    Saved,
    /// A failure already covered by a later successful ranking write
    Superseded,
    /// Show a non-blocking error; local state is kept and the next edit resends
    Failed(String),
    /// Deliberation started: local state is stale, reload the view
    ReloadRequired(String),
}

#[derive(Debug, Clone, Default)]
pub struct SyncTracker {
    latest_saved: u64,
    latest_failed: u64,
}

impl SyncTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest ranking sequence the server confirmed
    #[inline]
    pub fn latest_saved(&self) -> u64 {
        self.latest_saved
    }

    /// Whether the server may hold an older ranking than the one shown
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.latest_failed > self.latest_saved
    }

    pub fn observe(&mut self, event: SyncEvent) -> SyncNotice {
        match (event.kind, event.result) {
            (_, Err(err)) if err.requires_reload() => {
                warn!(error = %err, "write rejected, reload required");
                SyncNotice::ReloadRequired(err.to_string())
            }
            (WriteKind::Rank { seq }, Ok(())) => {
                self.latest_saved = self.latest_saved.max(seq);
                info!(seq, "ranking saved");
                SyncNotice::Saved
            }
            (WriteKind::Rank { seq }, Err(err)) => {
                if seq < self.latest_saved {
                    return SyncNotice::Superseded;
                }
                self.latest_failed = self.latest_failed.max(seq);
                warn!(seq, error = %err, "ranking save failed");
                SyncNotice::Failed(err.to_string())
            }
            (WriteKind::Star { .. }, Ok(())) => SyncNotice::Saved,
            (WriteKind::Star { project_id, .. }, Err(err)) => {
                warn!(project = %project_id, error = %err, "star save failed");
                SyncNotice::Failed(err.to_string())
            }
        }
    }
}
