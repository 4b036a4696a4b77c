//! Fire-and-forget writes with observed outcomes

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::JudgeApi;
use crate::error::JuryError;
use crate::ranking::RankUpdate;
use crate::star::StarUpdate;

/// What a finished write was about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteKind {
    Rank { seq: u64 },
    Star { project_id: String, starred: bool },
}

/// Outcome of one write
#[derive(Debug)]
pub struct SyncEvent {
    pub kind: WriteKind,
    pub result: Result<(), JuryError>,
}

/// Spawns writes against a [`JudgeApi`] and reports their outcomes
pub struct Persister<A: ?Sized> {
    api: Arc<A>,
    events: mpsc::UnboundedSender<SyncEvent>,
}

impl<A> Persister<A>
where
    A: JudgeApi + ?Sized + 'static,
{
    /// Create a persister and the receiving end of its outcome channel
    pub fn new(api: Arc<A>) -> (Self, mpsc::UnboundedReceiver<SyncEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (Self { api, events }, rx)
    }

    /// Send a full ranking snapshot. Must be called inside a tokio runtime.
    pub fn submit_ranking(&self, update: RankUpdate) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            debug!(seq = update.seq, ranked = update.ranking.len(), "sending ranking");
            let result = api.submit_ranking(&update.ranking).await;
            // Receiver gone means the workspace was dropped; nothing to report to
            let _ = events.send(SyncEvent {
                kind: WriteKind::Rank { seq: update.seq },
                result,
            });
        })
    }

    /// Send a star change. Must be called inside a tokio runtime.
    pub fn submit_star(&self, update: StarUpdate) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.set_star(&update.project_id, update.starred).await;
            let _ = events.send(SyncEvent {
                kind: WriteKind::Star {
                    project_id: update.project_id,
                    starred: update.starred,
                },
                result,
            });
        })
    }
}
