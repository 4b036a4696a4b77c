//! JudgeWorkspace - everything the judge ranking page needs
//!
//! Loads the judge profile and deliberation status, owns the ranking and star
//! state, turns committed gestures and star toggles into background writes,
//! and reacts to their outcomes. A deliberation-lock rejection locks the
//! sessions and flags the workspace for a full reload.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::api::JudgeApi;
use crate::error::{JuryError, Result};
use crate::model::JudgeProfile;
use crate::ranking::{GestureEvent, GestureResponse, RankingSession, RankingState};
use crate::star::StarState;
use crate::sync::{Persister, SyncEvent, SyncNotice, SyncTracker};

pub struct JudgeWorkspace<A: ?Sized> {
    api: Arc<A>,
    profile: JudgeProfile,
    ranking: RankingSession,
    stars: StarState,
    persister: Persister<A>,
    events: mpsc::UnboundedReceiver<SyncEvent>,
    tracker: SyncTracker,
    needs_reload: bool,
}

impl<A> JudgeWorkspace<A>
where
    A: JudgeApi + ?Sized + 'static,
{
    /// Fetch the profile and deliberation status and build both sessions
    pub async fn load(api: Arc<A>) -> Result<Self> {
        let (profile, locked) = tokio::try_join!(api.fetch_profile(), api.deliberation_active())?;
        info!(
            judge = %profile.id,
            seen = profile.seen_projects.len(),
            ranked = profile.rankings.len(),
            locked,
            "judge workspace loaded"
        );

        let ranking = RankingSession::from_profile(&profile, locked);
        let stars = StarState::from_seen(&profile.seen_projects);
        let (persister, events) = Persister::new(Arc::clone(&api));

        Ok(Self {
            api,
            profile,
            ranking,
            stars,
            persister,
            events,
            tracker: SyncTracker::new(),
            needs_reload: false,
        })
    }

    /// Throw away local state and rebuild from the server
    pub async fn reload(&mut self) -> Result<()> {
        let (profile, locked) =
            tokio::try_join!(self.api.fetch_profile(), self.api.deliberation_active())?;
        self.ranking.reload(&profile, locked);
        self.stars = StarState::from_seen(&profile.seen_projects);
        self.profile = profile;
        self.needs_reload = false;
        info!(locked, "judge workspace reloaded");
        Ok(())
    }

    #[inline]
    pub fn profile(&self) -> &JudgeProfile {
        &self.profile
    }

    /// Ranking state to render
    #[inline]
    pub fn ranking(&self) -> &RankingState {
        self.ranking.view()
    }

    #[inline]
    pub fn session(&self) -> &RankingSession {
        &self.ranking
    }

    #[inline]
    pub fn stars(&self) -> &StarState {
        &self.stars
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.ranking.is_locked()
    }

    #[inline]
    pub fn needs_reload(&self) -> bool {
        self.needs_reload
    }

    #[inline]
    pub fn tracker(&self) -> &SyncTracker {
        &self.tracker
    }

    /// Apply a gesture; a committed ranking change is sent in the background
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Result<GestureResponse> {
        let response = self.ranking.handle(event)?;
        if let GestureResponse::Finished(outcome) = &response {
            if let Some(update) = outcome.update() {
                self.persister.submit_ranking(update.clone());
            }
        }
        Ok(response)
    }

    /// Flip a project's star and send it right away. Returns the new flag.
    pub fn toggle_star(&mut self, project_id: &str) -> Result<bool> {
        if self.is_locked() {
            return Err(JuryError::SessionLocked);
        }
        let update = self.stars.toggle(project_id)?;
        self.ranking.set_starred(&update.project_id, update.starred);
        let starred = update.starred;
        self.persister.submit_star(update);
        Ok(starred)
    }

    /// Process every outcome that already arrived
    pub fn drain_sync(&mut self) -> Vec<SyncNotice> {
        let mut notices = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            notices.push(self.observe(event));
        }
        notices
    }

    /// Wait for the next outcome
    pub async fn next_sync(&mut self) -> Option<SyncNotice> {
        let event = self.events.recv().await?;
        Some(self.observe(event))
    }

    fn observe(&mut self, event: SyncEvent) -> SyncNotice {
        let notice = self.tracker.observe(event);
        if let SyncNotice::ReloadRequired(reason) = &notice {
            warn!(%reason, "locking judge workspace");
            self.ranking.set_locked(true);
            self.needs_reload = true;
        }
        notice
    }
}
