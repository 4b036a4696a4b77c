//! RankingSession - gesture-driven editor over a [`RankingState`]
//!
//! The session keeps the last committed state and a working copy that shows
//! the in-flight preview while a gesture is active. Every finished gesture
//! either commits the working copy or rolls it back to the snapshot taken
//! when the gesture began, so no partial move survives a rejected or
//! cancelled gesture.

use serde::Serialize;
use tracing::{debug, info};

use super::gesture::GestureEvent;
use super::state::{RankingState, RejectReason};
use super::target::{resolve_target, DropTarget};
use crate::error::{JuryError, Result};
use crate::model::{ItemId, JudgeProfile, ProjectId};

/// Full ranking snapshot to persist, tagged with the order it was produced in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankUpdate {
    pub seq: u64,
    pub ranking: Vec<ProjectId>,
}

/// Result of a `drag_over`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPreview {
    /// The working copy changed to show the item at the hovered position
    Moved,
    /// Already there, or hovering nothing
    Unchanged,
    /// The provisional move was refused; the preview keeps its last position
    Rejected(RejectReason),
}

/// Result of a finished gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Committed. Carries an update when the ranked order changed.
    Committed(Option<RankUpdate>),
    /// Rolled back to the pre-gesture snapshot
    Rejected(RejectReason),
    Cancelled,
}

impl GestureOutcome {
    /// The ranking update to persist, if any
    pub fn update(&self) -> Option<&RankUpdate> {
        match self {
            GestureOutcome::Committed(update) => update.as_ref(),
            _ => None,
        }
    }
}

/// What the session did with a [`GestureEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureResponse {
    Began,
    Preview(DragPreview),
    Finished(GestureOutcome),
}

/// Ranking editor for one judge
#[derive(Debug, Clone)]
pub struct RankingSession {
    committed: RankingState,
    working: RankingState,
    active: Option<ItemId>,
    /// Target the working copy already reflects
    last_target: Option<DropTarget>,
    locked: bool,
    next_seq: u64,
}

impl RankingSession {
    pub fn new(state: RankingState, locked: bool) -> Self {
        Self {
            working: state.clone(),
            committed: state,
            active: None,
            last_target: None,
            locked,
            next_seq: 1,
        }
    }

    pub fn from_profile(profile: &JudgeProfile, locked: bool) -> Self {
        Self::new(
            RankingState::from_profile(&profile.seen_projects, &profile.rankings),
            locked,
        )
    }

    /// State to render: the live preview during a gesture, otherwise committed
    #[inline]
    pub fn view(&self) -> &RankingState {
        &self.working
    }

    #[inline]
    pub fn committed(&self) -> &RankingState {
        &self.committed
    }

    #[inline]
    pub fn active_item(&self) -> Option<ItemId> {
        self.active
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lock or unlock editing. Locking drops any gesture in progress.
    pub fn set_locked(&mut self, locked: bool) {
        if locked && self.active.is_some() {
            self.cancel_drag();
        }
        self.locked = locked;
    }

    /// Replace everything with freshly fetched server state
    pub fn reload(&mut self, profile: &JudgeProfile, locked: bool) {
        let state = RankingState::from_profile(&profile.seen_projects, &profile.rankings);
        self.working = state.clone();
        self.committed = state;
        self.active = None;
        self.last_target = None;
        self.locked = locked;
    }

    /// Keep the starred flag of ranking cards in step with the star state
    pub fn set_starred(&mut self, project_id: &str, starred: bool) {
        self.committed.set_starred(project_id, starred);
        self.working.set_starred(project_id, starred);
    }

    /// Dispatch a gesture event from any input source
    pub fn handle(&mut self, event: GestureEvent) -> Result<GestureResponse> {
        match event {
            GestureEvent::Begin(id) => self.begin_drag(id).map(|_| GestureResponse::Began),
            GestureEvent::Over(id, target) => {
                self.drag_over(id, target).map(GestureResponse::Preview)
            }
            GestureEvent::End(id, target) => {
                self.end_drag(id, target).map(GestureResponse::Finished)
            }
            GestureEvent::Cancel => Ok(GestureResponse::Finished(self.cancel_drag())),
        }
    }

    pub fn begin_drag(&mut self, id: ItemId) -> Result<()> {
        if self.locked {
            return Err(JuryError::SessionLocked);
        }
        if let Some(active) = self.active {
            return Err(JuryError::DragInProgress(active));
        }
        if self.committed.locate(id).is_none() {
            return Err(JuryError::UnknownItem(id));
        }
        self.working = self.committed.clone();
        self.active = Some(id);
        self.last_target = None;
        debug!(item = %id, "drag started");
        Ok(())
    }

    /// Preview the item at the hovered position.
    ///
    /// Hovering the same item or sentinel again is a no-op, so repeated
    /// pointer moves over one item do not make the preview oscillate. Slot
    /// targets always apply.
    pub fn drag_over(&mut self, id: ItemId, target: Option<DropTarget>) -> Result<DragPreview> {
        self.check_active(id)?;
        let Some(target) = target else {
            return Ok(DragPreview::Unchanged);
        };
        if self.already_previewed(target) {
            return Ok(DragPreview::Unchanged);
        }
        Ok(match self.place(id, target) {
            Ok(moved) => {
                self.last_target = Some(target);
                if moved {
                    DragPreview::Moved
                } else {
                    DragPreview::Unchanged
                }
            }
            Err(reason) => DragPreview::Rejected(reason),
        })
    }

    /// Finish the gesture. No target means the item was released outside
    /// every container, which cancels.
    pub fn end_drag(&mut self, id: ItemId, target: Option<DropTarget>) -> Result<GestureOutcome> {
        self.check_active(id)?;
        let Some(target) = target else {
            return Ok(self.cancel_drag());
        };

        let placed = if self.already_previewed(target) {
            Ok(false)
        } else {
            self.place(id, target)
        };

        let outcome = match placed {
            Ok(_) => {
                let changed = self.working.ranked_ids() != self.committed.ranked_ids();
                self.committed = self.working.clone();
                let update = changed.then(|| {
                    let update = RankUpdate {
                        seq: self.next_seq,
                        ranking: self.committed.ranked_ids(),
                    };
                    self.next_seq += 1;
                    update
                });
                info!(
                    item = %id,
                    ranked = self.committed.ranked().len(),
                    persist = update.is_some(),
                    "drag committed"
                );
                GestureOutcome::Committed(update)
            }
            Err(reason) => {
                debug!(item = %id, %reason, "drag rejected");
                self.working = self.committed.clone();
                GestureOutcome::Rejected(reason)
            }
        };
        self.active = None;
        self.last_target = None;
        Ok(outcome)
    }

    /// Restore the pre-gesture snapshot
    pub fn cancel_drag(&mut self) -> GestureOutcome {
        if let Some(id) = self.active.take() {
            debug!(item = %id, "drag cancelled");
        }
        self.last_target = None;
        self.working = self.committed.clone();
        GestureOutcome::Cancelled
    }

    /// Whether the working copy already reflects a repeated pointer target
    fn already_previewed(&self, target: DropTarget) -> bool {
        !target.is_positional() && self.last_target == Some(target)
    }

    fn check_active(&self, id: ItemId) -> Result<()> {
        match self.active {
            Some(active) if active == id => Ok(()),
            Some(active) => Err(JuryError::DragInProgress(active)),
            None => Err(JuryError::NoActiveDrag),
        }
    }

    /// Move the dragged item in the working copy to where `target` resolves
    fn place(&mut self, id: ItemId, target: DropTarget) -> std::result::Result<bool, RejectReason> {
        if target == DropTarget::Item(id) {
            return Ok(false);
        }
        let (container, index) =
            resolve_target(&self.working, target).ok_or(RejectReason::UnknownItem)?;
        let (from, _) = self.working.locate(id).ok_or(RejectReason::UnknownItem)?;

        // Dropping on the sentinel of the item's own container keeps its slot
        if from == container && matches!(target, DropTarget::Container(_)) {
            return Ok(false);
        }
        self.working.move_to(id, container, index)
    }
}
