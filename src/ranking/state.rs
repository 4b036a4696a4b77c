//! Ranking state: two ordered partitions with explicit transitions

use ahash::AHashSet;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

use crate::config::MAX_RANKED;
use crate::model::{assign_item_ids, ItemId, JudgedProject, ProjectId, SortableJudgedProject};

/// Ranked list, never longer than [`MAX_RANKED`]
pub type RankedList = SmallVec<[SortableJudgedProject; MAX_RANKED]>;

/// One of the two lists a project can live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Container {
    Ranked,
    Unranked,
}

impl Container {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Container::Ranked => Container::Unranked,
            Container::Unranked => Container::Ranked,
        }
    }
}

/// Why a move was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The ranked list already holds [`MAX_RANKED`] projects
    RankedFull,
    /// The item is not part of this state
    UnknownItem,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::RankedFull => write!(f, "only {} projects can be ranked", MAX_RANKED),
            RejectReason::UnknownItem => write!(f, "unknown item"),
        }
    }
}

/// Ranked and unranked partition of the projects a judge has seen
///
/// Every seen project lives in exactly one of the two lists. `ranked` is in
/// rank order (best first) and `unranked` is newest view first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankingState {
    ranked: RankedList,
    unranked: Vec<SortableJudgedProject>,
}

impl RankingState {
    /// Build the partition from the judge profile.
    ///
    /// `seen` is ordered oldest view first. Ranking ids that are unknown or
    /// repeated are skipped, and anything past [`MAX_RANKED`] stays unranked.
    pub fn from_profile(seen: &[JudgedProject], rankings: &[ProjectId]) -> Self {
        let items = assign_item_ids(seen);

        let mut ranked: RankedList = SmallVec::new();
        let mut taken: AHashSet<&str> = AHashSet::with_capacity(rankings.len());
        for project_id in rankings {
            if ranked.len() == MAX_RANKED {
                break;
            }
            if !taken.insert(project_id.as_str()) {
                continue;
            }
            if let Some(item) = items.iter().find(|i| i.project_id() == project_id) {
                ranked.push(item.clone());
            }
        }

        let ranked_ids: AHashSet<ItemId> = ranked.iter().map(|i| i.id).collect();
        let unranked = items
            .iter()
            .rev()
            .filter(|i| !ranked_ids.contains(&i.id))
            .cloned()
            .collect();

        Self { ranked, unranked }
    }

    #[inline]
    pub fn ranked(&self) -> &[SortableJudgedProject] {
        &self.ranked
    }

    #[inline]
    pub fn unranked(&self) -> &[SortableJudgedProject] {
        &self.unranked
    }

    #[inline]
    pub fn list(&self, container: Container) -> &[SortableJudgedProject] {
        match container {
            Container::Ranked => &self.ranked,
            Container::Unranked => &self.unranked,
        }
    }

    /// Number of projects across both lists
    #[inline]
    pub fn len(&self) -> usize {
        self.ranked.len() + self.unranked.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.ranked.len() >= MAX_RANKED
    }

    /// The ordered project ids of the ranked list, exactly what gets persisted
    pub fn ranked_ids(&self) -> Vec<ProjectId> {
        self.ranked
            .iter()
            .map(|i| i.project.project_id.clone())
            .collect()
    }

    /// Container and index of an item
    pub fn locate(&self, id: ItemId) -> Option<(Container, usize)> {
        if let Some(pos) = self.ranked.iter().position(|i| i.id == id) {
            return Some((Container::Ranked, pos));
        }
        self.unranked
            .iter()
            .position(|i| i.id == id)
            .map(|pos| (Container::Unranked, pos))
    }

    pub fn get(&self, id: ItemId) -> Option<&SortableJudgedProject> {
        self.ranked
            .iter()
            .chain(self.unranked.iter())
            .find(|i| i.id == id)
    }

    /// Item id of a project, if it was seen
    pub fn item_for_project(&self, project_id: &str) -> Option<ItemId> {
        self.ranked
            .iter()
            .chain(self.unranked.iter())
            .find(|i| i.project_id() == project_id)
            .map(|i| i.id)
    }

    /// Items in display order: ranked first, then unranked
    pub fn display_order(&self) -> impl Iterator<Item = &SortableJudgedProject> {
        self.ranked.iter().chain(self.unranked.iter())
    }

    /// Reorder inside one list. `to` is the index after removal, clamped.
    /// Returns whether anything moved.
    pub fn move_within(&mut self, container: Container, from: usize, to: usize) -> bool {
        match container {
            Container::Ranked => array_move(&mut self.ranked, from, to),
            Container::Unranked => array_move(&mut self.unranked, from, to),
        }
    }

    /// Move an item into `to` at `index` (clamped), honoring the ranked cap.
    ///
    /// If the item is already in `to` this is a reorder.
    pub fn move_to(
        &mut self,
        id: ItemId,
        to: Container,
        index: usize,
    ) -> Result<bool, RejectReason> {
        let (from, pos) = self.locate(id).ok_or(RejectReason::UnknownItem)?;
        if from == to {
            return Ok(self.move_within(to, pos, index));
        }
        if to == Container::Ranked && self.is_full() {
            return Err(RejectReason::RankedFull);
        }

        match from {
            Container::Ranked => {
                let item = self.ranked.remove(pos);
                let index = index.min(self.unranked.len());
                self.unranked.insert(index, item);
            }
            Container::Unranked => {
                let item = self.unranked.remove(pos);
                let index = index.min(self.ranked.len());
                self.ranked.insert(index, item);
            }
        }
        Ok(true)
    }

    /// Update the starred flag of a project wherever it lives
    pub fn set_starred(&mut self, project_id: &str, starred: bool) -> bool {
        match self
            .ranked
            .iter_mut()
            .chain(self.unranked.iter_mut())
            .find(|i| i.project_id() == project_id)
        {
            Some(item) => {
                item.project.starred = starred;
                true
            }
            None => false,
        }
    }
}

/// Splice-based reorder: remove at `from`, insert at `to`
fn array_move(list: &mut [SortableJudgedProject], from: usize, to: usize) -> bool {
    if from >= list.len() {
        return false;
    }
    let to = to.min(list.len() - 1);
    if from < to {
        list[from..=to].rotate_left(1);
    } else if to < from {
        list[to..=from].rotate_right(1);
    } else {
        return false;
    }
    true
}
