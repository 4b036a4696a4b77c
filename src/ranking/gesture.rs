//! Gesture sources
//!
//! The session only understands [`GestureEvent`]s. Pointer input and keyboard
//! input are two ways of producing them; both go through the same session
//! transitions, so a keyboard move ends in the same state as the equivalent
//! pointer drag.

use super::state::{Container, RankingState};
use super::target::{hit_test, DropTarget, Layout, Point};
use crate::model::ItemId;

/// One step of a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    Begin(ItemId),
    Over(ItemId, Option<DropTarget>),
    End(ItemId, Option<DropTarget>),
    Cancel,
}

/// Pointer (mouse or touch) gestures resolved through [`hit_test`]
#[derive(Debug, Clone, Default)]
pub struct PointerGestures {
    layout: Layout,
    active: Option<ItemId>,
}

impl PointerGestures {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            active: None,
        }
    }

    /// Replace the layout after the UI re-rendered
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn pointer_down(&mut self, p: Point) -> Option<GestureEvent> {
        if self.active.is_some() {
            return None;
        }
        let id = self.layout.item_at(p)?;
        self.active = Some(id);
        Some(GestureEvent::Begin(id))
    }

    pub fn pointer_move(&mut self, p: Point) -> Option<GestureEvent> {
        let id = self.active?;
        Some(GestureEvent::Over(id, hit_test(&self.layout, p)))
    }

    pub fn pointer_up(&mut self, p: Point) -> Option<GestureEvent> {
        let id = self.active.take()?;
        Some(GestureEvent::End(id, hit_test(&self.layout, p)))
    }

    pub fn pointer_cancel(&mut self) -> Option<GestureEvent> {
        self.active.take().map(|_| GestureEvent::Cancel)
    }
}

/// Keys understood by [`KeyboardGestures`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderKey {
    /// Space or Enter on a focused card
    Lift(ItemId),
    /// Arrow up
    MoveUp,
    /// Arrow down
    MoveDown,
    /// Space or Enter while lifted
    Drop,
    /// Escape
    Cancel,
}

/// Keyboard reordering along the display order (ranked, then unranked).
///
/// Moving past the end of a list crosses into the other container: up from
/// the top of unranked appends to ranked, down from the bottom of ranked goes
/// to the front of unranked. `view` is the state the session currently shows.
#[derive(Debug, Clone, Default)]
pub struct KeyboardGestures {
    lifted: Option<ItemId>,
}

impl KeyboardGestures {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn lifted(&self) -> Option<ItemId> {
        self.lifted
    }

    pub fn key(&mut self, key: ReorderKey, view: &RankingState) -> Option<GestureEvent> {
        match key {
            ReorderKey::Lift(id) => {
                if self.lifted.is_some() {
                    return None;
                }
                self.lifted = Some(id);
                Some(GestureEvent::Begin(id))
            }
            ReorderKey::MoveUp => {
                let id = self.lifted?;
                Some(GestureEvent::Over(id, neighbor_target(view, id, Direction::Up)))
            }
            ReorderKey::MoveDown => {
                let id = self.lifted?;
                Some(GestureEvent::Over(id, neighbor_target(view, id, Direction::Down)))
            }
            ReorderKey::Drop => {
                let id = self.lifted.take()?;
                Some(GestureEvent::End(id, Some(DropTarget::Item(id))))
            }
            ReorderKey::Cancel => self.lifted.take().map(|_| GestureEvent::Cancel),
        }
    }

    /// Forget the lifted item, e.g. when the session rejected the lift
    pub fn reset(&mut self) {
        self.lifted = None;
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// Slot one step up or down from the item's current position
fn neighbor_target(view: &RankingState, id: ItemId, dir: Direction) -> Option<DropTarget> {
    let (container, index) = view.locate(id)?;
    let len = view.list(container).len();
    let slot = match (dir, container) {
        (Direction::Up, _) if index > 0 => DropTarget::Slot(container, index - 1),
        (Direction::Down, _) if index + 1 < len => DropTarget::Slot(container, index + 1),
        (Direction::Up, Container::Unranked) => {
            DropTarget::Slot(Container::Ranked, view.ranked().len())
        }
        (Direction::Down, Container::Ranked) => DropTarget::Slot(Container::Unranked, 0),
        // Top of ranked or bottom of unranked: stay put
        _ => DropTarget::Slot(container, index),
    };
    Some(slot)
}
