//! Drop target resolution
//!
//! A drop target is an item, a container sentinel or an explicit slot. Items
//! resolve to their own position; the ranked sentinel appends, the unranked
//! sentinel inserts at the front (newest first). Pointer geometry maps onto
//! the first two cases: inside a container the closest item wins, an empty
//! container yields its sentinel, and anywhere else yields no target. Slots
//! are what keyboard moves produce.

use serde::Serialize;

use super::state::{Container, RankingState};
use crate::model::ItemId;

/// What the pointer or keyboard cursor is currently over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DropTarget {
    Item(ItemId),
    Container(Container),
    /// Final index of the dragged item in a container (clamped)
    Slot(Container, usize),
}

impl DropTarget {
    /// Whether the target names an explicit position
    #[inline]
    pub fn is_positional(&self) -> bool {
        matches!(self, DropTarget::Slot(..))
    }
}

/// Resolve a target to the container and insertion index it stands for
pub fn resolve_target(state: &RankingState, target: DropTarget) -> Option<(Container, usize)> {
    match target {
        DropTarget::Item(id) => state.locate(id),
        DropTarget::Container(Container::Ranked) => {
            Some((Container::Ranked, state.ranked().len()))
        }
        DropTarget::Container(Container::Unranked) => Some((Container::Unranked, 0)),
        DropTarget::Slot(container, index) => Some((container, index)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Rendered positions of the containers and their items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub containers: Vec<(Container, Rect)>,
    pub items: Vec<(ItemId, Container, Rect)>,
}

impl Layout {
    /// Item whose rect contains the point, used to start a pointer drag
    pub fn item_at(&self, p: Point) -> Option<ItemId> {
        self.items
            .iter()
            .find(|(_, _, rect)| rect.contains(p))
            .map(|(id, _, _)| *id)
    }
}

/// Closest-item hit test
pub fn hit_test(layout: &Layout, p: Point) -> Option<DropTarget> {
    let (container, _) = layout
        .containers
        .iter()
        .find(|(_, rect)| rect.contains(p))?;

    let closest = layout
        .items
        .iter()
        .filter(|(_, c, _)| c == container)
        .map(|(id, _, rect)| {
            let c = rect.center();
            let dist = (c.x - p.x).powi(2) + (c.y - p.y).powi(2);
            (*id, dist)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1));

    Some(match closest {
        Some((id, _)) => DropTarget::Item(id),
        None => DropTarget::Container(*container),
    })
}
