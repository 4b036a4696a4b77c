//! Persistence of judge edits
//!
//! Writes are spawned onto the tokio runtime so the UI never waits on them.
//! Their outcomes come back on a channel and are folded by [`SyncTracker`]
//! into notices for the UI. Every ranking write carries the full ranked
//! list, so a later success makes any earlier failure irrelevant.

mod persister;
mod tracker;

pub use persister::*;
pub use tracker::*;
