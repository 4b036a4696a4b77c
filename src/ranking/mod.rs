//! Judge ranking module
//!
//! Holds the ranked/unranked partition of a judge's seen projects, the
//! hit-testing contract used to resolve drop targets, the gesture sources
//! (pointer and keyboard) and the session that turns gestures into
//! committed rankings.

mod gesture;
mod session;
mod state;
mod target;


pub use gesture::*;
pub use session::*;
pub use state::*;
pub use target::*;
