//! Judge workspace: the ranking and star sessions of one logged-in judge,
//! wired to the API and the persistence channel

mod workspace;

pub use workspace::*;
