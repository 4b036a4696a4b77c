//! Data model shared by the sessions, the API layer and the admin store
//!
//! These are the JSON shapes served by the judging platform. Unknown fields
//! are ignored so that newer servers do not break older clients.

mod admin;
mod judge;
mod project;

pub use admin::*;
pub use judge::*;
pub use project::*;
