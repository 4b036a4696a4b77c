//! Admin module
//!
//! The closed set of row actions an admin can take on the project and judge
//! tables, their dispatch to the API, and the client-side store of fetched
//! admin data.

mod action;
mod store;

pub use action::*;
pub use store::*;
