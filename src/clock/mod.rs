//! Admin judging clock
//!
//! The server owns the clock; the dashboard polls it and interpolates
//! locally between polls using an injected time source.

mod service;
mod source;

pub use service::*;
pub use source::*;
