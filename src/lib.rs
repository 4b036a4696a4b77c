//! Jury Core - judge ranking, starring and admin client logic
//!
//! This crate provides the client-side state machines of the Jury hackathon
//! judging platform, independent of any UI toolkit:
//!
//! - [`ranking`]: drag-and-drop ranking of up to [`config::MAX_RANKED`]
//!   projects, driven by pointer or keyboard gestures
//! - [`star`]: starred/unstarred partition
//! - [`judge`]: the judge workspace tying both to the API with optimistic,
//!   fire-and-forget persistence
//! - [`clock`], [`admin`]: the admin clock service, row actions and data store
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use jury_core::api::HttpClient;
//! use jury_core::config::ClientConfig;
//! use jury_core::judge::JudgeWorkspace;
//! use jury_core::ranking::{DropTarget, GestureEvent};
//!
//! # async fn run() -> jury_core::error::Result<()> {
//! let api = Arc::new(HttpClient::new(ClientConfig::from_env())?);
//! let mut workspace = JudgeWorkspace::load(api).await?;
//!
//! if let Some(first) = workspace.ranking().unranked().first().map(|p| p.id) {
//!     let onto = Some(DropTarget::Container(jury_core::ranking::Container::Ranked));
//!     workspace.handle_gesture(GestureEvent::Begin(first))?;
//!     workspace.handle_gesture(GestureEvent::End(first, onto))?;
//! }
//! let notice = workspace.next_sync().await;
//! println!("{:?}", notice);
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod judge;
pub mod model;
pub mod ranking;
pub mod star;
pub mod sync;

#[cfg(test)]
mod testing;

pub use error::{JuryError, Result};
pub use judge::JudgeWorkspace;
pub use ranking::{GestureEvent, RankingSession, RankingState};
