//! # Plume UI
//!
//! Desktop front end using the iced framework.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: `App`, a thin wrapper around `plume_core::Editor`
//! - **Message**: Events that can occur
//! - **Update**: (state, message) -> new state, plus a follow-up `Task`
//! - **View**: state -> UI elements
//!
//! ## Learning: Keeping the Toolkit at the Edge
//!
//! Everything a user can observe besides pixels (titles, status text, the
//! unsaved-changes guard) lives in `plume-core`. This crate only translates
//! iced events into editor calls and draws the result.

pub mod app;
pub mod theme;

pub use app::{run, App, Flags};
pub use theme::Theme;
