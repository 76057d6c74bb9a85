//! The pure autocomplete engine - detection, filtering, navigation
//!
//! These functions are synchronous computations over a text snapshot. All
//! stateful orchestration (match state, commit) lives in the update layer.

pub mod detect;
pub mod filter;
pub mod navigate;

pub use detect::{detect, TriggerMatch};
pub use filter::filter;
pub use navigate::advance;
