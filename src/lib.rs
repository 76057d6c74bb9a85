//! Mention - trigger-character autocomplete engine
//!
//! This crate provides the matching and replacement engine behind an
//! editor autocomplete popup: trigger detection, suggestion filtering,
//! keyboard-driven selection, and text-range replacement against a
//! block-based document, implemented with the Elm Architecture pattern.

pub mod autocomplete;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EngineConfig;
pub use messages::Msg;
pub use model::EditorModel;
pub use update::update;
