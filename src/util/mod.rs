//! Shared utility functions

pub mod text;
