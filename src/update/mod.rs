//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Every document
//! edit runs the refresh pipeline: trigger detection, suggestion filtering,
//! highlight reset.

mod autocomplete;
mod document;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::EditorModel;

pub use autocomplete::{refresh_autocomplete, update_autocomplete};
pub use document::update_document;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Document(m) => document::update_document(model, m),
        Msg::Autocomplete(m) => autocomplete::update_autocomplete(model, m),
    }
}
