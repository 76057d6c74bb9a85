//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use mention::config::EngineConfig;
use mention::messages::Msg;
use mention::model::EditorModel;
use mention::update::update;

/// Catalog and triggers used throughout the integration tests
pub fn test_config() -> EngineConfig {
    EngineConfig {
        trigger_characters: vec!['#', '@'],
        suggestion_catalog: ["#general", "#games", "@admin"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Create a model with given text, cursor at the end of the last block
pub fn test_model(text: &str) -> EditorModel {
    EditorModel::with_text(text, test_config())
}

/// Feed a string through the update loop one character at a time
pub fn type_str(model: &mut EditorModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::insert_char(ch));
    }
}

/// Text of the block the cursor is currently in
pub fn active_block_text(model: &EditorModel) -> String {
    model
        .active_block()
        .map(|b| b.text())
        .unwrap_or_default()
}
