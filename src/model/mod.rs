//! Editor model - the complete state of the engine
//!
//! State types following the Elm Architecture pattern: the model is only
//! mutated through update functions, one event at a time.

pub mod autocomplete;
pub mod document;

pub use autocomplete::{AutocompleteState, MatchState};
pub use document::{Block, BlockId, Cursor, Document, DocumentError};

use crate::config::EngineConfig;

/// The complete editor model: document, cursor, autocomplete state, config
#[derive(Debug, Clone)]
pub struct EditorModel {
    /// The block-based document
    pub document: Document,
    /// Current cursor position
    pub cursor: Cursor,
    /// Autocomplete match/selection state
    pub autocomplete: AutocompleteState,
    /// Trigger set and suggestion catalog for this instance
    pub config: EngineConfig,
}

impl EditorModel {
    /// Create a model with a single empty block
    pub fn new(config: EngineConfig) -> Self {
        let document = Document::new();
        let cursor = Cursor::new(document.first_block(), 0);
        Self {
            document,
            cursor,
            autocomplete: AutocompleteState::default(),
            config,
        }
    }

    /// Create a model with initial text, cursor at the end of the last block
    pub fn with_text(text: &str, config: EngineConfig) -> Self {
        let document = Document::with_text(text);
        // with_text always produces at least one block
        let last = document
            .blocks
            .last()
            .map(|b| Cursor::new(b.id, b.len_chars()))
            .unwrap_or_else(|| Cursor::new(document.first_block(), 0));
        Self {
            document,
            cursor: last,
            autocomplete: AutocompleteState::default(),
            config,
        }
    }

    /// Text of the cursor's block up to the cursor
    pub fn text_before_cursor(&self) -> String {
        self.document
            .text_before_cursor(self.cursor)
            .unwrap_or_default()
    }

    /// The block the cursor is in
    pub fn active_block(&self) -> Option<&Block> {
        self.document.block(self.cursor.block)
    }
}
