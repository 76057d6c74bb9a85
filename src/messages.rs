//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::BlockId;

/// Direction for highlight navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move highlight toward the start of the list (wraps)
    Previous,
    /// Move highlight toward the end of the list (wraps)
    Next,
}

/// Document-specific messages (text editing)
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Insert a character at the cursor
    InsertChar(char),
    /// Split the current block at the cursor
    InsertNewline,
    /// Delete the character before the cursor (Backspace)
    DeleteBackward,
    /// Move the cursor to an absolute position (mouse click in the host)
    SetCursor { block: BlockId, offset: usize },
}

/// Autocomplete-specific messages (popup navigation and commit)
#[derive(Debug, Clone)]
pub enum AutocompleteMsg {
    /// Move the highlight up or down the filtered list
    Navigate(Direction),
    /// Commit the highlighted suggestion, or the first one if none is
    /// highlighted (Enter/Tab)
    Accept,
    /// Commit an explicitly chosen suggestion, bypassing the highlight
    /// (pointer click on a popup entry)
    Pick(String),
    /// Close the popup without touching the document (Escape)
    Dismiss,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// Autocomplete messages (navigation, accept, pick)
    Autocomplete(AutocompleteMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create an insert character message
    pub fn insert_char(ch: char) -> Self {
        Msg::Document(DocumentMsg::InsertChar(ch))
    }

    /// Create a highlight navigation message
    pub fn navigate(direction: Direction) -> Self {
        Msg::Autocomplete(AutocompleteMsg::Navigate(direction))
    }

    /// Create an accept message
    pub fn accept() -> Self {
        Msg::Autocomplete(AutocompleteMsg::Accept)
    }
}
