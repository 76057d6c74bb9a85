//! Autocomplete state - the open match, filtered suggestions, and highlight

use super::document::BlockId;

/// Record of an open trigger sequence at the cursor.
///
/// Exists only while the text before the cursor parses as
/// `trigger + word chars`; destroyed on commit or when the pattern breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    /// Block containing the match
    pub block: BlockId,
    /// The trigger character that opened the lookup
    pub trigger: char,
    /// Word characters between the trigger and the cursor
    pub partial: String,
    /// Char offset of the trigger within the block
    pub start: usize,
    /// Char offset of the cursor when the match was last computed
    pub end: usize,
}

/// Complete autocomplete state, replaced wholesale on every refresh.
///
/// Invariants: `filtered` is non-empty only while `active` is some; the
/// popup is visible iff `filtered` is non-empty; `highlight` is meaningful
/// only while the popup is visible.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteState {
    /// The open trigger sequence, if any
    pub active: Option<MatchState>,
    /// Catalog entries eligible for display, in catalog order
    pub filtered: Vec<String>,
    /// Index of the highlighted suggestion; None means nothing highlighted
    pub highlight: Option<usize>,
}

impl AutocompleteState {
    /// Whether the suggestion popup is shown
    pub fn is_visible(&self) -> bool {
        !self.filtered.is_empty()
    }

    /// The highlighted suggestion text, if any
    pub fn highlighted(&self) -> Option<&str> {
        self.highlight
            .and_then(|i| self.filtered.get(i))
            .map(String::as_str)
    }

    /// Reset to idle: no match, no suggestions, no highlight
    pub fn clear(&mut self) {
        self.active = None;
        self.filtered.clear();
        self.highlight = None;
    }
}
