//! Autocomplete update - refresh pipeline, highlight navigation, commit

use tracing::{debug, warn};

use crate::autocomplete::{advance, detect, filter};
use crate::commands::Cmd;
use crate::messages::{AutocompleteMsg, Direction};
use crate::model::{AutocompleteState, EditorModel, MatchState};

/// Recompute match state and the filtered list from the current cursor.
///
/// Called after every edit and cursor move. The whole autocomplete state is
/// replaced, never field-patched, and the highlight always resets: a stale
/// highlight into a differently-sized list must never survive a keystroke.
pub fn refresh_autocomplete(model: &mut EditorModel) {
    let text = model.text_before_cursor();
    let was_open = model.autocomplete.active.is_some();

    model.autocomplete = match detect(&text, &model.config.trigger_characters) {
        Some(m) => {
            let filtered = filter(&model.config.suggestion_catalog, m.trigger, &m.partial);
            debug!(
                trigger = %m.trigger,
                partial = %m.partial,
                candidates = filtered.len(),
                "trigger match open"
            );
            AutocompleteState {
                active: Some(MatchState {
                    block: model.cursor.block,
                    trigger: m.trigger,
                    partial: m.partial,
                    start: m.start,
                    end: model.cursor.offset,
                }),
                filtered,
                highlight: None,
            }
        }
        None => {
            if was_open {
                debug!("trigger match closed");
            }
            AutocompleteState::default()
        }
    };
}

/// Handle navigation, accept, pick, and dismiss
pub fn update_autocomplete(model: &mut EditorModel, msg: AutocompleteMsg) -> Option<Cmd> {
    match msg {
        AutocompleteMsg::Navigate(direction) => navigate(model, direction),
        AutocompleteMsg::Accept => accept(model),
        AutocompleteMsg::Pick(suggestion) => commit(model, &suggestion),
        AutocompleteMsg::Dismiss => dismiss(model),
    }
}

/// Move the highlight through the filtered list, wrapping at the ends.
/// A hidden popup makes this a silent no-op.
fn navigate(model: &mut EditorModel, direction: Direction) -> Option<Cmd> {
    let len = model.autocomplete.filtered.len();
    if len == 0 {
        return None;
    }
    model.autocomplete.highlight = advance(model.autocomplete.highlight, direction, len);
    Some(Cmd::Redraw)
}

/// Commit the highlighted suggestion, defaulting to the first entry.
/// An empty filtered list makes this a silent no-op.
fn accept(model: &mut EditorModel) -> Option<Cmd> {
    let suggestion = model
        .autocomplete
        .highlighted()
        .or_else(|| model.autocomplete.filtered.first().map(String::as_str))?
        .to_string();
    commit(model, &suggestion)
}

/// Close the popup without touching the document
fn dismiss(model: &mut EditorModel) -> Option<Cmd> {
    if model.autocomplete.active.is_none() && !model.autocomplete.is_visible() {
        return None;
    }
    model.autocomplete.clear();
    Some(Cmd::Redraw)
}

/// Replace the matched `trigger + partial` span with the chosen suggestion.
///
/// The recorded range is re-validated against the current block text before
/// anything is replaced. A range that no longer holds the matched span means
/// the document changed underneath us; in that case the commit is refused
/// rather than guessing at a replacement range.
fn commit(model: &mut EditorModel, suggestion: &str) -> Option<Cmd> {
    let m = model.autocomplete.active.clone()?;

    let Some(block) = model.document.block(m.block) else {
        warn!(block = ?m.block, "commit refused: matched block is gone");
        return None;
    };
    if m.end > block.len_chars() || m.start >= m.end {
        warn!(start = m.start, end = m.end, "commit refused: stale match range");
        return None;
    }
    let span: String = block.buffer.slice(m.start..m.end).to_string();
    let mut expected = String::with_capacity(1 + m.partial.len());
    expected.push(m.trigger);
    expected.push_str(&m.partial);
    if span != expected {
        warn!(span = %span, expected = %expected, "commit refused: text changed under match");
        return None;
    }

    match model
        .document
        .replace_range(m.block, m.start, m.end, suggestion)
    {
        Ok(cursor) => {
            debug!(suggestion = %suggestion, start = m.start, "committed suggestion");
            model.cursor = cursor;
            model.autocomplete.clear();
            Some(Cmd::Redraw)
        }
        Err(e) => {
            warn!(error = %e, "commit refused: replace failed");
            None
        }
    }
}
