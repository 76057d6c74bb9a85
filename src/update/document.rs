//! Document update - apply edits, then refresh the autocomplete pipeline

use tracing::trace;

use super::autocomplete::refresh_autocomplete;
use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::{Cursor, EditorModel};

/// Apply a document edit and re-run trigger detection at the new cursor.
///
/// The refresh runs after every edit, so match state can never outlive the
/// text it was computed from.
pub fn update_document(model: &mut EditorModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertChar(ch) => {
            model.cursor = model.document.insert_char(model.cursor, ch);
            trace!(ch = %ch, offset = model.cursor.offset, "insert_char");
        }
        DocumentMsg::InsertNewline => {
            model.cursor = model.document.insert_newline(model.cursor);
        }
        DocumentMsg::DeleteBackward => {
            model.cursor = model.document.delete_backward(model.cursor);
        }
        DocumentMsg::SetCursor { block, offset } => {
            let Some(target) = model.document.block(block) else {
                return None;
            };
            model.cursor = Cursor::new(block, offset.min(target.len_chars()));
        }
    }

    refresh_autocomplete(model);
    Some(Cmd::Redraw)
}
