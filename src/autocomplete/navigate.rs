//! Highlight navigation - cycle through the filtered list

use crate::messages::Direction;

/// Advance the highlight index in a list of `len` entries.
///
/// `None` means nothing is highlighted. Entering the list from `None` lands
/// on the first entry going forward and the last entry going backward.
/// Within the list the index wraps modulo `len` in both directions.
/// An empty list keeps the highlight at `None`.
pub fn advance(current: Option<usize>, direction: Direction, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match (current, direction) {
        (None, Direction::Next) => 0,
        (None, Direction::Previous) => len - 1,
        (Some(i), Direction::Next) => (i + 1) % len,
        (Some(i), Direction::Previous) => (i + len - 1) % len,
    })
}
