//! Trigger detection - find an open trigger+word run ending at the cursor

use crate::util::text::is_word_char;

/// A trigger sequence found immediately before the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMatch {
    /// The trigger character that opened the run
    pub trigger: char,
    /// Word characters typed after the trigger (may be empty)
    pub partial: String,
    /// Char offset of the trigger within the scanned text
    pub start: usize,
}

impl TriggerMatch {
    /// Length of the matched span in chars (trigger + partial)
    pub fn span_len(&self) -> usize {
        1 + self.partial.chars().count()
    }
}

/// Scan the text preceding the cursor for `trigger + word chars` anchored at
/// the end of the string.
///
/// Only the last unbroken run counts: earlier trigger characters in the same
/// text cannot match because the scan starts at the cursor and walks backwards
/// over word characters only. A trigger followed by a non-word character at
/// the cursor is not a match (the run was terminated).
pub fn detect(text_before_cursor: &str, triggers: &[char]) -> Option<TriggerMatch> {
    let chars: Vec<char> = text_before_cursor.chars().collect();

    // Walk backwards over the word-char run
    let mut idx = chars.len();
    while idx > 0 && is_word_char(chars[idx - 1]) {
        idx -= 1;
    }

    if idx == 0 {
        return None;
    }

    let candidate = chars[idx - 1];
    if !triggers.contains(&candidate) {
        return None;
    }

    Some(TriggerMatch {
        trigger: candidate,
        partial: chars[idx..].iter().collect(),
        start: idx - 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGERS: &[char] = &['#', '@', '<'];

    #[test]
    fn test_bare_trigger_matches_with_empty_partial() {
        let m = detect("hello #", TRIGGERS).unwrap();
        assert_eq!(m.trigger, '#');
        assert_eq!(m.partial, "");
        assert_eq!(m.start, 6);
        assert_eq!(m.span_len(), 1);
    }

    #[test]
    fn test_trigger_with_partial() {
        let m = detect("hello #comm", TRIGGERS).unwrap();
        assert_eq!(m.trigger, '#');
        assert_eq!(m.partial, "comm");
        assert_eq!(m.start, 6);
        assert_eq!(m.span_len(), 5);
    }

    #[test]
    fn test_no_trigger_present() {
        assert_eq!(detect("hello world", TRIGGERS), None);
        assert_eq!(detect("", TRIGGERS), None);
    }

    #[test]
    fn test_whitespace_breaks_the_run() {
        // A space after the trigger run terminates it
        assert_eq!(detect("hello #tag ", TRIGGERS), None);
        assert_eq!(detect("#tag more", TRIGGERS), None);
    }

    #[test]
    fn test_only_last_run_counts() {
        // Earlier triggers in the text must not confuse detection
        let m = detect("#general and @ad", TRIGGERS).unwrap();
        assert_eq!(m.trigger, '@');
        assert_eq!(m.partial, "ad");
        assert_eq!(m.start, 13);
    }

    #[test]
    fn test_trigger_followed_by_punctuation_is_no_match() {
        assert_eq!(detect("hello #.", TRIGGERS), None);
        assert_eq!(detect("#-", TRIGGERS), None);
    }

    #[test]
    fn test_adjacent_triggers_match_innermost() {
        // "@#tag" - the word run ends at 'g', walks back to '#'
        let m = detect("@#tag", TRIGGERS).unwrap();
        assert_eq!(m.trigger, '#');
        assert_eq!(m.partial, "tag");
        assert_eq!(m.start, 1);
    }

    #[test]
    fn test_non_configured_trigger_ignored() {
        assert_eq!(detect("hello #tag", &['@']), None);
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        let m = detect("@user_42", TRIGGERS).unwrap();
        assert_eq!(m.partial, "user_42");
    }

    #[test]
    fn test_changing_text_outside_suffix_is_irrelevant() {
        let a = detect("aaa #tag", TRIGGERS).unwrap();
        let b = detect("zzz #tag", TRIGGERS).unwrap();
        assert_eq!(a.trigger, b.trigger);
        assert_eq!(a.partial, b.partial);
        assert_eq!(a.start, b.start);
    }
}
