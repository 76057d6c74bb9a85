//! Full matching lifecycle - end to end scenarios

mod common;

use common::{active_block_text, test_model, type_str};
use mention::messages::{Direction, Msg};
use mention::update::update;

#[test]
fn test_type_navigate_accept_scenario() {
    // Typing "#g" at an empty block, pressing next once, then accepting
    let mut model = test_model("");
    type_str(&mut model, "#g");
    assert_eq!(model.autocomplete.filtered, vec!["#general", "#games"]);
    assert_eq!(model.autocomplete.highlight, None);

    update(&mut model, Msg::navigate(Direction::Next));
    assert_eq!(model.autocomplete.highlight, Some(0));

    update(&mut model, Msg::accept());
    assert_eq!(active_block_text(&model), "#general");
    assert!(!model.autocomplete.is_visible());
}

#[test]
fn test_unmatched_trigger_stays_matching_but_hidden() {
    let mut model = test_model("");
    type_str(&mut model, "@x");
    assert!(model.autocomplete.active.is_some());
    assert!(!model.autocomplete.is_visible());

    // Accept is a no-op while hidden
    assert!(update(&mut model, Msg::accept()).is_none());
    assert_eq!(active_block_text(&model), "@x");

    // Deleting back to "@" shows the popup again
    update(
        &mut model,
        Msg::Document(mention::messages::DocumentMsg::DeleteBackward),
    );
    assert_eq!(model.autocomplete.filtered, vec!["@admin"]);
}

#[test]
fn test_space_transitions_matching_to_idle() {
    let mut model = test_model("");
    type_str(&mut model, "#gen");
    assert!(model.autocomplete.is_visible());

    type_str(&mut model, " ");
    assert!(model.autocomplete.active.is_none());
    assert!(!model.autocomplete.is_visible());

    // The trigger is still in the text further back, but the run is broken
    assert_eq!(active_block_text(&model), "#gen ");
}

#[test]
fn test_matching_survives_narrowing_edits() {
    let mut model = test_model("");
    type_str(&mut model, "#");
    assert_eq!(model.autocomplete.filtered.len(), 2);

    type_str(&mut model, "g");
    assert_eq!(model.autocomplete.filtered.len(), 2);

    type_str(&mut model, "e");
    assert_eq!(model.autocomplete.filtered, vec!["#general"]);
    assert!(model.autocomplete.active.is_some());
}

#[test]
fn test_typing_continues_after_a_commit() {
    let mut model = test_model("");
    type_str(&mut model, "#g");
    update(&mut model, Msg::accept());
    assert_eq!(active_block_text(&model), "#general");

    type_str(&mut model, " and more");
    assert_eq!(active_block_text(&model), "#general and more");
    assert!(model.autocomplete.active.is_none());
}

#[test]
fn test_second_lookup_in_the_same_block() {
    let mut model = test_model("");
    type_str(&mut model, "#g");
    update(&mut model, Msg::accept());
    type_str(&mut model, " ");

    type_str(&mut model, "@ad");
    assert_eq!(model.autocomplete.filtered, vec!["@admin"]);

    update(&mut model, Msg::accept());
    assert_eq!(active_block_text(&model), "#general @admin");
}
