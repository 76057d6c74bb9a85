//! Interactive demo driver for the autocomplete engine
//!
//! Reads commands from stdin and feeds them through the update loop, printing
//! the buffer and the suggestion popup after every event. Plain input is
//! typed into the buffer character by character; commands start with `:`.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use mention::cli::CliArgs;
use mention::messages::{AutocompleteMsg, Direction, DocumentMsg, Msg};
use mention::model::EditorModel;
use mention::update::update;

fn main() -> Result<()> {
    mention::tracing::init();

    let args = CliArgs::parse();
    let initial_text = args.text.clone();
    let config = args
        .into_config()
        .map_err(anyhow::Error::msg)
        .context("failed to resolve configuration")?;

    let mut model = match initial_text {
        Some(text) => EditorModel::with_text(&text, config),
        None => EditorModel::new(config),
    };

    println!("mention demo - type text, or :next :prev :accept :pick <s> :esc :bs :enter :quit");
    render(&model);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let Some(messages) = parse_line(&line) else {
            break;
        };

        let mut needs_render = false;
        for msg in messages {
            if let Some(cmd) = update(&mut model, msg) {
                needs_render |= cmd.needs_redraw();
            }
        }
        if needs_render {
            render(&model);
        }
        io::stdout().flush().ok();
    }

    Ok(())
}

/// Translate an input line into engine messages. Returns None on `:quit`.
fn parse_line(line: &str) -> Option<Vec<Msg>> {
    let messages = match line.trim_end() {
        ":quit" | ":q" => return None,
        ":next" => vec![Msg::navigate(Direction::Next)],
        ":prev" => vec![Msg::navigate(Direction::Previous)],
        ":accept" => vec![Msg::accept()],
        ":esc" => vec![Msg::Autocomplete(AutocompleteMsg::Dismiss)],
        ":bs" => vec![Msg::Document(DocumentMsg::DeleteBackward)],
        ":enter" => vec![Msg::Document(DocumentMsg::InsertNewline)],
        other => {
            if let Some(suggestion) = other.strip_prefix(":pick ") {
                vec![Msg::Autocomplete(AutocompleteMsg::Pick(
                    suggestion.to_string(),
                ))]
            } else {
                other.chars().map(Msg::insert_char).collect()
            }
        }
    };
    Some(messages)
}

/// Print the buffer with a cursor marker, then the popup if it is visible
fn render(model: &EditorModel) {
    for block in &model.document.blocks {
        let text = block.text();
        if block.id == model.cursor.block {
            let (before, after) = split_at_char(&text, model.cursor.offset);
            println!("| {}\u{2588}{}", before, after);
        } else {
            println!("| {}", text);
        }
    }

    if model.autocomplete.is_visible() {
        for (i, suggestion) in model.autocomplete.filtered.iter().enumerate() {
            let marker = if model.autocomplete.highlight == Some(i) {
                ">"
            } else {
                " "
            };
            println!("  {} {}", marker, suggestion);
        }
    }
}

fn split_at_char(text: &str, offset: usize) -> (&str, &str) {
    let byte = text
        .char_indices()
        .nth(offset)
        .map(|(b, _)| b)
        .unwrap_or(text.len());
    text.split_at(byte)
}
