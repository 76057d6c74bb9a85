//! Benchmarks for the per-keystroke matching pipeline
//!
//! Run with: cargo bench matching

use mention::autocomplete::{detect, filter};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const TRIGGERS: &[char] = &['#', '@', '<'];

fn catalog(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("#channel_{:04}", i)).collect()
}

// ============================================================================
// Trigger detection
// ============================================================================

#[divan::bench(args = [100, 10_000, 100_000])]
fn detect_at_end_of_long_block(text_len: usize) {
    let text = format!("{}#chan", "lorem ipsum ".repeat(text_len / 12));
    divan::black_box(detect(&text, TRIGGERS));
}

#[divan::bench(args = [100, 10_000, 100_000])]
fn detect_no_match(text_len: usize) {
    let text = "lorem ipsum ".repeat(text_len / 12);
    divan::black_box(detect(&text, TRIGGERS));
}

// ============================================================================
// Suggestion filtering
// ============================================================================

#[divan::bench(args = [10, 1_000, 10_000])]
fn filter_by_prefix(catalog_size: usize) {
    let catalog = catalog(catalog_size);
    divan::black_box(filter(&catalog, '#', "channel_00"));
}

#[divan::bench(args = [10, 1_000, 10_000])]
fn detect_then_filter(catalog_size: usize) {
    let catalog = catalog(catalog_size);
    let text = "some message text #channel_0";

    let m = detect(text, TRIGGERS).unwrap();
    divan::black_box(filter(&catalog, m.trigger, &m.partial));
}
