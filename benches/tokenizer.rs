//! Benchmarks for the tokenizer and the typing hot path
//!
//! Run with: cargo bench tokenizer

use chips::config::ChipsConfig;
use chips::messages::{InputMsg, Msg};
use chips::model::ChipsModel;
use chips::tokenizer;
use chips::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn plain_value(chips: usize) -> String {
    (0..chips)
        .map(|i| format!("chip{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

fn quoted_value(chips: usize) -> String {
    (0..chips)
        .map(|i| format!("\"chip, {}\"", i))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Parse / serialize
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn parse_plain(bencher: divan::Bencher, chips: usize) {
    let value = plain_value(chips);
    bencher.bench_local(|| tokenizer::parse(divan::black_box(&value)));
}

#[divan::bench(args = [10, 100, 1000])]
fn parse_quoted(bencher: divan::Bencher, chips: usize) {
    let value = quoted_value(chips);
    bencher.bench_local(|| tokenizer::parse(divan::black_box(&value)));
}

#[divan::bench(args = [10, 100, 1000])]
fn serialize(bencher: divan::Bencher, chips: usize) {
    let list = tokenizer::parse(&plain_value(chips));
    bencher.bench_local(|| tokenizer::serialize(divan::black_box(&list)));
}

// ============================================================================
// Typing
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn type_and_commit_chip(bencher: divan::Bencher, existing: usize) {
    let value = plain_value(existing);
    bencher
        .with_inputs(|| ChipsModel::with_value(&value, ChipsConfig::default()))
        .bench_local_values(|mut model| {
            for ch in "new chip,".chars() {
                update(&mut model, Msg::Input(InputMsg::InsertChar(ch)));
            }
            model
        });
}
