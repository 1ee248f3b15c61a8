//! Criterion benchmarks for the keycode tables.
//!
//! Every physical key event probes up to four tables, so a lookup must stay
//! in the nanosecond range.
//!
//! Run with:
//! ```bash
//! cargo bench --package keybridge-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keybridge_core::keymap::android::*;
use keybridge_core::KeyTables;

/// Keycodes covering every table plus misses.
const BENCH_KEYCODES: &[u16] = &[
    KEYCODE_DPAD_UP,
    KEYCODE_ENTER,
    KEYCODE_DEL,
    KEYCODE_TAB,
    KEYCODE_SPACE,
    KEYCODE_F1,
    KEYCODE_F12,
    KEYCODE_NUMPAD_0,
    KEYCODE_SHIFT_LEFT,
    KEYCODE_CTRL_RIGHT,
    KEYCODE_MEDIA_EJECT,
    KEYCODE_MEDIA_PLAY_PAUSE,
    KEYCODE_A,
    KEYCODE_UNKNOWN,
    1000,
];

fn bench_standard_key_of(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_standard");

    group.bench_function("standard_key_of_single", |b| {
        b.iter(|| KeyTables::standard_key_of(black_box(KEYCODE_DPAD_UP)))
    });

    group.bench_function("standard_key_of_batch_15", |b| {
        b.iter(|| {
            BENCH_KEYCODES
                .iter()
                .map(|&key| KeyTables::standard_key_of(black_box(key)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

fn bench_all_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_all_tables");

    // Worst case for the translator: a key that misses every table.
    group.bench_function("probe_four_tables_miss", |b| {
        b.iter(|| {
            let key = black_box(KEYCODE_A);
            (
                KeyTables::hardware_key_of(key),
                KeyTables::media_key_of(key),
                KeyTables::modifier_of(key),
                KeyTables::standard_key_of(key),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_standard_key_of, bench_all_tables);
criterion_main!(benches);
