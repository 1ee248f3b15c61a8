//! Criterion benchmarks for key event and text translation.
//!
//! Pasted text can be long, so batch translation is measured on a short
//! sentence and a few kilobytes of mixed-case text.
//!
//! Run with:
//! ```bash
//! cargo bench --package keybridge-core --bench translate_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keybridge_core::keymap::android::{KEYCODE_A, KEYCODE_DPAD_UP};
use keybridge_core::{builtin, translate_key_event, translate_text, KeyEvent, RecordingSink};

const SENTENCE: &str = "The quick brown fox jumps over the lazy dog. THE END!\n";

fn bench_translate_key_event(c: &mut Criterion) {
    let map = builtin("en_US").expect("en_US");
    let mut group = c.benchmark_group("translate_key_event");

    group.bench_function("direct_table_hit", |b| {
        let mut sink = RecordingSink::new();
        let event = KeyEvent::down(KEYCODE_DPAD_UP, 0);
        b.iter(|| {
            sink.actions.clear();
            translate_key_event(black_box(&event), &map, &mut sink)
        })
    });

    group.bench_function("character_fallback", |b| {
        let mut sink = RecordingSink::new();
        let event = KeyEvent::down(KEYCODE_A, 'A' as u32);
        b.iter(|| {
            sink.actions.clear();
            translate_key_event(black_box(&event), &map, &mut sink)
        })
    });

    group.finish();
}

fn bench_translate_text(c: &mut Criterion) {
    let map = builtin("en_US").expect("en_US");
    let mut group = c.benchmark_group("translate_text");

    for repeats in [1usize, 64] {
        let text = SENTENCE.repeat(repeats);
        group.bench_with_input(BenchmarkId::new("en_US", text.len()), &text, |b, text| {
            let mut sink = RecordingSink::new();
            b.iter(|| {
                sink.actions.clear();
                translate_text(black_box(text), &map, &mut sink)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_translate_key_event, bench_translate_text);
criterion_main!(benches);
