// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the pdfmark compositor. Measures a full watermark
// run, from opening the source to serialized bytes, over a synthetic
// 20-page document.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pdfmark::{Anchor, PageCompositor, SourceDocument, WatermarkAsset};
use pdfmark_document::testing;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Stamp a 96x48 px PNG with alpha onto every page of a 20-page A4 document.
fn bench_compose_20_pages(c: &mut Criterion) {
    let pdf = testing::sample_pdf(&[testing::A4; 20]);
    let png = testing::sample_png(96, 48);

    c.bench_function("compose (20 pages, png overlay)", |b| {
        b.iter(|| {
            let source = SourceDocument::from_bytes(black_box(&pdf)).unwrap();
            let watermark = WatermarkAsset::from_bytes(black_box(&png)).unwrap();
            let mut compositor = PageCompositor::new(source, watermark);
            compositor.set_position(Anchor::BottomRight).unwrap();
            black_box(compositor.to_bytes().unwrap());
        });
    });
}

criterion_group!(benches, bench_compose_20_pages);
criterion_main!(benches);
