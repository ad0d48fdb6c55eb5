// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Watermark placement — maps an anchor, a watermark size and a page size to the
// watermark's top-left origin on the page.

use crate::types::{Anchor, HorizontalAlign, Point, Size, VerticalAlign};

/// Origin of a `watermark` anchored on a `page`, both in document units.
///
/// Results are not clamped: a watermark larger than the page yields negative
/// offsets and simply runs off the page.
pub fn place(anchor: Anchor, watermark: Size, page: Size) -> Point {
    let x = match anchor.horizontal() {
        HorizontalAlign::Left => 0.0,
        HorizontalAlign::Center => (page.width - watermark.width) / 2.0,
        HorizontalAlign::Right => page.width - watermark.width,
    };
    let y = match anchor.vertical() {
        VerticalAlign::Top => 0.0,
        VerticalAlign::Middle => (page.height - watermark.height) / 2.0,
        VerticalAlign::Bottom => page.height - watermark.height,
    };
    Point { x, y }
}
