// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfmark — Stamp a watermark image onto the pages of a PDF.
//
// A `PageCompositor` recreates every page of a source document in a new PDF,
// painting a prepared watermark at one of nine anchors either beneath or above
// the original content. The document and image collaborators live in
// `pdfmark-document`; shared types and errors in `pdfmark-core`.

pub mod compositor;
pub mod output;

pub use compositor::PageCompositor;
pub use output::Destination;

pub use pdfmark_core::{
    Anchor, Layering, PageSelection, PdfmarkError, Point, Result, Size, WatermarkConfig,
};
pub use pdfmark_document::{
    LopdfCanvas, MagicSniffer, MediaTypeSniffer, PageSource, PdfCanvas, SourceDocument,
    WatermarkAsset,
};
