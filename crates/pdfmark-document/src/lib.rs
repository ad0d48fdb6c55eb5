// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfmark-document — Document collaborators for the pdfmark compositor.
//
// Provides the PDF side (opening a source document, importing its pages as
// reusable templates, writing a new document) and the image side (preparing a
// normalized watermark raster in a scoped temporary file), plus media type
// sniffing for incoming files.

pub mod image;
pub mod pdf;
pub mod sniff;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export the primary structs so callers can use `pdfmark_document::SourceDocument` etc.
pub use self::image::watermark::{WatermarkAsset, WatermarkFormat};
pub use pdf::reader::{PageHandle, PageSource, SourceDocument};
pub use pdf::writer::{LopdfCanvas, PdfCanvas, Template};
pub use sniff::{MagicSniffer, MediaTypeSniffer};
