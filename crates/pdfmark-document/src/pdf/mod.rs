// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — reading source documents and writing watermarked output.

pub mod reader;
pub mod writer;

pub use reader::{PageHandle, PageSource, SourceDocument};
pub use writer::{LopdfCanvas, PdfCanvas, Template};
