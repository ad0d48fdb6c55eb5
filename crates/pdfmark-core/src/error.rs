// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for pdfmark.

use thiserror::Error;

/// Top-level error type for all pdfmark operations.
#[derive(Debug, Error)]
pub enum PdfmarkError {
    // -- Configuration errors --
    #[error("unsupported position: {0}")]
    InvalidPlacement(String),

    #[error("invalid page range {start}..={end} for a {page_count} page document")]
    InvalidPageRange {
        start: u32,
        end: u32,
        page_count: u32,
    },

    #[error("watermark already rendered; configuration can no longer change")]
    AlreadyRendered,

    #[error("a previous watermark run failed; output is unavailable")]
    RunAborted,

    // -- Watermark image errors --
    #[error("unsupported image type: {0}")]
    UnsupportedImageType(String),

    #[error("image processing failed: {0}")]
    ImageProcessing(String),

    // -- Document errors --
    #[error("file does not seem to be a PDF: {0}")]
    InvalidDocumentType(String),

    #[error("page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange { page: u32, page_count: u32 },

    /// Failure reported by the PDF parsing/writing layer.
    #[error("PDF operation failed: {0}")]
    Pdf(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PdfmarkError>;
