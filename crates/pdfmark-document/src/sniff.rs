// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Media type sniffing — classify incoming files by their leading bytes.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use pdfmark_core::error::Result;
use tracing::debug;

/// Bytes inspected at the start of a file.
const SNIFF_WINDOW: usize = 1024;

pub const PDF: &str = "application/pdf";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Media types accepted as a source document. Generic binary is accepted as
/// well because some PDFs are not recognised as such by their leading bytes.
pub const PDF_MEDIA_TYPES: [&str; 2] = [PDF, OCTET_STREAM];

/// Detects the media type of a file.
pub trait MediaTypeSniffer {
    /// Classify the first bytes of a file.
    fn detect_bytes(&self, head: &[u8]) -> String;

    /// Read the head of the file at `path` and classify it.
    fn detect_media_type(&self, path: &Path) -> Result<String> {
        let mut head = Vec::with_capacity(SNIFF_WINDOW);
        File::open(path)?
            .take(SNIFF_WINDOW as u64)
            .read_to_end(&mut head)?;
        let media_type = self.detect_bytes(&head);
        debug!(path = %path.display(), media_type, "Sniffed media type");
        Ok(media_type)
    }
}

/// Magic-number sniffer covering the formats pdfmark deals with.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicSniffer;

impl MediaTypeSniffer for MagicSniffer {
    fn detect_bytes(&self, head: &[u8]) -> String {
        let head = &head[..head.len().min(SNIFF_WINDOW)];

        let media_type = if head.is_empty() {
            "inode/x-empty"
        } else if head.windows(5).any(|w| w == b"%PDF-") {
            PDF
        } else if head.starts_with(b"\x89PNG\r\n\x1a\n") {
            "image/png"
        } else if head.starts_with(&[0xFF, 0xD8, 0xFF]) {
            "image/jpeg"
        } else if head.starts_with(b"GIF87a") || head.starts_with(b"GIF89a") {
            "image/gif"
        } else if looks_like_text(head) {
            "text/plain"
        } else {
            OCTET_STREAM
        };
        media_type.to_string()
    }
}

/// UTF-8 without control characters other than common whitespace. A multi-byte
/// sequence cut off by the sniff window still counts as text.
fn looks_like_text(head: &[u8]) -> bool {
    let valid = match std::str::from_utf8(head) {
        Ok(text) => text,
        Err(err) if err.error_len().is_none() => {
            // Truncated trailing sequence; the prefix is valid by construction.
            match std::str::from_utf8(&head[..err.valid_up_to()]) {
                Ok(text) => text,
                Err(_) => return false,
            }
        }
        Err(_) => return false,
    };
    valid
        .chars()
        .all(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t' | '\x0c'))
}

/// Whether `media_type` may be opened as a source document.
pub fn is_pdf_compatible(media_type: &str) -> bool {
    PDF_MEDIA_TYPES.contains(&media_type)
}
