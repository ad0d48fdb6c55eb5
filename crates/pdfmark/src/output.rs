// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output destinations for a rendered document.

use std::fmt;
use std::io::Write;
use std::path::Path;

/// Where a rendered document is written.
///
/// `Download` and `Inline` are for HTTP-style responses: the caller sends
/// [`Destination::content_disposition`] as the `Content-Disposition` header
/// and the document body is written to `sink`.
pub enum Destination<'a> {
    /// A file on disk, created or truncated.
    File(&'a Path),
    /// Any byte sink, no framing.
    Stream(&'a mut dyn Write),
    /// Offered to the client as a file to save.
    Download {
        filename: &'a str,
        sink: &'a mut dyn Write,
    },
    /// Displayed by the client in place.
    Inline {
        filename: &'a str,
        sink: &'a mut dyn Write,
    },
}

impl Destination<'_> {
    /// `Content-Disposition` header value for download and inline output.
    pub fn content_disposition(&self) -> Option<String> {
        match self {
            Self::Download { filename, .. } => {
                Some(format!("attachment; filename=\"{}\"", quote(filename)))
            }
            Self::Inline { filename, .. } => {
                Some(format!("inline; filename=\"{}\"", quote(filename)))
            }
            Self::File(_) | Self::Stream(_) => None,
        }
    }

    /// Short label used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Stream(_) => "stream",
            Self::Download { .. } => "download",
            Self::Inline { .. } => "inline",
        }
    }
}

impl fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Stream(_) => f.write_str("Stream"),
            Self::Download { filename, .. } => {
                f.debug_struct("Download").field("filename", filename).finish()
            }
            Self::Inline { filename, .. } => {
                f.debug_struct("Inline").field("filename", filename).finish()
            }
        }
    }
}

/// Escape a filename for use inside a quoted header parameter.
fn quote(filename: &str) -> String {
    let mut quoted = String::with_capacity(filename.len());
    for c in filename.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\r' | '\n' => {}
            _ => quoted.push(c),
        }
    }
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_is_an_attachment() {
        let mut sink = Vec::new();
        let destination = Destination::Download {
            filename: "report.pdf",
            sink: &mut sink,
        };
        assert_eq!(
            destination.content_disposition().as_deref(),
            Some("attachment; filename=\"report.pdf\"")
        );
        assert_eq!(destination.kind(), "download");
    }

    #[test]
    fn inline_is_displayed_in_place() {
        let mut sink = Vec::new();
        let destination = Destination::Inline {
            filename: "doc.pdf",
            sink: &mut sink,
        };
        assert_eq!(
            destination.content_disposition().as_deref(),
            Some("inline; filename=\"doc.pdf\"")
        );
    }

    #[test]
    fn plain_destinations_have_no_header() {
        let mut sink = Vec::new();
        assert!(Destination::Stream(&mut sink).content_disposition().is_none());
        assert!(
            Destination::File(Path::new("/tmp/out.pdf"))
                .content_disposition()
                .is_none()
        );
    }

    #[test]
    fn header_filename_is_escaped() {
        let mut sink = Vec::new();
        let destination = Destination::Download {
            filename: "a \"quoted\"\r\n\\name.pdf",
            sink: &mut sink,
        };
        assert_eq!(
            destination.content_disposition().as_deref(),
            Some(r#"attachment; filename="a \"quoted\"\\name.pdf""#)
        );
    }
}
