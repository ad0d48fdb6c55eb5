// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — open and inspect the source document whose pages are being
// watermarked, using the `lopdf` crate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lopdf::{Dictionary, Document, Object, ObjectId};
use pdfmark_core::Size;
use pdfmark_core::error::{PdfmarkError, Result};
use tracing::{debug, info, instrument, warn};

use crate::sniff::{self, MagicSniffer, MediaTypeSniffer};

/// Page box used when neither the page nor its ancestors declare one
/// (US Letter, in points).
const DEFAULT_PAGE_BOX: [f64; 4] = [0.0, 0.0, 612.0, 792.0];

/// Guard against cyclic `/Parent` chains in malformed files.
const MAX_TREE_DEPTH: usize = 64;

/// Read side of the PDF collaborator: page count and page import.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Look up a page (1-indexed) and measure it.
    fn import_page(&self, page_number: u32) -> Result<PageHandle>;
}

/// A page of the source document, measured and ready to be captured as a
/// template by the output document.
#[derive(Debug, Clone, PartialEq)]
pub struct PageHandle {
    /// 1-based page number.
    pub page_number: u32,
    /// Page size in millimetres as displayed, i.e. after `/Rotate`.
    pub size: Size,
    /// Visible page box in points, unrotated: `[llx, lly, urx, ury]`.
    pub page_box: [f64; 4],
    /// Clockwise display rotation in degrees: 0, 90, 180 or 270.
    pub rotation: u16,
    /// Page object in the source document.
    pub object_id: ObjectId,
}

/// An opened, read-only PDF whose pages are to be watermarked.
pub struct SourceDocument {
    /// The underlying lopdf document.
    document: Document,
    /// Page object ids keyed by 1-indexed page number.
    pages: BTreeMap<u32, ObjectId>,
    /// Source path, if opened from a file (useful for diagnostics).
    source_path: Option<PathBuf>,
}

impl SourceDocument {
    // -- Construction ---------------------------------------------------------

    /// Open a PDF from the filesystem, rejecting files that do not sniff as PDF.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &MagicSniffer)
    }

    /// Open a PDF using a caller-supplied media type sniffer.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open_with(path: impl AsRef<Path>, sniffer: &dyn MediaTypeSniffer) -> Result<Self> {
        let path_ref = path.as_ref();
        let media_type = sniffer.detect_media_type(path_ref)?;
        ensure_pdf_compatible(&media_type)?;

        info!("Opening PDF: {}", path_ref.display());
        let document = Document::load(path_ref).map_err(|err| {
            PdfmarkError::Pdf(format!("failed to open {}: {}", path_ref.display(), err))
        })?;

        Ok(Self::from_document(document, Some(path_ref.to_path_buf())))
    }

    /// Create a source document from raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        ensure_pdf_compatible(&MagicSniffer.detect_bytes(data))?;

        let document = Document::load_mem(data).map_err(|err| {
            PdfmarkError::Pdf(format!("failed to load PDF from memory: {}", err))
        })?;

        Ok(Self::from_document(document, None))
    }

    fn from_document(document: Document, source_path: Option<PathBuf>) -> Self {
        let pages = document.get_pages();
        debug!(pages = pages.len(), "PDF loaded");
        Self {
            document,
            pages,
            source_path,
        }
    }

    // -- Inspection -----------------------------------------------------------

    /// Return the source path if the document was opened from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Borrow the underlying lopdf document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Decoded content stream bytes of a page, concatenated in order.
    pub fn page_content(&self, page: &PageHandle) -> Result<Vec<u8>> {
        self.document.get_page_content(page.object_id).map_err(|err| {
            PdfmarkError::Pdf(format!(
                "cannot read content of page {}: {}",
                page.page_number, err
            ))
        })
    }

    /// The resource dictionary in effect for a page, following `/Parent`
    /// inheritance. Pages without resources yield an empty dictionary.
    pub fn page_resources(&self, page: &PageHandle) -> Dictionary {
        inherited_attribute(&self.document, page.object_id, b"Resources")
            .and_then(|obj| resolve_dict(&self.document, obj))
            .unwrap_or_else(Dictionary::new)
    }

    fn page_object_id(&self, page_number: u32) -> Result<ObjectId> {
        let page_count = self.page_count();
        if page_number == 0 || page_number > page_count {
            return Err(PdfmarkError::PageOutOfRange {
                page: page_number,
                page_count,
            });
        }
        self.pages.get(&page_number).copied().ok_or_else(|| {
            PdfmarkError::Pdf(format!("page {} not found in page tree", page_number))
        })
    }
}

impl PageSource for SourceDocument {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    #[instrument(skip(self))]
    fn import_page(&self, page_number: u32) -> Result<PageHandle> {
        let object_id = self.page_object_id(page_number)?;
        let page_box = visible_box(&self.document, object_id).unwrap_or_else(|| {
            warn!(page_number, "Page declares no MediaBox, assuming US Letter");
            DEFAULT_PAGE_BOX
        });
        let rotation = page_rotation(&self.document, object_id);
        let (width, height) = (page_box[2] - page_box[0], page_box[3] - page_box[1]);
        let size = match rotation {
            90 | 270 => Size::from_points(height, width),
            _ => Size::from_points(width, height),
        };

        debug!(
            page_number,
            width_mm = size.width,
            height_mm = size.height,
            rotation,
            "Page imported"
        );
        Ok(PageHandle {
            page_number,
            size,
            page_box,
            rotation,
            object_id,
        })
    }
}

fn ensure_pdf_compatible(media_type: &str) -> Result<()> {
    if sniff::is_pdf_compatible(media_type) {
        Ok(())
    } else {
        warn!(media_type, "Rejected non-PDF source document");
        Err(PdfmarkError::InvalidDocumentType(media_type.to_string()))
    }
}

// -- Page tree helpers --------------------------------------------------------

/// Look up `key` on a page, walking up the `/Parent` chain for inheritable
/// attributes.
fn inherited_attribute<'a>(doc: &'a Document, page_id: ObjectId, key: &[u8]) -> Option<&'a Object> {
    let mut current = doc.get_object(page_id).ok()?.as_dict().ok()?;
    for _ in 0..MAX_TREE_DEPTH {
        if let Ok(value) = current.get(key) {
            return Some(value);
        }
        let parent_id = current.get(b"Parent").ok()?.as_reference().ok()?;
        current = doc.get_object(parent_id).ok()?.as_dict().ok()?;
    }
    None
}

fn resolve_dict(doc: &Document, obj: &Object) -> Option<Dictionary> {
    match obj {
        Object::Dictionary(dict) => Some(dict.clone()),
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok().cloned(),
        _ => None,
    }
}

/// CropBox when present, otherwise MediaBox, normalized so that
/// `llx <= urx` and `lly <= ury`.
fn visible_box(doc: &Document, page_id: ObjectId) -> Option<[f64; 4]> {
    let read_box = |key: &[u8]| -> Option<[f64; 4]> {
        let obj = inherited_attribute(doc, page_id, key)?;
        let array = match obj {
            Object::Reference(id) => doc.get_object(*id).ok()?.as_array().ok()?,
            other => other.as_array().ok()?,
        };
        if array.len() != 4 {
            return None;
        }
        let (x0, y0, x1, y1) = (
            as_f64(&array[0])?,
            as_f64(&array[1])?,
            as_f64(&array[2])?,
            as_f64(&array[3])?,
        );
        Some([x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)])
    };
    read_box(b"CropBox").or_else(|| read_box(b"MediaBox"))
}

/// Inherited `/Rotate`, normalized to `0..360`. Values that are not a
/// multiple of 90 are ignored.
fn page_rotation(doc: &Document, page_id: ObjectId) -> u16 {
    let Some(value) = inherited_attribute(doc, page_id, b"Rotate") else {
        return 0;
    };
    let degrees = match value {
        Object::Integer(i) => *i,
        Object::Reference(id) => match doc.get_object(*id) {
            Ok(Object::Integer(i)) => *i,
            _ => 0,
        },
        _ => 0,
    };
    if degrees % 90 != 0 {
        warn!(degrees, "Ignoring page rotation that is not a multiple of 90");
        return 0;
    }
    degrees.rem_euclid(360) as u16
}

fn as_f64(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(*r as f64),
        _ => None,
    }
}
