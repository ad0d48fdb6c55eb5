// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page compositor — recreate every page of a source PDF in a new document and
// paint the watermark beneath or above the selected pages.
//
// The compositor is configured first, then rendered exactly once by the first
// output call. Later output calls serialize the same rendered document.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use pdfmark_core::error::{PdfmarkError, Result};
use pdfmark_core::{Anchor, Layering, Orientation, PageSelection, WatermarkConfig, place};
use pdfmark_document::{LopdfCanvas, PageSource, PdfCanvas, SourceDocument, WatermarkAsset};
use tracing::{debug, info, instrument, warn};

use crate::output::Destination;

/// Lifecycle of a compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    /// Accepting configuration; nothing rendered yet.
    Configuring,
    /// Every page has been composed into the canvas.
    Rendered,
    /// The run stopped part-way; the canvas holds a partial document.
    Failed,
}

/// Composes a watermark onto the pages of a source document.
///
/// ```no_run
/// use pdfmark::{Anchor, PageCompositor, SourceDocument, WatermarkAsset};
///
/// # fn main() -> pdfmark::Result<()> {
/// let source = SourceDocument::open("contract.pdf")?;
/// let watermark = WatermarkAsset::open("draft.png")?;
///
/// let mut compositor = PageCompositor::new(source, watermark);
/// compositor
///     .set_position(Anchor::BottomRight)?
///     .set_as_background()?
///     .set_page_range(1, Some(3))?;
/// compositor.save_to_file("contract-draft.pdf")?;
/// compositor.release()
/// # }
/// ```
pub struct PageCompositor<C: PdfCanvas = LopdfCanvas> {
    source: C::Source,
    watermark: WatermarkAsset,
    canvas: C,
    config: WatermarkConfig,
    state: RunState,
}

impl PageCompositor<LopdfCanvas> {
    /// Compositor with the default configuration: every page, `MiddleCenter`,
    /// overlay.
    pub fn new(source: SourceDocument, watermark: WatermarkAsset) -> Self {
        Self::with_canvas(source, watermark, LopdfCanvas::new())
    }

    /// Compositor starting from a full configuration, validated against the
    /// source's page count.
    pub fn with_config(
        source: SourceDocument,
        watermark: WatermarkAsset,
        config: WatermarkConfig,
    ) -> Result<Self> {
        let mut compositor = Self::new(source, watermark);
        compositor.set_config(config)?;
        Ok(compositor)
    }
}

impl<C: PdfCanvas> PageCompositor<C> {
    /// Compositor writing into a caller-supplied canvas.
    pub fn with_canvas(source: C::Source, watermark: WatermarkAsset, canvas: C) -> Self {
        Self {
            source,
            watermark,
            canvas,
            config: WatermarkConfig::default(),
            state: RunState::Configuring,
        }
    }

    // -- Configuration ----------------------------------------------------------

    /// Limit the visible watermark to pages `start..=end`, `end` defaulting to
    /// the last page. Replaces any earlier selection.
    pub fn set_page_range(&mut self, start: u32, end: Option<u32>) -> Result<&mut Self> {
        self.ensure_configuring()?;
        let page_count = self.source.page_count();
        let end = end.unwrap_or(page_count);
        if start < 1 || start > end || end > page_count {
            warn!(start, end, page_count, "Rejected page range");
            return Err(PdfmarkError::InvalidPageRange {
                start,
                end,
                page_count,
            });
        }
        self.config.pages = PageSelection::range(start, end);
        debug!(start, end, "Page range set");
        Ok(self)
    }

    /// Limit the visible watermark to an explicit set of pages. An empty set
    /// selects every page.
    pub fn set_pages(&mut self, pages: impl IntoIterator<Item = u32>) -> Result<&mut Self> {
        self.ensure_configuring()?;
        let selection = PageSelection::Pages(pages.into_iter().collect::<BTreeSet<_>>());
        selection.validate(self.source.page_count())?;
        self.config.pages = selection;
        Ok(self)
    }

    pub fn set_position(&mut self, anchor: Anchor) -> Result<&mut Self> {
        self.ensure_configuring()?;
        self.config.anchor = anchor;
        Ok(self)
    }

    /// Paint the watermark beneath the page content.
    pub fn set_as_background(&mut self) -> Result<&mut Self> {
        self.ensure_configuring()?;
        self.config.layering = Layering::Background;
        Ok(self)
    }

    /// Paint the watermark above the page content.
    pub fn set_as_overlay(&mut self) -> Result<&mut Self> {
        self.ensure_configuring()?;
        self.config.layering = Layering::Overlay;
        Ok(self)
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: WatermarkConfig) -> Result<&mut Self> {
        self.ensure_configuring()?;
        config.pages.validate(self.source.page_count())?;
        self.config = config;
        Ok(self)
    }

    // -- Inspection -------------------------------------------------------------

    pub fn config(&self) -> &WatermarkConfig {
        &self.config
    }

    pub fn source(&self) -> &C::Source {
        &self.source
    }

    pub fn watermark(&self) -> &WatermarkAsset {
        &self.watermark
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Whether the pages have been composed.
    pub fn is_rendered(&self) -> bool {
        self.state == RunState::Rendered
    }

    // -- Output -----------------------------------------------------------------

    /// Render if needed and write the document to `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.ensure_rendered()?;
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.canvas.serialize(&mut writer)?;
        info!("Watermarked PDF saved: {}", path.display());
        Ok(())
    }

    /// Render if needed and write the document to `sink`.
    pub fn write_to_stream<W: Write>(&mut self, sink: &mut W) -> Result<()> {
        self.ensure_rendered()?;
        self.canvas.serialize(sink)
    }

    /// Render if needed and return the document bytes.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.write_to_stream(&mut bytes)?;
        Ok(bytes)
    }

    /// Render if needed and write the document to `destination`.
    #[instrument(skip_all, fields(destination = destination.kind()))]
    pub fn output(&mut self, destination: Destination<'_>) -> Result<()> {
        if let Some(disposition) = destination.content_disposition() {
            debug!(%disposition, "Streaming watermarked PDF");
        }
        match destination {
            Destination::File(path) => self.save_to_file(path),
            Destination::Stream(sink)
            | Destination::Download { sink, .. }
            | Destination::Inline { sink, .. } => {
                self.ensure_rendered()?;
                self.canvas.serialize(sink)
            }
        }
    }

    /// Delete the watermark's temporary file, reporting any I/O failure.
    pub fn release(self) -> Result<()> {
        self.watermark.release()
    }

    // -- Run --------------------------------------------------------------------

    fn ensure_configuring(&self) -> Result<()> {
        match self.state {
            RunState::Configuring => Ok(()),
            RunState::Rendered => Err(PdfmarkError::AlreadyRendered),
            RunState::Failed => Err(PdfmarkError::RunAborted),
        }
    }

    fn ensure_rendered(&mut self) -> Result<()> {
        match self.state {
            RunState::Rendered => Ok(()),
            RunState::Failed => Err(PdfmarkError::RunAborted),
            RunState::Configuring => match self.run() {
                Ok(()) => {
                    self.state = RunState::Rendered;
                    Ok(())
                }
                Err(err) => {
                    warn!(%err, "Watermark run failed");
                    self.state = RunState::Failed;
                    Err(err)
                }
            },
        }
    }

    #[instrument(skip_all, fields(
        anchor = %self.config.anchor,
        layering = ?self.config.layering,
    ))]
    fn run(&mut self) -> Result<()> {
        let page_count = self.source.page_count();
        for page_number in 1..=page_count {
            let template = self.canvas.import_page(&self.source, page_number)?;
            self.canvas
                .add_page(Orientation::for_size(template.size), template.size)?;
            let visible = self.config.pages.contains(page_number);
            self.render(page_number, visible)?;
        }
        info!(page_count, "Watermark applied");
        Ok(())
    }

    fn render(&mut self, page_number: u32, visible: bool) -> Result<()> {
        let template = self.canvas.import_page(&self.source, page_number)?;
        if !visible {
            return self.canvas.use_template(&template);
        }

        let mark = self.watermark.size();
        let origin = place(self.config.anchor, mark, template.size);
        debug!(page_number, x = origin.x, y = origin.y, "Placing watermark");

        match self.config.layering {
            Layering::Background => {
                self.canvas.draw_image(self.watermark.path(), origin, mark)?;
                self.canvas.use_template(&template)
            }
            Layering::Overlay => {
                self.canvas.use_template(&template)?;
                self.canvas.draw_image(self.watermark.path(), origin, mark)
            }
        }
    }
}
