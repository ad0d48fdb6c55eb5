// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — compose a new document from source page templates and images
// using `lopdf`.
//
// Source pages are captured as Form XObjects ("templates") whose resources are
// deep-cloned into the output document. Pages are then built from small
// content streams that paint templates and images with `cm`/`Do`.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use pdfmark_core::error::{PdfmarkError, Result};
use pdfmark_core::{Orientation, Point, Size};
use printpdf::Mm;
use tracing::{debug, info, instrument, warn};

use super::reader::{PageSource, SourceDocument};

/// A source page captured in the output document, ready to be painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Template {
    /// Opaque handle of the captured page in the output document.
    pub token: ObjectId,
    /// Page size in millimetres.
    pub size: Size,
}

/// Write side of the PDF collaborator.
///
/// Coordinates and sizes are in millimetres with the origin at the top-left
/// corner of the current page.
pub trait PdfCanvas {
    type Source: PageSource;

    /// Capture a source page (1-indexed) as a template.
    fn import_page(&mut self, source: &Self::Source, page_number: u32) -> Result<Template>;

    /// Close the current page, if any, and start a new one.
    fn add_page(&mut self, orientation: Orientation, size: Size) -> Result<()>;

    /// Paint the image at `image` with its top-left corner at `origin`.
    fn draw_image(&mut self, image: &Path, origin: Point, size: Size) -> Result<()>;

    /// Paint a template over the whole current page.
    fn use_template(&mut self, template: &Template) -> Result<()>;

    /// Write the finished document to `sink`.
    fn serialize(&mut self, sink: &mut dyn Write) -> Result<()>;
}

/// An image XObject already embedded in the output document.
#[derive(Debug, Clone)]
struct EmbeddedImage {
    id: ObjectId,
    name: String,
}

/// The page currently being painted.
struct OpenPage {
    width_pt: f64,
    height_pt: f64,
    content: String,
    xobjects: Dictionary,
}

/// [`PdfCanvas`] backed by an in-memory `lopdf::Document`.
///
/// A canvas clones objects from a single source document; templates and
/// images are embedded once and reused on every page that paints them.
pub struct LopdfCanvas {
    document: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    current: Option<OpenPage>,
    /// Templates keyed by source page number.
    templates: HashMap<u32, Template>,
    images: HashMap<PathBuf, EmbeddedImage>,
    /// Source object id -> output object id.
    cloned: HashMap<ObjectId, ObjectId>,
    /// The finished document. Set once; the canvas is read-only afterwards.
    serialized: Option<Vec<u8>>,
}

impl Default for LopdfCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl LopdfCanvas {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        Self {
            document,
            pages_id,
            page_ids: Vec::new(),
            current: None,
            templates: HashMap::new(),
            images: HashMap::new(),
            cloned: HashMap::new(),
            serialized: None,
        }
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len() + usize::from(self.current.is_some())
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.serialized.is_some() {
            return Err(PdfmarkError::Pdf("document already serialized".to_string()));
        }
        Ok(())
    }

    fn open_page(&mut self) -> Result<&mut OpenPage> {
        self.ensure_writable()?;
        self.current
            .as_mut()
            .ok_or_else(|| PdfmarkError::Pdf("no page open".to_string()))
    }

    /// Turn the open page into a page object.
    fn close_page(&mut self) -> Result<()> {
        let Some(page) = self.current.take() else {
            return Ok(());
        };

        let content = deflate(page.content.as_bytes())?;
        let content_id = self.document.add_object(Stream::new(
            dictionary! { "Filter" => "FlateDecode" },
            content,
        ));
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                (page.width_pt as f32).into(),
                (page.height_pt as f32).into(),
            ],
            "Resources" => dictionary! { "XObject" => page.xobjects },
            "Contents" => content_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Build the page tree and catalog and serialize the document once.
    /// `lopdf` appends a cross-reference stream object on every save, so later
    /// calls return the first result.
    fn finish(&mut self) -> Result<&[u8]> {
        if self.serialized.is_none() {
            let bytes = self.build()?;
            self.serialized = Some(bytes);
        }
        Ok(self.serialized.as_deref().unwrap_or_default())
    }

    fn build(&mut self) -> Result<Vec<u8>> {
        self.close_page()?;

        let kids: Vec<Object> = self.page_ids.iter().map(|&id| Object::Reference(id)).collect();
        let count = kids.len() as i64;
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        self.document
            .save_to(&mut bytes)
            .map_err(|err| PdfmarkError::Pdf(format!("failed to serialise PDF: {}", err)))?;
        debug!(pages = count, bytes = bytes.len(), "Output document finalized");
        Ok(bytes)
    }

    // -- Object cloning ---------------------------------------------------------

    /// Clone a referenced source object into the output, once per source id.
    fn clone_reference(&mut self, source: &Document, source_id: ObjectId) -> ObjectId {
        if let Some(&id) = self.cloned.get(&source_id) {
            return id;
        }
        // Reserve the id first so reference cycles terminate.
        let new_id = self.document.new_object_id();
        self.cloned.insert(source_id, new_id);

        let object = match source.get_object(source_id) {
            Ok(object) => self.clone_object(source, object),
            Err(err) => {
                warn!(?source_id, %err, "Cannot resolve reference, using Null");
                Object::Null
            }
        };
        self.document.objects.insert(new_id, object);
        new_id
    }

    fn clone_object(&mut self, source: &Document, object: &Object) -> Object {
        match object {
            Object::Reference(id) => Object::Reference(self.clone_reference(source, *id)),
            Object::Dictionary(dict) => Object::Dictionary(self.clone_dictionary(source, dict)),
            Object::Array(items) => Object::Array(
                items
                    .iter()
                    .map(|item| self.clone_object(source, item))
                    .collect(),
            ),
            Object::Stream(stream) => {
                let mut cloned = stream.clone();
                cloned.dict = self.clone_dictionary(source, &stream.dict);
                Object::Stream(cloned)
            }
            other => other.clone(),
        }
    }

    /// Clone a dictionary, dropping `/Parent` so the source page tree is never
    /// pulled in.
    fn clone_dictionary(&mut self, source: &Document, dict: &Dictionary) -> Dictionary {
        let mut cloned = Dictionary::new();
        for (key, value) in dict.iter() {
            if key == b"Parent" {
                continue;
            }
            let value = self.clone_object(source, value);
            cloned.set(key.clone(), value);
        }
        cloned
    }

    // -- Images -------------------------------------------------------------------

    fn embed_image(&mut self, path: &Path) -> Result<EmbeddedImage> {
        if let Some(embedded) = self.images.get(path) {
            return Ok(embedded.clone());
        }

        let data = fs::read(path)?;
        let stream = image_stream(&data, &mut self.document)?;
        let id = self.document.add_object(stream);
        let embedded = EmbeddedImage {
            id,
            name: format!("Im{}", self.images.len() + 1),
        };
        debug!(path = %path.display(), name = %embedded.name, "Image embedded");
        self.images.insert(path.to_path_buf(), embedded.clone());
        Ok(embedded)
    }
}

impl PdfCanvas for LopdfCanvas {
    type Source = SourceDocument;

    #[instrument(skip(self, source))]
    fn import_page(&mut self, source: &SourceDocument, page_number: u32) -> Result<Template> {
        if let Some(template) = self.templates.get(&page_number) {
            return Ok(*template);
        }
        self.ensure_writable()?;

        let page = source.import_page(page_number)?;
        let content = source.page_content(&page)?;
        let resources = source.page_resources(&page);
        let resources = self.clone_dictionary(source.document(), &resources);

        let [llx, lly, urx, ury] = page.page_box;
        let matrix: Vec<Object> = form_matrix(page.page_box, page.rotation)
            .into_iter()
            .map(|value| (value as f32).into())
            .collect();
        let form = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "FormType" => 1,
            "BBox" => vec![
                (llx as f32).into(),
                (lly as f32).into(),
                (urx as f32).into(),
                (ury as f32).into(),
            ],
            "Matrix" => matrix,
            "Resources" => resources,
            "Filter" => "FlateDecode",
        };
        let token = self.document.add_object(Stream::new(form, deflate(&content)?));

        let template = Template {
            token,
            size: page.size,
        };
        self.templates.insert(page_number, template);
        debug!(page_number, ?token, rotation = page.rotation, "Page captured as template");
        Ok(template)
    }

    fn add_page(&mut self, orientation: Orientation, size: Size) -> Result<()> {
        self.ensure_writable()?;
        self.close_page()?;

        let (short, long) = if size.width <= size.height {
            (size.width, size.height)
        } else {
            (size.height, size.width)
        };
        let (width, height) = match orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        };

        self.current = Some(OpenPage {
            width_pt: mm_to_pt(width),
            height_pt: mm_to_pt(height),
            content: String::new(),
            xobjects: Dictionary::new(),
        });
        debug!(?orientation, width, height, "Page added");
        Ok(())
    }

    fn draw_image(&mut self, image: &Path, origin: Point, size: Size) -> Result<()> {
        self.open_page()?;
        let embedded = self.embed_image(image)?;
        let page = self.open_page()?;

        let width = mm_to_pt(size.width);
        let height = mm_to_pt(size.height);
        let x = mm_to_pt(origin.x);
        // PDF user space grows upwards from the bottom edge.
        let y = page.height_pt - mm_to_pt(origin.y) - height;

        page.content.push_str(&format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            num(width),
            num(height),
            num(x),
            num(y),
            embedded.name
        ));
        page.xobjects
            .set(embedded.name.as_bytes().to_vec(), Object::Reference(embedded.id));
        Ok(())
    }

    fn use_template(&mut self, template: &Template) -> Result<()> {
        let page = self.open_page()?;
        let name = format!("Tpl{}", template.token.0);
        page.content.push_str(&format!("q /{} Do Q\n", name));
        page.xobjects
            .set(name.into_bytes(), Object::Reference(template.token));
        Ok(())
    }

    #[instrument(skip_all)]
    fn serialize(&mut self, sink: &mut dyn Write) -> Result<()> {
        let bytes = self.finish()?;
        sink.write_all(bytes)?;
        sink.flush()?;
        info!(pages = self.page_ids.len(), "PDF serialised");
        Ok(())
    }
}

// -- Helpers ------------------------------------------------------------------

fn mm_to_pt(mm: f64) -> f64 {
    f64::from(Mm(mm as f32).into_pt().0)
}

/// Form matrix mapping a page box onto `(0, 0)..(w, h)` of the displayed page,
/// turning it clockwise by `rotation` degrees.
fn form_matrix(page_box: [f64; 4], rotation: u16) -> [f64; 6] {
    let [llx, lly, urx, ury] = page_box;
    match rotation {
        90 => [0.0, -1.0, 1.0, 0.0, -lly, urx],
        180 => [-1.0, 0.0, 0.0, -1.0, urx, ury],
        270 => [0.0, 1.0, -1.0, 0.0, ury, -llx],
        _ => [1.0, 0.0, 0.0, 1.0, -llx, -lly],
    }
}

/// Content stream number with four decimals.
fn num(value: f64) -> String {
    format!("{:.4}", value)
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Build an image XObject. JPEG data is embedded as-is; anything else is
/// decoded and stored as Flate-compressed RGB, with an `SMask` holding the
/// alpha channel when there is one.
fn image_stream(data: &[u8], document: &mut Document) -> Result<Stream> {
    let format = ::image::guess_format(data)
        .map_err(|err| PdfmarkError::ImageProcessing(format!("unknown image data: {}", err)))?;
    let decoded = ::image::load_from_memory_with_format(data, format)
        .map_err(|err| PdfmarkError::ImageProcessing(format!("failed to decode image: {}", err)))?;
    let (width, height) = (decoded.width() as i64, decoded.height() as i64);

    if format == ::image::ImageFormat::Jpeg {
        let color_space = match decoded.color() {
            ::image::ColorType::L8 | ::image::ColorType::La8 => "DeviceGray",
            _ => "DeviceRGB",
        };
        return Ok(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width,
                "Height" => height,
                "ColorSpace" => color_space,
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            data.to_vec(),
        ));
    }

    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width,
        "Height" => height,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
        "Filter" => "FlateDecode",
    };

    if decoded.color().has_alpha() {
        let rgba = decoded.to_rgba8();
        let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
        let mut alpha = Vec::with_capacity(rgba.len() / 4);
        for pixel in rgba.pixels() {
            rgb.extend_from_slice(&pixel.0[..3]);
            alpha.push(pixel.0[3]);
        }
        let mask_id = document.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width,
                "Height" => height,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            },
            deflate(&alpha)?,
        ));
        dict.set("SMask", Object::Reference(mask_id));
        return Ok(Stream::new(dict, deflate(&rgb)?));
    }

    let rgb = decoded.to_rgb8().into_raw();
    Ok(Stream::new(dict, deflate(&rgb)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn two_page_source() -> SourceDocument {
        SourceDocument::from_bytes(&testing::sample_pdf(&[testing::A4, (720.0, 360.0)])).unwrap()
    }

    fn write_image(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    fn serialize_and_load(canvas: &mut LopdfCanvas) -> Document {
        let mut bytes = Vec::new();
        canvas.serialize(&mut bytes).unwrap();
        Document::load_mem(&bytes).unwrap()
    }

    #[test]
    fn template_import_is_cached_per_page() {
        let source = two_page_source();
        let mut canvas = LopdfCanvas::new();

        let first = canvas.import_page(&source, 1).unwrap();
        let again = canvas.import_page(&source, 1).unwrap();
        let second = canvas.import_page(&source, 2).unwrap();

        assert_eq!(first, again);
        assert_ne!(first.token, second.token);
        assert!((second.size.width - 254.0).abs() < 1e-6);
    }

    /// Apply a PDF matrix to a point.
    fn transform(m: [f64; 6], (x, y): (f64, f64)) -> (f64, f64) {
        (m[0] * x + m[2] * y + m[4], m[1] * x + m[3] * y + m[5])
    }

    #[test]
    fn form_matrix_turns_pages_clockwise() {
        let page_box = [10.0, 20.0, 110.0, 220.0];
        let top_left = (10.0, 220.0);
        let bottom_left = (10.0, 20.0);

        assert_eq!(transform(form_matrix(page_box, 0), bottom_left), (0.0, 0.0));
        assert_eq!(transform(form_matrix(page_box, 0), top_left), (0.0, 200.0));

        // Displayed 200 x 100: the left edge becomes the top edge.
        let quarter = form_matrix(page_box, 90);
        assert_eq!(transform(quarter, bottom_left), (0.0, 100.0));
        assert_eq!(transform(quarter, top_left), (200.0, 100.0));

        let half = form_matrix(page_box, 180);
        assert_eq!(transform(half, bottom_left), (100.0, 200.0));
        assert_eq!(transform(half, top_left), (100.0, 0.0));

        let three_quarters = form_matrix(page_box, 270);
        assert_eq!(transform(three_quarters, bottom_left), (200.0, 0.0));
        assert_eq!(transform(three_quarters, top_left), (0.0, 0.0));
    }

    #[test]
    fn rotated_page_template_is_upright() {
        let source = SourceDocument::from_bytes(&testing::rotated_pdf(&[(testing::A4, 90)]))
            .unwrap();
        let mut canvas = LopdfCanvas::new();
        let template = canvas.import_page(&source, 1).unwrap();
        assert!(template.size.width > template.size.height);

        let form = canvas.document.get_object(template.token).unwrap().as_stream().unwrap();
        let matrix: Vec<f64> = form
            .dict
            .get(b"Matrix")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|value| value.as_float().unwrap() as f64)
            .collect();
        let expected = [0.0, -1.0, 1.0, 0.0, 0.0, testing::A4.0];
        for (value, want) in matrix.iter().zip(expected) {
            assert!((value - want).abs() < 0.01, "{matrix:?} != {expected:?}");
        }
    }

    #[test]
    fn import_out_of_range_is_reported() {
        let source = two_page_source();
        let mut canvas = LopdfCanvas::new();
        assert!(matches!(
            canvas.import_page(&source, 3),
            Err(PdfmarkError::PageOutOfRange { page: 3, page_count: 2 })
        ));
    }

    #[test]
    fn shared_resources_are_cloned_once() {
        let source = two_page_source();
        let mut canvas = LopdfCanvas::new();
        let first = canvas.import_page(&source, 1).unwrap();
        let second = canvas.import_page(&source, 2).unwrap();

        let font_of = |token: ObjectId| {
            let form = canvas.document.get_object(token).unwrap().as_stream().unwrap();
            let resources = form.dict.get(b"Resources").unwrap().as_dict().unwrap();
            let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
            fonts.get(b"F1").unwrap().as_reference().unwrap()
        };
        assert_eq!(font_of(first.token), font_of(second.token));
    }

    #[test]
    fn drawing_without_a_page_fails() {
        let mut canvas = LopdfCanvas::new();
        let template = Template {
            token: (1, 0),
            size: Size::new(10.0, 10.0),
        };
        assert!(matches!(
            canvas.use_template(&template),
            Err(PdfmarkError::Pdf(_))
        ));
    }

    #[test]
    fn pages_follow_orientation() {
        let mut canvas = LopdfCanvas::new();
        canvas
            .add_page(Orientation::Landscape, Size::new(210.0, 297.0))
            .unwrap();
        canvas
            .add_page(Orientation::Portrait, Size::new(210.0, 297.0))
            .unwrap();
        assert_eq!(canvas.page_count(), 2);

        let output = serialize_and_load(&mut canvas);
        let boxes: Vec<Vec<f64>> = output
            .get_pages()
            .values()
            .map(|&id| {
                let page = output.get_object(id).unwrap().as_dict().unwrap();
                page.get(b"MediaBox")
                    .unwrap()
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|o| o.as_float().unwrap() as f64)
                    .collect()
            })
            .collect();
        assert!(boxes[0][2] > boxes[0][3], "landscape page must be wider");
        assert!(boxes[1][2] < boxes[1][3], "portrait page must be taller");
    }

    #[test]
    fn image_origin_is_flipped_to_pdf_space() {
        let dir = tempfile::tempdir().unwrap();
        let png = write_image(dir.path(), "mark.png", &testing::sample_opaque_png(96, 48));

        let mut canvas = LopdfCanvas::new();
        canvas
            .add_page(Orientation::Landscape, Size::from_points(720.0, 360.0))
            .unwrap();
        // 96x48 px at 96 DPI is 72x36 pt; bottom-right corner of the page.
        let mark = Size::from_pixels(96, 48);
        canvas
            .draw_image(&png, Point::new(254.0 - mark.width, 127.0 - mark.height), mark)
            .unwrap();

        let output = serialize_and_load(&mut canvas);
        let ops = testing::page_operations(&output, 1);
        let cm = ops.iter().find(|op| op.operator == "cm").unwrap();
        let values = testing::operands_f64(cm);
        let expected = [72.0, 0.0, 0.0, 36.0, 648.0, 0.0];
        for (value, want) in values.iter().zip(expected) {
            assert!((value - want).abs() < 0.01, "{values:?} != {expected:?}");
        }
    }

    #[test]
    fn alpha_png_gets_a_soft_mask_and_is_embedded_once() {
        let dir = tempfile::tempdir().unwrap();
        let png = write_image(dir.path(), "alpha.png", &testing::sample_png(8, 8));

        let mut canvas = LopdfCanvas::new();
        for _ in 0..2 {
            canvas
                .add_page(Orientation::Portrait, Size::new(100.0, 100.0))
                .unwrap();
            canvas
                .draw_image(&png, Point::new(0.0, 0.0), Size::new(10.0, 10.0))
                .unwrap();
        }
        assert_eq!(canvas.images.len(), 1);

        let image_id = canvas.images.values().next().unwrap().id;
        let image = canvas.document.get_object(image_id).unwrap().as_stream().unwrap();
        assert!(image.dict.get(b"SMask").is_ok());
        assert_eq!(image.dict.get(b"Filter").unwrap().as_name().unwrap(), b"FlateDecode");
    }

    #[test]
    fn jpeg_is_passed_through() {
        let dir = tempfile::tempdir().unwrap();
        let jpeg_bytes = testing::sample_jpeg(16, 8);
        let jpeg = write_image(dir.path(), "mark.jpg", &jpeg_bytes);

        let mut canvas = LopdfCanvas::new();
        canvas
            .add_page(Orientation::Portrait, Size::new(100.0, 100.0))
            .unwrap();
        canvas
            .draw_image(&jpeg, Point::new(0.0, 0.0), Size::new(10.0, 5.0))
            .unwrap();

        let image_id = canvas.images.values().next().unwrap().id;
        let image = canvas.document.get_object(image_id).unwrap().as_stream().unwrap();
        assert_eq!(image.dict.get(b"Filter").unwrap().as_name().unwrap(), b"DCTDecode");
        assert_eq!(image.content, jpeg_bytes);
        assert!(image.dict.get(b"SMask").is_err());
    }

    #[test]
    fn serialize_is_repeatable_and_freezes_the_canvas() {
        let source = two_page_source();
        let mut canvas = LopdfCanvas::new();
        let template = canvas.import_page(&source, 1).unwrap();
        canvas
            .add_page(Orientation::Portrait, template.size)
            .unwrap();
        canvas.use_template(&template).unwrap();

        let mut first = Vec::new();
        canvas.serialize(&mut first).unwrap();
        for _ in 0..2 {
            let mut again = Vec::new();
            canvas.serialize(&mut again).unwrap();
            assert_eq!(again.len(), first.len());
            assert_eq!(again, first);
        }

        let output = Document::load_mem(&first).unwrap();
        assert_eq!(output.get_pages().len(), 1);
        let content = output.get_page_content(output.get_pages()[&1]).unwrap();
        assert!(String::from_utf8_lossy(&content).contains("Do"));

        assert!(matches!(
            canvas.add_page(Orientation::Portrait, template.size),
            Err(PdfmarkError::Pdf(_))
        ));
    }
}
