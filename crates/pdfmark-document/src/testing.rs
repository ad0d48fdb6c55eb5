// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Test fixtures — synthetic PDFs and images, plus a tracing subscriber for
// test output. Available to downstream crates through the `testing` feature.

use std::io::Cursor;

use ::image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use tracing_subscriber::EnvFilter;

/// ISO A4 in points.
pub const A4: (f64, f64) = (595.276, 841.89);

/// Install a fmt subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A PDF with one page per entry of `pages` (width, height in points).
///
/// Each page prints "Page N" in Helvetica. The font lives in the `/Pages`
/// node's resources so that pages inherit it.
pub fn sample_pdf(pages: &[(f64, f64)]) -> Vec<u8> {
    let pages: Vec<_> = pages.iter().map(|&size| (size, 0)).collect();
    rotated_pdf(&pages)
}

/// Like [`sample_pdf`], with a `/Rotate` value per page. Zero omits the key.
pub fn rotated_pdf(pages: &[((f64, f64), i64)]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::with_capacity(pages.len());
    for (index, &((width, height), rotate)) in pages.iter().enumerate() {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 72.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(format!("Page {}", index + 1))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let encoded = content.encode().expect("encode fixture content");
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), (width as f32).into(), (height as f32).into()],
            "Contents" => content_id,
        };
        if rotate != 0 {
            page.set("Rotate", rotate);
        }
        let page_id = doc.add_object(page);
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut output = Vec::new();
    doc.save_to(&mut output).expect("serialise fixture PDF");
    output
}

/// A PNG with an alpha channel fading from opaque to transparent.
pub fn sample_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, _| {
        let alpha = 255 - (x * 255 / width.max(1)) as u8;
        Rgba([200, 30, 30, alpha])
    });
    encode(DynamicImage::ImageRgba8(image), ImageFormat::Png)
}

/// An opaque RGB PNG.
pub fn sample_opaque_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([10, 120, 200]));
    encode(DynamicImage::ImageRgb8(image), ImageFormat::Png)
}

pub fn sample_jpeg(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    encode(DynamicImage::ImageRgb8(image), ImageFormat::Jpeg)
}

pub fn sample_gif(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
    encode(DynamicImage::ImageRgba8(image), ImageFormat::Gif)
}

fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), format)
        .expect("encode fixture image");
    buffer
}

/// Decoded content operations of a page (1-indexed) in a serialised PDF.
pub fn page_operations(pdf: &Document, page_number: u32) -> Vec<Operation> {
    let page_id = pdf.get_pages()[&page_number];
    let content = pdf.get_page_content(page_id).expect("page content");
    Content::decode(&content).expect("decode page content").operations
}

/// Numeric operands of an operation as `f64`.
pub fn operands_f64(operation: &Operation) -> Vec<f64> {
    operation
        .operands
        .iter()
        .filter_map(|operand| match operand {
            Object::Integer(i) => Some(*i as f64),
            Object::Real(r) => Some(*r as f64),
            _ => None,
        })
        .collect()
}
