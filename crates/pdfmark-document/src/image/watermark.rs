// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Watermark asset — detect the watermark's raster format, re-encode it without
// interlacing into a private temporary file and expose its pixel dimensions.
// Operates on the `image` crate; the temporary file is owned by `tempfile`.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageFormat};
use pdfmark_core::Size;
use pdfmark_core::error::{PdfmarkError, Result};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

/// Quality used when re-encoding JPEG watermarks.
const JPEG_QUALITY: u8 = 75;

/// Raster formats accepted as a watermark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatermarkFormat {
    Jpeg,
    Png,
}

impl WatermarkFormat {
    fn from_image_format(format: ImageFormat) -> Result<Self> {
        match format {
            ImageFormat::Jpeg => Ok(Self::Jpeg),
            ImageFormat::Png => Ok(Self::Png),
            other => Err(PdfmarkError::UnsupportedImageType(format!("{:?}", other))),
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
        }
    }

    /// File extension of the normalized artifact.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

/// A watermark image prepared for placement.
///
/// The normalized raster lives in a uniquely named temporary file that is
/// deleted when the asset is dropped or [`WatermarkAsset::release`]d.
#[derive(Debug)]
pub struct WatermarkAsset {
    artifact: NamedTempFile,
    format: WatermarkFormat,
    width: u32,
    height: u32,
}

impl WatermarkAsset {
    // -- Construction ---------------------------------------------------------

    /// Prepare a watermark from a JPEG or PNG file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path.as_ref())?;
        Self::prepare(&data)
    }

    /// Prepare a watermark from encoded JPEG or PNG bytes.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::prepare(data)
    }

    fn prepare(data: &[u8]) -> Result<Self> {
        let format = detect_format(data)?;
        let image = image::load_from_memory_with_format(data, format.image_format())
            .map_err(|err| {
                PdfmarkError::ImageProcessing(format!(
                    "failed to decode {:?} watermark: {}",
                    format, err
                ))
            })?;

        let artifact = tempfile::Builder::new()
            .prefix("pdfmark-")
            .suffix(&format!(".{}", format.extension()))
            .tempfile()?;
        write_normalized(&image, format, &artifact)?;

        let (width, height) = image::image_dimensions(artifact.path()).map_err(|err| {
            PdfmarkError::ImageProcessing(format!("cannot read normalized watermark: {}", err))
        })?;

        info!(
            ?format,
            width,
            height,
            artifact = %artifact.path().display(),
            "Watermark prepared"
        );

        Ok(Self {
            artifact,
            format,
            width,
            height,
        })
    }

    // -- Accessors ------------------------------------------------------------

    /// Width of the normalized raster in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the normalized raster in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size in document units (millimetres at 96 DPI).
    pub fn size(&self) -> Size {
        Size::from_pixels(self.width, self.height)
    }

    pub fn format(&self) -> WatermarkFormat {
        self.format
    }

    /// Location of the normalized raster.
    pub fn path(&self) -> &Path {
        self.artifact.path()
    }

    /// Delete the normalized raster now, reporting any I/O failure.
    pub fn release(self) -> Result<()> {
        let path = self.artifact.path().to_path_buf();
        self.artifact.close()?;
        debug!(path = %path.display(), "Watermark artifact released");
        Ok(())
    }
}

fn detect_format(data: &[u8]) -> Result<WatermarkFormat> {
    match image::guess_format(data) {
        Ok(format) => WatermarkFormat::from_image_format(format).inspect_err(|err| {
            warn!(%err, "Rejected watermark image");
        }),
        Err(_) => {
            warn!("Watermark image type could not be detected");
            Err(PdfmarkError::UnsupportedImageType("unknown".to_string()))
        }
    }
}

/// Re-encode without interlacing. JPEG becomes baseline RGB; PNG keeps its
/// colour type, alpha channel included.
fn write_normalized(
    image: &DynamicImage,
    format: WatermarkFormat,
    artifact: &NamedTempFile,
) -> Result<()> {
    let mut writer = BufWriter::new(artifact.as_file());
    let encoded = match format {
        WatermarkFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
            image.to_rgb8().write_with_encoder(encoder)
        }
        WatermarkFormat::Png => {
            let encoder = PngEncoder::new(&mut writer);
            image.write_with_encoder(encoder)
        }
    };
    encoded.map_err(|err| {
        PdfmarkError::ImageProcessing(format!("failed to re-encode watermark: {}", err))
    })?;
    writer.flush()?;
    Ok(())
}
