// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: anchors, layering, page selection and document-unit
// geometry.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PdfmarkError, Result};

/// Screen resolution assumed for watermark pixels.
pub const PIXELS_PER_INCH: f64 = 96.0;
/// PDF user-space units per inch.
pub const POINTS_PER_INCH: f64 = 72.0;
pub const MM_PER_INCH: f64 = 25.4;

/// One of the nine placement points of a watermark on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    #[default]
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Horizontal component of an [`Anchor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical component of an [`Anchor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

impl Anchor {
    /// All anchors, row by row from the top-left corner.
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::MiddleLeft,
        Anchor::MiddleCenter,
        Anchor::MiddleRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    /// Parse a canonical anchor token. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|anchor| anchor.name() == name)
            .ok_or_else(|| PdfmarkError::InvalidPlacement(name.to_string()))
    }

    /// Canonical token, e.g. `"BottomRight"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TopLeft => "TopLeft",
            Self::TopCenter => "TopCenter",
            Self::TopRight => "TopRight",
            Self::MiddleLeft => "MiddleLeft",
            Self::MiddleCenter => "MiddleCenter",
            Self::MiddleRight => "MiddleRight",
            Self::BottomLeft => "BottomLeft",
            Self::BottomCenter => "BottomCenter",
            Self::BottomRight => "BottomRight",
        }
    }

    pub fn horizontal(&self) -> HorizontalAlign {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => HorizontalAlign::Left,
            Self::TopCenter | Self::MiddleCenter | Self::BottomCenter => HorizontalAlign::Center,
            Self::TopRight | Self::MiddleRight | Self::BottomRight => HorizontalAlign::Right,
        }
    }

    pub fn vertical(&self) -> VerticalAlign {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => VerticalAlign::Top,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => VerticalAlign::Middle,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => VerticalAlign::Bottom,
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Anchor {
    type Err = PdfmarkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for Anchor {
    type Error = PdfmarkError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_name(&value)
    }
}

impl From<Anchor> for String {
    fn from(anchor: Anchor) -> Self {
        anchor.name().to_string()
    }
}

/// Whether the watermark is painted beneath or above the page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Layering {
    /// Watermark first, page content on top.
    Background,
    /// Page content first, watermark on top.
    #[default]
    Overlay,
}

/// Page orientation handed to the output document when a page is recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// `Landscape` only when the page is strictly wider than it is tall.
    pub fn for_size(size: Size) -> Self {
        if size.width > size.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// A width/height pair in document units (millimetres).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert raster dimensions at [`PIXELS_PER_INCH`] into millimetres.
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width) / PIXELS_PER_INCH * MM_PER_INCH,
            height: f64::from(height) / PIXELS_PER_INCH * MM_PER_INCH,
        }
    }

    /// Convert PDF points into millimetres.
    pub fn from_points(width: f64, height: f64) -> Self {
        Self {
            width: width / POINTS_PER_INCH * MM_PER_INCH,
            height: height / POINTS_PER_INCH * MM_PER_INCH,
        }
    }
}

/// A position in document units, measured from the top-left corner of the
/// page with `y` growing downwards. Either component may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The pages eligible to carry a visible watermark.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageSelection {
    #[default]
    All,
    /// 1-based page numbers. An empty set selects every page.
    Pages(BTreeSet<u32>),
}

impl PageSelection {
    /// Every page in `start..=end`.
    pub fn range(start: u32, end: u32) -> Self {
        Self::Pages((start..=end).collect())
    }

    pub fn contains(&self, page_number: u32) -> bool {
        match self {
            Self::All => true,
            Self::Pages(pages) => pages.is_empty() || pages.contains(&page_number),
        }
    }

    /// Check every selected page against `[1, page_count]`.
    pub fn validate(&self, page_count: u32) -> Result<()> {
        match self {
            Self::All => Ok(()),
            Self::Pages(pages) => match pages.iter().find(|&&p| p == 0 || p > page_count) {
                Some(&page) => Err(PdfmarkError::PageOutOfRange { page, page_count }),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_anchor_round_trips_through_its_name() {
        for anchor in Anchor::ALL {
            let parsed = Anchor::from_name(anchor.name()).unwrap();
            assert_eq!(parsed, anchor);
            assert_eq!(parsed.name(), anchor.name());
            assert_eq!(anchor.to_string().parse::<Anchor>().unwrap(), anchor);
        }
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        for bad in ["", "middlecenter", "Center", "TopMiddle", " TopLeft"] {
            match Anchor::from_name(bad) {
                Err(PdfmarkError::InvalidPlacement(token)) => assert_eq!(token, bad),
                other => panic!("expected InvalidPlacement for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn default_anchor_is_middle_center() {
        assert_eq!(Anchor::default(), Anchor::MiddleCenter);
        assert_eq!(Layering::default(), Layering::Overlay);
    }

    #[test]
    fn anchor_decomposes_into_axes() {
        assert_eq!(Anchor::BottomLeft.horizontal(), HorizontalAlign::Left);
        assert_eq!(Anchor::BottomLeft.vertical(), VerticalAlign::Bottom);
        assert_eq!(Anchor::TopCenter.horizontal(), HorizontalAlign::Center);
        assert_eq!(Anchor::MiddleRight.vertical(), VerticalAlign::Middle);
    }

    #[test]
    fn anchor_serializes_as_token() {
        let json = serde_json::to_string(&Anchor::TopRight).unwrap();
        assert_eq!(json, "\"TopRight\"");
        let back: Anchor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Anchor::TopRight);
        assert!(serde_json::from_str::<Anchor>("\"Upper\"").is_err());
    }

    #[test]
    fn pixels_convert_at_96_dpi() {
        let size = Size::from_pixels(96, 192);
        assert!((size.width - 25.4).abs() < 1e-9);
        assert!((size.height - 50.8).abs() < 1e-9);
    }

    #[test]
    fn points_convert_to_millimetres() {
        let size = Size::from_points(72.0, 144.0);
        assert!((size.width - 25.4).abs() < 1e-9);
        assert!((size.height - 50.8).abs() < 1e-9);
    }

    #[test]
    fn orientation_follows_aspect() {
        assert_eq!(Orientation::for_size(Size::new(297.0, 210.0)), Orientation::Landscape);
        assert_eq!(Orientation::for_size(Size::new(210.0, 297.0)), Orientation::Portrait);
        assert_eq!(Orientation::for_size(Size::new(100.0, 100.0)), Orientation::Portrait);
    }

    #[test]
    fn empty_selection_means_all_pages() {
        let selection = PageSelection::Pages(BTreeSet::new());
        assert!(selection.contains(1));
        assert!(selection.contains(42));
        assert!(PageSelection::All.contains(7));
    }

    #[test]
    fn range_selection_is_inclusive() {
        let selection = PageSelection::range(2, 4);
        assert!(!selection.contains(1));
        assert!(selection.contains(2));
        assert!(selection.contains(4));
        assert!(!selection.contains(5));
    }

    #[test]
    fn validate_rejects_pages_outside_document() {
        assert!(PageSelection::range(1, 3).validate(3).is_ok());
        assert!(matches!(
            PageSelection::range(2, 5).validate(3),
            Err(PdfmarkError::PageOutOfRange { page: 4, page_count: 3 })
        ));
        assert!(matches!(
            PageSelection::Pages([0].into_iter().collect()).validate(3),
            Err(PdfmarkError::PageOutOfRange { page: 0, .. })
        ));
    }
}
