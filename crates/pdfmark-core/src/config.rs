// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Watermark run configuration.

use serde::{Deserialize, Serialize};

use crate::types::{Anchor, Layering, PageSelection};

/// Settings for one watermarking run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkConfig {
    /// Where the watermark sits on each page (default `MiddleCenter`).
    pub anchor: Anchor,
    /// Paint order relative to the page content (default `Overlay`).
    pub layering: Layering,
    /// Pages that receive a visible watermark (default: all pages).
    pub pages: PageSelection,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            anchor: Anchor::MiddleCenter,
            layering: Layering::Overlay,
            pages: PageSelection::All,
        }
    }
}
