// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfmark — Core types, placement geometry and error definitions shared across
// all crates.

pub mod config;
pub mod error;
pub mod placement;
pub mod types;

pub use config::WatermarkConfig;
pub use error::{PdfmarkError, Result};
pub use placement::place;
pub use types::*;
