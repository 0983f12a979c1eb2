// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Bounding-box extraction from binary mask layers.
//!
//! Boxes use the half-open convention: `y2`/`x2` are exclusive, so a box
//! can be used directly to slice the mask it was computed from.

use crate::mask::volume::MaskVolume;
use serde::{Deserialize, Serialize};

/// Tight axis-aligned bounding box of one mask layer, in (y1, x1, y2, x2)
/// order. `y2`/`x2` are exclusive. All four fields are zero when the
/// layer has no on-pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bbox {
    pub y1: u32,
    pub x1: u32,
    pub y2: u32,
    pub x2: u32,
}

impl Bbox {
    /// True when the box marks an empty mask layer.
    pub fn is_empty(&self) -> bool {
        *self == Bbox::default()
    }

    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }
}

/// Compute the bounding box of every layer in a mask volume.
///
/// Each layer is scanned independently: the box spans the minimum to
/// maximum on-row and on-column, with the upper bounds incremented by one
/// (exclusive). A pure function of the pixel data.
pub fn extract_bboxes(volume: &MaskVolume) -> Vec<Bbox> {
    (0..volume.layers())
        .map(|i| layer_bbox(volume.layer(i), volume.width()))
        .collect()
}

fn layer_bbox(layer: &[bool], width: u32) -> Bbox {
    let width = width as usize;
    let mut min_row = usize::MAX;
    let mut max_row = 0usize;
    let mut min_col = usize::MAX;
    let mut max_col = 0usize;
    let mut any = false;

    for (idx, &on) in layer.iter().enumerate() {
        if !on {
            continue;
        }
        any = true;
        let row = idx / width;
        let col = idx % width;
        min_row = min_row.min(row);
        max_row = max_row.max(row);
        min_col = min_col.min(col);
        max_col = max_col.max(col);
    }

    if !any {
        return Bbox::default();
    }
    Bbox {
        y1: min_row as u32,
        x1: min_col as u32,
        y2: max_row as u32 + 1,
        x2: max_col as u32 + 1,
    }
}
