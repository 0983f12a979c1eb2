// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Instance mask construction and bounding-box extraction.

pub mod bbox;
pub mod builder;
pub mod volume;

pub use bbox::{extract_bboxes, Bbox};
pub use builder::build_masks;
pub use volume::MaskVolume;
