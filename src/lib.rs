// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! GTVIZ - Ground Truth Visualization
//!
//! Turns per-image annotation records into stacked binary instance masks,
//! derives tight bounding boxes from those masks, and composites masks and
//! boxes over the source image for visual inspection during dataset
//! preparation.

pub mod error;
pub mod ground_truth;
pub mod io;
pub mod mask;
pub mod models;
pub mod overlay;
pub mod util;

pub use error::{Error, Result};
