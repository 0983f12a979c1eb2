// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for mask building and overlay rendering.
//!
//! All operations in this crate are deterministic in-memory computations,
//! so none of these errors is transient; retrying a failed call will fail
//! identically.

use crate::models::annotation::ShapeKind;

/// Errors produced by the mask/overlay core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An annotation's geometry fields cannot be coerced to pixel
    /// coordinates. Carries the index of the offending annotation.
    #[error("invalid annotation data at index {index}: {reason}")]
    InvalidAnnotationData { index: usize, reason: String },

    /// An annotation uses a shape this crate does not rasterize.
    /// Carries the index of the offending annotation.
    #[error("unsupported annotation shape {shape:?} at index {index}")]
    UnsupportedAnnotationShape { index: usize, shape: ShapeKind },

    /// A class id has no entry in the class-name list. Class ids index
    /// the list directly; a mismatch is a configuration error, never
    /// something to paper over by shifting the index.
    #[error("class id {class_id} out of range for {known} known class names")]
    ClassIdOutOfRange { class_id: u32, known: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
