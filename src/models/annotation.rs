// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! This module defines the core data structures for representing
//! labeled regions (bounding boxes, polygons, lines) on an image.

use serde::{Deserialize, Serialize};

/// A 2D point in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Geometry of an annotation, tagged by shape.
///
/// Only `BoundingBox` is rasterized by the mask builder; the other
/// shapes are carried through the data model but rejected at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum AnnotationShape {
    /// Axis-aligned box: top-left corner plus extent, in pixels.
    /// Values are coerced to integers when rasterized.
    BoundingBox {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Polygon { vertices: Vec<Point> },
    FreeForm { vertices: Vec<Point> },
    Line { vertices: Vec<Point> },
}

/// Discriminant of [`AnnotationShape`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    BoundingBox,
    Polygon,
    FreeForm,
    Line,
}

impl AnnotationShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            AnnotationShape::BoundingBox { .. } => ShapeKind::BoundingBox,
            AnnotationShape::Polygon { .. } => ShapeKind::Polygon,
            AnnotationShape::FreeForm { .. } => ShapeKind::FreeForm,
            AnnotationShape::Line { .. } => ShapeKind::Line,
        }
    }
}

/// One labeled region on an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Identifier into the external label table.
    pub label_id: String,
    pub shape: AnnotationShape,
}

impl Annotation {
    /// Create a bounding-box annotation with the given label id.
    pub fn bounding_box(
        label_id: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            label_id: label_id.into(),
            shape: AnnotationShape::BoundingBox { x, y, width, height },
        }
    }
}

/// All annotations for one image, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationSet {
    /// Path to the annotated image file.
    pub media_file: String,
    pub annotations: Vec<Annotation>,
}

impl AnnotationSet {
    /// Create an empty annotation set for the given media file.
    pub fn new(media_file: String) -> Self {
        Self {
            media_file,
            annotations: Vec::new(),
        }
    }
}
