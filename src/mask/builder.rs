// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Mask builder: rasterize annotation records into a mask volume.
//!
//! Given the annotations for one image and the label table, produce one
//! binary mask layer per annotation plus a parallel class-id vector.
//! Output height/width are explicit parameters; they are configuration,
//! never derived from the annotations or the image.

use crate::error::{Error, Result};
use crate::mask::volume::MaskVolume;
use crate::models::annotation::{Annotation, AnnotationShape};
use crate::models::label::{LabelTable, UNCLASSIFIED};

/// Build the mask volume and class-id vector for one image.
///
/// Layer `i` of the volume holds the rasterized mask of `annotations[i]`,
/// and `class_ids[i]` its class id (0 when the label id is not in the
/// table). An empty annotation list yields a single all-zero placeholder
/// layer with class id 0, not a zero-layer volume; downstream consumers
/// must cope with an empty layer either way.
///
/// Only bounding-box annotations are rasterized: the box interior is
/// filled over rows `[y, y+height)` and cols `[x, x+width)`, clipped to
/// the volume. Any other shape fails with
/// [`Error::UnsupportedAnnotationShape`]; skipping instead would leave a
/// layer indistinguishable from a genuinely empty mask.
pub fn build_masks(
    annotations: &[Annotation],
    labels: &LabelTable,
    height: u32,
    width: u32,
) -> Result<(MaskVolume, Vec<u32>)> {
    if annotations.is_empty() {
        log::info!("no annotations, emitting placeholder mask layer");
        let volume = MaskVolume::zeros(height, width, 1);
        return Ok((volume, vec![UNCLASSIFIED]));
    }

    let mut volume = MaskVolume::zeros(height, width, annotations.len());
    let mut class_ids = Vec::with_capacity(annotations.len());

    for (i, annotation) in annotations.iter().enumerate() {
        match annotation.shape {
            AnnotationShape::BoundingBox { x, y, width: w, height: h } => {
                let [x, y, w, h] = coerce_box(i, [x, y, w, h])?;
                volume.fill_rect(i, x, y, x + w, y + h);
            }
            ref shape => {
                return Err(Error::UnsupportedAnnotationShape {
                    index: i,
                    shape: shape.kind(),
                });
            }
        }

        let class_id = labels.class_id(&annotation.label_id);
        if class_id == UNCLASSIFIED {
            log::warn!(
                "annotation {} has unknown label id {:?}, class id defaults to 0",
                i,
                annotation.label_id
            );
        }
        class_ids.push(class_id);
    }

    log::info!("built {} mask layers ({}x{})", volume.layers(), height, width);
    Ok((volume, class_ids))
}

/// Largest magnitude accepted for box geometry. Pixel coordinates far
/// beyond any real image are a data error, and keeping them within i32
/// range means corner sums cannot overflow i64.
const COORD_LIMIT: f64 = i32::MAX as f64;

/// Coerce box geometry to integer pixel coordinates, truncating toward
/// zero. Non-finite or absurdly large values cannot be coerced and fail
/// the whole build.
fn coerce_box(index: usize, fields: [f64; 4]) -> Result<[i64; 4]> {
    const NAMES: [&str; 4] = ["x", "y", "width", "height"];
    let mut out = [0i64; 4];
    for (slot, (value, name)) in out.iter_mut().zip(fields.into_iter().zip(NAMES)) {
        if !value.is_finite() || value.abs() > COORD_LIMIT {
            return Err(Error::InvalidAnnotationData {
                index,
                reason: format!("{} is not a valid pixel coordinate: {}", name, value),
            });
        }
        *slot = value as i64;
    }
    Ok(out)
}
