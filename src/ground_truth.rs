// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Ground-truth assembly for one image.
//!
//! Chains the mask builder and the bounding-box extractor: rasterize the
//! annotations, drop instances whose mask ended up empty, then compute
//! boxes for what remains. Masks, class ids, and boxes stay index-aligned
//! throughout.

use crate::error::Result;
use crate::mask::{build_masks, extract_bboxes, Bbox, MaskVolume};
use crate::models::annotation::Annotation;
use crate::models::label::LabelTable;

/// Per-image ground truth ready for rendering.
#[derive(Debug, Clone)]
pub struct GroundTruth {
    /// One binary layer per surviving instance.
    pub masks: MaskVolume,
    /// Class id per instance, 0 for unclassified.
    pub class_ids: Vec<u32>,
    /// Tight half-open box per instance. Never all-zero here, since
    /// empty layers are pruned before extraction.
    pub boxes: Vec<Bbox>,
}

impl GroundTruth {
    /// Number of instances.
    pub fn len(&self) -> usize {
        self.class_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.class_ids.is_empty()
    }
}

/// Compute the ground truth for one image.
///
/// The mask builder's placeholder layer for an empty annotation list is
/// itself empty and gets pruned, so an unannotated image yields zero
/// instances.
pub fn image_ground_truth(
    annotations: &[Annotation],
    labels: &LabelTable,
    height: u32,
    width: u32,
) -> Result<GroundTruth> {
    let (mut masks, class_ids) = build_masks(annotations, labels, height, width)?;

    let keep: Vec<bool> = (0..masks.layers()).map(|i| !masks.layer_is_empty(i)).collect();
    masks.retain_layers(|i| keep[i]);
    let class_ids: Vec<u32> = class_ids
        .into_iter()
        .zip(&keep)
        .filter_map(|(id, &k)| k.then_some(id))
        .collect();

    let boxes = extract_bboxes(&masks);
    log::info!("ground truth: {} instances", class_ids.len());

    Ok(GroundTruth { masks, class_ids, boxes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::label::Label;

    fn label_table() -> LabelTable {
        let mut table = LabelTable::new();
        table.insert("L_nodule", Label { class_id: 1, name: "nodule".into() });
        table.insert("L_mass", Label { class_id: 2, name: "mass".into() });
        table
    }

    #[test]
    fn test_no_annotations_yields_no_instances() {
        let gt = image_ground_truth(&[], &label_table(), 64, 64).unwrap();
        assert!(gt.is_empty());
        assert_eq!(gt.masks.layers(), 0);
        assert!(gt.boxes.is_empty());
    }

    #[test]
    fn test_single_box_end_to_end() {
        let annotations = vec![Annotation::bounding_box("L_nodule", 10.0, 20.0, 5.0, 8.0)];
        let gt = image_ground_truth(&annotations, &label_table(), 100, 100).unwrap();

        assert_eq!(gt.len(), 1);
        assert_eq!(gt.class_ids, vec![1]);
        assert_eq!(gt.boxes, vec![Bbox { y1: 20, x1: 10, y2: 28, x2: 15 }]);
    }

    #[test]
    fn test_empty_layers_are_pruned_keeping_alignment() {
        let annotations = vec![
            Annotation::bounding_box("L_nodule", 2.0, 2.0, 4.0, 4.0),
            // Entirely outside the volume, so its layer stays empty
            Annotation::bounding_box("L_mass", 500.0, 500.0, 10.0, 10.0),
            Annotation::bounding_box("L_mass", 20.0, 30.0, 6.0, 2.0),
        ];
        let gt = image_ground_truth(&annotations, &label_table(), 100, 100).unwrap();

        assert_eq!(gt.len(), 2);
        assert_eq!(gt.class_ids, vec![1, 2]);
        assert_eq!(gt.masks.layers(), 2);
        assert_eq!(gt.boxes[0], Bbox { y1: 2, x1: 2, y2: 6, x2: 6 });
        assert_eq!(gt.boxes[1], Bbox { y1: 30, x1: 20, y2: 32, x2: 26 });
        assert!(gt.boxes.iter().all(|b| !b.is_empty()));
    }

    #[test]
    fn test_zero_extent_box_is_pruned() {
        let annotations = vec![Annotation::bounding_box("L_nodule", 10.0, 10.0, 0.0, 5.0)];
        let gt = image_ground_truth(&annotations, &label_table(), 100, 100).unwrap();
        assert!(gt.is_empty());
    }
}
