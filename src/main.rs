// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! GTVIZ - Ground Truth Visualization
//!
//! Demo binary: load an annotation set and its image, rasterize the
//! ground-truth masks and boxes, and write the composited overlay as a
//! PNG for visual inspection.

use anyhow::{bail, Context, Result};
use gtviz::ground_truth::image_ground_truth;
use gtviz::io::{media, serialization};
use gtviz::models::label::{class_name, LabelTable};
use gtviz::overlay::overlay_ground_truth;
use std::path::{Path, PathBuf};

const MASK_ALPHA: f32 = 0.5;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (annotations_path, labels_path, output_path) =
        match (args.next(), args.next(), args.next()) {
            (Some(a), Some(l), Some(o)) => (PathBuf::from(a), PathBuf::from(l), PathBuf::from(o)),
            _ => bail!("Usage: gtviz <annotations.(yaml|json)> <labels.(yaml|json)> <output.png>"),
        };

    let set = import_annotation_set(&annotations_path)?;
    log::info!(
        "Imported {} annotations from {}",
        set.annotations.len(),
        annotations_path.display()
    );

    let labels: LabelTable = serialization::import_labels(&labels_path)
        .with_context(|| format!("Failed to import labels: {}", labels_path.display()))?;

    let image_path = PathBuf::from(&set.media_file);
    let mut image = media::load_image(&image_path)?;
    log::info!(
        "Loaded image: {} ({}x{})",
        image_path.display(),
        image.width(),
        image.height()
    );

    let gt = image_ground_truth(&set.annotations, &labels, image.height(), image.width())?;

    let class_names = labels.class_names();
    for (i, (class_id, bbox)) in gt.class_ids.iter().zip(&gt.boxes).enumerate() {
        let name = class_name(&class_names, *class_id)?;
        log::info!(
            "instance {}: class {} ({}), box (y1={}, x1={}, y2={}, x2={})",
            i, class_id, name, bbox.y1, bbox.x1, bbox.y2, bbox.x2
        );
    }

    overlay_ground_truth(&mut image, &gt, MASK_ALPHA);
    media::save_png(&image, &output_path)?;
    log::info!("Wrote overlay to {}", output_path.display());

    Ok(())
}

/// Parse an annotation set, choosing the format by file extension.
fn import_annotation_set(path: &Path) -> Result<gtviz::models::annotation::AnnotationSet> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => serialization::import_yaml(path)
            .with_context(|| format!("Failed to import YAML: {}", path.display())),
        Some("json") => serialization::import_json(path)
            .with_context(|| format!("Failed to import JSON: {}", path.display())),
        other => bail!("Unsupported file extension: {:?}", other),
    }
}
