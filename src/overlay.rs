// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Raster compositing of masks and boxes onto an image.
//!
//! Masks are alpha-blended per channel, boxes are drawn as clipped
//! outlines. Instance colors come from evenly spaced hues so the result
//! is deterministic across runs.

use crate::ground_truth::GroundTruth;
use crate::mask::{Bbox, MaskVolume};
use crate::models::annotation::Point;
use crate::util::geometry;
use image::{Rgb, RgbImage};

/// Outline thickness used by [`overlay_ground_truth`].
const BOX_THICKNESS: u32 = 2;

/// Blend one mask layer into the image: where the mask is on, each
/// channel becomes `px * (1 - alpha) + alpha * color`.
pub fn apply_mask(
    image: &mut RgbImage,
    masks: &MaskVolume,
    layer: usize,
    color: Rgb<u8>,
    alpha: f32,
) {
    if masks.height() != image.height() || masks.width() != image.width() {
        log::warn!(
            "mask volume is {}x{} but image is {}x{}, blending the overlap only",
            masks.height(),
            masks.width(),
            image.height(),
            image.width()
        );
    }
    let rows = masks.height().min(image.height());
    let cols = masks.width().min(image.width());

    for row in 0..rows {
        for col in 0..cols {
            if masks.get(row, col, layer) {
                blend_pixel(image, col, row, color, alpha);
            }
        }
    }
}

/// Draw a box outline of the given thickness, just inside the half-open
/// bounds, clipped to the image.
pub fn draw_box(image: &mut RgbImage, bbox: &Bbox, color: Rgb<u8>, thickness: u32) {
    if bbox.is_empty() {
        return;
    }
    let t = thickness.min(bbox.width()).min(bbox.height());

    fill_region(image, bbox.x1, bbox.y1, bbox.x2, bbox.y1 + t, color);
    fill_region(image, bbox.x1, bbox.y2.saturating_sub(t), bbox.x2, bbox.y2, color);
    fill_region(image, bbox.x1, bbox.y1, bbox.x1 + t, bbox.y2, color);
    fill_region(image, bbox.x2.saturating_sub(t), bbox.y1, bbox.x2, bbox.y2, color);
}

/// Draw a box given as normalized corner points (0.0 to 1.0), scaled to
/// the image's pixel grid.
pub fn draw_normalized_box(
    image: &mut RgbImage,
    p1: Point,
    p2: Point,
    color: Rgb<u8>,
    thickness: u32,
) {
    let (x1, y1) = geometry::to_pixel(&p1, image.width(), image.height());
    let (x2, y2) = geometry::to_pixel(&p2, image.width(), image.height());

    let clamp_x = |v: i64| v.clamp(0, image.width() as i64) as u32;
    let clamp_y = |v: i64| v.clamp(0, image.height() as i64) as u32;
    let bbox = Bbox {
        y1: clamp_y(y1.min(y2)),
        x1: clamp_x(x1.min(x2)),
        y2: clamp_y(y1.max(y2)),
        x2: clamp_x(x1.max(x2)),
    };
    draw_box(image, &bbox, color, thickness);
}

/// Composite a full ground-truth record onto the image: per instance,
/// blend its mask and draw its box. Instances with an all-zero box are
/// skipped.
pub fn overlay_ground_truth(image: &mut RgbImage, gt: &GroundTruth, alpha: f32) {
    let colors = instance_colors(gt.len());
    for i in 0..gt.len() {
        if gt.boxes[i].is_empty() {
            continue;
        }
        apply_mask(image, &gt.masks, i, colors[i], alpha);
        draw_box(image, &gt.boxes[i], colors[i], BOX_THICKNESS);
    }
}

/// Visually distinct instance colors: evenly spaced hues at full
/// saturation and value. Deterministic, no shuffling.
pub fn instance_colors(n: usize) -> Vec<Rgb<u8>> {
    (0..n)
        .map(|i| hsv_to_rgb(i as f32 / n.max(1) as f32, 1.0, 1.0))
        .collect()
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb<u8> {
    let h = (h.fract() + 1.0).fract() * 6.0;
    let sector = h.floor() as u32 % 6;
    let f = h - h.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb([(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8])
}

fn blend_pixel(image: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>, alpha: f32) {
    let px = image.get_pixel_mut(x, y);
    for c in 0..3 {
        let blended = px[c] as f32 * (1.0 - alpha) + alpha * color[c] as f32;
        px[c] = blended.min(255.0) as u8;
    }
}

fn fill_region(image: &mut RgbImage, x1: u32, y1: u32, x2: u32, y2: u32, color: Rgb<u8>) {
    let x2 = x2.min(image.width());
    let y2 = y2.min(image.height());
    for y in y1..y2 {
        for x in x1..x2 {
            image.put_pixel(x, y, color);
        }
    }
}
