// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides conversions between normalized coordinates
//! (0.0 to 1.0) and integer pixel coordinates.

use crate::models::annotation::Point;

/// Convert pixel coordinates to normalized coordinates (0.0 to 1.0).
pub fn to_normalized(pixel_x: f64, pixel_y: f64, width: u32, height: u32) -> Point {
    Point {
        x: pixel_x / width as f64,
        y: pixel_y / height as f64,
    }
}

/// Convert a normalized point to pixel coordinates, truncating toward
/// zero. The result may lie outside the image for points outside 0..1.
pub fn to_pixel(point: &Point, width: u32, height: u32) -> (i64, i64) {
    (
        (point.x * width as f64) as i64,
        (point.y * height as f64) as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pixel_roundtrip() {
        let (width, height) = (1024, 768);
        let normalized = to_normalized(512.0, 384.0, width, height);
        assert_eq!(to_pixel(&normalized, width, height), (512, 384));
    }

    #[test]
    fn test_to_pixel_corners() {
        let (width, height) = (1024, 768);

        let tl = Point { x: 0.0, y: 0.0 };
        assert_eq!(to_pixel(&tl, width, height), (0, 0));

        let br = Point { x: 1.0, y: 1.0 };
        assert_eq!(to_pixel(&br, width, height), (1024, 768));
    }

    #[test]
    fn test_to_pixel_truncates() {
        let p = Point { x: 0.5, y: 0.5 };
        assert_eq!(to_pixel(&p, 101, 101), (50, 50));
    }
}
