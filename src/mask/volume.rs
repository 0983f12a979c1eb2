// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Binary mask volume: one 2D layer per annotation instance.
//!
//! Layers are stored layer-major so each instance mask is a contiguous
//! `height * width` slice. Values are strictly boolean.

/// A stack of binary masks with shape (height, width, layer count).
#[derive(Debug, Clone, PartialEq)]
pub struct MaskVolume {
    height: u32,
    width: u32,
    layers: usize,
    data: Vec<bool>,
}

impl MaskVolume {
    /// Allocate an all-zero volume with the given shape.
    pub fn zeros(height: u32, width: u32, layers: usize) -> Self {
        let plane = height as usize * width as usize;
        Self {
            height,
            width,
            layers,
            data: vec![false; plane * layers],
        }
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of mask layers (instances).
    pub fn layers(&self) -> usize {
        self.layers
    }

    fn plane(&self) -> usize {
        self.height as usize * self.width as usize
    }

    /// One mask layer as a row-major slice of length `height * width`.
    pub fn layer(&self, i: usize) -> &[bool] {
        let plane = self.plane();
        &self.data[i * plane..(i + 1) * plane]
    }

    pub fn get(&self, row: u32, col: u32, layer: usize) -> bool {
        self.layer(layer)[row as usize * self.width as usize + col as usize]
    }

    pub fn set(&mut self, row: u32, col: u32, layer: usize, on: bool) {
        let plane = self.plane();
        let width = self.width as usize;
        self.data[layer * plane + row as usize * width + col as usize] = on;
    }

    /// Fill a half-open rectangle (rows `y0..y1`, cols `x0..x1`) in one
    /// layer. Coordinates may lie outside the volume; the rectangle is
    /// clipped to the volume bounds. Either corner order is accepted.
    pub fn fill_rect(&mut self, layer: usize, x0: i64, y0: i64, x1: i64, y1: i64) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };

        let row_start = y0.clamp(0, self.height as i64) as usize;
        let row_end = y1.clamp(0, self.height as i64) as usize;
        let col_start = x0.clamp(0, self.width as i64) as usize;
        let col_end = x1.clamp(0, self.width as i64) as usize;

        let plane = self.plane();
        let width = self.width as usize;
        let base = layer * plane;
        for row in row_start..row_end {
            let offset = base + row * width;
            self.data[offset + col_start..offset + col_end].fill(true);
        }
    }

    /// Number of on-pixels in one layer.
    pub fn layer_area(&self, i: usize) -> usize {
        self.layer(i).iter().filter(|&&on| on).count()
    }

    pub fn layer_is_empty(&self, i: usize) -> bool {
        self.layer(i).iter().all(|&on| !on)
    }

    /// Keep only the layers whose index passes the predicate, preserving
    /// order. Used to prune instances whose mask has no on-pixels.
    pub fn retain_layers(&mut self, mut keep: impl FnMut(usize) -> bool) {
        let plane = self.plane();
        let mut kept = 0usize;
        for i in 0..self.layers {
            if keep(i) {
                if kept != i {
                    self.data.copy_within(i * plane..(i + 1) * plane, kept * plane);
                }
                kept += 1;
            }
        }
        self.layers = kept;
        self.data.truncate(kept * plane);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let volume = MaskVolume::zeros(4, 6, 3);
        assert_eq!(volume.height(), 4);
        assert_eq!(volume.width(), 6);
        assert_eq!(volume.layers(), 3);
        assert_eq!(volume.layer(2).len(), 24);
        assert!(volume.layer_is_empty(0));
    }

    #[test]
    fn test_fill_rect_half_open() {
        let mut volume = MaskVolume::zeros(10, 10, 1);
        volume.fill_rect(0, 2, 3, 5, 6);

        assert_eq!(volume.layer_area(0), 9);
        assert!(volume.get(3, 2, 0));
        assert!(volume.get(5, 4, 0));
        // Upper bounds are exclusive
        assert!(!volume.get(6, 2, 0));
        assert!(!volume.get(3, 5, 0));
    }

    #[test]
    fn test_fill_rect_clips_to_bounds() {
        let mut volume = MaskVolume::zeros(8, 8, 1);
        volume.fill_rect(0, -3, -3, 4, 20);

        // Clipped to rows 0..8, cols 0..4
        assert_eq!(volume.layer_area(0), 32);
        assert!(volume.get(0, 0, 0));
        assert!(volume.get(7, 3, 0));
        assert!(!volume.get(0, 4, 0));
    }

    #[test]
    fn test_fill_rect_swapped_corners() {
        let mut volume = MaskVolume::zeros(10, 10, 1);
        volume.fill_rect(0, 5, 6, 2, 3);

        let mut reference = MaskVolume::zeros(10, 10, 1);
        reference.fill_rect(0, 2, 3, 5, 6);
        assert_eq!(volume, reference);
    }

    #[test]
    fn test_fill_rect_touches_only_its_layer() {
        let mut volume = MaskVolume::zeros(6, 6, 3);
        volume.fill_rect(1, 0, 0, 6, 6);

        assert!(volume.layer_is_empty(0));
        assert_eq!(volume.layer_area(1), 36);
        assert!(volume.layer_is_empty(2));
    }

    #[test]
    fn test_retain_layers() {
        let mut volume = MaskVolume::zeros(4, 4, 3);
        volume.set(1, 1, 0, true);
        volume.set(2, 2, 2, true);

        volume.retain_layers(|i| i != 1);
        assert_eq!(volume.layers(), 2);
        assert!(volume.get(1, 1, 0));
        assert!(volume.get(2, 2, 1));
    }
}
