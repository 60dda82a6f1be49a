//! Dense per-tile light intensity grid.
//!
//! Stored row-major (`y * width + x`). During a lighting pass the only write
//! path is [`LightMap::raise`], which max-combines, so a cell never gets darker
//! until the next [`LightMap::reset`].

/// Per-tile light intensity in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct LightMap {
    width: usize,
    height: usize,
    baseline: f32,
    data: Vec<f32>,
}

impl LightMap {
    /// Creates a map with every cell at `baseline`.
    pub fn new(width: usize, height: usize, baseline: f32) -> Self {
        Self {
            width,
            height,
            baseline,
            data: vec![baseline; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Value every cell holds after a reset.
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Intensity at `(x, y)`, `None` outside the map.
    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        if self.in_bounds(x, y) {
            Some(self.data[self.index(x as usize, y as usize)])
        } else {
            None
        }
    }

    /// Intensity at an in-bounds cell.
    #[inline]
    pub fn value(&self, x: usize, y: usize) -> f32 {
        self.data[self.index(x, y)]
    }

    /// Max-combines `value` into `(x, y)`. Returns `true` if the cell got brighter.
    #[inline]
    pub fn raise(&mut self, x: usize, y: usize, value: f32) -> bool {
        let idx = self.index(x, y);
        if value > self.data[idx] {
            self.data[idx] = value;
            true
        } else {
            false
        }
    }

    /// Overwrites `(x, y)` regardless of its current value.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Sets every cell back to the baseline.
    pub fn reset(&mut self) {
        self.data.fill(self.baseline);
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Number of cells brighter than the baseline.
    pub fn lit_count(&self) -> usize {
        self.data.iter().filter(|&&v| v > self.baseline).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_baseline() {
        let map = LightMap::new(3, 2, 0.01);
        assert_eq!(map.as_slice().len(), 6);
        assert!(map.as_slice().iter().all(|&v| v == 0.01));
        assert_eq!(map.lit_count(), 0);
    }

    #[test]
    fn test_raise_never_lowers() {
        let mut map = LightMap::new(2, 2, 0.01);
        assert!(map.raise(1, 1, 0.5));
        assert!(!map.raise(1, 1, 0.3));
        assert!(!map.raise(1, 1, 0.5));
        assert_eq!(map.value(1, 1), 0.5);
        assert!(!map.raise(0, 0, 0.0));
        assert_eq!(map.value(0, 0), 0.01);
    }

    #[test]
    fn test_get_is_bounds_checked() {
        let map = LightMap::new(2, 3, 0.2);
        assert_eq!(map.get(1, 2), Some(0.2));
        assert_eq!(map.get(2, 0), None);
        assert_eq!(map.get(0, -1), None);
    }

    #[test]
    fn test_row_major_layout() {
        let mut map = LightMap::new(3, 2, 0.0);
        map.raise(2, 1, 1.0);
        assert_eq!(map.as_slice()[5], 1.0);
    }

    #[test]
    fn test_reset_restores_baseline() {
        let mut map = LightMap::new(2, 2, 0.01);
        map.raise(0, 1, 0.9);
        map.reset();
        assert_eq!(map.value(0, 1), 0.01);
    }

    #[test]
    fn test_set_can_darken() {
        let mut map = LightMap::new(2, 2, 0.01);
        map.set(1, 0, 0.0);
        assert_eq!(map.value(1, 0), 0.0);
        assert_eq!(map.value(0, 0), 0.01);
    }
}
