//! Map metadata.

use glam::Vec2;

use super::{CasterError, DEFAULT_MAP_COLS, DEFAULT_MAP_ROWS, DEFAULT_TILE_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct MapInfo {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Edge length of one square tile in world units.
    pub tile_size: f32,
}

impl Default for MapInfo {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_COLS,
            height: DEFAULT_MAP_ROWS,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl MapInfo {
    pub fn new(width: u32, height: u32, tile_size: f32) -> Self {
        Self {
            width,
            height,
            tile_size,
        }
    }

    pub fn validate(&self) -> Result<(), CasterError> {
        if self.width == 0 || self.height == 0 {
            return Err(CasterError::InvalidMap(format!(
                "map must have at least one cell, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(CasterError::InvalidMap(format!(
                "tile size must be positive and finite, got {}",
                self.tile_size
            )));
        }
        Ok(())
    }

    /// Width of the map in world units.
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.width as f32 * self.tile_size
    }

    /// Height of the map in world units.
    #[inline]
    pub fn world_height(&self) -> f32 {
        self.height as f32 * self.tile_size
    }

    #[inline]
    pub fn world_center(&self) -> Vec2 {
        Vec2::new(0.5 * self.world_width(), 0.5 * self.world_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_demo_map() {
        let info = MapInfo::default();
        assert_eq!(info.world_width(), 960.0);
        assert_eq!(info.world_height(), 704.0);
        assert_eq!(info.world_center(), Vec2::new(480.0, 352.0));
    }

    #[test]
    fn rejects_degenerate_maps() {
        assert!(MapInfo::new(0, 3, 64.0).validate().is_err());
        assert!(MapInfo::new(3, 3, 0.0).validate().is_err());
        assert!(MapInfo::new(3, 3, f32::NAN).validate().is_err());
        assert!(MapInfo::new(3, 3, 64.0).validate().is_ok());
    }
}
