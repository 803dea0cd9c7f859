//! Projection-plane math consumed by the wall-strip renderer.

/// Distance from the eye to a projection plane `screen_width` pixels wide
/// that exactly spans the field of view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPlane {
    pub distance: f32,
}

impl ProjectionPlane {
    pub fn new(screen_width: f32, fov: f32) -> Self {
        Self {
            distance: (0.5 * screen_width) / (0.5 * fov).tan(),
        }
    }

    /// Projected height of a wall `tile_size` tall seen at `distance`.
    pub fn strip_height(&self, distance: f32, tile_size: f32) -> f32 {
        if !(distance > 0.0) || distance.is_infinite() {
            return 0.0;
        }
        tile_size / distance * self.distance
    }
}
