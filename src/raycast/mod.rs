use glam::Vec2;

use crate::grid::OccupancyGrid;
use crate::types::{Facing, normalize_angle};

pub mod caster;
pub mod intercept;
pub mod projection;

pub use caster::{RayCaster, cast_all};
pub use projection::ProjectionPlane;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WallHit {
    /// Point where the ray crosses the wall's grid line (world units).
    pub point: Vec2,
    /// Euclidean distance from the ray origin to `point`.
    pub distance: f32,
    /// The hit came from the vertical-line search, i.e. an east or west wall face.
    pub vertical: bool,
}

/// One viewing direction and, once cast, its nearest wall hit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    /// Normalized into `[0, 2π)`.
    pub angle: f32,
    pub facing: Facing,
    pub hit: Option<WallHit>,
}

impl Ray {
    pub fn new(angle: f32) -> Self {
        let angle = normalize_angle(angle);
        Self {
            angle,
            facing: Facing::from_normalized(angle),
            hit: None,
        }
    }

    /// Run both grid-line searches from `origin` and keep the nearer hit.
    ///
    /// Ties go to the vertical search. If neither search meets a wall before
    /// leaving the world the ray keeps `hit = None`.
    #[must_use]
    pub fn cast(mut self, origin: Vec2, grid: &OccupancyGrid) -> Self {
        let horizontal = intercept::horizontal_hit(grid, origin, self.angle, self.facing);
        let vertical = intercept::vertical_hit(grid, origin, self.angle, self.facing);
        self.hit = nearest_hit(origin, horizontal, vertical);
        self
    }

    /// Distance to the wall, or infinity when nothing was hit.
    pub fn distance(&self) -> f32 {
        self.hit.map_or(f32::INFINITY, |hit| hit.distance)
    }

    pub fn was_hit_vertical(&self) -> bool {
        self.hit.is_some_and(|hit| hit.vertical)
    }

    pub fn wall_hit(&self) -> Option<Vec2> {
        self.hit.map(|hit| hit.point)
    }

    /// Distance projected onto the view direction, removing fish-eye
    /// distortion for columns away from the centre of the screen.
    pub fn corrected_distance(&self, heading: f32) -> f32 {
        self.distance() * (self.angle - heading).cos()
    }

    /// On-screen height of this ray's wall strip. Zero when nothing was hit.
    pub fn wall_strip_height(&self, plane: &ProjectionPlane, tile_size: f32) -> f32 {
        plane.strip_height(self.distance(), tile_size)
    }
}

/// Pick the crossing closer to `origin`. The vertical crossing wins a tie.
fn nearest_hit(
    origin: Vec2,
    horizontal: Option<Vec2>,
    vertical: Option<Vec2>,
) -> Option<WallHit> {
    let horizontal_distance = horizontal.map_or(f32::INFINITY, |p| origin.distance(p));
    let vertical_distance = vertical.map_or(f32::INFINITY, |p| origin.distance(p));

    if horizontal_distance >= vertical_distance {
        vertical.map(|point| WallHit {
            point,
            distance: vertical_distance,
            vertical: true,
        })
    } else {
        horizontal.map(|point| WallHit {
            point,
            distance: horizontal_distance,
            vertical: false,
        })
    }
}
