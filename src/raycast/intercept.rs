//! Horizontal and vertical grid-line searches.
//!
//! Each search starts at the first grid line the ray crosses in its facing
//! direction and marches one tile per step along that family of lines. The
//! probe sampled at each crossing is nudged half a tile back across the line
//! when the ray faces up (or left) so that floor division lands in the tile on
//! the far side of the line, whatever the tile size. The returned point is the crossing itself, without
//! the nudge.
//!
//! A ray parallel to a family of lines never crosses one: when `|sin|` (or
//! `|cos|`) falls below [`PARALLEL_EPSILON`] the corresponding search returns
//! `None` instead of dividing by a near-zero tangent.

use glam::Vec2;

use crate::grid::OccupancyGrid;
use crate::types::{Facing, PARALLEL_EPSILON};

/// Crossing of a horizontal grid line (`y = k * tile`) that hit a wall.
pub fn horizontal_hit(
    grid: &OccupancyGrid,
    origin: Vec2,
    angle: f32,
    facing: Facing,
) -> Option<Vec2> {
    let (sin, cos) = angle.sin_cos();
    if sin.abs() < PARALLEL_EPSILON {
        return None;
    }
    let cot = cos / sin;
    let tile = grid.tile_size();

    let mut y = (origin.y / tile).floor() * tile;
    if facing.down() {
        y += tile;
    }
    let x = origin.x + (y - origin.y) * cot;

    let y_step = if facing.up() { -tile } else { tile };
    let x_step = (tile * cot).abs();
    let x_step = if facing.left() { -x_step } else { x_step };

    let nudge = if facing.up() {
        Vec2::new(0.0, -0.5 * tile)
    } else {
        Vec2::ZERO
    };

    march(grid, Vec2::new(x, y), Vec2::new(x_step, y_step), nudge)
}

/// Crossing of a vertical grid line (`x = k * tile`) that hit a wall.
pub fn vertical_hit(grid: &OccupancyGrid, origin: Vec2, angle: f32, facing: Facing) -> Option<Vec2> {
    let (sin, cos) = angle.sin_cos();
    if cos.abs() < PARALLEL_EPSILON {
        return None;
    }
    let tan = sin / cos;
    let tile = grid.tile_size();

    let mut x = (origin.x / tile).floor() * tile;
    if facing.right() {
        x += tile;
    }
    let y = origin.y + (x - origin.x) * tan;

    let x_step = if facing.left() { -tile } else { tile };
    let y_step = (tile * tan).abs();
    let y_step = if facing.up() { -y_step } else { y_step };

    let nudge = if facing.left() {
        Vec2::new(-0.5 * tile, 0.0)
    } else {
        Vec2::ZERO
    };

    march(grid, Vec2::new(x, y), Vec2::new(x_step, y_step), nudge)
}

/// Walk crossings until one probes a wall or the crossing leaves the world.
///
/// One axis of `step` is a whole tile, so the loop runs at most
/// `max(width, height) + 1` times.
fn march(grid: &OccupancyGrid, start: Vec2, step: Vec2, nudge: Vec2) -> Option<Vec2> {
    let mut point = start;
    while grid.contains(point) {
        if grid.is_solid_or_out_of_bounds(point + nudge) {
            return Some(point);
        }
        point += step;
    }
    None
}
