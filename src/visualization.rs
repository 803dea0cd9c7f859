use glam::Vec2;
use image::{Rgba, RgbaImage};

use crate::OccupancyGrid;
use crate::player::Player;
use crate::raycast::Ray;

const SOLID_COLOR: Rgba<u8> = Rgba([0x22, 0x22, 0x22, 255]);
const OPEN_COLOR: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 255]);
const OUTLINE_COLOR: Rgba<u8> = Rgba([0x22, 0x22, 0x22, 255]);
const PLAYER_COLOR: Rgba<u8> = Rgba([0, 0, 255, 255]);
const RAY_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);
const RAY_ALPHA: f32 = 0.3;

/// Draw the top-down view: tiles, one translucent line per ray from the
/// player to its wall hit, and the player as a disk.
///
/// The image covers the whole world scaled by `scale`. Rays that hit nothing
/// are skipped.
pub fn render_minimap(grid: &OccupancyGrid, player: &Player, rays: &[Ray], scale: f32) -> RgbaImage {
    let info = grid.info();
    let width = (info.world_width() * scale).ceil().max(1.0) as u32;
    let height = (info.world_height() * scale).ceil().max(1.0) as u32;
    let mut img = RgbaImage::new(width, height);

    let tile = info.tile_size * scale;
    for (cell, solid) in grid.cells() {
        let min = cell.as_vec2() * tile;
        let fill = if solid { SOLID_COLOR } else { OPEN_COLOR };
        fill_rect(&mut img, min, min + Vec2::splat(tile), fill);
    }

    let origin = player.position * scale;
    for ray in rays {
        if let Some(hit) = ray.wall_hit() {
            draw_line(&mut img, origin, hit * scale, RAY_COLOR, RAY_ALPHA);
        }
    }

    fill_disk(&mut img, origin, player.radius * scale, PLAYER_COLOR);
    img
}

/// Fill `[min, max)` and stroke its top and left edges so neighbouring tiles
/// share a one pixel outline.
fn fill_rect(img: &mut RgbaImage, min: Vec2, max: Vec2, color: Rgba<u8>) {
    let (x0, y0) = (min.x.floor() as u32, min.y.floor() as u32);
    let x1 = (max.x.floor() as u32).min(img.width());
    let y1 = (max.y.floor() as u32).min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            let edge = x == x0 || y == y0;
            img.put_pixel(x, y, if edge { OUTLINE_COLOR } else { color });
        }
    }
}

fn fill_disk(img: &mut RgbaImage, center: Vec2, radius: f32, color: Rgba<u8>) {
    let radius = radius.max(0.5);
    let min = (center - Vec2::splat(radius)).floor().max(Vec2::ZERO);
    let max = (center + Vec2::splat(radius)).ceil();
    for y in min.y as u32..(max.y as u32).min(img.height()) {
        for x in min.x as u32..(max.x as u32).min(img.width()) {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if p.distance_squared(center) <= radius * radius {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Sample the segment once per pixel of length and alpha-blend each sample.
fn draw_line(img: &mut RgbaImage, from: Vec2, to: Vec2, color: Rgba<u8>, alpha: f32) {
    let samples = from.distance(to).ceil().max(1.0) as u32;
    let mut last = None;
    for s in 0..=samples {
        let p = from.lerp(to, s as f32 / samples as f32).floor();
        if p.x < 0.0 || p.y < 0.0 {
            continue;
        }
        let (x, y) = (p.x as u32, p.y as u32);
        if x >= img.width() || y >= img.height() || last == Some((x, y)) {
            continue;
        }
        last = Some((x, y));
        let base = img.get_pixel(x, y).0;
        img.put_pixel(x, y, blend(base, color.0, alpha));
    }
}

fn blend(base: [u8; 4], top: [u8; 4], alpha: f32) -> Rgba<u8> {
    let mix = |b: u8, t: u8| (b as f32 + (t as f32 - b as f32) * alpha).round() as u8;
    Rgba([
        mix(base[0], top[0]),
        mix(base[1], top[1]),
        mix(base[2], top[2]),
        255,
    ])
}
