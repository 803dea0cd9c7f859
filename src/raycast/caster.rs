//! Per-frame ray fan.

use crate::config::EngineConfig;
use crate::grid::OccupancyGrid;
use crate::player::Player;
use crate::raycast::Ray;
use crate::types::CasterError;

/// Cast `ray_count` rays spread over `fov`, starting at `heading - fov / 2`.
///
/// Ray `i` is cast at `start + i * fov / ray_count`, so the output runs left to
/// right across the screen.
pub fn cast_all(player: &Player, grid: &OccupancyGrid, fov: f32, ray_count: usize) -> Vec<Ray> {
    let start = player.heading - 0.5 * fov;
    let step = fov / ray_count as f32;
    (0..ray_count)
        .map(|i| Ray::new(start + i as f32 * step).cast(player.position, grid))
        .collect()
}

/// Same output as [`cast_all`], with columns cast on the rayon pool.
#[cfg(feature = "parallel")]
pub fn cast_all_par(
    player: &Player,
    grid: &OccupancyGrid,
    fov: f32,
    ray_count: usize,
) -> Vec<Ray> {
    use rayon::prelude::*;

    let start = player.heading - 0.5 * fov;
    let step = fov / ray_count as f32;
    (0..ray_count)
        .into_par_iter()
        .map(|i| Ray::new(start + i as f32 * step).cast(player.position, grid))
        .collect()
}

#[cfg(feature = "parallel")]
use self::cast_all_par as fan_out;
#[cfg(not(feature = "parallel"))]
use self::cast_all as fan_out;

/// Fan settings fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCaster {
    pub fov: f32,
    pub ray_count: usize,
}

impl RayCaster {
    pub fn new(fov: f32, ray_count: usize) -> Result<Self, CasterError> {
        let config = EngineConfig {
            fov,
            ray_count: Some(ray_count),
            ..Default::default()
        };
        config.validate()?;
        Ok(Self { fov, ray_count })
    }

    /// Derive the fan for a grid: one ray per wall strip unless the config
    /// pins an explicit count.
    pub fn from_config(config: &EngineConfig, grid: &OccupancyGrid) -> Result<Self, CasterError> {
        config.validate()?;
        Ok(Self {
            fov: config.fov,
            ray_count: config.ray_count_for(grid.info().world_width()),
        })
    }

    pub fn cast(&self, player: &Player, grid: &OccupancyGrid) -> Vec<Ray> {
        fan_out(player, grid, self.fov, self.ray_count)
    }
}
