//! Engine tunables.
//!
//! Angles are stored in radians. The YAML world format (see
//! [`crate::loaders::world`]) writes them in degrees.

use std::f32::consts::TAU;

use crate::types::{
    CasterError, DEFAULT_FOV_DEGREES, DEFAULT_MINIMAP_SCALE, DEFAULT_MOVE_SPEED,
    DEFAULT_PLAYER_RADIUS, DEFAULT_TURN_SPEED_DEGREES, DEFAULT_WALL_STRIP_WIDTH,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    /// World units travelled per update at full walk intent.
    pub move_speed: f32,
    /// Radians turned per update at full turn intent.
    pub turn_speed: f32,
    /// Render-only radius. Collision treats the player as a point.
    pub radius: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            turn_speed: DEFAULT_TURN_SPEED_DEGREES.to_radians(),
            radius: DEFAULT_PLAYER_RADIUS,
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), CasterError> {
        for (name, value) in [
            ("move_speed", self.move_speed),
            ("turn_speed", self.turn_speed),
            ("radius", self.radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CasterError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Total angular span of the ray fan.
    pub fov: f32,
    /// Screen columns covered by one ray.
    pub wall_strip_width: u32,
    /// Explicit ray count. When unset, one ray is cast per wall strip.
    pub ray_count: Option<usize>,
    pub player: PlayerConfig,
    pub minimap_scale: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV_DEGREES.to_radians(),
            wall_strip_width: DEFAULT_WALL_STRIP_WIDTH,
            ray_count: None,
            player: PlayerConfig::default(),
            minimap_scale: DEFAULT_MINIMAP_SCALE,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), CasterError> {
        if !(self.fov > 0.0 && self.fov < TAU) {
            return Err(CasterError::InvalidConfig(format!(
                "fov must be in (0, 2pi) radians, got {}",
                self.fov
            )));
        }
        if self.wall_strip_width == 0 {
            return Err(CasterError::InvalidConfig(
                "wall_strip_width must be at least 1".to_string(),
            ));
        }
        if self.ray_count == Some(0) {
            return Err(CasterError::InvalidConfig(
                "ray_count must be at least 1".to_string(),
            ));
        }
        if !self.minimap_scale.is_finite() || self.minimap_scale <= 0.0 {
            return Err(CasterError::InvalidConfig(format!(
                "minimap_scale must be positive, got {}",
                self.minimap_scale
            )));
        }
        self.player.validate()
    }

    /// Number of rays to cast for a view `world_width` units wide.
    pub fn ray_count_for(&self, world_width: f32) -> usize {
        match self.ray_count {
            Some(count) => count,
            None => ((world_width / self.wall_strip_width.max(1) as f32) as usize).max(1),
        }
    }
}
