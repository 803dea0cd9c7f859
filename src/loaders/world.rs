use std::path::Path;

use glam::Vec2;
use log::debug;
use serde::Deserialize;

use crate::config::{EngineConfig, PlayerConfig};
use crate::grid::OccupancyGrid;
use crate::player::Player;
use crate::types::{
    CasterError, DEFAULT_FOV_DEGREES, DEFAULT_HEADING, DEFAULT_MINIMAP_SCALE, DEFAULT_MOVE_SPEED,
    DEFAULT_PLAYER_RADIUS, DEFAULT_TILE_SIZE, DEFAULT_TURN_SPEED_DEGREES,
    DEFAULT_WALL_STRIP_WIDTH,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WorldDocument {
    #[serde(
        default = "default_tile_size",
        deserialize_with = "deserialize_positive"
    )]
    tile_size: f32,
    grid: Vec<Vec<u8>>,
    #[serde(default)]
    engine: EngineSection,
    #[serde(default)]
    spawn: Option<SpawnSection>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct EngineSection {
    fov_degrees: f32,
    wall_strip_width: u32,
    ray_count: Option<usize>,
    minimap_scale: f32,
    player: PlayerSection,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            wall_strip_width: DEFAULT_WALL_STRIP_WIDTH,
            ray_count: None,
            minimap_scale: DEFAULT_MINIMAP_SCALE,
            player: PlayerSection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PlayerSection {
    move_speed: f32,
    turn_speed_degrees: f32,
    radius: f32,
}

impl Default for PlayerSection {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            turn_speed_degrees: DEFAULT_TURN_SPEED_DEGREES,
            radius: DEFAULT_PLAYER_RADIUS,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpawnSection {
    x: f32,
    y: f32,
    #[serde(default = "default_heading_degrees")]
    heading_degrees: f32,
}

fn default_tile_size() -> f32 {
    DEFAULT_TILE_SIZE
}

fn default_heading_degrees() -> f32 {
    DEFAULT_HEADING.to_degrees()
}

fn deserialize_positive<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f32::deserialize(deserializer)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom("tile_size must be positive"))
    }
}

impl From<EngineSection> for EngineConfig {
    fn from(section: EngineSection) -> Self {
        Self {
            fov: section.fov_degrees.to_radians(),
            wall_strip_width: section.wall_strip_width,
            ray_count: section.ray_count,
            player: PlayerConfig {
                move_speed: section.player.move_speed,
                turn_speed: section.player.turn_speed_degrees.to_radians(),
                radius: section.player.radius,
            },
            minimap_scale: section.minimap_scale,
        }
    }
}

/// Map, tunables and optional spawn pose read from one YAML document.
#[derive(Debug, Clone)]
pub struct World {
    pub grid: OccupancyGrid,
    pub config: EngineConfig,
    /// Explicit spawn position and heading (radians). `None` spawns at the
    /// world centre.
    pub spawn: Option<(Vec2, f32)>,
}

impl World {
    /// The built-in demo level with default tunables.
    pub fn demo() -> Self {
        Self {
            grid: OccupancyGrid::demo(),
            config: EngineConfig::default(),
            spawn: None,
        }
    }

    pub fn spawn_player(&self) -> Result<Player, CasterError> {
        match self.spawn {
            Some((position, heading)) => {
                Player::spawn_at(&self.grid, position, heading, &self.config.player)
            }
            None => Player::spawn(&self.grid, &self.config.player),
        }
    }
}

/// Parse a world document.
///
/// ```yaml
/// tile_size: 64
/// grid:
///   - [1, 1, 1]
///   - [1, 0, 1]
///   - [1, 1, 1]
/// engine:
///   fov_degrees: 60
///   player: { move_speed: 2.0 }
/// spawn: { x: 96, y: 96, heading_degrees: 0 }
/// ```
pub fn parse_world(yaml: &str) -> Result<World, CasterError> {
    let document: WorldDocument = serde_yaml::from_str(yaml)?;

    let grid = OccupancyGrid::from_rows(document.tile_size, &document.grid)?;
    let config = EngineConfig::from(document.engine);
    config.validate()?;

    let spawn = document
        .spawn
        .map(|s| (Vec2::new(s.x, s.y), s.heading_degrees.to_radians()));

    debug!(
        "parsed {}x{} world, fov {:.3} rad",
        grid.width(),
        grid.height(),
        config.fov
    );
    Ok(World {
        grid,
        config,
        spawn,
    })
}

pub fn load_world(yaml_path: impl AsRef<Path>) -> Result<World, CasterError> {
    let yaml_path = yaml_path.as_ref();
    let yaml_str = std::fs::read_to_string(yaml_path)?;
    let world = parse_world(&yaml_str)?;
    debug!("loaded world from {}", yaml_path.display());
    Ok(world)
}
