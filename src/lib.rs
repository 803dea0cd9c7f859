pub mod config;
pub mod grid;
pub mod loaders;
pub mod player;
pub mod raycast;
pub mod types;
pub mod visualization;

pub use config::{EngineConfig, PlayerConfig};
pub use grid::OccupancyGrid;
pub use loaders::world::{World, load_world, parse_world};
pub use player::{Intent, Player};
pub use raycast::{Ray, RayCaster, WallHit, cast_all};
pub use types::{CasterError, MapInfo};
