use std::f32::consts::FRAC_PI_2;

pub const OPEN: u8 = 0;
pub const SOLID: u8 = 1;

pub const DEFAULT_TILE_SIZE: f32 = 64.0;
pub const DEFAULT_MAP_ROWS: u32 = 11;
pub const DEFAULT_MAP_COLS: u32 = 15;

pub const DEFAULT_FOV_DEGREES: f32 = 60.0;
pub const DEFAULT_WALL_STRIP_WIDTH: u32 = 1;
pub const DEFAULT_MINIMAP_SCALE: f32 = 0.2;

pub const DEFAULT_MOVE_SPEED: f32 = 2.0;
pub const DEFAULT_TURN_SPEED_DEGREES: f32 = 2.0;
pub const DEFAULT_PLAYER_RADIUS: f32 = 3.0;
pub const DEFAULT_HEADING: f32 = FRAC_PI_2;

/// Below this magnitude a ray is treated as parallel to a family of grid lines
/// (`sin` for horizontal lines, `cos` for vertical ones) and that search is skipped.
/// On maps wider than `tile_size / PARALLEL_EPSILON` world units a skipped search
/// could have reached a real crossing; the other search still reports its hit.
pub const PARALLEL_EPSILON: f32 = 1e-6;
