//! Player kinematics and point collision against the tile grid.

use glam::Vec2;
use log::{debug, trace};

use crate::config::PlayerConfig;
use crate::grid::OccupancyGrid;
use crate::types::{CasterError, DEFAULT_HEADING};

/// Walk or turn intent set by the input binding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Negative,
    #[default]
    Idle,
    Positive,
}

impl Intent {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Self::Negative => -1.0,
            Self::Idle => 0.0,
            Self::Positive => 1.0,
        }
    }
}

impl From<i8> for Intent {
    /// Any negative value maps to `Negative`, any positive one to `Positive`.
    fn from(value: i8) -> Self {
        match value.signum() {
            -1 => Self::Negative,
            1 => Self::Positive,
            _ => Self::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2,
    /// Radians, not normalized. Accumulates freely as the player turns.
    pub heading: f32,
    pub move_speed: f32,
    pub turn_speed: f32,
    pub radius: f32,
    /// Forward (`Positive`) or backward (`Negative`) along the heading.
    pub walk: Intent,
    /// Clockwise on screen (`Positive`) or counter-clockwise (`Negative`).
    pub turn: Intent,
}

impl Player {
    /// Place a player without checking the grid. Use [`Player::spawn`] or
    /// [`Player::spawn_at`] to enforce the open-space invariant.
    pub fn new(position: Vec2, heading: f32, config: &PlayerConfig) -> Self {
        Self {
            position,
            heading,
            move_speed: config.move_speed,
            turn_speed: config.turn_speed,
            radius: config.radius,
            walk: Intent::Idle,
            turn: Intent::Idle,
        }
    }

    /// Spawn at the centre of the world facing down the screen.
    pub fn spawn(grid: &OccupancyGrid, config: &PlayerConfig) -> Result<Self, CasterError> {
        Self::spawn_at(grid, grid.info().world_center(), DEFAULT_HEADING, config)
    }

    pub fn spawn_at(
        grid: &OccupancyGrid,
        position: Vec2,
        heading: f32,
        config: &PlayerConfig,
    ) -> Result<Self, CasterError> {
        config.validate()?;
        if grid.is_solid_or_out_of_bounds(position) {
            return Err(CasterError::SpawnBlocked {
                x: position.x,
                y: position.y,
            });
        }
        debug!("spawned player at {position} heading {heading}");
        Ok(Self::new(position, heading, config))
    }

    /// Unit vector along the current heading.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// Advance one frame.
    ///
    /// Rotation always applies. The translation is taken along the new
    /// heading and dropped entirely if the destination point is solid or off
    /// the map.
    pub fn update(&mut self, grid: &OccupancyGrid) {
        self.heading += self.turn.sign() * self.turn_speed;

        let step = self.walk.sign() * self.move_speed;
        if step == 0.0 {
            return;
        }

        let next = self.position + self.direction() * step;
        if grid.is_solid_or_out_of_bounds(next) {
            trace!("move to {next} blocked");
            return;
        }
        self.position = next;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::grid::walled_room;

    fn room() -> OccupancyGrid {
        walled_room(3, 64.0).expect("room should build")
    }

    #[test]
    fn intent_from_input_values() {
        assert_eq!(Intent::from(-1), Intent::Negative);
        assert_eq!(Intent::from(0), Intent::Idle);
        assert_eq!(Intent::from(1), Intent::Positive);
        assert_eq!(Intent::from(5), Intent::Positive);
    }

    #[test]
    fn spawn_defaults_to_world_centre() {
        let grid = room();
        let player = Player::spawn(&grid, &PlayerConfig::default()).unwrap();
        assert_eq!(player.position, Vec2::new(160.0, 160.0));
        assert_eq!(player.heading, FRAC_PI_2);
    }

    #[test]
    fn spawn_inside_wall_fails() {
        let grid = room();
        let err = Player::spawn_at(&grid, Vec2::new(10.0, 10.0), 0.0, &PlayerConfig::default());
        assert!(matches!(err, Err(CasterError::SpawnBlocked { .. })));
    }

    #[test]
    fn walks_along_new_heading() {
        let grid = room();
        let config = PlayerConfig {
            move_speed: 10.0,
            turn_speed: FRAC_PI_2,
            radius: 3.0,
        };
        let mut player = Player::spawn_at(&grid, Vec2::new(160.0, 160.0), 0.0, &config).unwrap();
        player.walk = Intent::Positive;
        player.turn = Intent::Positive;
        player.update(&grid);

        assert_eq!(player.heading, FRAC_PI_2);
        assert!((player.position.x - 160.0).abs() < 1e-4);
        assert!((player.position.y - 170.0).abs() < 1e-4);
    }

    #[test]
    fn backward_walk() {
        let grid = room();
        let config = PlayerConfig {
            move_speed: 10.0,
            ..Default::default()
        };
        let mut player = Player::spawn_at(&grid, Vec2::new(160.0, 160.0), 0.0, &config).unwrap();
        player.walk = Intent::Negative;
        player.update(&grid);
        assert!((player.position.x - 150.0).abs() < 1e-4);
    }

    #[test]
    fn blocked_move_keeps_position_but_turns() {
        let grid = room();
        let config = PlayerConfig {
            move_speed: 200.0,
            turn_speed: 0.1,
            radius: 3.0,
        };
        let mut player = Player::spawn_at(&grid, Vec2::new(160.0, 160.0), 0.0, &config).unwrap();
        player.walk = Intent::Positive;
        player.turn = Intent::Negative;
        player.update(&grid);

        assert_eq!(player.position, Vec2::new(160.0, 160.0));
        assert!((player.heading + 0.1).abs() < 1e-6);
    }

    #[test]
    fn heading_is_not_normalized() {
        let grid = room();
        let config = PlayerConfig {
            move_speed: 0.0,
            turn_speed: PI,
            radius: 3.0,
        };
        let mut player = Player::spawn_at(&grid, Vec2::new(160.0, 160.0), 0.0, &config).unwrap();
        player.turn = Intent::Positive;
        for _ in 0..3 {
            player.update(&grid);
        }
        assert!((player.heading - 3.0 * PI).abs() < 1e-5);
    }

    #[test]
    fn never_enters_walls() {
        let grid = room();
        let config = PlayerConfig {
            move_speed: 7.0,
            turn_speed: 0.37,
            radius: 3.0,
        };
        let mut player = Player::spawn(&grid, &config).unwrap();
        player.walk = Intent::Positive;
        for frame in 0..500 {
            player.turn = if frame % 7 == 0 {
                Intent::Positive
            } else {
                Intent::Idle
            };
            player.update(&grid);
            assert!(!grid.is_solid_or_out_of_bounds(player.position));
        }
    }
}
