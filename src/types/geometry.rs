//! Angle helpers shared by the player and the ray searches.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Wrap an angle in radians into `[0, 2π)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `TAU`, which is
/// folded back to zero so the half-open range always holds.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Screen-space facing of a ray. The y axis points down, so angles in `(0, π)`
/// face down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facing {
    down: bool,
    right: bool,
}

impl Facing {
    /// Expects an angle already normalized into `[0, 2π)`.
    pub fn from_normalized(angle: f32) -> Self {
        Self {
            down: angle > 0.0 && angle < PI,
            right: angle < FRAC_PI_2 || angle > 3.0 * FRAC_PI_2,
        }
    }

    #[inline]
    pub fn down(&self) -> bool {
        self.down
    }

    #[inline]
    pub fn up(&self) -> bool {
        !self.down
    }

    #[inline]
    pub fn right(&self) -> bool {
        self.right
    }

    #[inline]
    pub fn left(&self) -> bool {
        !self.right
    }
}
