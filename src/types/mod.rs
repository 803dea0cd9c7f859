pub mod constants;
pub mod error;
pub mod geometry;
pub mod info;

pub use constants::*;
pub use error::CasterError;
pub use geometry::{Facing, normalize_angle};
pub use info::MapInfo;
