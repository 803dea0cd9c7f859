pub mod occupancy;

pub use occupancy::{OccupancyGrid, walled_room};
