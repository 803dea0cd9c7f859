use glam::{UVec2, Vec2};
use log::debug;

use crate::types::{CasterError, MapInfo, OPEN, SOLID};

const DEMO_ROWS: [[u8; 15]; 11] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Fixed tile map. Row 0 is the top of the world; `y` grows downward.
///
/// A cell value of [`OPEN`] is floor; any other value is a wall.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    info: MapInfo,
    data: Vec<u8>,
}

impl OccupancyGrid {
    pub fn new(info: MapInfo, data: Vec<u8>) -> Result<Self, CasterError> {
        info.validate()?;
        let expected_len = (info.width as usize) * (info.height as usize);
        if data.len() != expected_len {
            return Err(CasterError::InvalidMap(format!(
                "data length {} does not match map size {}",
                data.len(),
                expected_len
            )));
        }

        Ok(Self { info, data })
    }

    /// Build a grid from a row-major matrix, first row at the top.
    pub fn from_rows<R>(tile_size: f32, rows: &[R]) -> Result<Self, CasterError>
    where
        R: AsRef<[u8]>,
    {
        let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(CasterError::InvalidMap(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            data.extend_from_slice(row);
        }

        let info = MapInfo::new(width as u32, rows.len() as u32, tile_size);
        let grid = Self::new(info, data)?;
        debug!(
            "built {}x{} grid with tile size {}",
            grid.width(),
            grid.height(),
            tile_size
        );
        Ok(grid)
    }

    /// The 15x11 walled demo level with 64 unit tiles.
    pub fn demo() -> Self {
        let info = MapInfo::default();
        let data = DEMO_ROWS.iter().flatten().copied().collect();
        Self { info, data }
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    pub fn tile_size(&self) -> f32 {
        self.info.tile_size
    }

    pub fn get(&self, cell: UVec2) -> Option<u8> {
        if cell.x >= self.info.width || cell.y >= self.info.height {
            return None;
        }
        Some(self.data[self.index(cell)])
    }

    /// Cells outside the map count as solid.
    pub fn is_solid_cell(&self, cell: UVec2) -> bool {
        self.get(cell).is_none_or(|value| value != OPEN)
    }

    /// True when `p` lies in the closed world rectangle `[0, w] x [0, h]`.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.info.world_width()).contains(&p.x)
            && (0.0..=self.info.world_height()).contains(&p.y)
    }

    /// Cell containing a world point, if any. Points on the far edges of the
    /// world rectangle belong to no cell.
    pub fn world_to_cell(&self, p: Vec2) -> Option<UVec2> {
        if !self.contains(p) {
            return None;
        }
        let cell = (p / self.info.tile_size).floor();
        let cell = UVec2::new(cell.x as u32, cell.y as u32);
        (cell.x < self.info.width && cell.y < self.info.height).then_some(cell)
    }

    /// Collision predicate shared by player movement and both ray searches.
    ///
    /// Points outside the world rectangle (including NaN coordinates) and
    /// points on its far edge are reported as solid.
    pub fn is_solid_or_out_of_bounds(&self, p: Vec2) -> bool {
        match self.world_to_cell(p) {
            Some(cell) => self.is_solid_cell(cell),
            None => true,
        }
    }

    /// Iterate `(cell, solid)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (UVec2, bool)> + '_ {
        let width = self.info.width;
        self.data.iter().enumerate().map(move |(i, value)| {
            let i = i as u32;
            (UVec2::new(i % width, i / width), *value != OPEN)
        })
    }

    fn index(&self, cell: UVec2) -> usize {
        (cell.y as usize) * (self.info.width as usize) + (cell.x as usize)
    }
}

/// Square room of `interior` open cells per side inside a one-tile solid border.
pub fn walled_room(interior: u32, tile_size: f32) -> Result<OccupancyGrid, CasterError> {
    let side = interior + 2;
    let mut data = vec![OPEN; (side * side) as usize];
    for y in 0..side {
        for x in 0..side {
            if x == 0 || y == 0 || x == side - 1 || y == side - 1 {
                data[(y * side + x) as usize] = SOLID;
            }
        }
    }
    OccupancyGrid::new(MapInfo::new(side, side, tile_size), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> OccupancyGrid {
        walled_room(3, 64.0).expect("room should build")
    }

    #[test]
    fn demo_layout() {
        let grid = OccupancyGrid::demo();
        assert_eq!(grid.width(), 15);
        assert_eq!(grid.height(), 11);
        assert_eq!(grid.get(UVec2::new(0, 0)), Some(SOLID));
        assert_eq!(grid.get(UVec2::new(1, 1)), Some(OPEN));
        assert_eq!(grid.get(UVec2::new(5, 2)), Some(SOLID));
        assert_eq!(grid.get(UVec2::new(15, 0)), None);
    }

    #[test]
    fn from_rows_rejects_ragged_and_empty() {
        let ragged: [&[u8]; 2] = [&[1, 1], &[1]];
        assert!(matches!(
            OccupancyGrid::from_rows(64.0, &ragged),
            Err(CasterError::InvalidMap(_))
        ));

        let empty: [[u8; 0]; 0] = [];
        assert!(OccupancyGrid::from_rows(64.0, &empty).is_err());

        assert!(OccupancyGrid::from_rows(0.0, &[[0u8]]).is_err());
    }

    #[test]
    fn new_rejects_length_mismatch() {
        let err = OccupancyGrid::new(MapInfo::new(2, 2, 1.0), vec![0; 3]);
        assert!(matches!(err, Err(CasterError::InvalidMap(_))));
    }

    #[test]
    fn out_of_bounds_points_are_solid() {
        let grid = room();
        for p in [
            Vec2::new(-0.1, 100.0),
            Vec2::new(100.0, -0.1),
            Vec2::new(320.1, 100.0),
            Vec2::new(100.0, 320.1),
            Vec2::new(f32::NAN, 100.0),
        ] {
            assert!(grid.is_solid_or_out_of_bounds(p), "{p:?}");
        }
    }

    #[test]
    fn tiles_map_by_floor_division() {
        let grid = room();
        // Border tile.
        assert!(grid.is_solid_or_out_of_bounds(Vec2::new(10.0, 10.0)));
        assert!(grid.is_solid_or_out_of_bounds(Vec2::new(63.9, 200.0)));
        // Interior tiles.
        assert!(!grid.is_solid_or_out_of_bounds(Vec2::new(64.0, 64.0)));
        assert!(!grid.is_solid_or_out_of_bounds(Vec2::new(160.0, 160.0)));
        assert!(!grid.is_solid_or_out_of_bounds(Vec2::new(255.9, 255.9)));
        // East border.
        assert!(grid.is_solid_or_out_of_bounds(Vec2::new(256.0, 160.0)));
    }

    #[test]
    fn far_edge_belongs_to_no_cell() {
        let grid = OccupancyGrid::from_rows(10.0, &[[0u8, 0], [0, 0]]).unwrap();
        assert!(grid.contains(Vec2::new(20.0, 5.0)));
        assert_eq!(grid.world_to_cell(Vec2::new(20.0, 5.0)), None);
        assert!(grid.is_solid_or_out_of_bounds(Vec2::new(20.0, 5.0)));
        assert!(!grid.is_solid_or_out_of_bounds(Vec2::new(19.9, 5.0)));
    }

    #[test]
    fn cells_iterates_row_major() {
        let grid = OccupancyGrid::from_rows(1.0, &[[1u8, 0], [0, 7]]).unwrap();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                (UVec2::new(0, 0), true),
                (UVec2::new(1, 0), false),
                (UVec2::new(0, 1), false),
                (UVec2::new(1, 1), true),
            ]
        );
    }
}
