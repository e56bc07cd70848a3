use smallvec::SmallVec;

use crate::units::{ColumnIndex, RowIndex, Width};


/// The binary state of one raw grid cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellState {
    Wall,
    Passage,
}

impl Default for CellState {
    fn default() -> CellState {
        CellState::Wall
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    /// Creates a new coordinate offset `distance` cells away in this direction.
    /// Returns None if the coordinate would go below zero on either axis.
    /// No upper bound is checked, that is up to the grid.
    pub fn offset(self, coord: Cartesian2DCoordinate, distance: u32) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (coord.x, coord.y);
        match self {
            CompassPrimary::North => y.checked_sub(distance).map(|y| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::South => y.checked_add(distance).map(|y| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::East => x.checked_add(distance).map(|x| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::West => x.checked_sub(distance).map(|x| Cartesian2DCoordinate::new(x, y)),
        }
    }
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, row_width: Width) -> Cartesian2DCoordinate {
        let Width(width) = row_width;
        let x = index % width;
        let y = index / width;

        Cartesian2DCoordinate::new(x as u32, y as u32)
    }

    #[inline]
    pub fn from_row_column_indices(col_index: ColumnIndex, row_index: RowIndex) -> Self {
        let (ColumnIndex(col), RowIndex(row)) = (col_index, row_index);
        Cartesian2DCoordinate::new(col as u32, row as u32)
    }

    /// Grid coordinate of a logical maze cell: logical cells sit on the odd rows and columns,
    /// with the walls that may be knocked down between them.
    #[inline]
    pub fn of_logical_cell(col_index: ColumnIndex, row_index: RowIndex) -> Self {
        let (ColumnIndex(col), RowIndex(row)) = (col_index, row_index);
        Cartesian2DCoordinate::new((col * 2 + 1) as u32, (row * 2 + 1) as u32)
    }

    /// Is this one unit step away from `other` along a single axis?
    pub fn is_adjacent(&self, other: Cartesian2DCoordinate) -> bool {
        let dx = (i64::from(self.x) - i64::from(other.x)).abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).abs();
        dx + dy == 1
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stop_at_zero() {
        let origin = Cartesian2DCoordinate::new(0, 0);
        assert_eq!(CompassPrimary::North.offset(origin, 1), None);
        assert_eq!(CompassPrimary::West.offset(origin, 2), None);
        assert_eq!(CompassPrimary::South.offset(origin, 2), Some(Cartesian2DCoordinate::new(0, 2)));
        assert_eq!(CompassPrimary::East.offset(origin, 1), Some(Cartesian2DCoordinate::new(1, 0)));

        let c = Cartesian2DCoordinate::new(3, 3);
        assert_eq!(CompassPrimary::North.offset(c, 2), Some(Cartesian2DCoordinate::new(3, 1)));
        assert_eq!(CompassPrimary::West.offset(c, 2), Some(Cartesian2DCoordinate::new(1, 3)));
    }

    #[test]
    fn logical_cells_sit_on_odd_coordinates() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(Cartesian2DCoordinate::of_logical_cell(ColumnIndex(0), RowIndex(0)), gc(1, 1));
        assert_eq!(Cartesian2DCoordinate::of_logical_cell(ColumnIndex(2), RowIndex(1)), gc(5, 3));
    }

    #[test]
    fn row_major_index_round_trip() {
        let coord = Cartesian2DCoordinate::from_row_major_index(7, Width(3));
        assert_eq!(coord, Cartesian2DCoordinate::new(1, 2));
        assert_eq!(Cartesian2DCoordinate::from_row_column_indices(ColumnIndex(1), RowIndex(2)), coord);
    }

    #[test]
    fn adjacency() {
        let c = Cartesian2DCoordinate::new(2, 2);
        assert!(c.is_adjacent(Cartesian2DCoordinate::new(2, 1)));
        assert!(c.is_adjacent(Cartesian2DCoordinate::new(3, 2)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Cartesian2DCoordinate::new(3, 3)));
        assert!(!c.is_adjacent(Cartesian2DCoordinate::new(4, 2)));
    }
}
