use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CellState, CompassPrimary, CoordinateSmallVec};
use crate::errors::MazeError;
use crate::units::{Height, Width};


/// A rectangle of wall or passage cells.
///
/// The generators lay a maze of `w * h` logical cells out on a `(2w + 1) * (2h + 1)` grid:
/// logical cells on the odd coordinates, the walls between them on the mixed odd/even
/// coordinates, and an outer border that is all wall apart from the entrance and exit.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<CellState>,
    width: Width,
    height: Height,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {:?}, height: {:?}, passages: {}",
               self.width, self.height, self.count(CellState::Passage))
    }
}

impl Grid {
    /// Creates a grid with every cell a wall.
    pub fn new(width: Width, height: Height) -> Grid {
        Grid {
            cells: vec![CellState::Wall; width.0 * height.0],
            width,
            height,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> (Width, Height) {
        (self.width, self.height)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The number of logical maze cells across and down, for grids laid out by the generators.
    pub fn logical_size(&self) -> (Width, Height) {
        (Width(self.width.0.saturating_sub(1) / 2), Height(self.height.0.saturating_sub(1) / 2))
    }

    pub fn get(&self, coord: Cartesian2DCoordinate) -> Result<CellState, MazeError> {
        self.grid_coordinate_to_index(coord)
            .map(|index| self.cells[index])
            .ok_or(MazeError::OutOfBounds { x: coord.x, y: coord.y })
    }

    pub fn set(&mut self, coord: Cartesian2DCoordinate, state: CellState) -> Result<(), MazeError> {
        let index = self.grid_coordinate_to_index(coord)
            .ok_or(MazeError::OutOfBounds { x: coord.x, y: coord.y })?;
        self.cells[index] = state;
        Ok(())
    }

    /// Knock down the wall at `coord`.
    #[inline]
    pub fn carve(&mut self, coord: Cartesian2DCoordinate) -> Result<(), MazeError> {
        self.set(coord, CellState::Passage)
    }

    /// Is the cell a passage? Out of bounds coordinates are never passages.
    #[inline]
    pub fn is_passage(&self, coord: Cartesian2DCoordinate) -> bool {
        self.get(coord).map(|state| state == CellState::Passage).unwrap_or(false)
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            None
        }
    }

    /// All coordinates in row major order.
    pub fn iter(&self) -> impl Iterator<Item = Cartesian2DCoordinate> {
        let width = self.width;
        (0..self.size()).map(move |index| Cartesian2DCoordinate::from_row_major_index(index, width))
    }

    /// Cells that are to the North, South, East or West of a particular cell and inside the grid.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        [CompassPrimary::North, CompassPrimary::South, CompassPrimary::East, CompassPrimary::West]
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir, 1))
            .collect()
    }

    /// The cell `distance` steps away in `direction`, if it is inside the grid.
    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary,
                                  distance: u32)
                                  -> Option<Cartesian2DCoordinate> {
        direction.offset(coord, distance)
                 .and_then(|neighbour| if self.is_valid_coordinate(neighbour) {
                     Some(neighbour)
                 } else {
                     None
                 })
    }

    /// The border cell on the west side next to the top left logical cell.
    pub fn entrance(&self) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(0, 1)
    }

    /// The border cell on the east side next to the bottom right logical cell.
    pub fn exit(&self) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(self.width.0.saturating_sub(1) as u32,
                                   self.height.0.saturating_sub(2) as u32)
    }

    pub fn is_border(&self, coord: Cartesian2DCoordinate) -> bool {
        let (x, y) = (coord.x as usize, coord.y as usize);
        x == 0 || y == 0 || x + 1 == self.width.0 || y + 1 == self.height.0
    }

    /// How many cells are in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }
}

#[cfg(test)]
mod tests {

    use itertools::Itertools;

    use super::*;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn new_grid_is_all_wall() {
        let g = Grid::new(Width(4), Height(3));
        assert_eq!(g.size(), 12);
        assert_eq!(g.count(CellState::Wall), 12);
        assert_eq!(g.count(CellState::Passage), 0);
        assert_eq!(g.dimensions(), (Width(4), Height(3)));
        assert!(g.iter().all(|c| g.get(c) == Ok(CellState::Wall)));
    }

    #[test]
    fn set_and_get() {
        let mut g = Grid::new(Width(3), Height(3));
        g.set(gc(2, 1), CellState::Passage).expect("in bounds");
        assert_eq!(g.get(gc(2, 1)), Ok(CellState::Passage));
        assert!(g.is_passage(gc(2, 1)));
        assert_eq!(g.count(CellState::Passage), 1);

        g.set(gc(2, 1), CellState::Wall).expect("in bounds");
        assert_eq!(g.get(gc(2, 1)), Ok(CellState::Wall));
    }

    #[test]
    fn out_of_bounds_access_is_an_error() {
        let mut g = Grid::new(Width(3), Height(2));
        assert_eq!(g.get(gc(3, 0)), Err(MazeError::OutOfBounds { x: 3, y: 0 }));
        assert_eq!(g.get(gc(0, 2)), Err(MazeError::OutOfBounds { x: 0, y: 2 }));
        assert_eq!(g.set(gc(u32::max_value(), 1), CellState::Passage),
                   Err(MazeError::OutOfBounds { x: u32::max_value(), y: 1 }));
        assert!(!g.is_passage(gc(5, 5)));
        assert_eq!(g.count(CellState::Passage), 0);
    }

    #[test]
    fn grid_coordinate_as_index() {
        let g = Grid::new(Width(3), Height(3));
        let indices = g.iter().map(|c| g.grid_coordinate_to_index(c)).collect::<Vec<_>>();
        let expected = (0..9).map(Some).collect::<Vec<_>>();
        assert_eq!(indices, expected);
        assert_eq!(g.grid_coordinate_to_index(gc(2, 3)), None);
        assert_eq!(g.grid_coordinate_to_index(gc(3, 2)), None);
    }

    #[test]
    fn neighbour_cells() {
        let g = Grid::new(Width(10), Height(10));
        let check_expected_neighbours = |coord, expected: &[Cartesian2DCoordinate]| {
            let found: Vec<Cartesian2DCoordinate> = g.neighbours(coord).iter().cloned().sorted();
            let expected: Vec<Cartesian2DCoordinate> = expected.iter().cloned().sorted();
            assert_eq!(found, expected);
        };

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(9, 9), &[gc(9, 8), gc(8, 9)]);
        // side
        check_expected_neighbours(gc(0, 8), &[gc(1, 8), gc(0, 7), gc(0, 9)]);
        // inside
        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn neighbour_at_distance() {
        let g = Grid::new(Width(5), Height(5));
        assert_eq!(g.neighbour_at_direction(gc(1, 1), CompassPrimary::East, 2), Some(gc(3, 1)));
        assert_eq!(g.neighbour_at_direction(gc(3, 1), CompassPrimary::East, 2), None);
        assert_eq!(g.neighbour_at_direction(gc(1, 1), CompassPrimary::North, 2), None);
        assert_eq!(g.neighbour_at_direction(gc(1, 1), CompassPrimary::South, 2), Some(gc(1, 3)));
    }

    #[test]
    fn entrance_exit_and_border() {
        let g = Grid::new(Width(7), Height(5));
        assert_eq!(g.entrance(), gc(0, 1));
        assert_eq!(g.exit(), gc(6, 3));
        assert!(g.is_border(g.entrance()));
        assert!(g.is_border(g.exit()));
        assert!(!g.is_border(gc(1, 1)));
        assert_eq!(g.logical_size(), (Width(3), Height(2)));
    }
}
