use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CellState};
use crate::grid::Grid;
use crate::units::{Height, Width};
use crate::utils::{self, FnvHashSet};


const WALL: char = '#';
const PASSAGE: char = ' ';

/// Decides the glyph a grid cell is drawn with when a maze is written out as text.
pub trait GridDisplay {
    fn render_cell(&self, _: Cartesian2DCoordinate, state: CellState) -> char {
        match state {
            CellState::Wall => WALL,
            CellState::Passage => PASSAGE,
        }
    }
}

/// Walls and passages only.
#[derive(Debug, Copy, Clone)]
pub struct PlainDisplay;
impl GridDisplay for PlainDisplay {}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<Cartesian2DCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[Cartesian2DCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell(&self, coord: Cartesian2DCoordinate, state: CellState) -> char {
        if self.on_path_coordinates.contains(&coord) {
            '.'
        } else {
            PlainDisplay.render_cell(coord, state)
        }
    }
}

/// Marks the start with an 'S' and the end with an 'E' on top of another display.
#[derive(Debug)]
pub struct StartEndPointsDisplay<D: GridDisplay> {
    start: Cartesian2DCoordinate,
    end: Cartesian2DCoordinate,
    inner: D,
}
impl<D: GridDisplay> StartEndPointsDisplay<D> {
    pub fn new(start: Cartesian2DCoordinate, end: Cartesian2DCoordinate, inner: D) -> StartEndPointsDisplay<D> {
        StartEndPointsDisplay { start, end, inner }
    }
}
impl<D: GridDisplay> GridDisplay for StartEndPointsDisplay<D> {
    fn render_cell(&self, coord: Cartesian2DCoordinate, state: CellState) -> char {
        if coord == self.start {
            'S'
        } else if coord == self.end {
            'E'
        } else {
            self.inner.render_cell(coord, state)
        }
    }
}

/// A grid paired with the display used to write it out.
pub struct GridText<'a, D: GridDisplay + 'a> {
    grid: &'a Grid,
    display: &'a D,
}

impl<'a, D: GridDisplay + 'a> GridText<'a, D> {
    pub fn new(grid: &'a Grid, display: &'a D) -> GridText<'a, D> {
        GridText { grid, display }
    }
}

impl<'a, D: GridDisplay + 'a> fmt::Display for GridText<'a, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (Width(row_length), Height(rows)) = self.grid.dimensions();
        let mut output = String::with_capacity(self.grid.size() + rows);

        for coord in self.grid.iter() {
            // the grid hands out only valid coordinates
            let state = self.grid.get(coord).unwrap_or(CellState::Wall);
            output.push(self.display.render_cell(coord, state));
            if coord.x as usize + 1 == row_length {
                output.push('\n');
            }
        }
        write!(f, "{}", output)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", GridText::new(self, &PlainDisplay))
    }
}
