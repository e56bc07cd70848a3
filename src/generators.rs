use log::{debug, trace};
use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, CellState, CompassPrimary};
use crate::column_sets::ColumnSets;
use crate::errors::MazeError;
use crate::grid::Grid;
use crate::random::{seeded_rng, RandomSource};
use crate::units::{ColumnIndex, Height, RowIndex, Width};
use crate::utils;


/// Chance that two neighbouring cells of a row in different sets get joined.
pub const HORIZONTAL_MERGE_PROBABILITY: f64 = 0.5;

/// Chance that a cell whose set already reaches the next row gets a second passage down.
pub const EXTRA_DOWN_PROBABILITY: f64 = 0.3;

/// The random thresholds used by the Eller generator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EllerConfig {
    pub horizontal_merge_probability: f64,
    pub extra_down_probability: f64,
}

impl Default for EllerConfig {
    fn default() -> EllerConfig {
        EllerConfig {
            horizontal_merge_probability: HORIZONTAL_MERGE_PROBABILITY,
            extra_down_probability: EXTRA_DOWN_PROBABILITY,
        }
    }
}

/// Generate a `width * height` maze with Eller's algorithm seeded by `seed`.
pub fn generate_eller(width: Width, height: Height, seed: u64) -> Result<Grid, MazeError> {
    eller(&mut seeded_rng(seed), width, height, &EllerConfig::default())
}

/// Generate a `width * height` maze with the recursive backtracker seeded by `seed`.
pub fn generate_backtracker(width: Width, height: Height, seed: u64) -> Result<Grid, MazeError> {
    recursive_backtracker(&mut seeded_rng(seed), width, height)
}

/// The set bookkeeping the Eller generator carries from one row to the next.
#[derive(Debug, Clone)]
struct RowState {
    sets: ColumnSets,
    // Columns whose cell in the next row was reached by a passage carved downwards.
    carried_down: Vec<bool>,
}

impl RowState {
    fn new(width: Width) -> RowState {
        RowState {
            sets: ColumnSets::new(),
            carried_down: vec![false; width.0],
        }
    }
}

/// Apply a modified Eller's algorithm to a fresh grid.
///
/// Eller's algorithm carves one row at a time, only ever remembering which cells of the current
/// row are already joined together (the column sets). Neighbours in different sets are randomly
/// joined, then every set gets at least one passage down into the next row so that no region is
/// cut off, with some randomly chosen extra passages down. The last row joins every remaining
/// pair of sets, leaving the whole maze connected.
///
/// Unlike the textbook version the maze is not necessarily perfect: extra passages down can
/// open loops between rows.
pub fn eller<R>(rng: &mut R,
                width: Width,
                height: Height,
                config: &EllerConfig)
                -> Result<Grid, MazeError>
    where R: RandomSource
{
    let mut grid = maze_grid(width, height)?;
    let last_row = height.0 - 1;

    let mut state = RowState::new(width);
    for row in 0..height.0 {
        state = eller_row(&mut grid, rng, state, RowIndex(row), row == last_row, config)?;
        trace!("eller row {} {:?}", row, state.sets);
    }
    join_final_row(&mut grid, &mut state, RowIndex(last_row))?;

    open_entrance_and_exit(&mut grid)?;

    debug!("eller maze {}x{} carved {} passages", width.0, height.0, grid.count(CellState::Passage));
    Ok(grid)
}

fn eller_row<R>(grid: &mut Grid,
                rng: &mut R,
                mut state: RowState,
                row: RowIndex,
                is_last_row: bool,
                config: &EllerConfig)
                -> Result<RowState, MazeError>
    where R: RandomSource
{
    let width = Width(state.carried_down.len());

    if row.0 == 0 {
        state.sets.initialize(width);
    } else {
        // A cell nothing was carved down into is not connected to its old set any more.
        for (col, carried) in state.carried_down.iter().enumerate() {
            if !carried {
                state.sets.detach(ColumnIndex(col));
            }
        }
        state.sets.propagate(width);
    }
    for carried in state.carried_down.iter_mut() {
        *carried = false;
    }

    for col in 0..width.0 {
        grid.carve(Cartesian2DCoordinate::of_logical_cell(ColumnIndex(col), row))?;
    }

    join_horizontally(grid, rng, &mut state.sets, row, config.horizontal_merge_probability)?;

    if !is_last_row {
        connect_down(grid, rng, &mut state, row, config.extra_down_probability)?;
    }

    Ok(state)
}

fn join_horizontally<R>(grid: &mut Grid,
                        rng: &mut R,
                        sets: &mut ColumnSets,
                        row: RowIndex,
                        merge_probability: f64)
                        -> Result<(), MazeError>
    where R: RandomSource
{
    let Width(width) = sets.width();
    for col in 0..width.saturating_sub(1) {
        let (this, next) = (ColumnIndex(col), ColumnIndex(col + 1));

        // Cells already in the same set are joined somehow, a passage here would only make a loop.
        if !sets.same_set(this, next) && rng.next_unit() < merge_probability {
            sets.merge(this, next);
            grid.carve(east_wall_of(this, row))?;
        }
    }
    Ok(())
}

fn connect_down<R>(grid: &mut Grid,
                   rng: &mut R,
                   state: &mut RowState,
                   row: RowIndex,
                   extra_probability: f64)
                   -> Result<(), MazeError>
    where R: RandomSource
{
    let width = state.carried_down.len();
    let mut sets_connected = utils::fnv_hashset(width);

    for col in 0..width {
        let column = ColumnIndex(col);
        let set = state.sets.set_of(column);

        let first_of_set = sets_connected.insert(set);
        if first_of_set || rng.next_unit() < extra_probability {
            grid.carve(south_wall_of(column, row))?;
            state.carried_down[col] = true;
        }
    }
    Ok(())
}

fn join_final_row(grid: &mut Grid, state: &mut RowState, row: RowIndex) -> Result<(), MazeError> {
    let width = state.carried_down.len();
    for col in 0..width.saturating_sub(1) {
        let (this, next) = (ColumnIndex(col), ColumnIndex(col + 1));
        if !state.sets.same_set(this, next) {
            state.sets.merge(this, next);
            grid.carve(east_wall_of(this, row))?;
        }
    }
    debug_assert!(width == 0 || state.sets.distinct_sets() == 1);
    Ok(())
}

/// The order the backtracker lists the candidate cells around the current cell in.
const CARVE_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                               CompassPrimary::South,
                                               CompassPrimary::East,
                                               CompassPrimary::West];

/// Apply the recursive backtracker maze generation algorithm to a fresh grid.
///
/// A random walk that never visits a cell twice, carving as it goes. When the walk reaches a
/// dead end it backs up along its own path until it finds a cell with an unvisited neighbour and
/// carries on from there. It is done when it has backed up all the way to the start.
/// Every cell is visited exactly once, so the passages form a spanning tree: a perfect maze
/// with long winding corridors and few dead ends.
pub fn recursive_backtracker<R>(rng: &mut R, width: Width, height: Height) -> Result<Grid, MazeError>
    where R: RandomSource
{
    let mut grid = maze_grid(width, height)?;

    let start = Cartesian2DCoordinate::of_logical_cell(ColumnIndex(0), RowIndex(0));
    grid.carve(start)?;
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {

        let unvisited = CARVE_DIRECTIONS.iter()
            .filter_map(|&dir| grid.neighbour_at_direction(current, dir, 2))
            .filter(|&neighbour| !grid.is_passage(neighbour))
            .collect::<SmallVec<[Cartesian2DCoordinate; 4]>>();

        if unvisited.is_empty() {
            let _ = stack.pop();
        } else {
            let next = unvisited[rng.next_index(unvisited.len())];
            grid.carve(between(current, next))?;
            grid.carve(next)?;
            stack.push(next);
        }
    }

    open_entrance_and_exit(&mut grid)?;

    debug!("backtracker maze {}x{} carved {} passages",
           width.0, height.0, grid.count(CellState::Passage));
    Ok(grid)
}

/// An all wall grid big enough for `width * height` logical cells and the walls around them.
fn maze_grid(width: Width, height: Height) -> Result<Grid, MazeError> {
    if width.0 < 1 || height.0 < 1 {
        return Err(MazeError::InvalidDimensions {
            width: width.0,
            height: height.0,
        });
    }
    Ok(Grid::new(Width(width.0 * 2 + 1), Height(height.0 * 2 + 1)))
}

fn open_entrance_and_exit(grid: &mut Grid) -> Result<(), MazeError> {
    let (entrance, exit) = (grid.entrance(), grid.exit());
    grid.carve(entrance)?;
    grid.carve(exit)
}

#[inline]
fn east_wall_of(col: ColumnIndex, row: RowIndex) -> Cartesian2DCoordinate {
    Cartesian2DCoordinate::new((col.0 * 2 + 2) as u32, (row.0 * 2 + 1) as u32)
}

#[inline]
fn south_wall_of(col: ColumnIndex, row: RowIndex) -> Cartesian2DCoordinate {
    Cartesian2DCoordinate::new((col.0 * 2 + 1) as u32, (row.0 * 2 + 2) as u32)
}

#[inline]
fn between(a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> Cartesian2DCoordinate {
    Cartesian2DCoordinate::new((a.x + b.x) / 2, (a.y + b.y) / 2)
}
