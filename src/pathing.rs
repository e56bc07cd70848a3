use bit_set::BitSet;
use log::{trace, warn};

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::grid::Grid;
use crate::utils;
use crate::utils::FnvHashSet;


/// The order neighbours are pushed onto the search stack. The last one pushed is explored first.
const SEARCH_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::East,
                                                CompassPrimary::South,
                                                CompassPrimary::West,
                                                CompassPrimary::North];

/// Find a path through the passages of `grid` from `entrance` to `exit`.
///
/// A depth first search, so the path found is a valid route but not necessarily the shortest.
/// Every stack entry carries its own copy of the path that led to it.
/// The search is deterministic: the same grid and end points always give the same path.
///
/// Returns None when there is no route, or when either end point is not a passage on the grid.
pub fn solve(grid: &Grid,
             entrance: Cartesian2DCoordinate,
             exit: Cartesian2DCoordinate)
             -> Option<Vec<Cartesian2DCoordinate>> {

    if !grid.is_passage(entrance) || !grid.is_passage(exit) {
        warn!("cannot solve from {:?} to {:?}, both must be passages", entrance, exit);
        return None;
    }

    let mut visited = BitSet::with_capacity(grid.size());
    let mut stack = vec![(entrance, vec![entrance])];

    while let Some((coord, path)) = stack.pop() {

        if coord == exit {
            trace!("solved {:?} -> {:?} in {} steps", entrance, exit, path.len());
            return Some(path);
        }

        let index = grid.grid_coordinate_to_index(coord)?;
        if !visited.insert(index) {
            continue;
        }

        for dir in &SEARCH_DIRECTIONS {
            let neighbour = match grid.neighbour_at_direction(coord, *dir, 1) {
                Some(n) => n,
                None => continue,
            };
            let seen = grid.grid_coordinate_to_index(neighbour)
                           .map_or(true, |i| visited.contains(i));

            if grid.is_passage(neighbour) && !seen {
                let mut extended = path.clone();
                extended.push(neighbour);
                stack.push((neighbour, extended));
            }
        }
    }

    // A generated maze is always connected, getting here means the grid is broken.
    warn!("no path from {:?} to {:?}", entrance, exit);
    None
}

/// Every passage cell that can be reached from `start`, including `start` itself.
/// Empty if `start` is not a passage.
pub fn reachable_from(grid: &Grid, start: Cartesian2DCoordinate) -> FnvHashSet<Cartesian2DCoordinate> {

    let mut reached = utils::fnv_hashset(grid.size());
    if !grid.is_passage(start) {
        return reached;
    }
    reached.insert(start);

    // The reached set doubles as the visited set, so the frontier never holds a cell twice.
    let mut frontier = vec![start];
    while !frontier.is_empty() {

        let mut new_frontier = vec![];
        for coord in &frontier {
            for neighbour in grid.neighbours(*coord).iter() {
                if grid.is_passage(*neighbour) && reached.insert(*neighbour) {
                    new_frontier.push(*neighbour);
                }
            }
        }
        frontier = new_frontier;
    }

    reached
}

/// Does `path` walk from `entrance` to `exit` one step at a time through passages only?
pub fn is_valid_path(grid: &Grid,
                     path: &[Cartesian2DCoordinate],
                     entrance: Cartesian2DCoordinate,
                     exit: Cartesian2DCoordinate)
                     -> bool {
    path.first() == Some(&entrance) && path.last() == Some(&exit) &&
    path.iter().all(|&c| grid.is_passage(c)) &&
    path.windows(2).all(|step| step[0].is_adjacent(step[1]))
}
