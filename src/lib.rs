//! **mazes** is a maze generation and route finding library.
//!
//! Mazes are carved into a `Grid` of wall and passage cells by one of two generators, a modified
//! Eller's algorithm or the recursive backtracker, and can then be solved from the entrance on
//! the west border to the exit on the east border.
//!
//! ```
//! use mazes::{generate_backtracker, solve, units::{Height, Width}};
//!
//! let maze = generate_backtracker(Width(3), Height(3), 42).unwrap();
//! let path = solve(&maze, maze.entrance(), maze.exit()).unwrap();
//! assert_eq!(path.first(), Some(&maze.entrance()));
//! ```

pub mod cells;
pub mod column_sets;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod maze_graph;
pub mod pathing;
pub mod random;
pub mod units;
mod utils;

pub use crate::cells::{Cartesian2DCoordinate, CellState};
pub use crate::errors::MazeError;
pub use crate::generators::{generate_backtracker, generate_eller};
pub use crate::grid::Grid;
pub use crate::pathing::solve;
