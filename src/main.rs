#![cfg_attr(feature="clippy", feature(plugin))]
#![cfg_attr(feature="clippy", plugin(clippy))]

use docopt::Docopt;
use log::{info, warn};
use serde_derive::Deserialize;
use mazes::{
    cells::CellState,
    generators::{self, EllerConfig},
    grid::Grid,
    grid_displays::{GridText, PathDisplay, PlainDisplay, StartEndPointsDisplay},
    maze_graph,
    pathing,
    random::seeded_rng,
    units::{Height, Width},
};
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver (eller|backtracker) [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--merge-probability=<p>] [--down-probability=<p>] [--show-path] [--text-out=<path>] [--save-edges=<path>]

Options:
    -h --help                 Show this screen.
    --grid-size=<n>           The maze is n * n cells.
    --grid-width=<w>          The maze width in a w*h maze [default: 20].
    --grid-height=<h>         The maze height in a w*h maze [default: 20].
    --seed=<s>                Seed for the random number generator. Random if not given.
    --merge-probability=<p>   Eller only: chance of joining two neighbouring cells of a row [default: 0.5].
    --down-probability=<p>    Eller only: chance of an extra passage down from a row [default: 0.3].
    --show-path               Solve the maze and show the path from the entrance to the exit.
    --text-out=<path>         Write the maze to this file instead of the screen.
    --save-edges=<path>       Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.

Set MAZES_LOG (e.g. MAZES_LOG=debug) to see log output.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_eller: bool,
    cmd_backtracker: bool,
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_merge_probability: f64,
    flag_down_probability: f64,
    flag_show_path: bool,
    flag_text_out: String,
    flag_save_edges: String,
}

/// Larger mazes are cut down to this many cells a side.
const MAX_MAZE_SIDE: usize = 500;

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Maze(::mazes::MazeError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let env = env_logger::Env::new()
        .filter("MAZES_LOG")
        .write_style("MAZES_LOG_STYLE");
    env_logger::init_from_env(env);

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };
    let (width, height) = (clamp_side(width), clamp_side(height));

    let seed = args.flag_seed.unwrap_or_else(rand::random::<u64>);
    info!("generating a {}x{} maze with seed {}", width, height, seed);

    let maze_grid = generate_maze(&args, Width(width), Height(height), seed)?;

    let (Width(grid_width), Height(grid_height)) = maze_grid.dimensions();
    println!("Actual size: {}x{}", grid_width, grid_height);
    println!("Cells: {}", maze_grid.size());
    println!("Walls: {}", maze_grid.count(CellState::Wall));
    println!("Passages: {}", maze_grid.count(CellState::Passage));

    if !args.flag_save_edges.is_empty() {
        let graph = maze_graph::maze_graph(&maze_grid);
        write_text_to_file(&maze_graph::edge_list_text(&graph), &args.flag_save_edges)
            .chain_err(|| format!("Failed to write maze graph to text file {}", args.flag_save_edges))?;
    }

    let text = maze_text(&maze_grid, args.flag_show_path);

    if args.flag_text_out.is_empty() {
        println!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn generate_maze(maze_args: &MazeArgs, width: Width, height: Height, seed: u64) -> Result<Grid> {
    let mut rng = seeded_rng(seed);

    let maze_grid = match (maze_args.cmd_eller, maze_args.cmd_backtracker) {
        (true, _) => {
            let config = EllerConfig {
                horizontal_merge_probability: maze_args.flag_merge_probability,
                extra_down_probability: maze_args.flag_down_probability,
            };
            generators::eller(&mut rng, width, height, &config)?
        }
        (_, true) => generators::recursive_backtracker(&mut rng, width, height)?,
        _ => return Err("No maze generator chosen".into()),
    };

    Ok(maze_grid)
}

/// The maze as text, with the solution drawn in when asked for and one exists.
fn maze_text(maze_grid: &Grid, show_path: bool) -> String {
    let (entrance, exit) = (maze_grid.entrance(), maze_grid.exit());

    if show_path {
        if let Some(path) = pathing::solve(maze_grid, entrance, exit) {
            println!("Path length: {}", path.len());
            let display = StartEndPointsDisplay::new(entrance, exit, PathDisplay::new(&path));
            return GridText::new(maze_grid, &display).to_string();
        }
        println!("No solution found");
    }

    let display = StartEndPointsDisplay::new(entrance, exit, PlainDisplay);
    GridText::new(maze_grid, &display).to_string()
}

fn clamp_side(side: usize) -> usize {
    if side > MAX_MAZE_SIDE {
        warn!("maze side {} is too large, using {}", side, MAX_MAZE_SIDE);
        MAX_MAZE_SIDE
    } else {
        side
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
