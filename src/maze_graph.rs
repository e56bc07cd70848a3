use petgraph::{Graph, Undirected};
use petgraph::graph::NodeIndex;

use crate::cells::Cartesian2DCoordinate;
use crate::grid::Grid;
use crate::units::{ColumnIndex, Height, RowIndex, Width};


/// Logical maze cells as nodes, carved walls between neighbouring cells as edges.
pub type MazeGraph = Graph<Cartesian2DCoordinate, (), Undirected, u32>;

/// Build the passage graph of a generated maze. Node `i` is the logical cell at row `i / width`,
/// column `i % width` and holds that cell's grid coordinate. The entrance and exit are not part
/// of the graph.
pub fn maze_graph(grid: &Grid) -> MazeGraph {
    let (Width(width), Height(height)) = grid.logical_size();
    let mut graph = MazeGraph::with_capacity(width * height, 2 * width * height);

    for row in 0..height {
        for col in 0..width {
            let _ = graph.add_node(Cartesian2DCoordinate::of_logical_cell(ColumnIndex(col), RowIndex(row)));
        }
    }

    for row in 0..height {
        for col in 0..width {
            let index = row * width + col;
            let cell = graph[NodeIndex::new(index)];

            if col + 1 < width && grid.is_passage(Cartesian2DCoordinate::new(cell.x + 1, cell.y)) {
                let _ = graph.add_edge(NodeIndex::new(index), NodeIndex::new(index + 1), ());
            }
            if row + 1 < height && grid.is_passage(Cartesian2DCoordinate::new(cell.x, cell.y + 1)) {
                let _ = graph.add_edge(NodeIndex::new(index), NodeIndex::new(index + width), ());
            }
        }
    }

    graph
}

/// Serialize the graph as text: line 1 is `n m` (#vertices, #edges), every following line is
/// one edge between two vertices. Uses 1-based vertex indices.
pub fn edge_list_text(graph: &MazeGraph) -> String {
    let mut graph_data = format!("{} {}\n", graph.node_count(), graph.edge_count());

    for edge in graph.raw_edges() {
        let src_as_1_based_index = edge.source().index() + 1;
        let dst_as_1_based_index = edge.target().index() + 1;
        graph_data.push_str(&format!("{} {}\n", src_as_1_based_index, dst_as_1_based_index));
    }

    graph_data
}

#[cfg(test)]
mod tests {

    use petgraph::algo::{connected_components, is_cyclic_undirected};
    use quickcheck::quickcheck;

    use super::*;
    use crate::generators;

    #[test]
    fn backtracker_graph_is_a_spanning_tree() {
        fn p(w: u8, h: u8, seed: u64) -> bool {
            let (width, height) = ((w % 12) as usize + 1, (h % 12) as usize + 1);
            let grid = generators::generate_backtracker(Width(width), Height(height), seed).unwrap();
            let graph = maze_graph(&grid);

            graph.node_count() == width * height &&
            graph.edge_count() == width * height - 1 &&
            connected_components(&graph) == 1 &&
            !is_cyclic_undirected(&graph)
        }
        quickcheck(p as fn(u8, u8, u64) -> bool);
    }

    #[test]
    fn eller_graph_is_one_component() {
        fn p(w: u8, h: u8, seed: u64) -> bool {
            let (width, height) = ((w % 12) as usize + 1, (h % 12) as usize + 1);
            let grid = generators::generate_eller(Width(width), Height(height), seed).unwrap();
            let graph = maze_graph(&grid);

            graph.node_count() == width * height &&
            graph.edge_count() >= width * height - 1 &&
            connected_components(&graph) == 1
        }
        quickcheck(p as fn(u8, u8, u64) -> bool);
    }

    #[test]
    fn edge_list_for_a_corridor() {
        // 3 cells in a row, all walls between them knocked down
        let mut grid = Grid::new(Width(7), Height(3));
        for x in 1..6 {
            grid.carve(Cartesian2DCoordinate::new(x, 1)).expect("in bounds");
        }
        let graph = maze_graph(&grid);
        assert_eq!(graph[NodeIndex::new(2)], Cartesian2DCoordinate::new(5, 1));
        assert_eq!(edge_list_text(&graph), "3 2\n1 2\n2 3\n");
    }
}
