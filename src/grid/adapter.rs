use ahash::{HashMap, HashMapExt};
use tracing::debug;

use super::{Grid, Position};
use crate::graphs::{Graph, GraphError, Vertex};

// North, south, east, west.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// A graph derived from a grid, together with the mapping between vertex ids
/// and cell positions.
pub struct GridGraph {
    pub graph: Graph,
    vertex_ids: HashMap<Position, Vertex>,
    positions: Vec<Position>,
}

impl GridGraph {
    pub fn vertex_at(&self, position: Position) -> Option<Vertex> {
        self.vertex_ids.get(&position).copied()
    }

    pub fn position(&self, vertex: Vertex) -> Option<Position> {
        self.positions.get(vertex as usize).copied()
    }
}

/// Converts a grid into a directed graph over its passable cells.
///
/// Vertex ids are assigned in row-major order; obstacle cells get no vertex.
/// Every passable cell is connected to each passable four-neighbor by an
/// edge weighted with the cost of entering the neighbor. The graph is
/// directed because the cost belongs to the cell being entered; traversing
/// the same pair of cells the other way can cost differently.
///
/// Fails with [`GraphError::EmptyGraph`] when the grid consists of obstacles
/// only.
pub fn grid_to_graph(grid: &Grid) -> Result<GridGraph, GraphError> {
    let mut vertex_ids = HashMap::new();
    let mut positions = Vec::new();
    for position in grid.positions() {
        if grid.cell(position).is_passable() {
            vertex_ids.insert(position, positions.len() as Vertex);
            positions.push(position);
        }
    }

    let mut graph = Graph::new(positions.len() as u32, true)?;
    for (tail, &(row, column)) in positions.iter().enumerate() {
        for (row_offset, column_offset) in NEIGHBOR_OFFSETS {
            let neighbor_row = row as isize + row_offset;
            let neighbor_column = column as isize + column_offset;
            if neighbor_row < 0
                || neighbor_row >= grid.rows() as isize
                || neighbor_column < 0
                || neighbor_column >= grid.columns() as isize
            {
                continue;
            }

            let neighbor = (neighbor_row as usize, neighbor_column as usize);
            if let Some(cost) = grid.cell(neighbor).entry_cost() {
                graph.add_edge(tail as Vertex, vertex_ids[&neighbor], cost)?;
            }
        }
    }

    debug!(
        vertices = graph.number_of_vertices(),
        edges = graph.number_of_edges(),
        "converted grid to graph"
    );
    Ok(GridGraph {
        graph,
        vertex_ids,
        positions,
    })
}
