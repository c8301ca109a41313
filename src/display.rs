use itertools::Itertools;

use crate::{
    graphs::{Vertex, Weight},
    grid::{adapter::GridGraph, Cell, Grid},
    search::floyd_warshall::DistanceMatrix,
};

pub const UNREACHABLE_SYMBOL: &str = "∞";

pub fn format_weight(weight: Option<Weight>) -> String {
    match weight {
        Some(weight) => weight.to_string(),
        None => UNREACHABLE_SYMBOL.to_string(),
    }
}

pub fn format_distance_row(distances: &[Option<Weight>]) -> String {
    distances
        .iter()
        .map(|&distance| format!("{:>3}", format_weight(distance)))
        .join(" ")
}

pub fn format_distance_matrix(matrix: &DistanceMatrix) -> String {
    matrix.iter().map(|row| format_distance_row(row)).join("\n")
}

pub fn render(grid: &Grid) -> String {
    (0..grid.rows())
        .map(|row| {
            (0..grid.columns())
                .map(|column| grid.cell((row, column)).symbol())
                .collect::<String>()
        })
        .join("\n")
}

/// The grid with the path marked with `*`. Start and goal keep their own
/// symbols.
pub fn render_with_path(grid: &Grid, grid_graph: &GridGraph, path: &[Vertex]) -> String {
    let mut symbols: Vec<Vec<char>> = (0..grid.rows())
        .map(|row| {
            (0..grid.columns())
                .map(|column| grid.cell((row, column)).symbol())
                .collect()
        })
        .collect();

    for &vertex in path {
        if let Some((row, column)) = grid_graph.position(vertex) {
            if !matches!(grid.cell((row, column)), Cell::Start | Cell::Goal) {
                symbols[row][column] = '*';
            }
        }
    }

    symbols
        .iter()
        .map(|row| row.iter().collect::<String>())
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_distances_show_as_infinity() {
        assert_eq!(format_distance_row(&[Some(0), None, Some(12)]), "  0   ∞  12");
    }
}
