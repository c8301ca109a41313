use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::graphs::Weight;

pub mod adapter;

/// `(row, column)` of a cell, zero-based from the top-left corner.
pub type Position = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Free,
    Start,
    Goal,
    Difficult,
    Obstacle,
    /// A symbol outside the known set. Kept so the grid can be re-rendered
    /// unchanged; treated like a free cell for movement.
    Other(char),
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Cell {
        match symbol {
            '.' => Cell::Free,
            'S' => Cell::Start,
            'G' => Cell::Goal,
            '~' => Cell::Difficult,
            '#' => Cell::Obstacle,
            other => Cell::Other(other),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Difficult => '~',
            Cell::Obstacle => '#',
            Cell::Other(symbol) => symbol,
        }
    }

    /// Cost of moving onto this cell, `None` for obstacles which cannot be
    /// entered at all.
    pub fn entry_cost(self) -> Option<Weight> {
        match self {
            Cell::Obstacle => None,
            Cell::Difficult => Some(3),
            _ => Some(1),
        }
    }

    pub fn is_passable(self) -> bool {
        self.entry_cost().is_some()
    }
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{}: {}", path.display(), line, message)]
    Malformed {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("a grid needs at least one row and one column")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// A rectangular field of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Result<Grid, GridError> {
        if cells.is_empty() || cells[0].is_empty() {
            return Err(GridError::Empty);
        }

        let columns = cells[0].len();
        for (row, row_cells) in cells.iter().enumerate() {
            if row_cells.len() != columns {
                return Err(GridError::Ragged {
                    row,
                    found: row_cells.len(),
                    expected: columns,
                });
            }
        }

        Ok(Grid { cells })
    }

    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Grid, GridError> {
        let cells = lines
            .into_iter()
            .map(|line| line.chars().map(Cell::from_symbol).collect())
            .collect();

        Grid::from_rows(cells)
    }

    /// Reads a grid from a text file with a `"rows columns"` header line
    /// followed by one line of symbols per row.
    pub fn from_file(path: &Path) -> Result<Grid, GridError> {
        let file = File::open(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut lines = BufReader::new(file).lines();

        let header = next_line(&mut lines, path, 1)?;
        let mut values = header.split_whitespace();
        let rows: usize = parse_value(values.next(), path, 1, "row count")?;
        let columns: usize = parse_value(values.next(), path, 1, "column count")?;

        let mut cells = Vec::with_capacity(rows);
        for row in 0..rows {
            let line = next_line(&mut lines, path, row + 2)?;
            let row_cells: Vec<Cell> = line.chars().map(Cell::from_symbol).collect();
            if row_cells.len() != columns {
                return Err(GridError::Ragged {
                    row,
                    found: row_cells.len(),
                    expected: columns,
                });
            }
            cells.push(row_cells);
        }

        let grid = Grid::from_rows(cells)?;
        debug!(rows, columns, "loaded grid");
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells[0].len()
    }

    pub fn cell(&self, position: Position) -> Cell {
        self.cells[position.0][position.1]
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let columns = self.columns();
        (0..self.rows()).flat_map(move |row| (0..columns).map(move |column| (row, column)))
    }

    pub fn start(&self) -> Option<Position> {
        self.find(Cell::Start)
    }

    pub fn goal(&self) -> Option<Position> {
        self.find(Cell::Goal)
    }

    fn find(&self, cell: Cell) -> Option<Position> {
        self.positions().find(|&position| self.cell(position) == cell)
    }
}

fn next_line(
    lines: &mut std::io::Lines<BufReader<File>>,
    path: &Path,
    line: usize,
) -> Result<String, GridError> {
    match lines.next() {
        Some(Ok(content)) => Ok(content),
        Some(Err(source)) => Err(GridError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => Err(GridError::Malformed {
            path: path.to_path_buf(),
            line,
            message: "unexpected end of file".to_string(),
        }),
    }
}

fn parse_value<T: std::str::FromStr>(
    value: Option<&str>,
    path: &Path,
    line: usize,
    what: &str,
) -> Result<T, GridError> {
    let value = value.ok_or_else(|| GridError::Malformed {
        path: path.to_path_buf(),
        line,
        message: format!("missing {}", what),
    })?;
    value.parse().map_err(|_| GridError::Malformed {
        path: path.to_path_buf(),
        line,
        message: format!("unable to parse {} {:?}", what, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for symbol in ['.', 'S', 'G', '~', '#', '?'] {
            assert_eq!(Cell::from_symbol(symbol).symbol(), symbol);
        }
    }

    #[test]
    fn entry_costs() {
        assert_eq!(Cell::Free.entry_cost(), Some(1));
        assert_eq!(Cell::Start.entry_cost(), Some(1));
        assert_eq!(Cell::Goal.entry_cost(), Some(1));
        assert_eq!(Cell::Difficult.entry_cost(), Some(3));
        assert_eq!(Cell::Other('?').entry_cost(), Some(1));
        assert_eq!(Cell::Obstacle.entry_cost(), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let result = Grid::from_lines(["..", "..."]);
        assert!(matches!(
            result,
            Err(GridError::Ragged {
                row: 1,
                found: 3,
                expected: 2
            })
        ));
    }

    #[test]
    fn start_and_goal_are_located() {
        let grid = Grid::from_lines(["S.#", ".~G"]).unwrap();
        assert_eq!(grid.start(), Some((0, 0)));
        assert_eq!(grid.goal(), Some((1, 2)));
        assert_eq!(grid.cell((0, 2)), Cell::Obstacle);
    }
}
