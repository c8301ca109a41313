use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Lines},
    path::{Path, PathBuf},
    str::FromStr,
};

use clap::ValueEnum;
use indicatif::ProgressIterator;
use thiserror::Error;
use tracing::debug;

use super::{Graph, GraphError, Vertex, Weight};

/// Vertex numbering used inside an edge-list file. Files are normalized to
/// zero-based ids while loading; the caller states the base explicitly
/// instead of it being guessed from the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum IndexBase {
    Zero,
    One,
}

impl IndexBase {
    /// Converts a vertex id from the file's numbering to zero-based. `None`
    /// for the id 0 in a one-based file.
    pub fn rebase(self, vertex: Vertex) -> Option<Vertex> {
        match self {
            IndexBase::Zero => Some(vertex),
            IndexBase::One => vertex.checked_sub(1),
        }
    }

    /// Converts a zero-based vertex id back to the file's numbering.
    pub fn display(self, vertex: Vertex) -> Vertex {
        match self {
            IndexBase::Zero => vertex,
            IndexBase::One => vertex + 1,
        }
    }
}

impl std::fmt::Display for IndexBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            IndexBase::Zero => "zero",
            IndexBase::One => "one",
        })
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
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
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("bad graph snapshot {}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
}

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Reads a graph from a text file with a `"V E"` header line followed by
    /// `E` lines of `"tail head weight"`.
    pub fn from_edge_list_file(
        path: &Path,
        directed: bool,
        index_base: IndexBase,
    ) -> Result<Graph, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut lines = BufReader::new(file).lines();

        let header = next_line(&mut lines, path, 1)?;
        let mut values = header.split_whitespace();
        let number_of_vertices: u32 = parse_value(values.next(), path, 1, "vertex count")?;
        let number_of_edges: usize = parse_value(values.next(), path, 1, "edge count")?;

        let mut graph = Graph::new(number_of_vertices, directed)?;
        for index in (0..number_of_edges).progress_count(number_of_edges as u64) {
            let line_number = index + 2;
            let line = next_line(&mut lines, path, line_number)?;
            let mut values = line.split_whitespace();

            let tail = rebase(
                parse_value(values.next(), path, line_number, "tail")?,
                index_base,
                path,
                line_number,
            )?;
            let head = rebase(
                parse_value(values.next(), path, line_number, "head")?,
                index_base,
                path,
                line_number,
            )?;
            let weight: Weight = parse_value(values.next(), path, line_number, "weight")?;

            graph.add_edge(tail, head, weight)?;
        }

        debug!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            directed,
            "loaded edge list"
        );
        Ok(graph)
    }

    /// Reads a graph written by [`GraphFactory::write_bincode_file`].
    pub fn from_bincode_file(path: &Path) -> Result<Graph, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        bincode::deserialize_from(reader).map_err(|source| LoadError::Snapshot {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn write_bincode_file(graph: &Graph, path: &Path) -> Result<(), LoadError> {
        let file = File::create(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let writer = BufWriter::new(file);

        bincode::serialize_into(writer, graph).map_err(|source| LoadError::Snapshot {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn next_line(
    lines: &mut Lines<BufReader<File>>,
    path: &Path,
    line: usize,
) -> Result<String, LoadError> {
    match lines.next() {
        Some(Ok(content)) => Ok(content),
        Some(Err(source)) => Err(LoadError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => Err(malformed(path, line, "unexpected end of file".to_string())),
    }
}

fn parse_value<T: FromStr>(
    value: Option<&str>,
    path: &Path,
    line: usize,
    what: &str,
) -> Result<T, LoadError> {
    let value = value.ok_or_else(|| malformed(path, line, format!("missing {}", what)))?;
    value
        .parse()
        .map_err(|_| malformed(path, line, format!("unable to parse {} {:?}", what, value)))
}

fn rebase(
    vertex: Vertex,
    index_base: IndexBase,
    path: &Path,
    line: usize,
) -> Result<Vertex, LoadError> {
    index_base.rebase(vertex).ok_or_else(|| {
        malformed(
            path,
            line,
            "vertex 0 cannot appear in a one-based file".to_string(),
        )
    })
}

fn malformed(path: &Path, line: usize, message: String) -> LoadError {
    LoadError::Malformed {
        path: path.to_path_buf(),
        line,
        message,
    }
}
