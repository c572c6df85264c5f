//! Adjacency list form derived from an [`AdjacencyMatrix`].

use std::fmt;

use serde::Serialize;
use tracing::instrument;

use crate::graph::matrix::AdjacencyMatrix;

/// Per-vertex neighbour sequences, each in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Scan each matrix row and collect the columns holding a `1`.
    #[must_use]
    #[instrument(skip(matrix), fields(n = matrix.vertex_count()))]
    pub fn from_matrix(matrix: &AdjacencyMatrix) -> Self {
        let neighbors = matrix
            .rows()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(j, &cell)| (cell == 1).then_some(j))
                    .collect()
            })
            .collect();
        Self { neighbors }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbours of `v`, ascending. Empty for unknown vertices.
    #[must_use]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.neighbors.get(v).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// Iterate `(vertex, neighbours)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.neighbors.iter().map(Vec::as_slice).enumerate()
    }
}

/// One line per vertex: `i: a b c`.
impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, adj) in self.iter() {
            write!(f, "{v}:")?;
            for n in adj {
                write!(f, " {n}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
