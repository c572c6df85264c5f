//! Adjacency matrix form of an undirected graph.
//!
//! Entries are stored row-major in a single buffer. `1` marks an edge and
//! `0` its absence. The diagonal is always `0` and `m[i][j] == m[j][i]` for
//! every pair, whether the matrix came from the generator or from
//! [`AdjacencyMatrix::from_rows`].

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{GraphError, Result};

/// Symmetric 0/1 matrix over `n` vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Matrix with `n` vertices and no edges.
    #[must_use]
    pub fn empty(n: usize) -> Self {
        Self {
            n,
            cells: vec![0; n * n],
        }
    }

    /// Build a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are not square, contain values other
    /// than 0 and 1, mark a self-loop, or are not symmetric.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);

        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(GraphError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value > 1 {
                    return Err(GraphError::NonBinaryEntry { row, col, value });
                }
                if row == col && value == 1 {
                    return Err(GraphError::SelfLoop(row));
                }
            }
            cells.extend_from_slice(values);
        }

        for row in 0..n {
            for col in (row + 1)..n {
                if cells[row * n + col] != cells[col * n + row] {
                    return Err(GraphError::Asymmetric { row, col });
                }
            }
        }

        Ok(Self { n, cells })
    }

    /// Write one undirected edge indicator into both `(i, j)` and `(j, i)`.
    pub(crate) fn set_pair(&mut self, i: usize, j: usize, bit: u8) {
        debug_assert!(i != j, "diagonal stays zero");
        self.cells[i * self.n + j] = bit;
        self.cells[j * self.n + i] = bit;
    }

    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.n
    }

    /// Row `i` as a slice of `n` edge indicators.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[u8] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    /// Iterate rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact(0) panics; an empty matrix has no rows anyway.
        self.cells.chunks_exact(self.n.max(1))
    }

    /// Whether `i` and `j` are adjacent. Out-of-range indices are never adjacent.
    #[must_use]
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        i < self.n && j < self.n && self.cells[i * self.n + j] == 1
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count() / 2
    }

    /// Fraction of possible undirected edges present. Zero for `n < 2`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn density(&self) -> f64 {
        if self.n < 2 {
            return 0.0;
        }
        let possible = self.n * (self.n - 1) / 2;
        self.edge_count() as f64 / possible as f64
    }

    /// BLAKE3 hash of the vertex count and cells, for comparing runs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.n as u64).to_le_bytes());
        hasher.update(&self.cells);
        format!("blake3:{}", hasher.finalize())
    }
}

impl Serialize for AdjacencyMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// Row-major, space separated, one row per line.
impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
