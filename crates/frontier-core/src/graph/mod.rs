//! Undirected graph representations.
//!
//! # Overview
//!
//! A graph is generated once as an [`AdjacencyMatrix`] and converted into an
//! [`AdjacencyList`]. Both forms are immutable after construction and describe
//! the same undirected, unweighted graph without self-loops.
//!
//! ## Pipeline
//!
//! ```text
//! GraphGenerator::generate(n)
//!        ↓
//! AdjacencyMatrix (n×n, symmetric, zero diagonal)
//!        ↓  AdjacencyList::from_matrix()
//! AdjacencyList (ascending neighbour indices per vertex)
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use frontier_core::graph::{AdjacencyList, GraphGenerator};
//!
//! let mut generator = GraphGenerator::from_seed(7);
//! let matrix = generator.generate(6);
//! let list = AdjacencyList::from_matrix(&matrix);
//! assert_eq!(list.vertex_count(), 6);
//! ```

pub mod generate;
pub mod list;
pub mod matrix;

pub use generate::{GraphGenerator, clock_seed};
pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;
