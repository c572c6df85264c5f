#![forbid(unsafe_code)]
//! frontier-core library.
//!
//! Breadth-first traversal compared across three implementations: adjacency
//! matrix with `VecDeque`, adjacency matrix with a fixed-capacity ring queue,
//! and adjacency list with `VecDeque`.
//!
//! # Conventions
//!
//! - **Errors**: [`GraphError`] for graph and traversal failures,
//!   `anyhow::Result` for config loading.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//!
//! # Example
//!
//! ```rust
//! use frontier_core::compare::{CompareOptions, compare};
//! use frontier_core::graph::{AdjacencyList, AdjacencyMatrix};
//!
//! let matrix = AdjacencyMatrix::from_rows(&[
//!     vec![0, 1, 0, 0],
//!     vec![1, 0, 1, 1],
//!     vec![0, 1, 0, 0],
//!     vec![0, 1, 0, 0],
//! ])?;
//! let list = AdjacencyList::from_matrix(&matrix);
//! let cmp = compare(&matrix, &list, 0, CompareOptions::default())?;
//! assert!(cmp.orders_agree());
//! assert_eq!(cmp.runs[0].order.as_slice(), &[0, 1, 2, 3]);
//! # Ok::<(), frontier_core::GraphError>(())
//! ```

pub mod bench;
pub mod compare;
pub mod config;
pub mod error;
pub mod graph;
pub mod queue;
pub mod traverse;

pub use error::{GraphError, Result};
pub use graph::{AdjacencyList, AdjacencyMatrix, GraphGenerator};
pub use queue::BoundedCircularQueue;
pub use traverse::{TraversalOrder, Variant, VisitedSet};
