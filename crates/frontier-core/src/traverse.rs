//! Breadth-first traversal over both graph representations.
//!
//! # Variants
//!
//! | Variant         | Graph form | Frontier                   | Neighbour scan |
//! |-----------------|------------|----------------------------|----------------|
//! | `MatrixQueue`   | matrix     | `VecDeque`                 | full row, O(n) |
//! | `MatrixRing`    | matrix     | [`BoundedCircularQueue`]   | full row, O(n) |
//! | `ListQueue`     | list       | `VecDeque`                 | O(degree)      |
//!
//! All three share one skeleton: mark the start vertex and enqueue it, then
//! repeatedly dequeue a vertex, append it to the [`TraversalOrder`], and mark
//! and enqueue each unvisited neighbour in ascending index order. Every
//! vertex is enqueued at most once, so the traversal ends once every vertex
//! reachable from the start has been emitted exactly once. Unreachable
//! vertices are simply never emitted.
//!
//! Neighbours are scanned in ascending order in every variant, so for a
//! fixed graph and start vertex the three orders are identical.
//!
//! The ring queue is sized to the vertex count. Since no vertex is enqueued
//! twice it can never fill, and its drop-on-full policy never fires.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyList, AdjacencyMatrix};
use crate::queue::BoundedCircularQueue;

// ---------------------------------------------------------------------------
// VisitedSet
// ---------------------------------------------------------------------------

/// One flag per vertex, reset before each traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    flags: Vec<bool>,
}

impl VisitedSet {
    /// All-false set over `n` vertices.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            flags: vec![false; n],
        }
    }

    /// Clear every flag.
    pub fn reset(&mut self) {
        self.flags.fill(false);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    #[must_use]
    pub fn is_visited(&self, v: usize) -> bool {
        self.flags.get(v).copied().unwrap_or(false)
    }

    /// Mark `v` visited. Returns `true` if it was not visited before, and
    /// `false` for a vertex outside the set.
    pub fn mark(&mut self, v: usize) -> bool {
        self.flags
            .get_mut(v)
            .is_some_and(|flag| !std::mem::replace(flag, true))
    }

    /// Number of vertices currently marked.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }
}

// ---------------------------------------------------------------------------
// TraversalOrder
// ---------------------------------------------------------------------------

/// Vertices in the order they were dequeued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TraversalOrder(Vec<usize>);

impl TraversalOrder {
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, v: usize) -> bool {
        self.0.contains(&v)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for TraversalOrder {
    fn from(order: Vec<usize>) -> Self {
        Self(order)
    }
}

/// Space separated vertex indices.
impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// The three traversal implementations being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Adjacency matrix with `VecDeque`.
    MatrixQueue,
    /// Adjacency matrix with [`BoundedCircularQueue`].
    MatrixRing,
    /// Adjacency list with `VecDeque`.
    ListQueue,
}

impl Variant {
    pub const ALL: [Self; 3] = [Self::MatrixQueue, Self::MatrixRing, Self::ListQueue];

    /// Stable identifier used in logs, timing reports and JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MatrixQueue => "matrix-queue",
            Self::MatrixRing => "matrix-ring",
            Self::ListQueue => "list-queue",
        }
    }

    /// Human description for terminal output.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MatrixQueue => "adjacency matrix, standard queue",
            Self::MatrixRing => "adjacency matrix, ring-buffer queue",
            Self::ListQueue => "adjacency list, standard queue",
        }
    }

    /// Run this variant against the matching representation.
    ///
    /// # Errors
    ///
    /// See [`bfs_matrix`].
    pub fn run(
        self,
        matrix: &AdjacencyMatrix,
        list: &AdjacencyList,
        visited: &mut VisitedSet,
        start: usize,
    ) -> Result<TraversalOrder> {
        match self {
            Self::MatrixQueue => bfs_matrix(matrix, visited, start),
            Self::MatrixRing => bfs_matrix_ring(matrix, visited, start),
            Self::ListQueue => bfs_list(list, visited, start),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn check_inputs(vertex_count: usize, visited: &VisitedSet, start: usize) -> Result<()> {
    if start >= vertex_count {
        return Err(GraphError::StartOutOfRange {
            start,
            vertex_count,
        });
    }
    if visited.len() != vertex_count {
        return Err(GraphError::VisitedSizeMismatch {
            expected: vertex_count,
            actual: visited.len(),
        });
    }
    Ok(())
}

/// BFS over the adjacency matrix with a `VecDeque` frontier.
///
/// # Errors
///
/// Returns [`GraphError::StartOutOfRange`] if `start` is not a vertex and
/// [`GraphError::VisitedSizeMismatch`] if `visited` was sized for a
/// different graph.
pub fn bfs_matrix(
    matrix: &AdjacencyMatrix,
    visited: &mut VisitedSet,
    start: usize,
) -> Result<TraversalOrder> {
    check_inputs(matrix.vertex_count(), visited, start)?;

    let mut queue = VecDeque::new();
    let mut order = Vec::new();
    visited.mark(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for (i, &cell) in matrix.row(current).iter().enumerate() {
            if cell == 1 && visited.mark(i) {
                queue.push_back(i);
            }
        }
    }

    debug!(variant = "matrix-queue", start, visited = order.len(), "bfs complete");
    Ok(TraversalOrder(order))
}

/// BFS over the adjacency matrix with a [`BoundedCircularQueue`] of
/// capacity `n`.
///
/// # Errors
///
/// See [`bfs_matrix`].
#[allow(clippy::cast_possible_wrap)] // vertex counts stay far below i64::MAX
pub fn bfs_matrix_ring(
    matrix: &AdjacencyMatrix,
    visited: &mut VisitedSet,
    start: usize,
) -> Result<TraversalOrder> {
    let n = matrix.vertex_count();
    check_inputs(n, visited, start)?;

    let mut queue = BoundedCircularQueue::new(n);
    let mut order = Vec::new();
    visited.mark(start);
    queue.enqueue(start as i64);

    while !queue.is_empty() {
        let Ok(current) = usize::try_from(queue.dequeue()) else {
            break;
        };
        order.push(current);
        for (i, &cell) in matrix.row(current).iter().enumerate() {
            if cell == 1 && visited.mark(i) {
                queue.enqueue(i as i64);
            }
        }
    }

    debug!(variant = "matrix-ring", start, visited = order.len(), "bfs complete");
    Ok(TraversalOrder(order))
}

/// BFS over the adjacency list with a `VecDeque` frontier.
///
/// # Errors
///
/// See [`bfs_matrix`].
pub fn bfs_list(
    list: &AdjacencyList,
    visited: &mut VisitedSet,
    start: usize,
) -> Result<TraversalOrder> {
    check_inputs(list.vertex_count(), visited, start)?;

    let mut queue = VecDeque::new();
    let mut order = Vec::new();
    visited.mark(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &adjacent in list.neighbors(current) {
            if visited.mark(adjacent) {
                queue.push_back(adjacent);
            }
        }
    }

    debug!(variant = "list-queue", start, visited = order.len(), "bfs complete");
    Ok(TraversalOrder(order))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> (AdjacencyMatrix, AdjacencyList) {
        let m = AdjacencyMatrix::from_rows(&[
            vec![0, 1, 0, 0],
            vec![1, 0, 1, 1],
            vec![0, 1, 0, 0],
            vec![0, 1, 0, 0],
        ])
        .expect("valid matrix");
        let l = AdjacencyList::from_matrix(&m);
        (m, l)
    }

    #[test]
    fn all_variants_visit_star_in_order() {
        let (m, l) = star();
        for variant in Variant::ALL {
            let mut visited = VisitedSet::new(4);
            let order = variant.run(&m, &l, &mut visited, 0).expect("bfs");
            assert_eq!(order.as_slice(), &[0, 1, 2, 3], "{variant}");
            assert_eq!(visited.visited_count(), 4);
        }
    }

    #[test]
    fn isolated_start_visits_only_itself() {
        let m = AdjacencyMatrix::from_rows(&[vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]])
            .expect("valid matrix");
        let l = AdjacencyList::from_matrix(&m);
        for variant in Variant::ALL {
            let mut visited = VisitedSet::new(3);
            let order = variant.run(&m, &l, &mut visited, 2).expect("bfs");
            assert_eq!(order.as_slice(), &[2], "{variant}");
            assert!(!visited.is_visited(0));
        }
    }

    #[test]
    fn start_out_of_range_is_rejected() {
        let (m, _) = star();
        let mut visited = VisitedSet::new(4);
        let err = bfs_matrix(&m, &mut visited, 4).unwrap_err();
        assert_eq!(
            err,
            GraphError::StartOutOfRange {
                start: 4,
                vertex_count: 4
            }
        );
        assert_eq!(visited.visited_count(), 0);
    }

    #[test]
    fn mis_sized_visited_set_is_rejected() {
        let (_, l) = star();
        let mut visited = VisitedSet::new(3);
        let err = bfs_list(&l, &mut visited, 0).unwrap_err();
        assert_eq!(
            err,
            GraphError::VisitedSizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn reset_clears_every_flag() {
        let mut visited = VisitedSet::new(3);
        assert!(visited.mark(1));
        assert!(!visited.mark(1));
        visited.reset();
        assert_eq!(visited.visited_count(), 0);
        assert!(!visited.is_visited(1));
    }

    #[test]
    fn mark_outside_the_set_is_ignored() {
        let mut visited = VisitedSet::new(3);
        assert!(!visited.mark(3));
        assert!(!visited.mark(usize::MAX));
        assert_eq!(visited.visited_count(), 0);
        assert!(!visited.is_visited(3));

        let mut empty = VisitedSet::new(0);
        assert!(!empty.mark(0));
    }

    #[test]
    fn single_vertex_graph() {
        let m = AdjacencyMatrix::empty(1);
        let mut visited = VisitedSet::new(1);
        let order = bfs_matrix_ring(&m, &mut visited, 0).expect("bfs");
        assert_eq!(order.as_slice(), &[0]);
    }

    #[test]
    fn order_displays_space_separated() {
        let order = TraversalOrder::from(vec![3, 0, 2]);
        assert_eq!(order.to_string(), "3 0 2");
        assert_eq!(TraversalOrder::default().to_string(), "");
    }

    #[test]
    fn variant_names_are_stable() {
        let names: Vec<_> = Variant::ALL.iter().map(|v| v.name()).collect();
        assert_eq!(names, ["matrix-queue", "matrix-ring", "list-queue"]);
        let json = serde_json::to_string(&Variant::MatrixRing).expect("serialize");
        assert_eq!(json, "\"matrix-ring\"");
    }
}
