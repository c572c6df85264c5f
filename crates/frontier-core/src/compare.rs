//! Run every traversal variant against one graph.
//!
//! A single [`VisitedSet`] is shared by the runs and reset before each one,
//! so no traversal sees marks left behind by another.

use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::bench::Bench;
use crate::error::Result;
use crate::graph::{AdjacencyList, AdjacencyMatrix};
use crate::traverse::{TraversalOrder, Variant, VisitedSet};

/// Which variants are timed and how often each one runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Runs per variant. Zero is treated as one.
    pub repeat: usize,
    /// Time the adjacency-list variant too. The matrix variants are always
    /// timed.
    pub measure_list: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            repeat: 1,
            measure_list: false,
        }
    }
}

impl CompareOptions {
    /// Time every variant.
    #[must_use]
    pub const fn all_measured(repeat: usize) -> Self {
        Self {
            repeat,
            measure_list: true,
        }
    }

    #[must_use]
    pub const fn is_measured(&self, variant: Variant) -> bool {
        match variant {
            Variant::MatrixQueue | Variant::MatrixRing => true,
            Variant::ListQueue => self.measure_list,
        }
    }
}

/// Result of one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRun {
    pub variant: Variant,
    pub order: TraversalOrder,
    /// Median elapsed time across repeats; `None` when not measured.
    pub elapsed: Option<Duration>,
}

/// Results of all variants on one graph.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub start: usize,
    pub runs: Vec<VariantRun>,
    pub bench: Bench,
}

impl Comparison {
    #[must_use]
    pub fn run(&self, variant: Variant) -> Option<&VariantRun> {
        self.runs.iter().find(|r| r.variant == variant)
    }

    /// True when every variant emitted the same order.
    #[must_use]
    pub fn orders_agree(&self) -> bool {
        self.runs.windows(2).all(|w| w[0].order == w[1].order)
    }
}

/// Run every variant from `start`, in [`Variant::ALL`] order.
///
/// # Errors
///
/// Returns an error if `start` is not a vertex of the graph.
#[instrument(skip(matrix, list), fields(n = matrix.vertex_count()))]
pub fn compare(
    matrix: &AdjacencyMatrix,
    list: &AdjacencyList,
    start: usize,
    options: CompareOptions,
) -> Result<Comparison> {
    let repeat = options.repeat.max(1);
    let mut visited = VisitedSet::new(matrix.vertex_count());
    let mut bench = Bench::new();
    let mut runs = Vec::with_capacity(Variant::ALL.len());

    for variant in Variant::ALL {
        let measured = options.is_measured(variant);
        let mut order = TraversalOrder::default();

        for _ in 0..repeat {
            visited.reset();
            order = if measured {
                let (result, _) =
                    bench.timed(variant.name(), || variant.run(matrix, list, &mut visited, start));
                result?
            } else {
                variant.run(matrix, list, &mut visited, start)?
            };
        }

        let elapsed = measured
            .then(|| bench.report().get(variant.name()).map(|op| op.median))
            .flatten();
        debug!(%variant, visited = order.len(), ?elapsed, "variant finished");
        runs.push(VariantRun {
            variant,
            order,
            elapsed,
        });
    }

    let comparison = Comparison { start, runs, bench };
    if !comparison.orders_agree() {
        info!(start, "traversal orders differ between variants");
    }
    Ok(comparison)
}
