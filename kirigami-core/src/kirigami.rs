//! Solve orchestration for the kirigami library.
//!
//! [`Kirigami`] is the entry point: it holds the solver configuration and
//! runs one induced-cost pass per [`Kirigami::solve`] call. Each call
//! clones the instance graph into a fresh single-use heuristic, so the
//! handle itself is reusable and the caller's graph is never mutated.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    heuristic::InducedCostHeuristic, result::EditingSolution, Result, WeightedGraph,
};

/// Entry point for running the cluster editing heuristic.
///
/// # Examples
/// ```
/// use kirigami_core::{EdgeWeight, KirigamiBuilder, WeightedGraph};
///
/// let mut graph = WeightedGraph::with_vertices(4);
/// graph.set_weight(0, 1, EdgeWeight::Finite(3.0))?;
/// graph.set_weight(2, 3, EdgeWeight::Finite(4.0))?;
/// graph.set_weight(0, 2, EdgeWeight::Finite(-2.0))?;
/// graph.set_weight(0, 3, EdgeWeight::Finite(-2.0))?;
/// graph.set_weight(1, 2, EdgeWeight::Finite(-2.0))?;
/// graph.set_weight(1, 3, EdgeWeight::Finite(-2.0))?;
///
/// let kirigami = KirigamiBuilder::new().build()?;
/// let solution = kirigami.solve(&graph)?;
/// assert_eq!(solution.clusters(), vec![vec![0, 1], vec![2, 3]]);
/// assert_eq!(solution.total_cost(), 0.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Kirigami {
    prune_zero_edges: bool,
    commit_limit: Option<NonZeroUsize>,
}

impl Kirigami {
    pub(crate) const fn new(prune_zero_edges: bool, commit_limit: Option<NonZeroUsize>) -> Self {
        Self {
            prune_zero_edges,
            commit_limit,
        }
    }

    /// Returns whether exact-Zero edges are pruned up front.
    #[must_use]
    #[rustfmt::skip]
    pub const fn prune_zero_edges(&self) -> bool { self.prune_zero_edges }

    /// Returns the commitment cap applied to each solve, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn commit_limit(&self) -> Option<NonZeroUsize> { self.commit_limit }

    /// Runs the induced-cost heuristic over `graph` and reports the
    /// resulting clustering.
    ///
    /// The call is blocking and deterministic: solving the same graph with
    /// the same configuration yields the same clusters and cost.
    ///
    /// # Errors
    /// Returns [`crate::KirigamiError::InconsistentGraph`] when the
    /// pre-committed edges of the input contradict each other, and
    /// [`crate::KirigamiError::InvariantViolation`] if internal bookkeeping
    /// breaks (a logic error, not an input condition).
    #[instrument(
        name = "core.solve",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            prune_zero_edges = self.prune_zero_edges,
        ),
    )]
    pub fn solve(&self, graph: &WeightedGraph) -> Result<EditingSolution> {
        let heuristic = InducedCostHeuristic::new(graph.clone(), self.prune_zero_edges);
        let outcome = heuristic.solve(self.commit_limit)?;
        let solution = EditingSolution::from_outcome(outcome);
        info!(
            clusters = solution.cluster_count(),
            total_cost = solution.total_cost(),
            complete = solution.is_complete(),
            "cluster editing completed"
        );
        Ok(solution)
    }
}
