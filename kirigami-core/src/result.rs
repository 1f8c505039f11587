//! Result types for cluster editing solves.
//!
//! Once every edge is committed, the clusters are the connected components
//! of the Permanent-edge subgraph. [`EditingSolution`] reports those
//! components as contiguous per-vertex cluster identifiers alongside the
//! total editing cost and the committed graph itself.

use crate::{graph::EdgeWeight, heuristic::Outcome, union_find::DisjointSet, WeightedGraph};

/// Identifier assigned to a cluster.
///
/// Identifiers are contiguous from zero, assigned in order of each
/// cluster's lowest vertex, so vertex 0 always belongs to cluster 0.
///
/// # Examples
/// ```
/// use kirigami_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

/// The output of a [`crate::Kirigami::solve`] invocation.
///
/// # Examples
/// ```
/// use kirigami_core::{EdgeWeight, KirigamiBuilder, WeightedGraph};
///
/// let mut graph = WeightedGraph::with_vertices(3);
/// graph.set_weight(0, 1, EdgeWeight::Finite(4.0))?;
/// graph.set_weight(0, 2, EdgeWeight::Finite(-1.0))?;
/// graph.set_weight(1, 2, EdgeWeight::Finite(-1.0))?;
///
/// let solution = KirigamiBuilder::new().build()?.solve(&graph)?;
/// assert_eq!(solution.cluster_count(), 2);
/// assert_eq!(solution.clusters(), vec![vec![0, 1], vec![2]]);
/// assert_eq!(solution.total_cost(), 0.0);
/// assert!(solution.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct EditingSolution {
    total_cost: f64,
    assignments: Vec<ClusterId>,
    cluster_count: usize,
    complete: bool,
    graph: WeightedGraph,
}

impl EditingSolution {
    pub(crate) fn from_outcome(outcome: Outcome) -> Self {
        let Outcome {
            total_cost,
            graph,
            complete,
        } = outcome;
        let mut components = DisjointSet::new(graph.vertex_count());
        for edge in graph.edges() {
            if graph.weight(edge) == EdgeWeight::Permanent {
                components.union(edge.u(), edge.v());
            }
        }
        let (labels, cluster_count) = components.component_labels();
        let assignments = labels
            .into_iter()
            .map(|label| ClusterId::new(label as u64))
            .collect();
        Self {
            total_cost,
            assignments,
            cluster_count,
            complete,
            graph,
        }
    }

    /// Total absolute weight of the edges whose evidence the solution
    /// overrides; monotonically accumulated, never negative.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> f64 { self.total_cost }

    /// Cluster identifier per vertex, indexed by vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub fn assignments(&self) -> &[ClusterId] { &self.assignments }

    /// Number of distinct clusters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cluster_count(&self) -> usize { self.cluster_count }

    /// Returns `false` when a commit limit stopped the solve early; the
    /// reported clusters then reflect only the commitments made so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_complete(&self) -> bool { self.complete }

    /// The fully committed graph the clusters were read from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &WeightedGraph { &self.graph }

    /// Groups vertex ids by cluster, ordered by cluster identifier.
    #[must_use]
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        let mut clusters = vec![Vec::new(); self.cluster_count];
        for (vertex, id) in self.assignments.iter().enumerate() {
            clusters[id.get() as usize].push(vertex);
        }
        clusters
    }
}
