//! Scratch-recomputation oracles for the heuristic property suites.
//!
//! The solver maintains induced costs incrementally; these oracles derive
//! the same quantities the slow way — a full rescan of every triple, or a
//! direct reading of a partition's disagreement cost — so the property
//! suites can compare the two after every commit.

use crate::graph::{Edge, EdgeWeight, WeightedGraph};
use crate::result::ClusterId;

/// Recomputes `(icf, icp)` for `edge` from the current graph state by
/// scanning every triple containing it.
pub(super) fn scratch_induced_costs(graph: &WeightedGraph, edge: Edge) -> (f64, f64) {
    let weight = raw_weight(graph, edge);
    let mut icf = weight.max(0.0);
    let mut icp = (-weight).max(0.0);
    for x in graph.neighbours_of(edge.u()) {
        if x == edge.v() {
            continue;
        }
        let ux = raw_weight(graph, Edge::new(edge.u(), x));
        let vx = raw_weight(graph, Edge::new(edge.v(), x));
        let (pair_icf, pair_icp) = pair_contributions(ux, vx);
        icf += pair_icf;
        icp += pair_icp;
    }
    (icf, icp)
}

/// Disagreement cost of a partition measured against the original
/// weights: present negative evidence inside a cluster, or positive
/// evidence across clusters, is paid in full; sentinels and zeros are
/// free.
pub(super) fn partition_disagreement_cost(
    graph: &WeightedGraph,
    assignments: &[ClusterId],
) -> f64 {
    let mut cost = 0.0;
    for edge in graph.edges() {
        if let EdgeWeight::Finite(weight) = graph.weight(edge) {
            let together = assignments[edge.u()] == assignments[edge.v()];
            if together && weight < 0.0 {
                cost += -weight;
            } else if !together && weight > 0.0 {
                cost += weight;
            }
        }
    }
    cost
}

/// Approximate equality that treats infinities as exact.
pub(super) fn approx_eq(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

fn raw_weight(graph: &WeightedGraph, edge: Edge) -> f64 {
    match graph.weight(edge) {
        EdgeWeight::Forbidden => f64::NEG_INFINITY,
        EdgeWeight::Permanent => f64::INFINITY,
        EdgeWeight::Zero => 0.0,
        EdgeWeight::Finite(weight) => weight,
    }
}

/// Independent restatement of the per-triple contribution rules.
fn pair_contributions(a: f64, b: f64) -> (f64, f64) {
    let icf = if a > 0.0 && b > 0.0 { a.min(b) } else { 0.0 };
    let icp = if a > 0.0 && b < 0.0 {
        a.min(-b)
    } else if a < 0.0 && b > 0.0 {
        (-a).min(b)
    } else {
        0.0
    };
    (icf, icp)
}
