//! Kirigami core library: weighted cluster editing by the induced-cost
//! greedy heuristic.
//!
//! Given a complete edge-weighted graph — positive weights are evidence
//! that two vertices belong together, negative weights that they belong
//! apart — the solver partitions the vertices into disjoint cliques while
//! greedily minimising the total absolute weight of the edges it
//! overrides. Edges are committed one at a time, cheapest estimated
//! consequence first, and every commitment incrementally reprices the
//! edges sharing a vertex triple with it.

mod builder;
mod error;
mod graph;
mod heuristic;
mod kirigami;
mod queue;
mod result;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    builder::KirigamiBuilder,
    error::{KirigamiError, KirigamiErrorCode, Result},
    graph::{Edge, EdgeWeight, GraphError, GraphErrorCode, WeightedGraph},
    kirigami::Kirigami,
    queue::EdgeQueue,
    result::{ClusterId, EditingSolution},
};
