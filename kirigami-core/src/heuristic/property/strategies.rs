//! Strategy builders for heuristic property-based tests.
//!
//! Each generator builds a complete [`WeightedGraph`] from a seeded
//! [`SmallRng`], so every proptest case and every rstest seed is fully
//! reproducible. Weights are small integers rendered as `f64`, keeping the
//! incremental bookkeeping exactly representable.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::{EdgeWeight, WeightedGraph};

use super::types::{Fixture, WeightDistribution};

/// Minimum vertex count for structured fixtures.
const MIN_VERTICES: usize = 4;
/// Maximum vertex count; kept small because the scratch oracle rescans
/// every triple after every commit.
const MAX_VERTICES: usize = 10;

/// Generates fixtures covering all five weight distributions.
pub(super) fn fixture_strategy() -> impl Strategy<Value = Fixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> Fixture {
    let graph = match distribution {
        WeightDistribution::Uniform => generate_uniform(rng),
        WeightDistribution::Planted => generate_planted(rng, 0.1, false),
        WeightDistribution::ZeroHeavy => generate_zero_heavy(rng),
        WeightDistribution::PreDecided => generate_planted(rng, 0.0, true),
        WeightDistribution::Tiny => generate_tiny(rng),
    };
    Fixture {
        graph,
        distribution,
    }
}

fn set_finite(graph: &mut WeightedGraph, u: usize, v: usize, weight: f64) {
    graph
        .set_weight(u, v, EdgeWeight::Finite(weight))
        .expect("generated weights must be valid");
}

fn generate_uniform(rng: &mut SmallRng) -> WeightedGraph {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut graph = WeightedGraph::with_vertices(vertex_count);
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            set_finite(&mut graph, u, v, f64::from(rng.gen_range(-8i32..=8)));
        }
    }
    graph
}

/// Plants a ground-truth partition: positive evidence inside clusters,
/// negative across. `noise` flips the sign of an edge's evidence with the
/// given probability; `pre_decide` commits a consistent subset of edges to
/// sentinels up front.
fn generate_planted(rng: &mut SmallRng, noise: f64, pre_decide: bool) -> WeightedGraph {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let cluster_count = rng.gen_range(2..=3usize);
    let membership: Vec<usize> = (0..vertex_count)
        .map(|_| rng.gen_range(0..cluster_count))
        .collect();

    let mut graph = WeightedGraph::with_vertices(vertex_count);
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            let together = membership[u] == membership[v];
            if pre_decide && rng.gen_bool(0.3) {
                let sentinel = if together {
                    EdgeWeight::Permanent
                } else {
                    EdgeWeight::Forbidden
                };
                graph
                    .set_weight(u, v, sentinel)
                    .expect("generated sentinels must be valid");
                continue;
            }
            let magnitude = f64::from(rng.gen_range(1i32..=8));
            let mut weight = if together { magnitude } else { -magnitude };
            if noise > 0.0 && rng.gen_bool(noise) {
                weight = -weight;
            }
            set_finite(&mut graph, u, v, weight);
        }
    }
    graph
}

fn generate_zero_heavy(rng: &mut SmallRng) -> WeightedGraph {
    const POOL: [f64; 7] = [-2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0];
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut graph = WeightedGraph::with_vertices(vertex_count);
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            set_finite(&mut graph, u, v, POOL[rng.gen_range(0..POOL.len())]);
        }
    }
    graph
}

fn generate_tiny(rng: &mut SmallRng) -> WeightedGraph {
    let vertex_count = rng.gen_range(1..=3usize);
    let mut graph = WeightedGraph::with_vertices(vertex_count);
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            set_finite(&mut graph, u, v, f64::from(rng.gen_range(-4i32..=4)));
        }
    }
    graph
}
