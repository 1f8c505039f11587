//! Fixture types shared by the heuristic property suites.

use proptest::prelude::*;

use crate::graph::WeightedGraph;

/// A generated cluster editing instance plus its provenance label.
#[derive(Clone, Debug)]
pub(super) struct Fixture {
    pub(super) graph: WeightedGraph,
    pub(super) distribution: WeightDistribution,
}

/// Weight distributions used to stress different solver paths.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Independent signed integer weights; no planted structure.
    Uniform,
    /// A planted partition with mild sign noise — the realistic case.
    Planted,
    /// Many exact zeros, stressing the pruning path.
    ZeroHeavy,
    /// A planted partition with a consistent subset of edges already
    /// committed to sentinels, stressing forced resolution.
    PreDecided,
    /// One to three vertices; the degenerate cases.
    Tiny,
}

// Manual `Arbitrary` so the weighting can bias towards the planted
// distributions, which exercise the most interesting decision sequences.
impl Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            3 => Just(Self::Uniform),
            3 => Just(Self::Planted),
            2 => Just(Self::ZeroHeavy),
            2 => Just(Self::PreDecided),
            1 => Just(Self::Tiny),
        ]
        .boxed()
    }
}
