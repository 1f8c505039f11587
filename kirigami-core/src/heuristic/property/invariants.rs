//! Invariant runners for the heuristic property suites.
//!
//! Each runner takes a generated fixture and returns a
//! [`TestCaseResult`], so the same logic backs both the proptest runners
//! and the targeted rstest seeds.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::EdgeWeight;
use crate::heuristic::InducedCostHeuristic;
use crate::result::EditingSolution;

use super::oracle::{approx_eq, partition_disagreement_cost, scratch_induced_costs};
use super::types::Fixture;

/// After initial resolution and after every single commit, the
/// incrementally maintained icf/icp of every queued edge must equal a
/// from-scratch recomputation, and the running cost must never decrease.
pub(super) fn run_incremental_equivalence(fixture: &Fixture, prune: bool) -> TestCaseResult {
    let mut heuristic = InducedCostHeuristic::new(fixture.graph.clone(), prune);
    heuristic.resolve_permanent_forbidden().map_err(|error| {
        TestCaseError::fail(format!(
            "resolution failed on a consistent fixture: {error} ({fixture:?})"
        ))
    })?;
    check_induced_costs(&heuristic, fixture)?;

    let mut previous_cost = heuristic.total_cost;
    loop {
        let progressed = heuristic.commit_next().map_err(|error| {
            TestCaseError::fail(format!(
                "commit failed on a consistent fixture: {error} ({fixture:?})"
            ))
        })?;
        if heuristic.total_cost < previous_cost {
            return Err(TestCaseError::fail(format!(
                "total cost decreased from {previous_cost} to {} ({fixture:?})",
                heuristic.total_cost,
            )));
        }
        previous_cost = heuristic.total_cost;
        if !progressed {
            break;
        }
        check_induced_costs(&heuristic, fixture)?;
    }
    Ok(())
}

/// Solves the fixture and checks the terminal-state properties: full
/// coverage, partition consistency, exact cost accounting, and
/// run-to-run determinism.
pub(super) fn run_solution_invariants(fixture: &Fixture, prune: bool) -> TestCaseResult {
    let outcome = InducedCostHeuristic::new(fixture.graph.clone(), prune)
        .solve(None)
        .map_err(|error| {
            TestCaseError::fail(format!(
                "solve failed on a consistent fixture: {error} ({fixture:?})"
            ))
        })?;
    let solution = EditingSolution::from_outcome(outcome);

    for edge in solution.graph().edges() {
        let weight = solution.graph().weight(edge);
        if matches!(weight, EdgeWeight::Finite(_)) {
            return Err(TestCaseError::fail(format!(
                "edge {edge:?} left undecided as {weight:?} ({fixture:?})"
            )));
        }
        let together =
            solution.assignments()[edge.u()] == solution.assignments()[edge.v()];
        let consistent = match weight {
            EdgeWeight::Permanent => together,
            EdgeWeight::Forbidden => !together,
            EdgeWeight::Zero => true,
            EdgeWeight::Finite(_) => false,
        };
        if !consistent {
            return Err(TestCaseError::fail(format!(
                "edge {edge:?} is {weight:?} but its endpoints are {} ({fixture:?})",
                if together { "clustered together" } else { "separated" },
            )));
        }
    }

    let expected_cost = partition_disagreement_cost(&fixture.graph, solution.assignments());
    if !approx_eq(solution.total_cost(), expected_cost) {
        return Err(TestCaseError::fail(format!(
            "total cost {} disagrees with the partition's disagreement cost {expected_cost} ({fixture:?})",
            solution.total_cost(),
        )));
    }

    let rerun = InducedCostHeuristic::new(fixture.graph.clone(), prune)
        .solve(None)
        .map_err(|error| TestCaseError::fail(format!("second solve failed: {error}")))?;
    let rerun = EditingSolution::from_outcome(rerun);
    if rerun.assignments() != solution.assignments()
        || rerun.total_cost() != solution.total_cost()
    {
        return Err(TestCaseError::fail(format!(
            "repeated solves disagreed: {:?}/{} vs {:?}/{} ({fixture:?})",
            solution.assignments(),
            solution.total_cost(),
            rerun.assignments(),
            rerun.total_cost(),
        )));
    }

    Ok(())
}

fn check_induced_costs(heuristic: &InducedCostHeuristic, fixture: &Fixture) -> TestCaseResult {
    for edge in heuristic.graph.edges() {
        if !heuristic.queue.contains(edge) {
            continue;
        }
        let (expected_icf, expected_icp) = scratch_induced_costs(&heuristic.graph, edge);
        let rank = edge.rank();
        if !approx_eq(heuristic.icf[rank], expected_icf) {
            return Err(TestCaseError::fail(format!(
                "icf drifted for {edge:?}: incremental {} vs scratch {expected_icf} ({fixture:?})",
                heuristic.icf[rank],
            )));
        }
        if !approx_eq(heuristic.icp[rank], expected_icp) {
            return Err(TestCaseError::fail(format!(
                "icp drifted for {edge:?}: incremental {} vs scratch {expected_icp} ({fixture:?})",
                heuristic.icp[rank],
            )));
        }
    }
    Ok(())
}
