//! Property-based tests for the induced-cost heuristic.
//!
//! Verifies the incrementally maintained induced costs against a
//! from-scratch recomputation oracle after every single commit, and checks
//! solution-level invariants (coverage, partition consistency, cost
//! accounting, determinism) across graph fixtures with varied weight
//! distributions.

mod invariants;
mod oracle;
mod strategies;
mod types;
