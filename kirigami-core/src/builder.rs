//! Builder utilities for configuring a [`Kirigami`] solver.
//!
//! The solver has two tunables: whether exact-Zero edges are pruned from
//! the undecided set up front, and an optional cap on the number of
//! heuristic commitments for externally bounded runs.

use std::num::NonZeroUsize;

use crate::{error::KirigamiError, kirigami::Kirigami, Result};

/// Configures and constructs [`Kirigami`] instances.
///
/// # Examples
/// ```
/// use kirigami_core::KirigamiBuilder;
///
/// let kirigami = KirigamiBuilder::new()
///     .with_prune_zero_edges(true)
///     .build()
///     .expect("builder configuration is valid");
/// assert!(kirigami.prune_zero_edges());
/// ```
#[derive(Debug, Clone, Default)]
pub struct KirigamiBuilder {
    prune_zero_edges: bool,
    commit_limit: Option<usize>,
}

impl KirigamiBuilder {
    /// Creates a builder populated with default parameters: zero edges
    /// stay in the undecided set and solves run to completion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects whether exact-Zero edges are committed immediately at zero
    /// cost instead of entering the priority queue.
    ///
    /// # Examples
    /// ```
    /// use kirigami_core::KirigamiBuilder;
    ///
    /// let builder = KirigamiBuilder::new().with_prune_zero_edges(true);
    /// assert!(builder.prune_zero_edges());
    /// ```
    #[must_use]
    pub const fn with_prune_zero_edges(mut self, prune: bool) -> Self {
        self.prune_zero_edges = prune;
        self
    }

    /// Returns the configured pruning flag.
    #[must_use]
    #[rustfmt::skip]
    pub const fn prune_zero_edges(&self) -> bool { self.prune_zero_edges }

    /// Caps the number of heuristic commitments per solve. The cap is
    /// checked between iterations; when it is reached, the solve returns a
    /// partial solution flagged incomplete.
    ///
    /// # Examples
    /// ```
    /// use kirigami_core::KirigamiBuilder;
    ///
    /// let builder = KirigamiBuilder::new().with_commit_limit(128);
    /// assert_eq!(builder.commit_limit(), Some(128));
    /// ```
    #[must_use]
    pub const fn with_commit_limit(mut self, limit: usize) -> Self {
        self.commit_limit = Some(limit);
        self
    }

    /// Returns the configured commit limit, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn commit_limit(&self) -> Option<usize> { self.commit_limit }

    /// Validates the configuration and constructs a [`Kirigami`] instance.
    ///
    /// # Errors
    /// Returns [`KirigamiError::InvalidCommitLimit`] when a commit limit of
    /// zero was requested.
    ///
    /// # Examples
    /// ```
    /// use kirigami_core::{KirigamiBuilder, KirigamiError};
    ///
    /// let err = KirigamiBuilder::new()
    ///     .with_commit_limit(0)
    ///     .build()
    ///     .expect_err("a zero commit limit is invalid");
    /// assert_eq!(err, KirigamiError::InvalidCommitLimit { got: 0 });
    /// ```
    pub fn build(self) -> Result<Kirigami> {
        let commit_limit = match self.commit_limit {
            Some(limit) => Some(
                NonZeroUsize::new(limit).ok_or(KirigamiError::InvalidCommitLimit { got: limit })?,
            ),
            None => None,
        };
        Ok(Kirigami::new(self.prune_zero_edges, commit_limit))
    }
}
