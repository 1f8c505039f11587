//! Error types for the kirigami core library.
//!
//! Defines the solve-time error enum exposed by the public API, its stable
//! machine-readable code companion, and a convenient result alias.
//! Construction-time graph errors live with the graph store
//! ([`crate::GraphError`]).

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running [`crate::Kirigami`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KirigamiError {
    /// The commit limit, when set, must allow at least one commitment.
    #[error("commit_limit must be at least 1 (got {got})")]
    InvalidCommitLimit {
        /// The invalid commit limit supplied by the caller.
        got: usize,
    },
    /// A vertex pair is forced to be both joined and separated: the
    /// pre-committed edges of the input contradict each other.
    #[error("edge ({u}, {v}) is forced to be both present and absent; the input is inconsistent")]
    InconsistentGraph {
        /// Smaller endpoint id of the contradictory edge.
        u: usize,
        /// Larger endpoint id of the contradictory edge.
        v: usize,
    },
    /// Internal bookkeeping failed; indicates a logic error, never a bad
    /// input.
    #[error("solver invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`KirigamiError`] variants.
    enum KirigamiErrorCode for KirigamiError {
        /// The commit limit, when set, must allow at least one commitment.
        InvalidCommitLimit => InvalidCommitLimit { .. } => "KIRIGAMI_INVALID_COMMIT_LIMIT",
        /// The input's pre-committed edges contradict each other.
        InconsistentGraph => InconsistentGraph { .. } => "KIRIGAMI_INCONSISTENT_GRAPH",
        /// Internal bookkeeping failed.
        InvariantViolation => InvariantViolation { .. } => "KIRIGAMI_INVARIANT_VIOLATION",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, KirigamiError>;
