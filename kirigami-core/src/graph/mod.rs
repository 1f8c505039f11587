//! Dense weighted-graph store for cluster editing instances.
//!
//! A cluster editing instance is a complete graph: every unordered vertex
//! pair carries a weight. Positive weight is evidence that the endpoints
//! belong to the same cluster, negative weight that they belong apart, and
//! the magnitude is the cost of overriding that evidence. Two sentinel
//! states mark edges whose fate is sealed: [`EdgeWeight::Permanent`] (the
//! edge must be present) and [`EdgeWeight::Forbidden`] (it must be absent).
//! [`EdgeWeight::Zero`] marks cost-free edges that may be pruned from
//! active consideration.
//!
//! Weights are stored in a dense lower-triangular `f64` matrix with the
//! sentinels encoded as `+∞`/`-∞`, so the induced-cost arithmetic in the
//! solver saturates naturally. Reads and writes are O(1).

use thiserror::Error;

/// Errors raised while mutating a [`WeightedGraph`].
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// An endpoint referenced a vertex outside the graph.
    #[error("vertex {vertex} is out of bounds for a graph with {vertex_count} vertices")]
    VertexOutOfBounds {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Both endpoints named the same vertex.
    #[error("edge endpoints must be distinct (got vertex {vertex} twice)")]
    SelfLoop {
        /// The vertex named twice.
        vertex: usize,
    },
    /// A finite weight was NaN or infinite.
    #[error("finite edge weights must be finite numbers (edge ({u}, {v}))")]
    NonFiniteWeight {
        /// Smaller endpoint id.
        u: usize,
        /// Larger endpoint id.
        v: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::VertexOutOfBounds { .. } => GraphErrorCode::VertexOutOfBounds,
            Self::SelfLoop { .. } => GraphErrorCode::SelfLoop,
            Self::NonFiniteWeight { .. } => GraphErrorCode::NonFiniteWeight,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// An endpoint referenced a vertex outside the graph.
    VertexOutOfBounds,
    /// Both endpoints named the same vertex.
    SelfLoop,
    /// A finite weight was NaN or infinite.
    NonFiniteWeight,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexOutOfBounds => "VERTEX_OUT_OF_BOUNDS",
            Self::SelfLoop => "SELF_LOOP",
            Self::NonFiniteWeight => "NON_FINITE_WEIGHT",
        }
    }
}

/// An undirected edge in canonical form (`u < v`).
///
/// The canonical form gives every edge a unique triangular rank, used to
/// index dense per-edge state, and a total order used for deterministic
/// tie-breaking.
///
/// # Examples
/// ```
/// use kirigami_core::Edge;
///
/// let edge = Edge::new(4, 1);
/// assert_eq!((edge.u(), edge.v()), (1, 4));
/// assert!(Edge::new(0, 1) < Edge::new(0, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    u: usize,
    v: usize,
}

impl Edge {
    /// Creates an edge, normalising the endpoints to `u < v`.
    ///
    /// # Panics
    /// Panics when both endpoints name the same vertex; self-loops do not
    /// exist in a cluster editing instance.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        assert_ne!(a, b, "edge endpoints must be distinct");
        if a < b { Self { u: a, v: b } } else { Self { u: b, v: a } }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn u(self) -> usize { self.u }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v(self) -> usize { self.v }

    /// Triangular rank of the edge: a bijection from canonical pairs onto
    /// `0..n(n-1)/2` that does not depend on the vertex count.
    pub(crate) const fn rank(self) -> usize {
        self.v * (self.v - 1) / 2 + self.u
    }
}

/// The weight of a single edge.
///
/// `Finite` weights are always finite and non-zero: writing `Finite(0.0)`
/// through [`WeightedGraph::set_weight`] normalises to [`EdgeWeight::Zero`],
/// and non-finite values are rejected.
///
/// # Examples
/// ```
/// use kirigami_core::EdgeWeight;
///
/// assert!(EdgeWeight::Permanent.is_decided());
/// assert!(EdgeWeight::Forbidden.is_decided());
/// assert!(!EdgeWeight::Finite(-2.5).is_decided());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeWeight {
    /// The edge is permanently absent; no accumulation of finite evidence
    /// can bring it back.
    Forbidden,
    /// The edge is permanently present.
    Permanent,
    /// The edge costs nothing either way.
    Zero,
    /// Undecided evidence: positive favours presence, negative absence.
    Finite(f64),
}

impl EdgeWeight {
    /// Decodes a raw stored value.
    pub(crate) fn from_value(value: f64) -> Self {
        if value == f64::NEG_INFINITY {
            Self::Forbidden
        } else if value == f64::INFINITY {
            Self::Permanent
        } else if value == 0.0 {
            Self::Zero
        } else {
            Self::Finite(value)
        }
    }

    /// Encodes the weight as a raw `f64` with `±∞` sentinels.
    pub(crate) const fn value(self) -> f64 {
        match self {
            Self::Forbidden => f64::NEG_INFINITY,
            Self::Permanent => f64::INFINITY,
            Self::Zero => 0.0,
            Self::Finite(weight) => weight,
        }
    }

    /// Returns `true` for the two final sentinel states.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        matches!(self, Self::Forbidden | Self::Permanent)
    }
}

/// Complete edge-weighted graph over vertices `0..vertex_count`.
///
/// Every pair of distinct vertices has a weight; pairs that were never
/// written read back as [`EdgeWeight::Zero`].
///
/// # Examples
/// ```
/// use kirigami_core::{Edge, EdgeWeight, WeightedGraph};
///
/// let mut graph = WeightedGraph::with_vertices(3);
/// graph.set_weight(0, 1, EdgeWeight::Finite(2.0))?;
/// graph.set_weight(1, 2, EdgeWeight::Forbidden)?;
/// assert_eq!(graph.weight(Edge::new(0, 1)), EdgeWeight::Finite(2.0));
/// assert_eq!(graph.weight(Edge::new(1, 2)), EdgeWeight::Forbidden);
/// assert_eq!(graph.weight(Edge::new(0, 2)), EdgeWeight::Zero);
/// # Ok::<(), kirigami_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedGraph {
    vertex_count: usize,
    weights: Vec<f64>,
}

impl WeightedGraph {
    /// Creates a graph over `vertex_count` vertices with every weight Zero.
    #[must_use]
    pub fn with_vertices(vertex_count: usize) -> Self {
        let pair_count = vertex_count * vertex_count.saturating_sub(1) / 2;
        Self {
            vertex_count,
            weights: vec![0.0; pair_count],
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of vertex pairs, i.e. `n(n-1)/2`.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.weights.len() }

    /// Writes the weight of the edge between `a` and `b`.
    ///
    /// `Finite(0.0)` normalises to [`EdgeWeight::Zero`].
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] when an endpoint is not a
    /// vertex of this graph, [`GraphError::SelfLoop`] when `a == b`, and
    /// [`GraphError::NonFiniteWeight`] when a `Finite` weight is NaN or
    /// infinite.
    pub fn set_weight(&mut self, a: usize, b: usize, weight: EdgeWeight) -> Result<(), GraphError> {
        let edge = self.checked_edge(a, b)?;
        if let EdgeWeight::Finite(value) = weight {
            if !value.is_finite() {
                return Err(GraphError::NonFiniteWeight {
                    u: edge.u(),
                    v: edge.v(),
                });
            }
        }
        self.weights[edge.rank()] = weight.value();
        Ok(())
    }

    /// Reads the weight of `edge`.
    ///
    /// # Panics
    /// Panics when `edge` references a vertex outside this graph.
    #[must_use]
    pub fn weight(&self, edge: Edge) -> EdgeWeight {
        EdgeWeight::from_value(self.weights[edge.rank()])
    }

    /// Enumerates the neighbours of `vertex`.
    ///
    /// The graph is complete, so this yields every other vertex; it exists
    /// so that triple enumeration reads as neighbourhood traversal rather
    /// than index arithmetic.
    pub fn neighbours_of(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertex_count).filter(move |&other| other != vertex)
    }

    /// Enumerates every edge in canonical order.
    ///
    /// # Examples
    /// ```
    /// use kirigami_core::WeightedGraph;
    ///
    /// let graph = WeightedGraph::with_vertices(4);
    /// assert_eq!(graph.edges().count(), 6);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (1..self.vertex_count).flat_map(|v| (0..v).map(move |u| Edge::new(u, v)))
    }

    /// Raw stored value with `±∞` sentinel encoding.
    pub(crate) fn value(&self, edge: Edge) -> f64 {
        self.weights[edge.rank()]
    }

    /// Writes a raw value. Callers are responsible for sentinel semantics.
    pub(crate) fn set_value(&mut self, edge: Edge, value: f64) {
        self.weights[edge.rank()] = value;
    }

    fn checked_edge(&self, a: usize, b: usize) -> Result<Edge, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop { vertex: a });
        }
        for vertex in [a, b] {
            if vertex >= self.vertex_count {
                return Err(GraphError::VertexOutOfBounds {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        Ok(Edge::new(a, b))
    }
}
