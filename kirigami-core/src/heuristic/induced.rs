//! Per-triple induced-cost contributions.
//!
//! For an edge `uw` and a third vertex `v`, the triple `(u, v, w)` closes
//! through the two edges `uv` and `vw`. Their weights determine how much
//! committing `uw` would cost elsewhere in that triple:
//!
//! - forcing `uw` absent breaks the triangle when both closing edges are
//!   present, so the cheaper of the two has to go;
//! - forcing `uw` present pulls `u` and `w` into one cluster, which clashes
//!   when exactly one closing edge is present: either the present one is
//!   deleted or the absent one is inserted, whichever is cheaper.
//!
//! Sentinel weights participate as `±∞`, so a triple that is already
//! committed against a choice pushes that choice's induced cost to `+∞`.
//! Agreeing pairs and Zero partners contribute nothing.

/// Contribution of one triple to the cost of forcing the edge Forbidden.
pub(crate) fn icf_pair(uv: f64, vw: f64) -> f64 {
    if uv > 0.0 && vw > 0.0 {
        uv.min(vw)
    } else {
        0.0
    }
}

/// Contribution of one triple to the cost of forcing the edge Permanent.
pub(crate) fn icp_pair(uv: f64, vw: f64) -> f64 {
    if uv < 0.0 && vw > 0.0 {
        (-uv).min(vw)
    } else if uv > 0.0 && vw < 0.0 {
        uv.min(-vw)
    } else {
        0.0
    }
}
