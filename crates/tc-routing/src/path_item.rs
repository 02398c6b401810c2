//! Composite edge weight: travel time plus display provenance.
//!
//! Relaxation only ever needs `+` and `<` over the time component, but the
//! per-edge weights double as the `items` of a Route response, so ride and
//! wait edges carry who they are.  Addition collapses to the bare
//! [`PathItem::Total`] variant: an accumulated weight has no single bus or
//! stop to name, and route reconstruction re-reads per-edge weights from
//! the graph anyway.

use std::ops::Add;
use std::sync::Arc;

// ── RouteWeight ───────────────────────────────────────────────────────────────

/// Weight contract for [`crate::AllPairsRouter`]: an additive, comparable
/// quantity with an identity.  `PartialOrd` (not `Ord`) because times are
/// floats.
pub trait RouteWeight: Clone + PartialOrd + Add<Output = Self> {
    /// The additive identity — the weight of an empty route.
    fn zero() -> Self;
}

// ── PathItem ──────────────────────────────────────────────────────────────────

/// One step of a journey, or an accumulated total.
///
/// Times are in minutes throughout.
#[derive(Clone, Debug)]
pub enum PathItem {
    /// Waiting at `stop` before boarding.
    Wait { stop: Arc<str>, time: f64 },
    /// Riding `bus` over `span_count` consecutive stop-to-stop hops.
    Ride {
        bus: Arc<str>,
        time: f64,
        span_count: usize,
    },
    /// A provenance-free sum of other items.
    Total { time: f64 },
}

impl PathItem {
    pub fn time(&self) -> f64 {
        match self {
            PathItem::Wait { time, .. }
            | PathItem::Ride { time, .. }
            | PathItem::Total { time } => *time,
        }
    }
}

impl Add for PathItem {
    type Output = PathItem;

    fn add(self, rhs: PathItem) -> PathItem {
        PathItem::Total {
            time: self.time() + rhs.time(),
        }
    }
}

impl PartialEq for PathItem {
    fn eq(&self, other: &Self) -> bool {
        self.time() == other.time()
    }
}

impl PartialOrd for PathItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.time().partial_cmp(&other.time())
    }
}

impl RouteWeight for PathItem {
    fn zero() -> Self {
        PathItem::Total { time: 0.0 }
    }
}
