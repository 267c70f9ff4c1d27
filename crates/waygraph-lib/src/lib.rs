//! waygraph library entry points.
//!
//! This crate is the low-level data and geometry layer of a road-network
//! routing engine: the byte-order-aware wire codec used to persist per-edge
//! properties ([`bitpack`]), the integer-sequence algorithms used to
//! renumber and reorder graph arrays ([`rearrange`]), and the
//! heading-constrained edge filter applied during route-request
//! preprocessing ([`heading`]). Higher-level consumers (graph storage,
//! search, import) should depend on the items exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod bitpack;
pub mod error;
pub mod geom;
pub mod heading;
pub mod random;
pub mod rearrange;

pub use bitpack::ByteOrder;
pub use error::{Error, Result};
pub use geom::{angular_difference, BearingCalc, GeoPoint, GreatCircleBearing, PlanarBearing};
pub use heading::{AdjacentEdges, EdgeId, HeadingResolver, IncidentEdge, NodeId};
pub use random::{RandomSource, SplitMix64};
