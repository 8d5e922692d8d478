//! Complete weighted graph over geo-referenced nodes.
//!
//! This module provides:
//! - `GeoNode`: a labelled vertex with a resolved position
//! - `GeoGraph`: vertex storage plus a dense edge-weight matrix
//!
//! # Example
//!
//! ```rust,ignore
//! use geograph_core::{GeoGraph, GeoNode, GeoPoint, great_circle_km};
//!
//! let mut graph = GeoGraph::new();
//! let a = GeoNode::at(0, "A", GeoPoint::new(0.0, 0.0));
//! let b = GeoNode::at(1, "B", GeoPoint::new(90.0, 0.0));
//! let d = great_circle_km(a.point(Default::default()), b.point(Default::default()));
//! graph.add_vertex(a)?;
//! graph.add_vertex(b)?;
//! graph.add_edge(0, 1, d, false)?;
//! ```

mod matrix;
mod node;
mod store;

#[cfg(test)]
mod matrix_tests;

pub use matrix::EdgeMatrix;
pub use node::{GeoNode, NodeId};
pub use store::GeoGraph;
