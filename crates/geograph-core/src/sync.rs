//! Shared access to a finished graph.
//!
//! `GeoGraph` itself has no interior locking. Consumers that need to read
//! or update a graph from several threads wrap it in a single-writer lock.
//!
//! ```rust,ignore
//! use geograph_core::sync::SharedGeoGraph;
//!
//! let shared: SharedGeoGraph = graph.into_shared();
//! let size = shared.read().size();
//! shared.write().get_vertex_mut(0)?.set_heuristic(1.5);
//! ```

pub use parking_lot::RwLock;
pub use std::sync::Arc;

use crate::graph::GeoGraph;

/// A graph behind a reader/writer lock.
pub type SharedGeoGraph = Arc<RwLock<GeoGraph>>;

impl GeoGraph {
    /// Moves the graph behind a shared reader/writer lock.
    #[must_use]
    pub fn into_shared(self) -> SharedGeoGraph {
        Arc::new(RwLock::new(self))
    }
}
