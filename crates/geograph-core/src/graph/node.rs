//! Graph node type for geo-referenced vertices.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::geo::{AxisOrder, CoordinateSource, GeoPoint};

/// Identity of a node inside a graph.
///
/// Two nodes are the same vertex only when their IDs are equal; label and
/// position play no part in identity.
pub type NodeId = u64;

/// A labelled, positioned vertex.
///
/// # Example
///
/// ```rust,ignore
/// use geograph_core::{GeoNode, GeoPoint};
///
/// let node = GeoNode::at(1, "Paris", GeoPoint::new(2.35, 48.85));
/// assert_eq!(node.heuristic(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeoNode {
    id: NodeId,
    label: String,
    position: CoordinateSource,
    heuristic: f64,
    properties: HashMap<String, Value>,
}

impl GeoNode {
    /// Creates a node with the given identity, label and position.
    #[must_use]
    pub fn new(id: NodeId, label: &str, position: CoordinateSource) -> Self {
        Self {
            id,
            label: label.to_string(),
            position,
            heuristic: 0.0,
            properties: HashMap::new(),
        }
    }

    /// Creates a node positioned at a single point.
    #[must_use]
    pub fn at(id: NodeId, label: &str, point: GeoPoint) -> Self {
        Self::new(id, label, CoordinateSource::Combined(point))
    }

    /// Adds properties to this node (builder pattern).
    #[must_use]
    pub fn with_properties(mut self, properties: HashMap<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    /// Returns the node ID.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the node label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns where the node's coordinates came from.
    #[must_use]
    pub fn position(&self) -> &CoordinateSource {
        &self.position
    }

    /// Returns the surface point of this node.
    #[must_use]
    pub fn point(&self, axis: AxisOrder) -> GeoPoint {
        self.position.point(axis)
    }

    /// Returns the heuristic scratch value. Starts at 0.
    #[must_use]
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// Sets the heuristic scratch value.
    pub fn set_heuristic(&mut self, value: f64) {
        self.heuristic = value;
    }

    /// Returns all extra properties of this node.
    #[must_use]
    pub fn properties(&self) -> &HashMap<String, Value> {
        &self.properties
    }

    /// Returns a specific property value, if it exists.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Sets a property value.
    pub fn set_property(&mut self, name: &str, value: Value) {
        self.properties.insert(name.to_string(), value);
    }
}

impl fmt::Display for GeoNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node ({}, {})", self.label, self.position)
    }
}
