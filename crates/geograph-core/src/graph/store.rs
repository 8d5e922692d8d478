//! Append-only weighted graph over geo nodes.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

use super::matrix::EdgeMatrix;
use super::node::{GeoNode, NodeId};
use crate::error::{Error, Result};

/// Undirected (optionally directed per edge) weighted graph backed by a
/// dense adjacency matrix.
///
/// Vertices are stored in insertion order and their positions are stable
/// indices. Vertices cannot be removed; edge weights can be overwritten
/// but never removed.
#[derive(Debug, Clone, Default)]
pub struct GeoGraph {
    nodes: Vec<GeoNode>,
    /// Node ID -> vertex index
    index: HashMap<NodeId, usize>,
    edges: EdgeMatrix,
}

impl GeoGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph pre-sized for `capacity` vertices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            edges: EdgeMatrix::with_capacity(capacity),
        }
    }

    /// Adds a vertex and returns its index.
    ///
    /// The new vertex's row and column are all zero, including the diagonal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVertex`] if a node with the same ID is
    /// already present.
    pub fn add_vertex(&mut self, node: GeoNode) -> Result<usize> {
        let id = node.id();
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateVertex(id));
        }
        let position = self.nodes.len();
        self.edges.grow();
        self.nodes.push(node);
        self.index.insert(id, position);
        Ok(position)
    }

    /// Sets the weight of the edge between `v1` and `v2`.
    ///
    /// Non-directional edges also set the mirror cell, keeping the matrix
    /// symmetric.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if either endpoint is absent.
    pub fn add_edge(&mut self, v1: NodeId, v2: NodeId, weight: f64, directional: bool) -> Result<()> {
        let i = self.require(v1)?;
        let j = self.require(v2)?;
        self.edges.set(i, j, weight);
        if !directional {
            self.edges.set(j, i, weight);
        }
        Ok(())
    }

    /// Adds a non-directional edge of weight 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if either endpoint is absent.
    pub fn connect(&mut self, v1: NodeId, v2: NodeId) -> Result<()> {
        self.add_edge(v1, v2, 1.0, false)
    }

    /// Returns the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= size()`.
    pub fn get_vertex(&self, index: usize) -> Result<&GeoNode> {
        let size = self.size();
        self.nodes
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, size })
    }

    /// Returns the vertex at `index` for in-place updates (e.g. heuristic).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= size()`.
    pub fn get_vertex_mut(&mut self, index: usize) -> Result<&mut GeoNode> {
        let size = self.size();
        self.nodes
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, size })
    }

    /// Maps each node ID to its full row of edge weights, in insertion order.
    ///
    /// Zero-weight cells are included.
    #[must_use]
    pub fn adjacency_list(&self) -> IndexMap<NodeId, &[f64]> {
        self.nodes
            .iter()
            .map(GeoNode::id)
            .zip(self.edges.rows())
            .collect()
    }

    /// Number of vertices.
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the vertex index of a node ID.
    #[must_use]
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Returns true if a node with this ID is a vertex.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// All vertices in insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[GeoNode] {
        &self.nodes
    }

    /// Weight of the edge from `v1` to `v2`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if either endpoint is absent.
    pub fn edge_weight(&self, v1: NodeId, v2: NodeId) -> Result<f64> {
        let i = self.require(v1)?;
        let j = self.require(v2)?;
        self.weight_at(i, j)
    }

    /// Weight stored at matrix cell `(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either index is out of range.
    pub fn weight_at(&self, i: usize, j: usize) -> Result<f64> {
        self.edges.get(i, j).ok_or(Error::IndexOutOfRange {
            index: i.max(j),
            size: self.size(),
        })
    }

    /// Full row of edge weights for vertex `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= size()`.
    pub fn row(&self, index: usize) -> Result<&[f64]> {
        self.edges.row(index).ok_or(Error::IndexOutOfRange {
            index,
            size: self.size(),
        })
    }

    /// Returns true if every edge weight equals its mirror.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.edges.is_symmetric()
    }

    fn require(&self, id: NodeId) -> Result<usize> {
        self.index_of(id).ok_or(Error::VertexNotFound(id))
    }
}

impl fmt::Display for GeoGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (n, (node, row)) in self.nodes.iter().zip(self.edges.rows()).enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{node}': {row:?}")?;
        }
        f.write_str("}")
    }
}
