//! Error types for `geograph`.
//!
//! A single error type covers graph mutation, coordinate resolution and
//! CSV ingestion. Nothing is recovered internally: every failure reaches
//! the caller of the ingestion entry point, which must discard the
//! partially built graph.

use thiserror::Error;

use crate::graph::NodeId;

/// Result type alias for `geograph` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a distance graph.
///
/// Error codes follow the pattern `GEOG-XXX`.
#[derive(Error, Debug)]
pub enum Error {
    /// A node with the same identity is already a vertex (GEOG-001).
    #[error("[GEOG-001] Vertex with ID '{0}' already exists")]
    DuplicateVertex(NodeId),

    /// An edge endpoint is not a vertex of the graph (GEOG-002).
    #[error("[GEOG-002] Vertex with ID '{0}' not found")]
    VertexNotFound(NodeId),

    /// A record has no recognised coordinate fields (GEOG-003).
    #[error(
        "[GEOG-003] Record {row} must contain a 'coords' field, fields 'coord1','coord2'[,'coord3'], or fields 'lat','long'"
    )]
    MissingCoordinateFields {
        /// Zero-based record index in input order.
        row: usize,
    },

    /// A numeric field could not be parsed as a float (GEOG-004).
    #[error("[GEOG-004] Record {row}: cannot parse '{value}' in column '{column}' as a number")]
    Parse {
        /// Zero-based record index in input order.
        row: usize,
        /// Column holding the bad value.
        column: String,
        /// Raw cell content.
        value: String,
    },

    /// Vertex index past the end of the graph (GEOG-005).
    #[error("[GEOG-005] Vertex index {index} out of range for graph of size {size}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of vertices in the graph.
        size: usize,
    },

    /// A required column is absent from the table (GEOG-006).
    #[error("[GEOG-006] Required column '{0}' not found")]
    MissingColumn(String),

    /// The CSV reader failed (GEOG-007).
    #[error("[GEOG-007] CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error (GEOG-008).
    #[error("[GEOG-008] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error (GEOG-009).
    #[error("[GEOG-009] Configuration error: {0}")]
    Config(String),

    /// The header names the same column more than once (GEOG-010).
    #[error("[GEOG-010] Column '{0}' appears more than once in the header")]
    DuplicateColumn(String),
}

impl Error {
    /// Returns the error code (e.g., "GEOG-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DuplicateVertex(_) => "GEOG-001",
            Self::VertexNotFound(_) => "GEOG-002",
            Self::MissingCoordinateFields { .. } => "GEOG-003",
            Self::Parse { .. } => "GEOG-004",
            Self::IndexOutOfRange { .. } => "GEOG-005",
            Self::MissingColumn(_) => "GEOG-006",
            Self::Csv(_) => "GEOG-007",
            Self::Io(_) => "GEOG-008",
            Self::Config(_) => "GEOG-009",
            Self::DuplicateColumn(_) => "GEOG-010",
        }
    }

    /// Returns true if the caller can reasonably carry on after this error.
    ///
    /// Only a duplicate vertex qualifies: the caller may skip or re-identify
    /// the node. Everything else aborts the ingestion run.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::DuplicateVertex(_))
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
