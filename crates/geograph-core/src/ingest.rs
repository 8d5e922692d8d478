//! Builds complete distance graphs from tabular geodata.
//!
//! Every input row becomes one vertex, in input order. When a vertex is
//! inserted, its great-circle distance to every vertex already present
//! (itself included, giving a zero self-loop) is written as a
//! non-directional edge. After the last row the graph is complete and
//! symmetric.
//!
//! Any failure aborts the whole run; no partial graph is returned.

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::{GeoGraphConfig, IngestConfig};
use crate::error::{Error, Result};
use crate::geo::{parse_coords, CoordinateSource, GeoPoint};
use crate::graph::{GeoGraph, GeoNode, NodeId};

/// One input record: column name -> raw cell value, in column order.
pub type Row = IndexMap<String, String>;

/// Builds a complete distance graph from a CSV file using default settings.
///
/// The file needs a header row with a `label` column and one of
/// `coords`, `coord1`+`coord2`[+`coord3`] or `lat`+`long`.
///
/// # Errors
///
/// Fails on unreadable files, missing columns, unparsable numbers and
/// rows without coordinates.
pub fn graph_from_geodata_csv<P: AsRef<Path>>(path: P) -> Result<GeoGraph> {
    GraphBuilder::default().build_from_path(path)
}

/// Reads a delimited table into ordered rows.
///
/// Cells are trimmed. Without a header row, columns are named `col_0`,
/// `col_1`, ...
///
/// # Errors
///
/// - [`Error::Csv`] on malformed input
/// - [`Error::Config`] if the delimiter is not a single ASCII byte
/// - [`Error::DuplicateColumn`] if the header repeats a column name
pub fn read_rows<R: Read>(reader: R, config: &IngestConfig) -> Result<Vec<Row>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .has_headers(config.has_header)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Option<Vec<String>> = if config.has_header {
        let names: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let mut seen = HashSet::with_capacity(names.len());
        if let Some(repeated) = names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(Error::DuplicateColumn(repeated.clone()));
        }
        Some(names)
    } else {
        None
    };

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: Row = match &headers {
            Some(names) => names
                .iter()
                .cloned()
                .zip(record.iter().map(str::to_string))
                .collect(),
            None => record
                .iter()
                .enumerate()
                .map(|(idx, value)| (format!("col_{idx}"), value.to_string()))
                .collect(),
        };
        rows.push(row);
    }
    Ok(rows)
}

/// Turns tabular records into a complete great-circle distance graph.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GeoGraphConfig,
}

impl GraphBuilder {
    /// Creates a builder with the given configuration.
    #[must_use]
    pub fn new(config: GeoGraphConfig) -> Self {
        Self { config }
    }

    /// Returns the builder configuration.
    #[must_use]
    pub fn config(&self) -> &GeoGraphConfig {
        &self.config
    }

    /// Builds a graph from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened, plus every error
    /// of [`GraphBuilder::build_from_reader`].
    pub fn build_from_path<P: AsRef<Path>>(&self, path: P) -> Result<GeoGraph> {
        let path = path.as_ref();
        info!(path = %path.display(), "Reading geodata CSV");
        let file = File::open(path)?;
        self.build_from_reader(BufReader::new(file))
    }

    /// Builds a graph from any CSV source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Csv`] on malformed input, plus every error of
    /// [`GraphBuilder::build_from_rows`].
    pub fn build_from_reader<R: Read>(&self, reader: R) -> Result<GeoGraph> {
        self.config.validate()?;
        let rows = read_rows(reader, &self.config.ingest)?;
        self.build_from_rows(rows)
    }

    /// Builds a graph from already-read rows, in order.
    ///
    /// Row `i` becomes the vertex with ID `i` and index `i`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingColumn`] if a row has no label column
    /// - [`Error::MissingCoordinateFields`] if a row has no usable coordinates
    /// - [`Error::Parse`] if a coordinate is not a number
    pub fn build_from_rows<I>(&self, rows: I) -> Result<GeoGraph>
    where
        I: IntoIterator<Item = Row>,
    {
        self.config.validate()?;
        let rows: Vec<Row> = rows.into_iter().collect();
        let start = Instant::now();
        info!(records = rows.len(), "Building geo distance graph");

        let axis = self.config.ingest.axis_order;
        let method = self.config.distance.method;
        let radius = self.config.distance.earth_radius_km;

        let mut graph = GeoGraph::with_capacity(rows.len());
        // Resolved once per vertex; indexed like the graph
        let mut points: Vec<(NodeId, GeoPoint)> = Vec::with_capacity(rows.len());
        let mut labels: HashSet<String> = HashSet::with_capacity(rows.len());

        for (row_idx, row) in rows.iter().enumerate() {
            let node = self.node_from_row(row_idx, row)?;
            if !labels.insert(node.label().to_string()) {
                warn!(row = row_idx, label = node.label(), "Duplicate label");
            }

            let id = node.id();
            let point = node.point(axis);
            graph.add_vertex(node)?;
            points.push((id, point));

            for &(other_id, other_point) in &points {
                let weight = method.calculate_with_radius(point, other_point, radius);
                graph.add_edge(id, other_id, weight, false)?;
            }
            debug!(row = row_idx, %point, "Inserted vertex");
        }

        info!(
            vertices = graph.size(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Geo distance graph built"
        );
        Ok(graph)
    }

    /// Builds the node for row `row_idx`.
    ///
    /// # Errors
    ///
    /// Same as [`GraphBuilder::build_from_rows`].
    pub fn node_from_row(&self, row_idx: usize, row: &Row) -> Result<GeoNode> {
        let ingest = &self.config.ingest;
        let label = row
            .get(&ingest.label_column)
            .ok_or_else(|| Error::MissingColumn(ingest.label_column.clone()))?;
        let position = self.resolve_position(row_idx, row)?;

        let mut node = GeoNode::new(row_idx as NodeId, label, position);
        if ingest.keep_extra_columns {
            node = node.with_properties(self.extract_properties(row));
        }
        Ok(node)
    }

    /// Picks the first coordinate layout the row satisfies:
    /// `coords`, then `coord1`/`coord2`[/`coord3`], then `lat`/`long`.
    fn resolve_position(&self, row_idx: usize, row: &Row) -> Result<CoordinateSource> {
        let ingest = &self.config.ingest;

        if let Some(raw) = cell(row, &ingest.coords_column) {
            return match parse_coords(raw).as_deref() {
                Some(&[c1, c2]) => Ok(CoordinateSource::Combined(ingest.axis_order.point(c1, c2))),
                // A third value rides along as coord3, like the split layout
                Some(&[c1, c2, c3]) => Ok(CoordinateSource::Split {
                    coord1: c1,
                    coord2: c2,
                    coord3: Some(c3),
                }),
                _ => Err(Error::Parse {
                    row: row_idx,
                    column: ingest.coords_column.clone(),
                    value: raw.to_string(),
                }),
            };
        }

        if let [c1, c2, rest @ ..] = ingest.coord_columns.as_slice() {
            if cell(row, c1).is_some() && cell(row, c2).is_some() {
                let coord3 = match rest.first() {
                    Some(c3) if cell(row, c3).is_some() => Some(number(row_idx, row, c3)?),
                    _ => None,
                };
                return Ok(CoordinateSource::Split {
                    coord1: number(row_idx, row, c1)?,
                    coord2: number(row_idx, row, c2)?,
                    coord3,
                });
            }
        }

        if cell(row, &ingest.lat_column).is_some() && cell(row, &ingest.long_column).is_some() {
            let lat = number(row_idx, row, &ingest.lat_column)?;
            let lon = number(row_idx, row, &ingest.long_column)?;
            return Ok(CoordinateSource::Combined(GeoPoint::from_lat_lon(lat, lon)));
        }

        Err(Error::MissingCoordinateFields { row: row_idx })
    }

    /// Extracts every non-label, non-coordinate column as a property.
    fn extract_properties(&self, row: &Row) -> HashMap<String, Value> {
        let ingest = &self.config.ingest;
        let reserved = |name: &str| {
            name == ingest.label_column
                || name == ingest.coords_column
                || name == ingest.lat_column
                || name == ingest.long_column
                || ingest.coord_columns.iter().any(|c| c == name)
        };

        row.iter()
            .filter(|(name, _)| !reserved(name))
            .map(|(name, value)| {
                let json_value = if let Ok(n) = value.parse::<f64>() {
                    serde_json::json!(n)
                } else if let Ok(b) = value.parse::<bool>() {
                    serde_json::json!(b)
                } else {
                    serde_json::json!(value)
                };
                (name.clone(), json_value)
            })
            .collect()
    }
}

/// Non-empty cell value, if the column exists.
fn cell<'a>(row: &'a Row, column: &str) -> Option<&'a str> {
    row.get(column)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

/// Parses a coordinate cell; `NaN` and infinities are rejected.
fn number(row_idx: usize, row: &Row, column: &str) -> Result<f64> {
    let raw = cell(row, column).unwrap_or_default();
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::Parse {
            row: row_idx,
            column: column.to_string(),
            value: raw.to_string(),
        })
}
