//! # `geograph` Core
//!
//! Turns a table of labelled (latitude, longitude) records into a complete,
//! undirected graph whose edge weights are great-circle distances, ready
//! for downstream graph algorithms (shortest path, clustering, ...).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use geograph_core::{graph_from_geodata_csv, GraphBuilder, GeoGraphConfig};
//!
//! // label,lat,long
//! let graph = graph_from_geodata_csv("cities.csv")?;
//! assert!(graph.is_symmetric());
//!
//! // Or with a `geograph.toml` / GEOGRAPH_* environment configuration
//! let builder = GraphBuilder::new(GeoGraphConfig::load()?);
//! let graph = builder.build_from_path("cities.csv")?;
//! for (id, row) in graph.adjacency_list() {
//!     println!("{id}: {row:?}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod distance;
pub mod error;
pub mod geo;
pub mod graph;
pub mod ingest;
pub mod sync;

pub use config::{ConfigError, DistanceConfig, GeoGraphConfig, IngestConfig};
pub use distance::{great_circle_km, haversine_km, DistanceMethod, EARTH_RADIUS_KM};
pub use error::{Error, Result};
pub use geo::{AxisOrder, CoordinateSource, GeoPoint};
pub use graph::{GeoGraph, GeoNode, NodeId};
pub use ingest::{graph_from_geodata_csv, read_rows, GraphBuilder, Row};
pub use sync::SharedGeoGraph;
