//! End-to-end tests: CSV file -> complete distance graph.

use geograph_core::{
    graph_from_geodata_csv, DistanceMethod, Error, GeoGraph, GeoGraphConfig, GeoNode, GeoPoint,
    GraphBuilder, EARTH_RADIUS_KM,
};
use std::f64::consts::PI;
use std::io::Write;
use tempfile::NamedTempFile;

const QUARTER_CIRCLE_KM: f64 = EARTH_RADIUS_KM * PI / 2.0;

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn assert_complete(graph: &GeoGraph) {
    let n = graph.size();
    assert!(graph.is_symmetric());
    for i in 0..n {
        assert_eq!(graph.row(i).unwrap().len(), n);
        assert_eq!(graph.weight_at(i, i).unwrap(), 0.0);
    }
}

#[test]
fn test_three_point_lat_long_scenario() {
    let file = csv_file("label,lat,long\nA,0,0\nB,0,90\nC,90,0\n");

    let graph = graph_from_geodata_csv(file.path()).unwrap();

    assert_eq!(graph.size(), 3);
    let ab = graph.edge_weight(0, 1).unwrap();
    let ac = graph.edge_weight(0, 2).unwrap();
    assert!((ab - 10_007.5).abs() < 0.1, "A-B = {ab}");
    assert!((ac - 10_007.5).abs() < 0.1, "A-C = {ac}");
    assert!((ab - QUARTER_CIRCLE_KM).abs() < 1e-6);
    assert_eq!(graph.edge_weight(0, 0).unwrap(), 0.0);
    assert_eq!(graph.get_vertex(2).unwrap().label(), "C");
    assert_complete(&graph);
}

#[test]
fn test_split_coordinate_columns() {
    // coord1 = longitude, coord2 = latitude
    let file = csv_file("label,coord1,coord2\nA,0,0\nB,90,0\nC,0,90\n");

    let graph = graph_from_geodata_csv(file.path()).unwrap();

    assert_eq!(graph.size(), 3);
    assert!((graph.edge_weight(0, 1).unwrap() - QUARTER_CIRCLE_KM).abs() < 1e-6);
    assert!((graph.edge_weight(1, 2).unwrap() - QUARTER_CIRCLE_KM).abs() < 1e-6);
    assert_complete(&graph);
}

#[test]
fn test_lat_lon_axis_order_for_split_columns() {
    let file = csv_file("label,coord1,coord2\nParis,48.8566,2.3522\nLondon,51.5072,-0.1276\n");
    let config = GeoGraphConfig::from_toml("[ingest]\naxis_order = \"lat_lon\"").unwrap();

    let graph = GraphBuilder::new(config).build_from_path(file.path()).unwrap();

    let d = graph.edge_weight(0, 1).unwrap();
    assert!((d - 343.5).abs() < 1.0, "Paris-London = {d}");
}

#[test]
fn test_completeness_with_many_distinct_points() {
    let mut content = String::from("label,lat,long\n");
    for i in 0..25 {
        content.push_str(&format!("P{i},{},{}\n", -60.0 + 5.0 * i as f64, -170.0 + 13.0 * i as f64));
    }
    let file = csv_file(&content);

    let graph = graph_from_geodata_csv(file.path()).unwrap();

    assert_eq!(graph.size(), 25);
    assert_complete(&graph);
    for i in 0..25 {
        for j in 0..25 {
            if i != j {
                assert!(graph.weight_at(i, j).unwrap() > 0.0);
            }
        }
    }
}

#[test]
fn test_edge_weights_match_distance_function() {
    let file = csv_file("label,lat,long\nA,10,20\nB,-30,140\nC,55,-3\n");
    let graph = graph_from_geodata_csv(file.path()).unwrap();

    for i in 0..3 {
        for j in 0..3 {
            let a = graph.get_vertex(i).unwrap().point(Default::default());
            let b = graph.get_vertex(j).unwrap().point(Default::default());
            let expected = DistanceMethod::SphericalLawOfCosines.calculate(a, b);
            assert!((graph.weight_at(i, j).unwrap() - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn test_haversine_and_law_of_cosines_graphs_agree() {
    let content = "label,lat,long\nA,10,20\nB,-30,140\nC,55,-3\nD,0,0\n";
    let cosines = graph_from_geodata_csv(csv_file(content).path()).unwrap();
    let config = GeoGraphConfig::from_toml("[distance]\nmethod = \"haversine\"").unwrap();
    let haversine = GraphBuilder::new(config)
        .build_from_path(csv_file(content).path())
        .unwrap();

    for i in 0..4 {
        for j in 0..4 {
            let c = cosines.weight_at(i, j).unwrap();
            let h = haversine.weight_at(i, j).unwrap();
            assert!((c - h).abs() <= 1e-6 * c.max(1.0));
        }
    }
}

#[test]
fn test_identical_points_are_distinct_vertices() {
    let file = csv_file("label,lat,long\nA,1,1\nA,1,1\n");

    let graph = graph_from_geodata_csv(file.path()).unwrap();

    assert_eq!(graph.size(), 2);
    assert_eq!(graph.edge_weight(0, 1).unwrap(), 0.0);
}

#[test]
fn test_missing_coordinate_columns_fail() {
    let file = csv_file("label,x,y\nA,1,2\n");

    let err = graph_from_geodata_csv(file.path()).unwrap_err();

    assert!(matches!(err, Error::MissingCoordinateFields { row: 0 }));
}

#[test]
fn test_malformed_number_fails_whole_ingestion() {
    let file = csv_file("label,lat,long\nA,0,0\nB,zero,0\nC,1,1\n");

    let err = graph_from_geodata_csv(file.path()).unwrap_err();

    assert!(matches!(err, Error::Parse { row: 1, .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn test_missing_label_column_fails() {
    let file = csv_file("name,lat,long\nA,0,0\n");

    let err = graph_from_geodata_csv(file.path()).unwrap_err();

    assert!(matches!(err, Error::MissingColumn(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = graph_from_geodata_csv("/nonexistent/geodata.csv").unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_header_only_file_gives_empty_graph() {
    let file = csv_file("label,lat,long\n");

    let graph = graph_from_geodata_csv(file.path()).unwrap();

    assert!(graph.is_empty());
}

#[test]
fn test_duplicate_vertex_after_ingestion() {
    let file = csv_file("label,lat,long\nA,0,0\n");
    let mut graph = graph_from_geodata_csv(file.path()).unwrap();

    let err = graph
        .add_vertex(GeoNode::at(0, "A again", GeoPoint::new(0.0, 0.0)))
        .unwrap_err();

    assert!(matches!(err, Error::DuplicateVertex(0)));
    assert!(err.is_recoverable());
}

#[test]
fn test_get_vertex_past_end() {
    let file = csv_file("label,lat,long\nA,0,0\nB,0,90\nC,90,0\n");
    let graph = graph_from_geodata_csv(file.path()).unwrap();

    assert!(matches!(
        graph.get_vertex(5),
        Err(Error::IndexOutOfRange { index: 5, size: 3 })
    ));
}

#[test]
fn test_adjacency_list_follows_row_order() {
    let file = csv_file("label,lat,long\nZ,0,0\nY,0,1\nX,0,2\n");
    let graph = graph_from_geodata_csv(file.path()).unwrap();

    let labels: Vec<&str> = graph
        .adjacency_list()
        .keys()
        .map(|&id| graph.get_vertex(graph.index_of(id).unwrap()).unwrap().label())
        .collect();

    assert_eq!(labels, vec!["Z", "Y", "X"]);
}
