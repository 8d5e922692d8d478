//! Tests for EdgeMatrix.

use super::*;

#[test]
fn test_new_matrix_is_empty() {
    let m = EdgeMatrix::new();

    assert_eq!(m.side(), 0);
    assert_eq!(m.rows().count(), 0);
    assert!(m.get(0, 0).is_none());
}

#[test]
fn test_grow_adds_zero_row_and_column() {
    let mut m = EdgeMatrix::new();
    m.grow();
    m.grow();
    m.set(0, 1, 3.0);
    m.set(1, 0, 3.0);

    m.grow();

    assert_eq!(m.side(), 3);
    assert_eq!(m.row(0), Some(&[0.0, 3.0, 0.0][..]));
    assert_eq!(m.row(2), Some(&[0.0, 0.0, 0.0][..]));
}

#[test]
fn test_reallocation_preserves_weights() {
    let mut m = EdgeMatrix::with_capacity(2);
    m.grow();
    m.grow();
    m.set(0, 1, 1.5);
    m.set(1, 1, 2.5);
    assert_eq!(m.capacity(), 2);

    m.grow();

    assert!(m.capacity() >= 3);
    assert_eq!(m.get(0, 1), Some(1.5));
    assert_eq!(m.get(1, 1), Some(2.5));
    assert_eq!(m.get(2, 0), Some(0.0));
    assert_eq!(m.get(0, 2), Some(0.0));
}

#[test]
fn test_every_row_has_side_cells() {
    let mut m = EdgeMatrix::new();

    for n in 1..=20 {
        m.grow();
        assert_eq!(m.side(), n);
        assert_eq!(m.rows().count(), n);
        assert!(m.rows().all(|row| row.len() == n));
    }
}

#[test]
fn test_out_of_range_access() {
    let mut m = EdgeMatrix::new();
    m.grow();

    assert!(m.get(0, 1).is_none());
    assert!(m.get(1, 0).is_none());
    assert!(m.row(1).is_none());
}

#[test]
#[should_panic(expected = "outside")]
fn test_set_out_of_range_panics() {
    let mut m = EdgeMatrix::with_capacity(4);
    m.grow();

    m.set(0, 1, 1.0);
}

#[test]
fn test_symmetry_check() {
    let mut m = EdgeMatrix::new();
    m.grow();
    m.grow();
    assert!(m.is_symmetric());

    m.set(0, 1, 4.0);
    assert!(!m.is_symmetric());

    m.set(1, 0, 4.0);
    assert!(m.is_symmetric());
}
