//! Dense, growable square matrix of edge weights.
//!
//! Cells live in one flat buffer addressed as `row * stride + col`. The
//! stride is the allocated capacity, not the logical side, so adding a
//! vertex only bumps `side` until the capacity is exhausted; then the
//! buffer is re-laid out at double capacity. Every cell outside the
//! logical square stays zero, which is what makes a new vertex's row and
//! column read as zero without touching them.

/// Square edge-weight matrix whose side always equals the vertex count.
#[derive(Debug, Clone, Default)]
pub struct EdgeMatrix {
    cells: Vec<f64>,
    stride: usize,
    side: usize,
}

impl EdgeMatrix {
    /// Creates an empty matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty matrix with room for `capacity` vertices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: vec![0.0; capacity * capacity],
            stride: capacity,
            side: 0,
        }
    }

    /// Logical side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of vertices that fit before the next reallocation.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.stride
    }

    /// Grows the matrix by one row and one column of zeros.
    pub fn grow(&mut self) {
        if self.side == self.stride {
            self.reserve_to((self.stride * 2).max(4));
        }
        self.side += 1;
    }

    /// Re-lays out the buffer so at least `capacity` vertices fit.
    pub fn reserve_to(&mut self, capacity: usize) {
        if capacity <= self.stride {
            return;
        }
        let mut cells = vec![0.0; capacity * capacity];
        for row in 0..self.side {
            let old = row * self.stride;
            let new = row * capacity;
            cells[new..new + self.side].copy_from_slice(&self.cells[old..old + self.side]);
        }
        self.cells = cells;
        self.stride = capacity;
    }

    /// Weight at `(row, col)`, or `None` outside the logical square.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.side && col < self.side).then(|| self.cells[row * self.stride + col])
    }

    /// Sets the weight at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the logical square.
    pub fn set(&mut self, row: usize, col: usize, weight: f64) {
        assert!(
            row < self.side && col < self.side,
            "cell ({row}, {col}) outside {0}x{0} matrix",
            self.side
        );
        self.cells[row * self.stride + col] = weight;
    }

    /// One full row of weights, `side` cells long.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        (row < self.side).then(|| {
            let start = row * self.stride;
            &self.cells[start..start + self.side]
        })
    }

    /// Iterates over every logical row in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.side).filter_map(move |row| self.row(row))
    }

    /// Returns true if `m[i][j] == m[j][i]` for every pair.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.side).all(|i| {
            (i + 1..self.side)
                .all(|j| self.cells[i * self.stride + j] == self.cells[j * self.stride + i])
        })
    }
}
