use crate::error::{Error, Result, check_size};

/// A cell of the `n x n` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan (lattice) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Flattened index `x * n + y`, as used by the text export format.
    #[inline]
    pub fn flat_index(self, n: usize) -> usize {
        self.x * n + self.y
    }
}

/// A Hamiltonian path on the `n x n` square lattice.
///
/// The path is an ordered sequence of all `n²` cells in which consecutive
/// cells are lattice neighbours. Index `0` is the head and index `n² - 1` the
/// tail; these are the only cells a backbite move may start from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridPath {
    n: usize,
    cells: Vec<Coord>,
}

impl GridPath {
    /// Creates the boustrophedon path of order `n`: row `x` is walked with
    /// increasing `y` when `x` is even and decreasing `y` when `x` is odd.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `n < 2`.
    pub fn snake(n: usize) -> Result<Self> {
        check_size(n)?;
        let cells = (0..n)
            .flat_map(|x| {
                (0..n).map(move |j| {
                    let y = if x % 2 == 0 { j } else { n - 1 - j };
                    Coord::new(x, y)
                })
            })
            .collect();
        Ok(Self { n, cells })
    }

    /// Builds a path from an explicit cell sequence, checking that it visits
    /// every cell once and only steps between lattice neighbours.
    pub fn from_cells(n: usize, cells: Vec<Coord>) -> Result<Self> {
        check_size(n)?;
        let path = Self { n, cells };
        if path.cells.len() != n * n {
            return Err(Error::InvalidArgument(format!(
                "expected {} cells for a {n}x{n} grid, got {}",
                n * n,
                path.cells.len()
            )));
        }
        if !path.is_permutation() {
            return Err(Error::InvalidArgument(
                "path does not visit every cell exactly once".to_string(),
            ));
        }
        if let Some(i) = path.first_gap() {
            return Err(Error::InvalidArgument(format!(
                "cells {} and {} are not lattice neighbours",
                i,
                i + 1
            )));
        }
        Ok(path)
    }

    /// Returns the grid order.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the number of cells, always `n²`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a path covers at least a 2x2 grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at position `i` along the path.
    ///
    /// # Panics
    /// Panics if `i >= n²`.
    pub fn get(&self, i: usize) -> Coord {
        self.cells[i]
    }

    pub fn head(&self) -> Coord {
        self.cells[0]
    }

    pub fn tail(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// Returns the cells in path order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }

    /// Manhattan distance between the two endpoints.
    pub fn endpoint_distance(&self) -> usize {
        self.head().manhattan(self.tail())
    }

    /// Smallest endpoint separation the lattice parity allows: 1 for even
    /// `n`, 2 for odd `n`.
    pub fn min_endpoint_distance(&self) -> usize {
        1 + self.n % 2
    }

    /// True when the endpoints are as close as parity allows, so the path
    /// can be closed into a circuit.
    pub fn is_circuit(&self) -> bool {
        self.endpoint_distance() == self.min_endpoint_distance()
    }

    /// Returns true if both path invariants hold.
    pub fn is_valid(&self) -> bool {
        self.cells.len() == self.n * self.n && self.is_permutation() && self.first_gap().is_none()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Coord] {
        &mut self.cells
    }

    fn is_permutation(&self) -> bool {
        let n = self.n;
        let mut seen = vec![false; n * n];
        for c in &self.cells {
            if c.x >= n || c.y >= n {
                return false;
            }
            let idx = c.flat_index(n);
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }

    fn first_gap(&self) -> Option<usize> {
        self.cells
            .windows(2)
            .position(|w| w[0].manhattan(w[1]) != 1)
    }
}
