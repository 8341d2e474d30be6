//! Backbite move for Hamiltonian paths on the square lattice.
//!
//! A move picks one endpoint, picks one of the lattice neighbours it is not
//! already joined to, adds that edge and deletes the one edge that now closes
//! a loop. On the path sequence this is the reversal of a contiguous block
//! that ends at the chosen endpoint.
//!
//! Reference: Oberdorf, R., Ferguson, A., Jacobsen, J. L., & Kondev, J. (2006).
//! "Secondary structures in long compact polymers." Physical Review E, 74,
//! 051801.

use crate::GridPath;
use crate::path::Coord;
use crate::random::RandomSource;

/// Position of a cell relative to the grid boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Site {
    Corner,
    Edge,
    Interior,
}

impl Site {
    pub(crate) fn classify(c: Coord, n: usize) -> Self {
        let x_edge = c.x == 0 || c.x == n - 1;
        let y_edge = c.y == 0 || c.y == n - 1;
        match (x_edge, y_edge) {
            (true, true) => Site::Corner,
            (true, false) | (false, true) => Site::Edge,
            (false, false) => Site::Interior,
        }
    }

    /// Lattice neighbours of an endpoint not already joined to it by the
    /// path: coordination number minus one.
    pub(crate) fn free_slots(self) -> usize {
        match self {
            Site::Corner => 1,
            Site::Edge => 2,
            Site::Interior => 3,
        }
    }
}

/// Attempts one backbite move on `path`, in place.
///
/// Each endpoint is chosen with probability 1/2. One of three outcomes is
/// then drawn uniformly: a free neighbour slot of the endpoint, or a
/// rejection making up the difference (two for a corner, one for an edge
/// cell, none for an interior cell). Returns `false` on rejection, in which
/// case the path is untouched; otherwise the edge is added and `true` is
/// returned. Both path invariants hold afterwards either way.
pub fn backbite<R: RandomSource + ?Sized>(path: &mut GridPath, rng: &mut R) -> bool {
    let n = path.n();
    let from_head = rng.uniform_int(2) == 0;
    let end = if from_head { path.head() } else { path.tail() };

    let rejects = 3 - Site::classify(end, n).free_slots();
    let draw = rng.uniform_int(3);
    if draw < rejects {
        return false;
    }
    let target = draw - rejects;

    let attached = if from_head {
        attach_head(path.cells_mut(), target)
    } else {
        attach_tail(path.cells_mut(), target)
    };
    debug_assert!(attached, "endpoint has fewer free neighbours than its site allows");
    true
}

/// Joins `cells[0]` to its `target`-th free neighbour by reversing
/// `cells[..i]`, where `i` is that neighbour's position.
///
/// Cells at even positions have the head's colour and can never be its
/// neighbours, and a cell at distance `d` is at least `d - 1` positions away
/// from any neighbour, so the scan strides by `max(2, d - 1)` from position 3.
fn attach_head(cells: &mut [Coord], target: usize) -> bool {
    let end = cells[0];
    let mut found = 0;
    let mut i = 3;
    while i < cells.len() {
        let d = end.manhattan(cells[i]);
        if d == 1 {
            if found == target {
                cells[..i].reverse();
                return true;
            }
            found += 1;
        }
        i += (d - 1).max(2);
    }
    false
}

/// Mirror image of [`attach_head`]: scans down from `len - 4` and reverses
/// `cells[i + 1..]`.
fn attach_tail(cells: &mut [Coord], target: usize) -> bool {
    let end = cells[cells.len() - 1];
    let mut found = 0;
    let mut next = cells.len().checked_sub(4);
    while let Some(i) = next {
        let d = end.manhattan(cells[i]);
        if d == 1 {
            if found == target {
                cells[i + 1..].reverse();
                return true;
            }
            found += 1;
        }
        next = i.checked_sub((d - 1).max(2));
    }
    false
}
