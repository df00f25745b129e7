//! Spatial indexing for efficient neighbor search.
//!
//! This module provides a simple grid-based spatial index for finding
//! atoms within a cutoff radius of a set of query points. It stands in for
//! the `within <cutoff> of <selection>` operator of molecular viewers.

use std::collections::{BTreeSet, HashMap};

/// Grid-based spatial index for 3D point queries.
///
/// Divides space into uniform cubic cells and stores atom indices
/// in each cell. Indices refer to a caller-owned position array, so a grid
/// may hold any subset of a structure (for example a single chain).
#[derive(Debug)]
pub struct SpatialGrid {
    /// Edge length of a cell in Ångströms.
    cell_size: f64,
    /// Inverse cell size for fast coordinate-to-cell conversion.
    inv_cell_size: f64,
    /// Map from cell coordinates to atom indices.
    cells: HashMap<(i32, i32, i32), Vec<usize>>,
}

impl SpatialGrid {
    /// Creates a new spatial grid with the given cell size.
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is not a positive finite number.
    pub fn new(cell_size: f64) -> Self {
        assert!(
            cell_size.is_finite() && cell_size > 0.0,
            "Cell size must be positive"
        );
        Self {
            cell_size,
            inv_cell_size: 1.0 / cell_size,
            cells: HashMap::new(),
        }
    }

    /// Creates a spatial grid holding only the atoms listed in `indices`.
    ///
    /// # Arguments
    ///
    /// * `positions` — Full position array [x, y, z] in Ångströms
    /// * `indices` — Atom indices into `positions` to insert
    /// * `cell_size` — Size of each cubic cell (typically the cutoff radius)
    pub fn from_indices(positions: &[[f64; 3]], indices: &[usize], cell_size: f64) -> Self {
        let mut grid = Self::new(cell_size);
        for &idx in indices {
            grid.insert(idx, positions[idx]);
        }
        grid
    }

    /// Computes the cell coordinates for a given position.
    fn cell_coords(&self, pos: [f64; 3]) -> (i32, i32, i32) {
        (
            (pos[0] * self.inv_cell_size).floor() as i32,
            (pos[1] * self.inv_cell_size).floor() as i32,
            (pos[2] * self.inv_cell_size).floor() as i32,
        )
    }

    /// Inserts an atom index at the given position.
    pub fn insert(&mut self, idx: usize, pos: [f64; 3]) {
        let cell = self.cell_coords(pos);
        self.cells.entry(cell).or_default().push(idx);
    }

    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Finds all stored atom indices within `cutoff` of any query point.
    ///
    /// The boundary is inclusive: an atom at exactly `cutoff` matches.
    /// A cutoff larger than the cell size widens the scanned neighborhood
    /// so the result never depends on the grid resolution.
    ///
    /// # Returns
    ///
    /// Sorted, deduplicated vector of atom indices.
    pub fn within(&self, queries: &[[f64; 3]], positions: &[[f64; 3]], cutoff: f64) -> Vec<usize> {
        if self.cells.is_empty() || queries.is_empty() || cutoff < 0.0 {
            return Vec::new();
        }

        let cutoff_sq = cutoff * cutoff;
        let reach = (cutoff / self.cell_size).ceil().max(1.0) as i32;

        let mut hits = BTreeSet::new();
        for query in queries {
            let (cx, cy, cz) = self.cell_coords(*query);
            for dx in -reach..=reach {
                for dy in -reach..=reach {
                    for dz in -reach..=reach {
                        let Some(indices) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) else {
                            continue;
                        };
                        for &idx in indices {
                            if hits.contains(&idx) {
                                continue;
                            }
                            if distance_sq(positions[idx], *query) <= cutoff_sq {
                                hits.insert(idx);
                            }
                        }
                    }
                }
            }
        }

        hits.into_iter().collect()
    }
}

#[inline]
fn distance_sq(a: [f64; 3], b: [f64; 3]) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(positions: &[[f64; 3]]) -> Vec<usize> {
        (0..positions.len()).collect()
    }

    fn brute_force(
        indices: &[usize],
        queries: &[[f64; 3]],
        positions: &[[f64; 3]],
        cutoff: f64,
    ) -> Vec<usize> {
        indices
            .iter()
            .copied()
            .filter(|&i| {
                queries
                    .iter()
                    .any(|q| distance_sq(positions[i], *q) <= cutoff * cutoff)
            })
            .collect()
    }

    #[test]
    fn empty_grid() {
        let grid = SpatialGrid::new(2.0);
        let positions: Vec<[f64; 3]> = vec![];
        assert!(grid.is_empty());
        assert!(grid.within(&[[0.0, 0.0, 0.0]], &positions, 2.0).is_empty());
    }

    #[test]
    fn no_queries_yield_nothing() {
        let positions = vec![[0.0, 0.0, 0.0]];
        let grid = SpatialGrid::from_indices(&positions, &[0], 2.0);
        assert!(grid.within(&[], &positions, 2.0).is_empty());
    }

    #[test]
    fn single_atom_in_and_out_of_range() {
        let positions = vec![[1.0, 0.0, 0.0], [3.0, 0.0, 0.0]];
        let grid = SpatialGrid::from_indices(&positions, &all(&positions), 2.0);

        assert_eq!(grid.within(&[[0.0, 0.0, 0.0]], &positions, 2.0), vec![0]);
    }

    #[test]
    fn boundary_distance_is_inclusive() {
        let positions = vec![[4.0, 0.0, 0.0]];
        let grid = SpatialGrid::from_indices(&positions, &[0], 4.0);
        assert_eq!(grid.within(&[[0.0, 0.0, 0.0]], &positions, 4.0), vec![0]);
        assert!(grid.within(&[[0.0, 0.0, 0.0]], &positions, 3.999).is_empty());
    }

    #[test]
    fn only_indexed_subset_is_returned() {
        let positions = vec![[0.0, 0.0, 0.0], [0.5, 0.0, 0.0], [1.0, 0.0, 0.0]];
        let grid = SpatialGrid::from_indices(&positions, &[0, 2], 2.0);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.within(&[[0.5, 0.0, 0.0]], &positions, 2.0), vec![0, 2]);
    }

    #[test]
    fn overlapping_queries_deduplicate() {
        let positions = vec![[2.0, 0.0, 0.0]];
        let grid = SpatialGrid::from_indices(&positions, &[0], 5.0);
        let queries = vec![[0.0, 0.0, 0.0], [4.0, 0.0, 0.0]];
        assert_eq!(grid.within(&queries, &positions, 3.0), vec![0]);
    }

    #[test]
    fn cutoff_larger_than_cell_widens_search() {
        let positions = vec![[5.5, 0.0, 0.0]];
        let grid = SpatialGrid::from_indices(&positions, &[0], 1.0);
        assert_eq!(grid.within(&[[0.0, 0.0, 0.0]], &positions, 6.0), vec![0]);
    }

    #[test]
    fn negative_coordinates_cross_cell_boundaries() {
        let positions = vec![[-0.1, -0.1, -0.1], [0.1, 0.1, 0.1]];
        let grid = SpatialGrid::from_indices(&positions, &all(&positions), 4.0);
        assert_eq!(grid.within(&[[-3.9, 0.0, 0.0]], &positions, 4.0), vec![0]);
    }

    #[test]
    fn agrees_with_brute_force() {
        let mut positions = Vec::new();
        for i in 0..12 {
            for j in 0..6 {
                let x = i as f64 * 1.37 - 7.0;
                let y = j as f64 * 2.11 - 5.0;
                let z = ((i * 7 + j * 3) % 11) as f64 * 0.93 - 4.0;
                positions.push([x, y, z]);
            }
        }
        let indices: Vec<usize> = (0..positions.len()).step_by(2).collect();
        let queries: Vec<[f64; 3]> = (1..positions.len())
            .step_by(9)
            .map(|i| positions[i])
            .collect();

        for cutoff in [1.5, 3.5, 4.0, 8.0] {
            let grid = SpatialGrid::from_indices(&positions, &indices, cutoff);
            assert_eq!(
                grid.within(&queries, &positions, cutoff),
                brute_force(&indices, &queries, &positions, cutoff),
                "mismatch at cutoff {cutoff}"
            );
        }
    }
}
