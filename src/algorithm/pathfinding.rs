//! Breadth-first reachability search over orthogonal adjacency
//!
//! Both searches keep a FIFO frontier plus bit sets of visited and queued
//! coordinates, so membership is decided by coordinate value. Expansion goes
//! through [`Grid::neighbours`], which only ever yields occupied cells.

use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use crate::algorithm::visited::CoordinateSet;
use crate::io::error::{GridError, Result};
use crate::spatial::{Grid, Vector};

impl<T> Grid<T> {
    /// Determine whether `end` is reachable from `start`
    ///
    /// Expands breadth-first through neighbours for which `allowed` holds,
    /// stopping as soon as `end` is dequeued. On success returns every
    /// coordinate discovered during the search in discovery order; `start`
    /// itself is not included, so `start == end` yields an empty list.
    /// The list is the explored region, not a cell-by-cell route; see
    /// [`Grid::shortest_path`] for that.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidPosition` if `start` is outside the grid or
    /// empty, and `GridError::NoPathFound` if the frontier is exhausted
    /// before `end` is reached
    pub fn pathfind<F>(&self, start: Vector, end: Vector, mut allowed: F) -> Result<Vec<Vector>>
    where
        F: FnMut(&T, Vector) -> bool,
    {
        self.ensure_search_origin(start)?;
        debug!(
            "pathfind from {start} to {end} on {}x{} grid",
            self.width(),
            self.height()
        );

        let mut path = Vec::new();
        let mut visited = CoordinateSet::new(self.dimensions());
        let mut queued = CoordinateSet::new(self.dimensions());
        let mut frontier = VecDeque::from([start]);
        queued.insert(start);

        let mut reached = false;
        while let Some(current) = frontier.pop_front() {
            visited.insert(current);
            if current == end {
                reached = true;
                break;
            }

            for neighbour in self.neighbours(current, &mut allowed)? {
                if visited.contains(neighbour) || queued.contains(neighbour) {
                    continue;
                }
                trace!("discovered {neighbour} from {current}");
                queued.insert(neighbour);
                frontier.push_back(neighbour);
                path.push(neighbour);
            }
        }

        debug!(
            "pathfind finished after visiting {} cells, {} discovered",
            visited.count(),
            path.len()
        );

        if reached {
            Ok(path)
        } else {
            Err(GridError::NoPathFound { start, end })
        }
    }

    /// Fewest-step route from `start` to `end`, both ends included
    ///
    /// Uses the same breadth-first expansion as [`Grid::pathfind`] but
    /// records each cell's predecessor and walks back from `end` once it is
    /// reached. `start == end` yields `[start]`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidPosition` if `start` is outside the grid or
    /// empty, and `GridError::NoPathFound` if `end` cannot be reached
    pub fn shortest_path<F>(
        &self,
        start: Vector,
        end: Vector,
        mut allowed: F,
    ) -> Result<Vec<Vector>>
    where
        F: FnMut(&T, Vector) -> bool,
    {
        self.ensure_search_origin(start)?;
        debug!("shortest_path from {start} to {end}");

        let mut parents: HashMap<Vector, Vector> = HashMap::new();
        let mut queued = CoordinateSet::new(self.dimensions());
        let mut frontier = VecDeque::from([start]);
        queued.insert(start);

        while let Some(current) = frontier.pop_front() {
            if current == end {
                return Ok(reconstruct(&parents, start, end));
            }

            for neighbour in self.neighbours(current, &mut allowed)? {
                if queued.insert(neighbour) {
                    parents.insert(neighbour, current);
                    frontier.push_back(neighbour);
                }
            }
        }

        debug!(
            "shortest_path exhausted {} cells without reaching {end}",
            queued.count()
        );
        Err(GridError::NoPathFound { start, end })
    }

    // Both searches expand `start` first, so it must be an occupied cell
    fn ensure_search_origin(&self, start: Vector) -> Result<()> {
        match self.get(start) {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(GridError::InvalidPosition {
                position: start,
                reason: "cell is empty",
            }),
            Err(_) => Err(GridError::InvalidPosition {
                position: start,
                reason: "outside the grid",
            }),
        }
    }
}

// Walks predecessor links back from `end`, then reverses into travel order
fn reconstruct(parents: &HashMap<Vector, Vector>, start: Vector, end: Vector) -> Vec<Vector> {
    let mut route = vec![end];
    let mut node = end;

    while node != start {
        let Some(&previous) = parents.get(&node) else {
            break;
        };
        route.push(previous);
        node = previous;
    }

    route.reverse();
    route
}
