//! Adjacency discovery and breadth-first search over grids

/// Orthogonal neighbour resolution with caller-supplied filters
pub mod neighbours;
/// Breadth-first reachability and shortest-route search
pub mod pathfinding;
/// Bit set of coordinates used for search bookkeeping
pub mod visited;

pub use visited::CoordinateSet;
