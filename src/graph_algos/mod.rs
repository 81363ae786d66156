pub mod dijkstra;
mod path;

use path::trace_path;

pub use dijkstra::{PathResult, shortest_path};
