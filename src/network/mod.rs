mod definition;
mod pune;

pub use definition::{LocationDefinition, NetworkDefinition, RoadDefinition, load_graph};
pub use pune::pune_campus_network;
