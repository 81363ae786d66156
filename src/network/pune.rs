use crate::errors::GraphError;
use crate::geometry::Coordinate;
use crate::graph::{Graph, GraphBuilder, Weight};


/// Key locations around the college campuses in Pune as (name, lat, lng)
const LOCATIONS: &[(&str, f64, f64)] = &[
    ("VIT Kondhwa Campus", 18.4597, 73.8844),
    ("VIT Bibwewadi Campus", 18.4628, 73.8680),
    ("Swargate", 18.500605533841608, 73.85841056598598),
    ("Shivaji Nagar", 18.53025950764808, 73.85008521330353),
    ("Railway Station", 18.529268626151026, 73.87414034947514),
    ("Katraj", 18.448198224959548, 73.85848909610095),
    ("Sinhgad", 18.466656934037342, 73.83567939610137),
    ("Hinjewadi", 18.5893, 73.7054),
    ("MIT ADT", 18.49318668349125, 74.02340020910424),
    ("Upper Depot", 18.46109567280875, 73.8720547245966),
    ("PICT", 18.457236774425763, 73.85119971764523),
];

/// Road distances in km as (from, to, distance)
/// Most roads are listed in both directions, not always with the same distance
const ROADS: &[(&str, &str, Weight)] = &[
    ("VIT Kondhwa Campus", "Upper Depot", 1.5),
    ("VIT Kondhwa Campus", "Katraj", 4.1),
    ("VIT Kondhwa Campus", "Swargate", 6.5),
    ("VIT Kondhwa Campus", "Railway Station", 8.9),
    ("VIT Kondhwa Campus", "Hinjewadi", 24.0),
    ("VIT Kondhwa Campus", "MIT ADT", 21.0),

    ("VIT Bibwewadi Campus", "Upper Depot", 0.9),
    ("VIT Bibwewadi Campus", "Swargate", 6.0),
    ("VIT Bibwewadi Campus", "Katraj", 8.0),

    ("Swargate", "VIT Kondhwa Campus", 7.0),
    ("Swargate", "VIT Bibwewadi Campus", 6.0),
    ("Swargate", "Shivaji Nagar", 5.0),
    ("Swargate", "Katraj", 12.0),
    ("Swargate", "Railway Station", 3.0),

    ("Shivaji Nagar", "Swargate", 5.0),
    ("Shivaji Nagar", "Railway Station", 3.0),
    ("Shivaji Nagar", "Hinjewadi", 14.0),

    ("Railway Station", "Shivaji Nagar", 3.0),
    ("Railway Station", "Hinjewadi", 18.0),

    ("Katraj", "VIT Kondhwa Campus", 8.0),
    ("Katraj", "VIT Bibwewadi Campus", 8.0),
    ("Katraj", "Swargate", 12.0),
    ("Katraj", "Sinhgad", 15.0),

    ("Sinhgad", "Katraj", 15.0),
    ("Sinhgad", "Hinjewadi", 20.0),

    ("Hinjewadi", "Railway Station", 18.0),
    ("Hinjewadi", "Shivaji Nagar", 14.0),
    ("Hinjewadi", "Sinhgad", 20.0),

    ("Upper Depot", "VIT Bibwewadi Campus", 0.8),
    ("Upper Depot", "VIT Kondhwa Campus", 1.6),
    ("Upper Depot", "Katraj", 1.6),
    ("Upper Depot", "PICT", 3.4),
];


/// Road network of the Pune college region
pub fn pune_campus_network() -> Result<Graph, GraphError> {
    let mut builder = GraphBuilder::new();

    for &(name, lat, lng) in LOCATIONS {
        builder.add_node(name, Coordinate::new(lat, lng));
    }
    for &(from, to, distance) in ROADS {
        builder.add_edge(from, to, distance);
    }

    builder.build()
}
