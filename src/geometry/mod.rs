use num_traits::Float;
use serde::{Deserialize, Serialize};


/// Mean earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;


/// Great-circle distance between two (lat, lng) pairs given in degrees
/// https://en.wikipedia.org/wiki/Haversine_formula
pub fn haversine<T>(lat1: T, lng1: T, lat2: T, lng2: T, radius: T) -> T
where
    T: Float,
    {
    let two = T::one() + T::one();
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / two).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / two).sin().powi(2);

    two * radius * a.sqrt().min(T::one()).asin()
}


/// Geographic position of a location, in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {

    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and within the latitude/longitude ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Straight-line distance to another coordinate in kilometres
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine(self.lat, self.lng, other.lat, other.lng, EARTH_RADIUS_KM)
    }

    pub(crate) fn as_point(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}
