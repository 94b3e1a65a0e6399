#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::point::Coordinate;

/// The coordinate with an optional altitude
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    coordinate: Coordinate,
    altitude: Option<f64>,
}

impl Location {
    /// The location on the surface
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinate: Coordinate::new(latitude, longitude),
            altitude: None,
        }
    }

    /// Set the altitude in meters above the sea level
    pub const fn with_altitude(self, altitude: f64) -> Self {
        Self {
            altitude: Some(altitude),
            ..self
        }
    }

    /// The horizontal position
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Meters above the sea level, if known
    pub const fn altitude(&self) -> Option<f64> {
        self.altitude
    }
}

impl From<Coordinate> for Location {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            altitude: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface() {
        let loc = Location::new(42.360_082_5, -71.058_880_1);
        assert_eq!(loc.coordinate(), Coordinate::new(42.360_082_5, -71.058_880_1));
        assert!(loc.altitude().is_none());
        assert_eq!(Location::from(loc.coordinate()), loc);
    }

    #[test]
    fn above_the_sea() {
        let loc = Location::new(27.988_1, 86.925).with_altitude(8_848.86);
        assert_eq!(loc.altitude(), Some(8_848.86));
        assert_ne!(loc, Location::new(27.988_1, 86.925));
    }
}
