use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    direction::Orientation, errors::ParsingError, formatter::CoordinateFormatter,
    utm::LatitudeBand, TextExt,
};

/// Geographical point on the Earth's surface.
///
/// The coordinate with any of the components out of its range
/// can be constructed, but it is not [valid](Self::is_valid).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// The intersection of the equator and the prime meridian
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// <https://en.wikipedia.org/wiki/Null_Island>
    pub const NULL_ISLAND: Self = Self::ZERO;

    /// The oceanic pole of inaccessibility
    ///
    /// <https://en.wikipedia.org/wiki/Point_Nemo>
    pub const POINT_NEMO: Self = Self::new(-49.027_3, -123.434_5);

    /// Construct a coordinate from the latitude and the longitude in degrees
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees, positive to the north
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive to the east
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Are both the latitude and the longitude within their ranges?
    pub fn is_valid(&self) -> bool {
        Orientation::Latitude.range().contains(&self.latitude)
            && Orientation::Longitude.range().contains(&self.longitude)
    }

    /// The UTM latitude band containing the coordinate
    pub fn latitude_band(&self) -> Option<LatitudeBand> {
        LatitudeBand::for_coordinate(self)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.latitude, coordinate.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = CoordinateFormatter::decimal().format(self) {
            write!(f, "{s}")
        } else {
            write!(f, "{}, {}", self.latitude, self.longitude)
        }
    }
}

impl FromStr for Coordinate {
    type Err = ParsingError;

    /// Try every known notation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.as_coordinate().ok_or(ParsingError::NoMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Coordinate::ZERO, Coordinate::default());
        assert_eq!(Coordinate::NULL_ISLAND, Coordinate::ZERO);
        assert!(Coordinate::POINT_NEMO.is_valid());
        assert_eq!(Coordinate::POINT_NEMO.latitude(), -49.027_3);
        assert_eq!(Coordinate::POINT_NEMO.longitude(), -123.434_5);
    }

    #[test]
    fn validity() {
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.1, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn tuples() {
        let c: Coordinate = (48.1, -122.8).into();
        assert_eq!(c, Coordinate::new(48.1, -122.8));
        assert_eq!(<(f64, f64)>::from(c), (48.1, -122.8));
    }

    #[test]
    fn display_decimal() {
        let c = Coordinate::new(48.116_38, -122.775_27);
        assert_eq!(c.to_string(), "48.11638, -122.77527");
        assert_eq!(Coordinate::ZERO.to_string(), "0.0, 0.0");
    }

    #[test]
    fn display_invalid() {
        let c = Coordinate::new(100.0, 0.5);
        assert_eq!(c.to_string(), "100, 0.5");
    }

    #[test]
    fn parse_any_notation() {
        let expected = Coordinate::new(48.116_38, -122.775_27);
        assert_eq!("48.11638, -122.77527".parse(), Ok(expected));
        assert_eq!("48.11638° N, 122.77527° W".parse(), Ok(expected));

        let c: Coordinate = "48° 6' 59\" N, 122° 46' 31\" W".parse().unwrap();
        assert_eq!(c, Coordinate::new(48.116_39, -122.775_28));
    }

    #[test]
    #[should_panic(expected = "NoMatch")]
    fn parse_garbage() {
        let _c: Coordinate = "somewhere over the rainbow".parse().unwrap();
    }
}
