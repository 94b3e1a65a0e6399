//! Latitude or longitude, and the halves of the globe they split into

use std::{error::Error, fmt, ops::RangeInclusive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_LATITUDE, MAX_LONGITUDE};

/// Defines whether a degrees value is intended to represent latitude or longitude.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// The angle between the equatorial plane and the point
    Latitude,
    /// The angle between the prime meridian and the meridian of the point
    Longitude,
}

impl Orientation {
    /// Range of degrees supported by the orientation
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::Latitude => -MAX_LATITUDE..=MAX_LATITUDE,
            Self::Longitude => -MAX_LONGITUDE..=MAX_LONGITUDE,
        }
    }

    /// The hemisphere of the given degrees for this orientation,
    /// or `None` if the degrees is outside of the orientation's range.
    pub fn hemisphere(self, degrees: f64) -> Option<Hemisphere> {
        if !self.range().contains(&degrees) {
            return None;
        }

        let is_positive = degrees >= 0.0;
        let hemisphere = match (self, is_positive) {
            (Self::Latitude, true) => Hemisphere::North,
            (Self::Latitude, false) => Hemisphere::South,
            (Self::Longitude, true) => Hemisphere::East,
            (Self::Longitude, false) => Hemisphere::West,
        };
        Some(hemisphere)
    }
}

/// The range of degrees when the orientation is not known in advance
pub(crate) fn degrees_range(orientation: Option<Orientation>) -> RangeInclusive<f64> {
    match orientation {
        Some(orientation) => orientation.range(),
        None => Orientation::Longitude.range(),
    }
}

/// The hemisphere of either a latitude or a longitude.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    /// Non-negative latitudes
    North,
    /// Negative latitudes
    South,
    /// Non-negative longitudes
    East,
    /// Negative longitudes
    West,
}

impl Hemisphere {
    /// The orientation (latitude or longitude) of the hemisphere
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::North | Self::South => Orientation::Latitude,
            Self::East | Self::West => Orientation::Longitude,
        }
    }

    /// The range of degrees covered by the hemisphere
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::North => 0.0..=MAX_LATITUDE,
            Self::South => -MAX_LATITUDE..=0.0,
            Self::East => 0.0..=MAX_LONGITUDE,
            Self::West => -MAX_LONGITUDE..=0.0,
        }
    }

    /// Whether the degrees of this hemisphere are written with the minus sign
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }

    /// The letter denoting the hemisphere
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Force the sign of the degrees to match the hemisphere.
    ///
    /// The zero also gets its sign, so the minutes and seconds
    /// added later keep the direction.
    pub(crate) fn apply_sign(self, degrees: f64) -> f64 {
        if self.is_negative() {
            -degrees.abs()
        } else {
            degrees.abs()
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The character does not denote any hemisphere
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseHemisphereError {
    failed: char,
}

impl fmt::Display for ParseHemisphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse Hemisphere from {:?}", self.failed)
    }
}

impl Error for ParseHemisphereError {}

impl TryFrom<char> for Hemisphere {
    type Error = ParseHemisphereError;

    /// The lowercase letters are accepted as well
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Self::North),
            'S' => Ok(Self::South),
            'E' => Ok(Self::East),
            'W' => Ok(Self::West),
            _ => Err(ParseHemisphereError { failed: c }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_hemispheres() {
        let lat = Orientation::Latitude;
        assert_eq!(lat.hemisphere(48.1), Some(Hemisphere::North));
        assert_eq!(lat.hemisphere(0.0), Some(Hemisphere::North));
        assert_eq!(lat.hemisphere(-0.000_1), Some(Hemisphere::South));
        assert_eq!(lat.hemisphere(-90.0), Some(Hemisphere::South));
        assert!(lat.hemisphere(90.5).is_none());
    }

    #[test]
    fn longitude_hemispheres() {
        let lon = Orientation::Longitude;
        assert_eq!(lon.hemisphere(120.33), Some(Hemisphere::East));
        assert_eq!(lon.hemisphere(-179.0), Some(Hemisphere::West));
        assert_eq!(lon.hemisphere(180.0), Some(Hemisphere::East));
        assert!(lon.hemisphere(-180.1).is_none());
        assert!(lon.hemisphere(f64::NAN).is_none());
    }

    #[test]
    fn unknown_orientation_is_the_widest() {
        assert_eq!(degrees_range(None), -180.0..=180.0);
        assert_eq!(degrees_range(Some(Orientation::Latitude)), -90.0..=90.0);
    }

    #[test]
    fn hemisphere_belongs_to_orientation() {
        assert_eq!(Hemisphere::North.orientation(), Orientation::Latitude);
        assert_eq!(Hemisphere::South.orientation(), Orientation::Latitude);
        assert_eq!(Hemisphere::East.orientation(), Orientation::Longitude);
        assert_eq!(Hemisphere::West.orientation(), Orientation::Longitude);
    }

    #[test]
    fn hemisphere_ranges_are_halves() {
        assert_eq!(Hemisphere::North.range(), 0.0..=90.0);
        assert_eq!(Hemisphere::South.range(), -90.0..=0.0);
        assert_eq!(Hemisphere::East.range(), 0.0..=180.0);
        assert_eq!(Hemisphere::West.range(), -180.0..=0.0);
    }

    #[test]
    fn sign_follows_hemisphere() {
        assert_eq!(Hemisphere::South.apply_sign(10.0), -10.0);
        assert_eq!(Hemisphere::North.apply_sign(-10.0), 10.0);
        assert_eq!(Hemisphere::East.apply_sign(10.0), 10.0);
        assert!(Hemisphere::West.apply_sign(0.0).is_sign_negative());
    }

    #[test]
    fn parse_letters() {
        assert_eq!(Hemisphere::try_from('N'), Ok(Hemisphere::North));
        assert_eq!(Hemisphere::try_from('w'), Ok(Hemisphere::West));
        assert_eq!(Hemisphere::South.to_string(), "S");
    }

    #[test]
    #[should_panic(expected = "ParseHemisphereError")]
    fn parse_bad_letter() {
        let _h = Hemisphere::try_from('X').unwrap();
    }
}
