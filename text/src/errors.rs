use std::{error::Error, fmt};

use crate::options::CoordinateFormat;

/// The named part of a coordinate notation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// Hemisphere letter before the value
    Prefix,
    /// Whole (or decimal) degrees
    Degrees,
    /// Arc minutes
    Minutes,
    /// Arc seconds
    Seconds,
    /// Hemisphere letter after the value
    Suffix,
    /// UTM grid zone number
    Zone,
    /// UTM latitude band letter
    Band,
    /// UTM easting in meters
    Easting,
    /// UTM northing in meters
    Northing,
}

impl Field {
    /// The name of the capturing group in the patterns
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prefix => "PREFIX",
            Self::Degrees => "DEGREES",
            Self::Minutes => "MINUTES",
            Self::Seconds => "SECONDS",
            Self::Suffix => "SUFFIX",
            Self::Zone => "ZONE",
            Self::Band => "BAND",
            Self::Easting => "EASTING",
            Self::Northing => "NORTHING",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An error encountered when parsing a coordinate or a degrees value from a string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParsingError {
    /// The suffix and prefix of the string contradict each other
    Conflict,
    /// The matched coordinate is not valid
    InvalidCoordinate,
    /// The expected orientation does not match the parsed direction
    InvalidDirection,
    /// The matched degrees are outside of the expected range
    InvalidRangeDegrees,
    /// The matched minutes are not in range [0..60)
    InvalidRangeMinutes,
    /// The matched seconds are not in range [0..60)
    InvalidRangeSeconds,
    /// The UTM grid zone is not in range [1..=60]
    InvalidZone,
    /// The UTM latitude band is unknown or does not match the coordinate
    InvalidLatitudeBand,
    /// The string does not fit the notation
    NoMatch,
    /// The named part was not found or cannot be read as a number
    NotFound(Field),
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse coordinate: ")?;
        match self {
            Self::Conflict => write!(f, "the prefix and the suffix contradict each other"),
            Self::InvalidCoordinate => write!(f, "the coordinate is not valid"),
            Self::InvalidDirection => {
                write!(f, "the direction does not match the expected orientation")
            }
            Self::InvalidRangeDegrees => write!(f, "the degrees are out of range"),
            Self::InvalidRangeMinutes => write!(f, "arc minutes not in range [0..60)"),
            Self::InvalidRangeSeconds => write!(f, "arc seconds not in range [0..60)"),
            Self::InvalidZone => write!(f, "UTM grid zone not in range [1..60]"),
            Self::InvalidLatitudeBand => write!(f, "invalid UTM latitude band"),
            Self::NoMatch => write!(f, "no match found"),
            Self::NotFound(field) => write!(f, "{field} not found"),
        }
    }
}

impl Error for ParsingError {}

/// The coordinate format cannot be represented with the degrees of a single angle
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UnsupportedFormat(pub CoordinateFormat);

impl fmt::Display for UnsupportedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported degrees format: {}", self.0)
    }
}

impl Error for UnsupportedFormat {}

/// The string does not name any coordinate format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFormatError {
    pub(crate) failed: String,
}

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse CoordinateFormat from {:?}", self.failed)
    }
}

impl Error for ParseFormatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_group() {
        let err = ParsingError::NotFound(Field::Minutes);
        assert_eq!(err.to_string(), "Cannot parse coordinate: MINUTES not found");
    }

    #[test]
    fn range_messages() {
        assert_eq!(
            ParsingError::InvalidRangeSeconds.to_string(),
            "Cannot parse coordinate: arc seconds not in range [0..60)"
        );
        assert_eq!(
            ParsingError::InvalidZone.to_string(),
            "Cannot parse coordinate: UTM grid zone not in range [1..60]"
        );
    }

    #[test]
    fn unsupported_format_message() {
        let err = UnsupportedFormat(CoordinateFormat::Utm);
        assert_eq!(err.to_string(), "Unsupported degrees format: UTM");
    }
}
