//! The formats and the flags controlling the text representation

use std::{fmt, str::FromStr};

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ParseFormatError, UnsupportedFormat},
    symbol::Desymbolize,
};

/// The format used to represent a coordinate as a string.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordinateFormat {
    /// Decimal Degrees (DD): `48.11638° N, 122.77527° W`.
    ///
    /// Commonly used on the web and computer systems.
    #[default]
    DecimalDegrees,
    /// Degrees and Decimal Minutes (DDM): `48° 06.983' N, 122° 46.516' W`.
    ///
    /// Commonly used by electronic navigation equipment.
    DegreesDecimalMinutes,
    /// Degrees, Minutes, Seconds (DMS): `48° 6' 59" N, 122° 46' 31" W`.
    ///
    /// The format of printed charts and maps.
    DegreesMinutesSeconds,
    /// Universal Transverse Mercator (UTM): `10U 516726m E 5329260m N`.
    Utm,
}

impl CoordinateFormat {
    /// Every format in the order the free-form text is tried
    pub const ALL: [Self; 4] = [
        Self::DecimalDegrees,
        Self::DegreesDecimalMinutes,
        Self::DegreesMinutesSeconds,
        Self::Utm,
    ];

    /// The common abbreviation of the format
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::DecimalDegrees => "DD",
            Self::DegreesDecimalMinutes => "DDM",
            Self::DegreesMinutesSeconds => "DMS",
            Self::Utm => "UTM",
        }
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for CoordinateFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.abbreviation().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFormatError {
                failed: s.to_string(),
            })
    }
}

/// The subset of [`CoordinateFormat`] which represents a single angle
/// with degrees (and, optionally, its minutes and seconds).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DegreesFormat {
    /// Decimal Degrees (DD)
    #[default]
    DecimalDegrees,
    /// Degrees and Decimal Minutes (DDM)
    DegreesDecimalMinutes,
    /// Degrees, Minutes, Seconds (DMS)
    DegreesMinutesSeconds,
}

impl DegreesFormat {
    /// Does the format have the minutes part?
    pub const fn has_minutes(self) -> bool {
        matches!(
            self,
            Self::DegreesDecimalMinutes | Self::DegreesMinutesSeconds
        )
    }

    /// Does the format have the seconds part?
    pub const fn has_seconds(self) -> bool {
        matches!(self, Self::DegreesMinutesSeconds)
    }
}

impl From<DegreesFormat> for CoordinateFormat {
    fn from(format: DegreesFormat) -> Self {
        match format {
            DegreesFormat::DecimalDegrees => Self::DecimalDegrees,
            DegreesFormat::DegreesDecimalMinutes => Self::DegreesDecimalMinutes,
            DegreesFormat::DegreesMinutesSeconds => Self::DegreesMinutesSeconds,
        }
    }
}

impl TryFrom<CoordinateFormat> for DegreesFormat {
    type Error = UnsupportedFormat;

    fn try_from(format: CoordinateFormat) -> Result<Self, Self::Error> {
        match format {
            CoordinateFormat::DecimalDegrees => Ok(Self::DecimalDegrees),
            CoordinateFormat::DegreesDecimalMinutes => Ok(Self::DegreesDecimalMinutes),
            CoordinateFormat::DegreesMinutesSeconds => Ok(Self::DegreesMinutesSeconds),
            CoordinateFormat::Utm => Err(UnsupportedFormat(format)),
        }
    }
}

impl fmt::Display for DegreesFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CoordinateFormat::from(*self))
    }
}

bitflags! {
    /// Options affecting how a value is represented as a string.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct DisplayOptions: u8 {
        /// Use a suffix to represent the cardinal direction of the coordinate:
        /// `122.77527° W` instead of `-122.77527°`.
        const SUFFIX = 1 << 0;
        /// Omit the spaces between the components: `122°46'31"W`.
        ///
        /// Only applies to the degree formats if the symbols are used.
        const COMPACT = 1 << 1;
    }
}

bitflags! {
    /// Options affecting how a coordinate is parsed from a string.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct ParsingOptions: u8 {
        /// Disregard the case of the letters
        const CASE_INSENSITIVE = 1 << 0;
        /// Ignore the whitespace at the beginning and the end of the string
        const TRIMMED = 1 << 1;
    }
}

impl ParsingOptions {
    /// Normalize the text before matching it against the patterns
    pub(crate) fn prepare(self, text: &str) -> String {
        let text = text.desymbolized();
        if self.contains(Self::TRIMMED) {
            text.trim().to_string()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_format_is_a_subset() {
        for format in CoordinateFormat::ALL {
            if let Ok(degrees) = DegreesFormat::try_from(format) {
                assert_eq!(CoordinateFormat::from(degrees), format);
            } else {
                assert_eq!(format, CoordinateFormat::Utm);
            }
        }
    }

    #[test]
    #[should_panic(expected = "UnsupportedFormat(Utm)")]
    fn utm_is_not_a_degrees_format() {
        let _f = DegreesFormat::try_from(CoordinateFormat::Utm).unwrap();
    }

    #[test]
    fn components() {
        assert!(!DegreesFormat::DecimalDegrees.has_minutes());
        assert!(DegreesFormat::DegreesDecimalMinutes.has_minutes());
        assert!(!DegreesFormat::DegreesDecimalMinutes.has_seconds());
        assert!(DegreesFormat::DegreesMinutesSeconds.has_seconds());
    }

    #[test]
    fn format_names() {
        assert_eq!(CoordinateFormat::DegreesMinutesSeconds.to_string(), "DMS");
        assert_eq!(DegreesFormat::DegreesDecimalMinutes.to_string(), "DDM");
        assert_eq!("utm".parse(), Ok(CoordinateFormat::Utm));
        assert_eq!(" DD ".parse(), Ok(CoordinateFormat::DecimalDegrees));
    }

    #[test]
    #[should_panic(expected = "MGRS")]
    fn unknown_format_name() {
        let _f: CoordinateFormat = "MGRS".parse().unwrap();
    }

    #[test]
    fn display_options() {
        let options = DisplayOptions::SUFFIX | DisplayOptions::COMPACT;
        assert_eq!(options, DisplayOptions::all());
        assert!(DisplayOptions::empty().is_empty());

        let mut options = DisplayOptions::empty();
        options.insert(DisplayOptions::COMPACT);
        options |= DisplayOptions::SUFFIX;
        options.remove(DisplayOptions::COMPACT);
        assert_eq!(options, DisplayOptions::SUFFIX);
    }

    #[test]
    fn parsing_options() {
        let options = ParsingOptions::CASE_INSENSITIVE;
        assert!(options.contains(ParsingOptions::CASE_INSENSITIVE));
        assert!(!options.contains(ParsingOptions::TRIMMED));

        let options: ParsingOptions = [ParsingOptions::TRIMMED, ParsingOptions::CASE_INSENSITIVE]
            .into_iter()
            .collect();
        assert_eq!(options, ParsingOptions::all());
    }

    #[test]
    fn prepare_text() {
        assert_eq!(ParsingOptions::empty().prepare(" 10° N "), " 10 N ");
        assert_eq!(ParsingOptions::TRIMMED.prepare(" 10° N "), "10 N");
        assert_eq!(ParsingOptions::TRIMMED.prepare("-179.0°"), "-179.0");
    }
}
