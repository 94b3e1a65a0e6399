//! The entry point converting the whole coordinates to and from the text

use log::debug;

use crate::{
    coord::{Coordinate, Location},
    degree::DegreesFormatter,
    direction::Orientation,
    errors::ParsingError,
    options::{CoordinateFormat, DegreesFormat, DisplayOptions, ParsingOptions},
    symbol::SymbolStyle,
    utm::{Datum, GeodesyUtm, UtmFormatter, UtmProjection},
};

/// Formats and parses the coordinates in any [`CoordinateFormat`].
///
/// ```
/// use geod_text::{Coordinate, CoordinateFormatter};
///
/// let port_townsend = Coordinate::new(48.116_38, -122.775_27);
///
/// let dd = CoordinateFormatter::decimal_degrees();
/// assert_eq!(dd.format(&port_townsend).unwrap(), "48.11638° N, 122.77527° W");
///
/// let ddm = CoordinateFormatter::degrees_decimal_minutes();
/// assert_eq!(ddm.format(&port_townsend).unwrap(), "48° 06.983' N, 122° 46.516' W");
///
/// let dms = CoordinateFormatter::degrees_minutes_seconds();
/// assert_eq!(dms.format(&port_townsend).unwrap(), "48° 6' 59\" N, 122° 46' 31\" W");
///
/// let utm = CoordinateFormatter::utm();
/// assert_eq!(utm.format(&port_townsend).unwrap(), "10U 516726m E 5329260m N");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateFormatter<P = GeodesyUtm> {
    format: CoordinateFormat,
    degrees: DegreesFormatter,
    utm: UtmFormatter<P>,
}

impl CoordinateFormatter {
    /// The formatter with the default configuration:
    /// simple symbols, the hemisphere suffixes and case-insensitive parsing
    pub fn new(format: CoordinateFormat) -> Self {
        Self {
            format: CoordinateFormat::DecimalDegrees,
            degrees: DegreesFormatter::default(),
            utm: UtmFormatter::new(),
        }
        .with_format(format)
    }

    /// The plain decimal format: `48.11638, -122.77527`
    pub fn decimal() -> Self {
        Self::new(CoordinateFormat::DecimalDegrees)
            .with_symbol_style(SymbolStyle::None)
            .with_display_options(DisplayOptions::empty())
    }

    /// Decimal Degrees (DD): `48.11638° N, 122.77527° W`
    pub fn decimal_degrees() -> Self {
        Self::new(CoordinateFormat::DecimalDegrees)
    }

    /// Degrees and Decimal Minutes (DDM): `48° 06.983' N, 122° 46.516' W`
    pub fn degrees_decimal_minutes() -> Self {
        Self::new(CoordinateFormat::DegreesDecimalMinutes)
    }

    /// Degrees, Minutes, Seconds (DMS): `48° 6' 59" N, 122° 46' 31" W`
    pub fn degrees_minutes_seconds() -> Self {
        Self::new(CoordinateFormat::DegreesMinutesSeconds)
    }

    /// Universal Transverse Mercator (UTM): `10U 516726m E 5329260m N`
    pub fn utm() -> Self {
        Self::new(CoordinateFormat::Utm)
    }
}

impl Default for CoordinateFormatter {
    fn default() -> Self {
        Self::new(CoordinateFormat::default())
    }
}

impl<P> CoordinateFormatter<P> {
    /// Replace the format
    pub fn with_format(self, format: CoordinateFormat) -> Self {
        let degrees = match DegreesFormat::try_from(format) {
            Ok(degrees_format) => self.degrees.with_format(degrees_format),
            // the degrees formatter is kept for the separate components
            Err(_) => self.degrees,
        };
        Self {
            format,
            degrees,
            ..self
        }
    }

    /// Replace the symbol style of the degree formats
    pub fn with_symbol_style(self, symbol_style: SymbolStyle) -> Self {
        Self {
            degrees: self.degrees.with_symbol_style(symbol_style),
            ..self
        }
    }

    /// Replace the display options
    pub fn with_display_options(self, display_options: DisplayOptions) -> Self {
        Self {
            degrees: self.degrees.with_display_options(display_options),
            utm: self.utm.with_display_options(display_options),
            ..self
        }
    }

    /// Replace the parsing options
    pub fn with_parsing_options(self, parsing_options: ParsingOptions) -> Self {
        Self {
            degrees: self.degrees.with_parsing_options(parsing_options),
            utm: self.utm.with_parsing_options(parsing_options),
            ..self
        }
    }

    /// Set the bounds of the number of fraction digits of the decimal degrees
    pub fn with_fraction_digits(self, min: u8, max: u8) -> Self {
        Self {
            degrees: self.degrees.with_fraction_digits(min, max),
            ..self
        }
    }

    /// Replace the datum of the UTM projection
    pub fn with_datum(self, datum: Datum) -> Self {
        Self {
            utm: self.utm.with_datum(datum),
            ..self
        }
    }

    /// Replace the UTM projection
    pub fn with_projection<Q: UtmProjection>(self, projection: Q) -> CoordinateFormatter<Q> {
        CoordinateFormatter {
            format: self.format,
            degrees: self.degrees,
            utm: self.utm.with_projection(projection),
        }
    }

    /// The format of the coordinates
    pub const fn format_kind(&self) -> CoordinateFormat {
        self.format
    }

    /// The formatter of the separate components
    pub const fn degrees_formatter(&self) -> &DegreesFormatter {
        &self.degrees
    }

    /// The formatter of the UTM notation
    pub const fn utm_formatter(&self) -> &UtmFormatter<P> {
        &self.utm
    }

    /// Represent the latitude of the coordinate
    pub fn latitude_string(&self, coordinate: &Coordinate) -> Option<String> {
        if !coordinate.is_valid() {
            return None;
        }
        self.degrees
            .format_oriented(coordinate.latitude(), Some(Orientation::Latitude))
    }

    /// Represent the longitude of the coordinate
    pub fn longitude_string(&self, coordinate: &Coordinate) -> Option<String> {
        if !coordinate.is_valid() {
            return None;
        }
        self.degrees
            .format_oriented(coordinate.longitude(), Some(Orientation::Longitude))
    }

    fn parse_degrees(&self, text: &str) -> Result<Coordinate, ParsingError> {
        let components: Vec<_> = if text.contains(',') {
            text.split(',')
                .map(str::trim)
                .filter(|component| !component.is_empty())
                .collect()
        } else {
            text.split_whitespace().collect()
        };

        let [latitude, longitude] = components[..] else {
            return Err(ParsingError::NoMatch);
        };

        let latitude = self
            .degrees
            .parse_oriented(latitude, Some(Orientation::Latitude))?;
        let longitude = self
            .degrees
            .parse_oriented(longitude, Some(Orientation::Longitude))?;

        let coordinate = Coordinate::new(latitude, longitude);
        if !coordinate.is_valid() {
            return Err(ParsingError::InvalidCoordinate);
        }
        Ok(coordinate)
    }
}

impl<P: UtmProjection> CoordinateFormatter<P> {
    /// Represent the coordinate in the configured format.
    ///
    /// Returns `None` for the invalid coordinates.
    pub fn format(&self, coordinate: &Coordinate) -> Option<String> {
        if !coordinate.is_valid() {
            return None;
        }

        match self.format {
            CoordinateFormat::Utm => self.utm.format(coordinate),
            _ => {
                let latitude = self.latitude_string(coordinate)?;
                let longitude = self.longitude_string(coordinate)?;
                Some(format!("{latitude}, {longitude}"))
            }
        }
    }

    /// Read the coordinate in the configured format.
    ///
    /// The degree formats expect the latitude and the longitude
    /// separated with a comma or (if there is no comma) with the whitespace.
    pub fn parse(&self, text: &str) -> Result<Coordinate, ParsingError> {
        match self.format {
            CoordinateFormat::Utm => self.utm.parse(text),
            _ => self.parse_degrees(text),
        }
    }

    /// Read the location in the configured format
    pub fn location_from(&self, text: &str) -> Result<Location, ParsingError> {
        self.parse(text).map(Location::from)
    }
}

/// Try every known format in order: DD, DDM, DMS and finally UTM.
///
/// Returns the first successfully parsed coordinate.
pub fn as_coordinate(text: &str) -> Option<Coordinate> {
    CoordinateFormat::ALL.into_iter().find_map(|format| {
        CoordinateFormatter::new(format)
            .parse(text)
            .map_err(|err| debug!("{text:?} is not in {format}: {err}"))
            .ok()
    })
}

/// Reading the coordinates from the strings of unknown format
pub trait TextExt {
    /// Try every known format, see [`as_coordinate`]
    fn as_coordinate(&self) -> Option<Coordinate>;
}

impl TextExt for str {
    fn as_coordinate(&self) -> Option<Coordinate> {
        as_coordinate(self)
    }
}

#[cfg(test)]
mod format_tests {
    use super::*;

    fn port_townsend() -> Coordinate {
        Coordinate::new(48.116_38, -122.775_27)
    }

    #[test]
    fn presets() {
        let c = port_townsend();
        assert_eq!(
            CoordinateFormatter::decimal().format(&c).unwrap(),
            "48.11638, -122.77527"
        );
        assert_eq!(
            CoordinateFormatter::default().format(&c).unwrap(),
            "48.11638° N, 122.77527° W"
        );
        assert_eq!(
            CoordinateFormatter::degrees_decimal_minutes()
                .format(&c)
                .unwrap(),
            "48° 06.983' N, 122° 46.516' W"
        );
        assert_eq!(
            CoordinateFormatter::degrees_minutes_seconds()
                .format(&c)
                .unwrap(),
            "48° 6' 59\" N, 122° 46' 31\" W"
        );
        assert_eq!(
            CoordinateFormatter::utm().format(&c).unwrap(),
            "10U 516726m E 5329260m N"
        );
    }

    #[test]
    fn compact_traditional() {
        let f = CoordinateFormatter::degrees_minutes_seconds()
            .with_symbol_style(SymbolStyle::Traditional)
            .with_display_options(DisplayOptions::SUFFIX | DisplayOptions::COMPACT);
        assert_eq!(
            f.format(&port_townsend()).unwrap(),
            "48°6′59″N, 122°46′31″W"
        );
    }

    #[test]
    fn components() {
        let f = CoordinateFormatter::default();
        let c = port_townsend();
        assert_eq!(f.latitude_string(&c).unwrap(), "48.11638° N");
        assert_eq!(f.longitude_string(&c).unwrap(), "122.77527° W");
        assert!(f.latitude_string(&Coordinate::new(91.0, 0.0)).is_none());
    }

    #[test]
    fn invalid_coordinate() {
        for format in CoordinateFormat::ALL {
            let f = CoordinateFormatter::new(format);
            assert!(f.format(&Coordinate::new(91.0, 0.0)).is_none());
            assert!(f.format(&Coordinate::new(0.0, -181.0)).is_none());
        }
    }

    #[test]
    fn switch_format() {
        let f = CoordinateFormatter::utm()
            .with_fraction_digits(2, 3)
            .with_format(CoordinateFormat::DecimalDegrees);
        assert_eq!(f.format_kind(), CoordinateFormat::DecimalDegrees);
        assert_eq!(
            f.format(&port_townsend()).unwrap(),
            "48.116° N, 122.775° W"
        );
        assert_eq!(
            f.format(&Coordinate::new(10.0, 20.5)).unwrap(),
            "10.00° N, 20.50° E"
        );
    }

    #[test]
    fn utm_components_use_degrees() {
        let f = CoordinateFormatter::utm();
        assert_eq!(
            f.latitude_string(&port_townsend()).unwrap(),
            "48.11638° N"
        );
    }
}
