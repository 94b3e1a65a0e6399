use log::{debug, trace};

use super::{
    band::LatitudeBand,
    projection::{Datum, GeodesyUtm, UtmProjection},
    zone::{UtmCoordinate, UtmGridZone},
};
use crate::{
    consts::UTM_MIN_DIGITS,
    coord::Coordinate,
    errors::{Field, ParsingError},
    number::DecimalStyle,
    options::{DisplayOptions, ParsingOptions},
    pattern::{utm_regex, Fields},
};

/// Converts the coordinates to and from the UTM notation: `10U 516726m E 5329260m N`.
///
/// The conversion between the geographic and the grid positions
/// is delegated to the [`UtmProjection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtmFormatter<P = GeodesyUtm> {
    projection: P,
    datum: Datum,
    display_options: DisplayOptions,
    parsing_options: ParsingOptions,
}

impl UtmFormatter {
    /// The formatter with the default projection, WGS84 datum,
    /// direction suffixes and case-insensitive parsing
    pub fn new() -> Self {
        Self {
            projection: GeodesyUtm,
            datum: Datum::default(),
            display_options: DisplayOptions::SUFFIX,
            parsing_options: ParsingOptions::CASE_INSENSITIVE,
        }
    }
}

impl Default for UtmFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> UtmFormatter<P> {
    /// Replace the projection
    pub fn with_projection<Q: UtmProjection>(self, projection: Q) -> UtmFormatter<Q> {
        UtmFormatter {
            projection,
            datum: self.datum,
            display_options: self.display_options,
            parsing_options: self.parsing_options,
        }
    }

    /// Replace the datum
    pub fn with_datum(self, datum: Datum) -> Self {
        Self { datum, ..self }
    }

    /// Replace the display options
    pub fn with_display_options(self, display_options: DisplayOptions) -> Self {
        Self {
            display_options,
            ..self
        }
    }

    /// Replace the parsing options
    pub fn with_parsing_options(self, parsing_options: ParsingOptions) -> Self {
        Self {
            parsing_options,
            ..self
        }
    }

    /// The projection in use
    pub const fn projection(&self) -> &P {
        &self.projection
    }

    /// The datum passed to the projection
    pub const fn datum(&self) -> Datum {
        self.datum
    }

    /// The options of the formatting
    pub const fn display_options(&self) -> DisplayOptions {
        self.display_options
    }

    /// The options of the parsing
    pub const fn parsing_options(&self) -> ParsingOptions {
        self.parsing_options
    }
}

impl<P: UtmProjection> UtmFormatter<P> {
    /// Represent the coordinate in the UTM notation.
    ///
    /// Returns `None` if the coordinate is invalid or cannot be projected,
    /// e.g. in the polar regions not covered by the grid.
    pub fn format(&self, coordinate: &Coordinate) -> Option<String> {
        if !coordinate.is_valid() {
            return None;
        }

        let band = LatitudeBand::for_coordinate(coordinate)?;
        let Some(utm) = self.projection.project(coordinate, self.datum) else {
            debug!("Cannot project {coordinate:?} with the {} datum", self.datum);
            return None;
        };

        let (east, north) = if self.display_options.contains(DisplayOptions::SUFFIX) {
            if self.display_options.contains(DisplayOptions::COMPACT) {
                ("E", "N")
            } else {
                (" E", " N")
            }
        } else {
            ("", "")
        };

        let meters = DecimalStyle::fixed(0).with_integer_digits(UTM_MIN_DIGITS);
        Some(format!(
            "{}{} {}m{} {}m{}",
            utm.zone,
            band,
            meters.render(utm.easting),
            east,
            meters.render(utm.northing),
            north
        ))
    }

    /// Read the coordinate from the UTM notation.
    ///
    /// The band of the resulting coordinate should match the band
    /// written in the text, since the zone and the band alone
    /// do not define the latitude.
    pub fn parse(&self, text: &str) -> Result<Coordinate, ParsingError> {
        let text = self.parsing_options.prepare(text);
        let case_insensitive = self
            .parsing_options
            .contains(ParsingOptions::CASE_INSENSITIVE);
        let fields = Fields::capture(utm_regex(case_insensitive), &text)?;

        let zone = fields
            .text(Field::Zone)
            .and_then(|zone| zone.parse::<u8>().ok())
            .ok_or(ParsingError::NotFound(Field::Zone))?;
        let zone = UtmGridZone::new(zone).ok_or(ParsingError::InvalidZone)?;

        let letter = fields
            .letter(Field::Band)
            .ok_or(ParsingError::NotFound(Field::Band))?;
        let letter = if case_insensitive {
            letter.to_ascii_uppercase()
        } else {
            letter
        };
        let band = LatitudeBand::try_from(letter).map_err(|_| ParsingError::InvalidLatitudeBand)?;

        let utm = UtmCoordinate {
            northing: fields.number(Field::Northing)?,
            easting: fields.number(Field::Easting)?,
            zone,
            hemisphere: band.hemisphere(),
        };
        trace!("{text:?} is parsed as {utm:?}");

        let coordinate = self
            .projection
            .unproject(&utm, self.datum)
            .filter(Coordinate::is_valid)
            .ok_or(ParsingError::InvalidCoordinate)?;

        let actual = LatitudeBand::for_coordinate(&coordinate);
        if actual != Some(band) {
            debug!("The band {band} does not match the coordinate {coordinate:?} ({actual:?})");
            return Err(ParsingError::InvalidLatitudeBand);
        }

        Ok(coordinate)
    }
}

#[cfg(test)]
mod format_tests {
    use super::*;

    fn port_townsend() -> Coordinate {
        Coordinate::new(48.116_38, -122.775_27)
    }

    #[test]
    fn default_options() {
        let f = UtmFormatter::new();
        assert_eq!(
            f.format(&port_townsend()).unwrap(),
            "10U 516726m E 5329260m N"
        );
    }

    #[test]
    fn compact() {
        let f = UtmFormatter::new()
            .with_display_options(DisplayOptions::SUFFIX | DisplayOptions::COMPACT);
        assert_eq!(
            f.format(&port_townsend()).unwrap(),
            "10U 516726mE 5329260mN"
        );
    }

    #[test]
    fn no_suffix() {
        let f = UtmFormatter::new().with_display_options(DisplayOptions::empty());
        assert_eq!(f.format(&port_townsend()).unwrap(), "10U 516726m 5329260m");

        let f = f.with_display_options(DisplayOptions::COMPACT);
        assert_eq!(f.format(&port_townsend()).unwrap(), "10U 516726m 5329260m");
    }

    #[test]
    fn short_northing_is_padded() {
        let f = UtmFormatter::new();
        let s = f.format(&Coordinate::new(0.5, 0.5)).unwrap();
        assert!(s.starts_with("31N "), "{s}");
        assert!(s.ends_with(" 055318m N"), "{s}");
    }

    #[test]
    fn southern_hemisphere() {
        let f = UtmFormatter::new();
        assert_eq!(
            f.format(&Coordinate::new(-33.868_8, 151.209_3)).unwrap(),
            "56H 334369m E 6250948m N"
        );
    }

    #[test]
    fn outside_of_the_grid() {
        let f = UtmFormatter::new();
        assert!(f.format(&Coordinate::new(85.0, 10.0)).is_none());
        assert!(f.format(&Coordinate::new(-80.5, 10.0)).is_none());
    }

    #[test]
    fn invalid_coordinate() {
        let f = UtmFormatter::new();
        assert!(f.format(&Coordinate::new(45.0, 181.0)).is_none());
        assert!(f.format(&Coordinate::new(f64::NAN, 0.0)).is_none());
    }
}
