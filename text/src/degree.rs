//! Conversion of a single angle to and from its textual representations

use log::trace;
use num_traits::ToPrimitive;

use crate::{
    consts::{
        MAX_DEGREES_FRACTION_DIGITS, MINUTES_FRACTION_DIGITS, MINUTES_INTEGER_DIGITS,
        MINUTES_IN_DEGREE, MIN_DEGREES_FRACTION_DIGITS, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE,
    },
    direction::{degrees_range, Hemisphere, Orientation},
    errors::{Field, ParsingError, UnsupportedFormat},
    number::DecimalStyle,
    options::{CoordinateFormat, DegreesFormat, DisplayOptions, ParsingOptions},
    pattern::{degrees_regex, Fields},
    symbol::SymbolStyle,
    utils::RoundTo,
};

const THOUSANDTHS_IN_DEGREE: f64 = MINUTES_IN_DEGREE * 1000.0;

/// Formats and parses the degrees of a latitude or a longitude
/// in one of the [`DegreesFormat`]s.
///
/// The configuration is fixed at construction with the `with_*` methods:
///
/// ```
/// use geod_text::{DegreesFormat, DegreesFormatter, DisplayOptions, Orientation};
///
/// let f = DegreesFormatter::new(DegreesFormat::DegreesMinutesSeconds)
///     .with_orientation(Some(Orientation::Longitude))
///     .with_display_options(DisplayOptions::SUFFIX);
///
/// assert_eq!(f.format(-122.775_27).unwrap(), "122° 46' 31\" W");
/// assert_eq!(f.parse("122° 46' 31\" W").unwrap(), -122.775_28);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DegreesFormatter {
    format: DegreesFormat,
    orientation: Option<Orientation>,
    symbol_style: SymbolStyle,
    display_options: DisplayOptions,
    parsing_options: ParsingOptions,
    min_fraction_digits: u8,
    max_fraction_digits: u8,
}

impl Default for DegreesFormatter {
    fn default() -> Self {
        Self::new(DegreesFormat::default())
    }
}

impl DegreesFormatter {
    /// The formatter of the given format with the default configuration:
    /// simple symbols, the hemisphere suffix, case-insensitive parsing
    /// and no predefined orientation.
    pub const fn new(format: DegreesFormat) -> Self {
        Self {
            format,
            orientation: None,
            symbol_style: SymbolStyle::Simple,
            display_options: DisplayOptions::SUFFIX,
            parsing_options: ParsingOptions::CASE_INSENSITIVE,
            min_fraction_digits: MIN_DEGREES_FRACTION_DIGITS,
            max_fraction_digits: MAX_DEGREES_FRACTION_DIGITS,
        }
    }

    /// The formatter for the coordinate format, if it represents the degrees
    pub fn for_format(format: CoordinateFormat) -> Result<Self, UnsupportedFormat> {
        DegreesFormat::try_from(format).map(Self::new)
    }

    /// Replace the format
    pub const fn with_format(self, format: DegreesFormat) -> Self {
        Self { format, ..self }
    }

    /// Replace the expected orientation
    pub const fn with_orientation(self, orientation: Option<Orientation>) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Replace the symbol style
    pub const fn with_symbol_style(self, symbol_style: SymbolStyle) -> Self {
        Self {
            symbol_style,
            ..self
        }
    }

    /// Replace the display options
    pub const fn with_display_options(self, display_options: DisplayOptions) -> Self {
        Self {
            display_options,
            ..self
        }
    }

    /// Replace the parsing options
    pub const fn with_parsing_options(self, parsing_options: ParsingOptions) -> Self {
        Self {
            parsing_options,
            ..self
        }
    }

    /// Set the bounds of the number of fraction digits of the decimal degrees.
    ///
    /// The maximum also defines the precision of the parsed value.
    pub fn with_fraction_digits(self, min: u8, max: u8) -> Self {
        let style = DecimalStyle::new(min, max);
        Self {
            min_fraction_digits: style.min_fraction_digits(),
            max_fraction_digits: style.max_fraction_digits(),
            ..self
        }
    }

    /// The format of the degrees
    pub const fn format_kind(&self) -> DegreesFormat {
        self.format
    }

    /// The expected orientation, if any
    pub const fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// The symbols annotating the components
    pub const fn symbol_style(&self) -> SymbolStyle {
        self.symbol_style
    }

    /// The options of the formatting
    pub const fn display_options(&self) -> DisplayOptions {
        self.display_options
    }

    /// The options of the parsing
    pub const fn parsing_options(&self) -> ParsingOptions {
        self.parsing_options
    }

    /// The bounds of the number of fraction digits of the decimal degrees
    pub const fn fraction_digits(&self) -> (u8, u8) {
        (self.min_fraction_digits, self.max_fraction_digits)
    }

    fn separator(&self) -> &'static str {
        if self.display_options.contains(DisplayOptions::COMPACT) && self.symbol_style.has_symbols()
        {
            ""
        } else {
            " "
        }
    }

    /// Represent the degrees with the configured orientation.
    ///
    /// Returns `None` if the value is out of the orientation's range.
    pub fn format(&self, degrees: f64) -> Option<String> {
        self.format_oriented(degrees, self.orientation)
    }

    /// Represent the degrees of the latitude or longitude.
    ///
    /// Without the orientation the hemisphere is unknown,
    /// so the value keeps its sign even if the suffix is requested.
    pub fn format_oriented(&self, degrees: f64, orientation: Option<Orientation>) -> Option<String> {
        if !degrees_range(orientation).contains(&degrees) {
            return None;
        }

        let suffix = if self.display_options.contains(DisplayOptions::SUFFIX) {
            orientation.and_then(|o| o.hemisphere(degrees))
        } else {
            None
        };
        let value = if suffix.is_some() {
            degrees.abs()
        } else {
            degrees
        };

        let mut components = match self.format {
            DegreesFormat::DecimalDegrees => vec![self.decimal_degrees(value)],
            DegreesFormat::DegreesDecimalMinutes => self.degrees_decimal_minutes(value)?,
            DegreesFormat::DegreesMinutesSeconds => self.degrees_minutes_seconds(value)?,
        };
        if let Some(hemisphere) = suffix {
            components.push(hemisphere.to_string());
        }

        Some(components.join(self.separator()))
    }

    fn decimal_degrees(&self, value: f64) -> String {
        let style = DecimalStyle::new(self.min_fraction_digits, self.max_fraction_digits);
        format!("{}{}", style.render(value), self.symbol_style.degrees())
    }

    fn whole_degrees(&self, value: f64, degrees: u64, is_zero: bool) -> String {
        let sign = if value < 0.0 && !is_zero { "-" } else { "" };
        format!("{}{}{}", sign, degrees, self.symbol_style.degrees())
    }

    fn degrees_decimal_minutes(&self, value: f64) -> Option<Vec<String>> {
        let thousandths = (value.abs() * THOUSANDTHS_IN_DEGREE).round().to_u64()?;
        let per_degree = THOUSANDTHS_IN_DEGREE.to_u64()?;
        let degrees = thousandths / per_degree;
        let minutes = (thousandths % per_degree).to_f64()? / 1000.0;

        let style =
            DecimalStyle::fixed(MINUTES_FRACTION_DIGITS).with_integer_digits(MINUTES_INTEGER_DIGITS);
        Some(vec![
            self.whole_degrees(value, degrees, thousandths == 0),
            format!("{}{}", style.render(minutes), self.symbol_style.minutes()),
        ])
    }

    fn degrees_minutes_seconds(&self, value: f64) -> Option<Vec<String>> {
        let seconds = (value.abs() * SECONDS_IN_DEGREE).round().to_u64()?;
        let per_degree = SECONDS_IN_DEGREE.to_u64()?;
        let per_minute = SECONDS_IN_MINUTE.to_u64()?;
        let degrees = seconds / per_degree;
        let minutes = (seconds % per_degree) / per_minute;

        Some(vec![
            self.whole_degrees(value, degrees, seconds == 0),
            format!("{}{}", minutes, self.symbol_style.minutes()),
            format!("{}{}", seconds % per_minute, self.symbol_style.seconds()),
        ])
    }

    /// Read the degrees with the configured orientation
    pub fn parse(&self, text: &str) -> Result<f64, ParsingError> {
        self.parse_oriented(text, self.orientation)
    }

    /// Read the degrees of the latitude or longitude.
    ///
    /// The hemisphere letter, either before or after the value,
    /// defines the sign of the result.
    pub fn parse_oriented(
        &self,
        text: &str,
        orientation: Option<Orientation>,
    ) -> Result<f64, ParsingError> {
        let text = self.parsing_options.prepare(text);
        let case_insensitive = self
            .parsing_options
            .contains(ParsingOptions::CASE_INSENSITIVE);
        let fields = Fields::capture(degrees_regex(self.format, case_insensitive), &text)?;

        let mut degrees = fields.number(Field::Degrees)?;
        if !degrees_range(orientation).contains(&degrees) {
            return Err(ParsingError::InvalidRangeDegrees);
        }

        let hemisphere = Self::hemisphere(&fields)?;
        if let Some(hemisphere) = hemisphere {
            if orientation.is_some_and(|o| o != hemisphere.orientation()) {
                return Err(ParsingError::InvalidDirection);
            }
            degrees = hemisphere.apply_sign(degrees);
        }

        if self.format.has_minutes() {
            let minutes = fields.number(Field::Minutes)?;
            if !(0.0..MINUTES_IN_DEGREE).contains(&minutes) {
                return Err(ParsingError::InvalidRangeMinutes);
            }
            degrees = accumulate(degrees, minutes / MINUTES_IN_DEGREE);
        }

        if self.format.has_seconds() {
            let seconds = fields.number(Field::Seconds)?;
            if !(0.0..SECONDS_IN_MINUTE).contains(&seconds) {
                return Err(ParsingError::InvalidRangeSeconds);
            }
            degrees = accumulate(degrees, seconds / SECONDS_IN_DEGREE);
        }

        let governing = hemisphere.map(Hemisphere::orientation).or(orientation);
        if !degrees_range(governing).contains(&degrees) {
            return Err(ParsingError::InvalidRangeDegrees);
        }

        trace!("{text:?} is parsed as {degrees} ({:?})", self.format);
        Ok(degrees.round_to(self.max_fraction_digits))
    }

    /// The direction from the prefix and the suffix
    fn hemisphere(fields: &Fields<'_>) -> Result<Option<Hemisphere>, ParsingError> {
        let letter = |field| {
            fields
                .letter(field)
                .map(|c| Hemisphere::try_from(c).map_err(|_| ParsingError::NotFound(field)))
                .transpose()
        };

        match (letter(Field::Prefix)?, letter(Field::Suffix)?) {
            (Some(prefix), Some(suffix)) if prefix != suffix => Err(ParsingError::Conflict),
            (prefix, suffix) => Ok(prefix.or(suffix)),
        }
    }
}

/// Add the part of the degree keeping the sign of the degrees (even if it is zero)
fn accumulate(degrees: f64, part: f64) -> f64 {
    if degrees.is_sign_negative() {
        degrees - part
    } else {
        degrees + part
    }
}

#[cfg(test)]
mod format_tests {
    use super::*;

    fn compact(format: DegreesFormat) -> DegreesFormatter {
        DegreesFormatter::new(format).with_display_options(DisplayOptions::COMPACT)
    }

    #[test]
    fn decimal_degrees_compact() {
        let f = compact(DegreesFormat::DecimalDegrees);
        assert_eq!(f.format(0.0).unwrap(), "0.0°");
        assert_eq!(f.format(120.33).unwrap(), "120.33°");
        assert_eq!(f.format(-179.0).unwrap(), "-179.0°");
    }

    #[test]
    fn degrees_minutes_seconds_compact() {
        let f = compact(DegreesFormat::DegreesMinutesSeconds);
        assert_eq!(f.format(120.33).unwrap(), "120°19'48\"");
    }

    #[test]
    fn degrees_decimal_minutes_compact() {
        let f = compact(DegreesFormat::DegreesDecimalMinutes);
        assert_eq!(f.format(120.33).unwrap(), "120°19.800'");
        assert_eq!(f.format(-48.116_38).unwrap(), "-48°06.983'");
    }

    #[test]
    fn suffix_needs_orientation() {
        let f = DegreesFormatter::default();
        assert_eq!(f.format(-122.775_27).unwrap(), "-122.77527°");
        assert_eq!(
            f.format_oriented(-122.775_27, Some(Orientation::Longitude))
                .unwrap(),
            "122.77527° W"
        );
        assert_eq!(
            f.format_oriented(48.116_38, Some(Orientation::Latitude))
                .unwrap(),
            "48.11638° N"
        );
    }

    #[test]
    fn suffix_styles() {
        let lat = Some(Orientation::Latitude);
        let f = DegreesFormatter::new(DegreesFormat::DegreesMinutesSeconds).with_orientation(lat);
        assert_eq!(f.format(48.116_38).unwrap(), "48° 6' 59\" N");

        let f = f.with_display_options(DisplayOptions::SUFFIX | DisplayOptions::COMPACT);
        assert_eq!(f.format(48.116_38).unwrap(), "48°6'59\"N");

        let f = f.with_symbol_style(SymbolStyle::Traditional);
        assert_eq!(f.format(48.116_38).unwrap(), "48°6′59″N");

        let f = f.with_symbol_style(SymbolStyle::None);
        assert_eq!(f.format(48.116_38).unwrap(), "48 6 59 N");
    }

    #[test]
    fn decimal_minutes_with_suffix() {
        let f = DegreesFormatter::new(DegreesFormat::DegreesDecimalMinutes)
            .with_orientation(Some(Orientation::Longitude));
        assert_eq!(f.format(-122.775_27).unwrap(), "122° 46.516' W");
        assert_eq!(f.format(0.0).unwrap(), "0° 00.000' E");
    }

    #[test]
    fn carry_into_larger_units() {
        let f = DegreesFormatter::new(DegreesFormat::DegreesMinutesSeconds)
            .with_display_options(DisplayOptions::empty());
        assert_eq!(f.format(10.999_999_9).unwrap(), "11° 0' 0\"");

        let f = DegreesFormatter::new(DegreesFormat::DegreesDecimalMinutes)
            .with_display_options(DisplayOptions::empty());
        assert_eq!(f.format(10.999_999_9).unwrap(), "11° 00.000'");
    }

    #[test]
    fn negative_below_one_degree() {
        let f = DegreesFormatter::new(DegreesFormat::DegreesDecimalMinutes)
            .with_display_options(DisplayOptions::empty());
        assert_eq!(f.format(-0.5).unwrap(), "-0° 30.000'");
        assert_eq!(f.format(-0.000_000_1).unwrap(), "0° 00.000'");

        let f = f.with_orientation(Some(Orientation::Latitude))
            .with_display_options(DisplayOptions::SUFFIX);
        assert_eq!(f.format(-0.5).unwrap(), "0° 30.000' S");
    }

    #[test]
    fn fraction_digits() {
        let f = DegreesFormatter::default()
            .with_display_options(DisplayOptions::empty())
            .with_fraction_digits(3, 3);
        assert_eq!(f.format(48.116_38).unwrap(), "48.116°");
        assert_eq!(f.format(48.0).unwrap(), "48.000°");
        assert_eq!(f.fraction_digits(), (3, 3));

        let f = f.with_fraction_digits(0, 0);
        assert_eq!(f.format(48.6).unwrap(), "49°");
    }

    #[test]
    fn out_of_range() {
        let f = DegreesFormatter::default();
        assert!(f.format_oriented(90.1, Some(Orientation::Latitude)).is_none());
        assert!(f.format_oriented(-180.1, Some(Orientation::Longitude)).is_none());
        assert!(f.format(-312.543_422_4).is_none());
        assert!(f.format(f64::NAN).is_none());
        assert!(f.format(f64::INFINITY).is_none());
    }

    #[test]
    fn utm_is_not_supported() {
        assert_eq!(
            DegreesFormatter::for_format(CoordinateFormat::Utm),
            Err(UnsupportedFormat(CoordinateFormat::Utm))
        );
        assert_eq!(
            DegreesFormatter::for_format(CoordinateFormat::DegreesDecimalMinutes)
                .unwrap()
                .format_kind(),
            DegreesFormat::DegreesDecimalMinutes
        );
    }
}
