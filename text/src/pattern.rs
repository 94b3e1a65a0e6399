//! Regular expressions recognizing the notations.
//!
//! The degree patterns are applied to a desymbolized text
//! (see [`crate::symbol`]), so the components are always delimited
//! with a single space.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::{
    errors::{Field, ParsingError},
    options::DegreesFormat,
};

/// Optional hemisphere letter before the degrees and the degrees value itself
fn degrees_part(has_fraction: bool) -> String {
    let fraction = if has_fraction { r"(?:\.\d+)?" } else { "" };

    format!(
        r#"
        ^                                           # match the whole line from the start
        (?:
            (?P<{prefix}>[NSEW])                        # hemisphere letter
            \x20?                                       # optionally delimited with the space
        )?                                          # the prefix is optional
        (?P<{degrees}>-?\d{{1,3}}{fraction})            # mandatory degrees VALUE (0..=999) - requires more validation!
        "#,
        prefix = Field::Prefix.name(),
        degrees = Field::Degrees.name(),
        fraction = fraction,
    )
}

/// Optional hemisphere letter after the value
fn suffix_part() -> String {
    format!(
        r#"
        \x20?                                       # optionally delimited with the space
        (?P<{suffix}>[NSEW])?                       # the suffix is optional
        \s*                                         # the desymbolized last component leaves the space
        $                                           # match the whole line till the end
        "#,
        suffix = Field::Suffix.name(),
    )
}

/// Construct regular expression to parse Decimal Degrees representation of an angle
fn decimal_degrees_re() -> String {
    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        {}{}"#,
        degrees_part(true),
        suffix_part()
    )
}

/// Construct regular expression to parse Degrees and Decimal Minutes representation of an angle
fn degrees_decimal_minutes_re() -> String {
    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        {}
        \x20                                        # mandatory space between the components
        (?P<{minutes}>\d{{1,2}}(?:\.\d+)?)          # minutes VALUE (0..=99) - requires more validation!
        {}"#,
        degrees_part(false),
        suffix_part(),
        minutes = Field::Minutes.name(),
    )
}

/// Construct regular expression to parse Degrees, Minutes, Seconds representation of an angle
fn degrees_minutes_seconds_re() -> String {
    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        {}
        \x20                                        # mandatory space between the components
        (?P<{minutes}>\d{{1,2}})                    # whole minutes VALUE (0..=99) - requires more validation!
        \x20                                        # mandatory space between the components
        (?P<{seconds}>\d{{1,2}}(?:\.\d+)?)          # seconds VALUE (0..=99) - requires more validation!
        {}"#,
        degrees_part(false),
        suffix_part(),
        minutes = Field::Minutes.name(),
        seconds = Field::Seconds.name(),
    )
}

/// Construct regular expression to parse the UTM notation: `10U 516726m E 5329260m N`
fn utm_re() -> String {
    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<{zone}>\d{{1,2}})                       # grid zone VALUE (0..=99) - requires more validation!
        (?P<{band}>[A-Za-z])                        # latitude band letter - requires more validation!
        \x20
        (?P<{easting}>\d{{6,}})                     # easting in meters, at least 6 digits
        m\x20?E?                                    # the unit and the optional direction
        \x20
        (?P<{northing}>\d{{6,}})                    # northing in meters, at least 6 digits
        m\x20?N?                                    # the unit and the optional direction
        \s*
        $                                           # match the whole line till the end
        "#,
        zone = Field::Zone.name(),
        band = Field::Band.name(),
        easting = Field::Easting.name(),
        northing = Field::Northing.name(),
    )
}

fn case_insensitive(pattern: &str) -> String {
    format!("(?i){pattern}")
}

lazy_static! {
    static ref RE_DD: Regex = Regex::new(&decimal_degrees_re()).expect("DD regex is valid");
    static ref RE_DD_CI: Regex =
        Regex::new(&case_insensitive(&decimal_degrees_re())).expect("DD regex is valid");
    static ref RE_DDM: Regex =
        Regex::new(&degrees_decimal_minutes_re()).expect("DDM regex is valid");
    static ref RE_DDM_CI: Regex = Regex::new(&case_insensitive(&degrees_decimal_minutes_re()))
        .expect("DDM regex is valid");
    static ref RE_DMS: Regex =
        Regex::new(&degrees_minutes_seconds_re()).expect("DMS regex is valid");
    static ref RE_DMS_CI: Regex = Regex::new(&case_insensitive(&degrees_minutes_seconds_re()))
        .expect("DMS regex is valid");
    static ref RE_UTM: Regex = Regex::new(&utm_re()).expect("UTM regex is valid");
    static ref RE_UTM_CI: Regex =
        Regex::new(&case_insensitive(&utm_re())).expect("UTM regex is valid");
}

/// The compiled pattern for the degrees format
pub(crate) fn degrees_regex(format: DegreesFormat, case_insensitive: bool) -> &'static Regex {
    match (format, case_insensitive) {
        (DegreesFormat::DecimalDegrees, false) => &*RE_DD,
        (DegreesFormat::DecimalDegrees, true) => &*RE_DD_CI,
        (DegreesFormat::DegreesDecimalMinutes, false) => &*RE_DDM,
        (DegreesFormat::DegreesDecimalMinutes, true) => &*RE_DDM_CI,
        (DegreesFormat::DegreesMinutesSeconds, false) => &*RE_DMS,
        (DegreesFormat::DegreesMinutesSeconds, true) => &*RE_DMS_CI,
    }
}

/// The compiled pattern for the UTM notation
pub(crate) fn utm_regex(case_insensitive: bool) -> &'static Regex {
    if case_insensitive {
        &*RE_UTM_CI
    } else {
        &*RE_UTM
    }
}

/// The named groups of a successful match
pub(crate) struct Fields<'t> {
    captures: Captures<'t>,
}

impl<'t> Fields<'t> {
    /// Match the whole text or fail with [`ParsingError::NoMatch`]
    pub(crate) fn capture(re: &Regex, text: &'t str) -> Result<Self, ParsingError> {
        re.captures(text)
            .map(|captures| Self { captures })
            .ok_or(ParsingError::NoMatch)
    }

    /// The text of the group if it participated in the match
    pub(crate) fn text(&self, field: Field) -> Option<&'t str> {
        self.captures.name(field.name()).map(|m| m.as_str())
    }

    /// The single letter of the group if it participated in the match
    pub(crate) fn letter(&self, field: Field) -> Option<char> {
        self.text(field).and_then(|s| s.chars().next())
    }

    /// The required numeric group
    pub(crate) fn number(&self, field: Field) -> Result<f64, ParsingError> {
        self.text(field)
            .and_then(|s| s.parse().ok())
            .ok_or(ParsingError::NotFound(field))
    }
}
