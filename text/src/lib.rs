//! Textual representations of geographic coordinates
//!
//! Formatting and parsing of the latitudes, longitudes and whole coordinates
//! in the Decimal Degrees (DD), Degrees and Decimal Minutes (DDM),
//! Degrees, Minutes, Seconds (DMS) and Universal Transverse Mercator (UTM) notations.
//!
//! ```
//! use geod_text::{Coordinate, CoordinateFormatter, LatitudeBand, TextExt};
//!
//! let c: Coordinate = "48° 6' 59\" N, 122° 46' 31\" W".parse().unwrap();
//! assert_eq!(c.latitude_band(), Some(LatitudeBand::U));
//!
//! let f = CoordinateFormatter::degrees_decimal_minutes();
//! assert_eq!(f.format(&c).unwrap(), "48° 06.983' N, 122° 46.517' W");
//!
//! assert!("10U 516726m E 5329260m N".as_coordinate().is_some());
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_crate_level_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use self::{
    coord::{Coordinate, Location},
    degree::DegreesFormatter,
    direction::{Hemisphere, Orientation, ParseHemisphereError},
    errors::{Field, ParseFormatError, ParsingError, UnsupportedFormat},
    formatter::{as_coordinate, CoordinateFormatter, TextExt},
    options::{CoordinateFormat, DegreesFormat, DisplayOptions, ParsingOptions},
    symbol::{CoordinateSymbol, SymbolStyle},
    utm::{
        Datum, GeodesyUtm, LatitudeBand, ParseLatitudeBandError, ParseUtmHemisphereError,
        UtmCoordinate, UtmFormatter, UtmGridZone, UtmHemisphere, UtmProjection,
    },
};

mod consts;
mod coord;
mod degree;
mod direction;
mod errors;
mod formatter;
mod number;
mod options;
mod pattern;
mod symbol;
mod utm;
mod utils;
