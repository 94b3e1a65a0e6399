pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;
pub(crate) const SECONDS_IN_DEGREE: f64 = MINUTES_IN_DEGREE * SECONDS_IN_MINUTE;

pub(crate) const MAX_LATITUDE: f64 = 90.0;
pub(crate) const MAX_LONGITUDE: f64 = 180.0;

/// The UTM grid does not cover the polar regions
pub(crate) const UTM_MIN_LATITUDE: f64 = -80.0;
pub(crate) const UTM_MAX_LATITUDE: f64 = 84.0;

pub(crate) const UTM_ZONES: u8 = 60;
pub(crate) const UTM_ZONE_WIDTH: f64 = 6.0;
pub(crate) const UTM_BAND_HEIGHT: f64 = 8.0;

/// Easting and northing are padded with zeros to this number of digits
pub(crate) const UTM_MIN_DIGITS: u8 = 6;

/// Decimal degrees are rendered with this number of fraction digits by default
pub(crate) const MIN_DEGREES_FRACTION_DIGITS: u8 = 1;
pub(crate) const MAX_DEGREES_FRACTION_DIGITS: u8 = 5;

/// The decimal minutes are always rendered as `mm.mmm`
pub(crate) const MINUTES_FRACTION_DIGITS: u8 = 3;
pub(crate) const MINUTES_INTEGER_DIGITS: u8 = 2;
