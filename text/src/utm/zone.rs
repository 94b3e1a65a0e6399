use std::fmt;

use num_traits::ToPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    bool_enum,
    consts::{MAX_LONGITUDE, UTM_ZONES, UTM_ZONE_WIDTH},
    coord::Coordinate,
};

/// The vertical stripe of the UTM grid, numbered from 1 to 60 eastwards
/// starting from the antimeridian.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtmGridZone(u8);

impl UtmGridZone {
    /// Construct the zone if the number is in range [1..=60]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number <= UTM_ZONES {
            Some(Self(number))
        } else {
            None
        }
    }

    /// The number of the zone
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The longitude of the zone's central meridian
    pub fn central_meridian(self) -> f64 {
        -MAX_LONGITUDE + UTM_ZONE_WIDTH * f64::from(self.0) - UTM_ZONE_WIDTH / 2.0
    }

    /// The zone of the coordinate.
    ///
    /// Follows the standard exceptions of the grid:
    /// the zone 32V is widened to cover the south-western Norway
    /// and the zones 32X, 34X, 36X are not used around Svalbard.
    pub fn for_coordinate(coordinate: &Coordinate) -> Option<Self> {
        if !coordinate.is_valid() {
            return None;
        }

        let (lat, lon) = (coordinate.latitude(), coordinate.longitude());
        if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
            return Self::new(32);
        }

        if (72.0..=84.0).contains(&lat) && (0.0..42.0).contains(&lon) {
            let number = match lon {
                lon if lon < 9.0 => 31,
                lon if lon < 21.0 => 33,
                lon if lon < 33.0 => 35,
                _ => 37,
            };
            return Self::new(number);
        }

        let number = ((lon + MAX_LONGITUDE) / UTM_ZONE_WIDTH).floor().to_u8()? + 1;
        // the antimeridian itself belongs to the last zone
        Self::new(number.min(UTM_ZONES))
    }
}

impl TryFrom<u8> for UtmGridZone {
    type Error = u8;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or(number)
    }
}

impl fmt::Display for UtmGridZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

bool_enum!(
    /// The half of the globe the northing is measured in.
    ///
    /// The Southern northings are shifted by 10 000 km
    /// to keep them positive.
    UtmHemisphere:
        /// Northern hemisphere, the northing is measured from the equator
        Northern and
        /// Southern hemisphere, the northing is measured from the false origin
        Southern;
    parse from 'N':'S' with ParseUtmHemisphereError
);

impl UtmHemisphere {
    /// The hemisphere of the latitude
    pub fn for_latitude(latitude: f64) -> Self {
        Self::from(latitude >= 0.0)
    }
}

/// The position on the UTM grid
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtmCoordinate {
    /// Distance to the north in meters
    pub northing: f64,
    /// Distance to the east in meters, the central meridian is at 500 000 m
    pub easting: f64,
    /// The vertical stripe of the grid
    pub zone: UtmGridZone,
    /// The reference of the northing
    pub hemisphere: UtmHemisphere,
}
