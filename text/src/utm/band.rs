use std::{error::Error, fmt, ops::Range};

use num_traits::ToPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::zone::UtmHemisphere;
use crate::{
    consts::{UTM_BAND_HEIGHT, UTM_MAX_LATITUDE, UTM_MIN_LATITUDE},
    coord::Coordinate,
};

/// The horizontal stripe of the UTM grid.
///
/// Every band but the last spans 8° of latitude.
/// The northernmost band `X` is extended to 12° (72°..=84°).
///
/// The letters `I` and `O` are skipped to avoid confusing them with digits.
/// The alphabetical order of the bands follows the south-to-north order.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LatitudeBand {
    C,
    D,
    E,
    F,
    G,
    H,
    J,
    K,
    L,
    M,
    N,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
}

impl LatitudeBand {
    /// All the bands from south to north
    pub const ALL: [Self; 20] = [
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
    ];

    /// The letter denoting the band
    pub const fn letter(self) -> char {
        match self {
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
            Self::J => 'J',
            Self::K => 'K',
            Self::L => 'L',
            Self::M => 'M',
            Self::N => 'N',
            Self::P => 'P',
            Self::Q => 'Q',
            Self::R => 'R',
            Self::S => 'S',
            Self::T => 'T',
            Self::U => 'U',
            Self::V => 'V',
            Self::W => 'W',
            Self::X => 'X',
        }
    }

    /// The bands before `N` lie in the Southern hemisphere
    pub fn hemisphere(self) -> UtmHemisphere {
        if self < Self::N {
            UtmHemisphere::Southern
        } else {
            UtmHemisphere::Northern
        }
    }

    /// The latitudes covered by the band.
    ///
    /// The band `X` also includes its upper bound 84°.
    pub fn latitude_range(self) -> Range<f64> {
        let lower = UTM_MIN_LATITUDE + UTM_BAND_HEIGHT * f64::from(self as u8);
        let upper = if self == Self::X {
            UTM_MAX_LATITUDE
        } else {
            lower + UTM_BAND_HEIGHT
        };
        lower..upper
    }

    /// Find the band of the latitude.
    ///
    /// Returns `None` outside of the UTM coverage (-80°..=84°).
    pub fn for_latitude(latitude: f64) -> Option<Self> {
        if !(UTM_MIN_LATITUDE..=UTM_MAX_LATITUDE).contains(&latitude) {
            return None;
        }

        let index = ((latitude - UTM_MIN_LATITUDE) / UTM_BAND_HEIGHT)
            .floor()
            .to_usize()?;
        // the last band is wider than the others
        let index = index.min(Self::ALL.len() - 1);
        Self::ALL.get(index).copied()
    }

    /// Find the band of the coordinate.
    ///
    /// Returns `None` if the coordinate is invalid
    /// or outside of the UTM coverage (-80°..=84°).
    pub fn for_coordinate(coordinate: &Coordinate) -> Option<Self> {
        if !coordinate.is_valid() {
            return None;
        }
        Self::for_latitude(coordinate.latitude())
    }
}

impl fmt::Display for LatitudeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The character does not denote any latitude band
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseLatitudeBandError {
    failed: char,
}

impl fmt::Display for ParseLatitudeBandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse LatitudeBand from {:?}", self.failed)
    }
}

impl Error for ParseLatitudeBandError {}

impl TryFrom<char> for LatitudeBand {
    type Error = ParseLatitudeBandError;

    /// Only the uppercase letters are accepted
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|band| band.letter() == c)
            .ok_or(ParseLatitudeBandError { failed: c })
    }
}
