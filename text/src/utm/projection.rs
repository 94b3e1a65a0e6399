use std::{collections::HashMap, fmt, sync::Mutex};

use geodesy::prelude::*;
use lazy_static::lazy_static;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::zone::{UtmCoordinate, UtmGridZone, UtmHemisphere};
use crate::coord::Coordinate;

/// The reference ellipsoid of the projection
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Datum {
    /// World Geodetic System 1984
    #[default]
    Wgs84,
    /// Geodetic Reference System 1980
    Grs80,
}

impl Datum {
    /// The name of the ellipsoid
    pub const fn ellipsoid(self) -> &'static str {
        match self {
            Self::Wgs84 => "WGS84",
            Self::Grs80 => "GRS80",
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ellipsoid())
    }
}

/// Conversion between the geographic and the UTM coordinates.
pub trait UtmProjection {
    /// Find the position of the coordinate on the UTM grid
    fn project(&self, coordinate: &Coordinate, datum: Datum) -> Option<UtmCoordinate>;

    /// Find the geographic coordinate of the UTM position
    fn unproject(&self, utm: &UtmCoordinate, datum: Datum) -> Option<Coordinate>;
}

/// The projection backed by the [`geodesy`] operators.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GeodesyUtm;

/// The compiled operators, one per zone, hemisphere and datum
struct Operators {
    context: Minimal,
    handles: HashMap<(UtmGridZone, UtmHemisphere, Datum), OpHandle>,
}

impl Operators {
    fn handle(
        &mut self,
        zone: UtmGridZone,
        hemisphere: UtmHemisphere,
        datum: Datum,
    ) -> Option<OpHandle> {
        let key = (zone, hemisphere, datum);
        if let Some(op) = self.handles.get(&key) {
            return Some(*op);
        }

        let definition = GeodesyUtm::definition(zone, hemisphere, datum);
        let op = self
            .context
            .op(&definition)
            .map_err(|err| debug!("{definition}: {err}"))
            .ok()?;
        let _prev = self.handles.insert(key, op);
        Some(op)
    }
}

lazy_static! {
    static ref OPERATORS: Mutex<Operators> = Mutex::new(Operators {
        context: Minimal::new(),
        handles: HashMap::new(),
    });
}

impl GeodesyUtm {
    fn definition(zone: UtmGridZone, hemisphere: UtmHemisphere, datum: Datum) -> String {
        let south = match hemisphere {
            UtmHemisphere::Northern => "",
            UtmHemisphere::Southern => " south",
        };
        format!(
            "utm zone={}{} ellps={}",
            zone.number(),
            south,
            datum.ellipsoid()
        )
    }

    fn apply(
        zone: UtmGridZone,
        hemisphere: UtmHemisphere,
        datum: Datum,
        direction: Direction,
        point: Coor2D,
    ) -> Option<Coor2D> {
        let mut operators = OPERATORS.lock().ok()?;
        let op = operators.handle(zone, hemisphere, datum)?;

        let mut data = [point];
        let _n = operators.context.apply(op, direction, &mut data).ok()?;

        let [result] = data;
        if !result.0[0].is_finite() || !result.0[1].is_finite() {
            debug!("zone {zone}{hemisphere} ({datum}): no finite result for {point:?}");
            return None;
        }
        Some(result)
    }
}

impl UtmProjection for GeodesyUtm {
    fn project(&self, coordinate: &Coordinate, datum: Datum) -> Option<UtmCoordinate> {
        let zone = UtmGridZone::for_coordinate(coordinate)?;
        let hemisphere = UtmHemisphere::for_latitude(coordinate.latitude());

        let point = Coor2D::geo(coordinate.latitude(), coordinate.longitude());
        let projected = Self::apply(zone, hemisphere, datum, Fwd, point)?;

        Some(UtmCoordinate {
            northing: projected.0[1],
            easting: projected.0[0],
            zone,
            hemisphere,
        })
    }

    fn unproject(&self, utm: &UtmCoordinate, datum: Datum) -> Option<Coordinate> {
        let point = Coor2D([utm.easting, utm.northing]);
        let geo = Self::apply(utm.zone, utm.hemisphere, datum, Inv, point)?;

        Some(Coordinate::new(geo.0[1].to_degrees(), geo.0[0].to_degrees()))
    }
}
