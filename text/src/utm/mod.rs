//! Universal Transverse Mercator grid: the zones, the latitude bands
//! and the textual notation of the grid positions.

mod band;
mod formatter;
mod projection;
mod zone;

pub use self::{
    band::{LatitudeBand, ParseLatitudeBandError},
    formatter::UtmFormatter,
    projection::{Datum, GeodesyUtm, UtmProjection},
    zone::{ParseUtmHemisphereError, UtmCoordinate, UtmGridZone, UtmHemisphere},
};
