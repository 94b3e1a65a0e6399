//! The values of the geographic positions

mod location;
mod point;

pub use self::{location::Location, point::Coordinate};
