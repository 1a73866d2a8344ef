mod aircraft;
mod builder;

pub use aircraft::Aircraft;
pub use builder::{AircraftBuilder, AircraftFactory, FighterBuilder};
