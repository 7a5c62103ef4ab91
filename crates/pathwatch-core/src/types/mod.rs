mod geo;
mod hop;
mod outcome;
mod risk;

pub use geo::*;
pub use hop::*;
pub use outcome::*;
pub use risk::*;
