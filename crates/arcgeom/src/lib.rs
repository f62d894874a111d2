//! Touch-to-angle geometry for a circular arc slider.

pub mod limits;
pub mod point;
pub mod quadrant;
pub mod rescale;
pub mod resolver;

pub use limits::{ArcAngles, ArcError, ArcLimits};
pub use point::{Degrees, Point};
pub use quadrant::Quadrant;
pub use rescale::{Domain, Rescale, RescaleError, rescale, rescale_and_clamp, round_to_places};
pub use resolver::{Rejection, point_in_arc, resolve_angle};
