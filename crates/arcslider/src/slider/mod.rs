pub mod listener;
pub mod model;

pub use listener::{ListenerSlot, ThumbValueListener};
pub use model::{ArcPath, ArcSlider, SliderAction, SliderError, ThumbState};

pub const CENTER_VALUE: f64 = 0.5;
pub const VALUE_PLACES: i32 = 3; // decimals reported to listeners
pub const VALUE_DOMAIN: (f64, f64) = (0.0, 1.0);
