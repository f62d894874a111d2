use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `angle` on the circle around `center`, screen convention
    /// (y grows downwards, so positive angles turn clockwise).
    pub fn on_circle(center: Point, radius: f64, angle: Degrees) -> Self {
        let radians = angle.to_radians();
        Self::new(
            center.x + radius * radians.cos(),
            center.y + radius * radians.sin(),
        )
    }

    pub fn offset_from(&self, center: Point) -> (f64, f64) {
        (self.x - center.x, self.y - center.y)
    }
}

/// Angle in degrees.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, Display, Deref, From, Into,
)]
#[display("{_0}°")]
#[serde(transparent)]
pub struct Degrees(f64);

impl Degrees {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    // Kept as `deg * PI / 180` rather than `f64::to_radians` so boundary
    // points computed here and thumb points placed later are bit-identical.
    pub fn to_radians(&self) -> f64 {
        self.0 * PI / 180.0
    }

    pub fn from_radians(radians: f64) -> Self {
        Self(radians * 180.0 / PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_on_circle_cardinal_points() {
        let center = Point::new(10.0, 20.0);

        let right = Point::on_circle(center, 5.0, Degrees::new(0.0));
        assert_close(right.x, 15.0);
        assert_close(right.y, 20.0);

        // -90 points up on screen
        let up = Point::on_circle(center, 5.0, Degrees::new(-90.0));
        assert_close(up.x, 10.0);
        assert_close(up.y, 15.0);

        let down = Point::on_circle(center, 5.0, Degrees::new(90.0));
        assert_close(down.x, 10.0);
        assert_close(down.y, 25.0);
    }

    #[test]
    fn test_on_circle_is_deterministic() {
        let center = Point::new(100.0, 100.0);
        let a = Point::on_circle(center, 87.5, Degrees::new(-225.0));
        let b = Point::on_circle(center, 87.5, Degrees::new(-225.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degrees_radians_conversion() {
        assert_close(Degrees::new(180.0).to_radians(), PI);
        assert_close(Degrees::from_radians(-PI / 4.0).value(), -45.0);
        assert_eq!(Degrees::from_radians(-PI / 4.0).value(), -45.0);
    }

    #[test]
    fn test_offset_from() {
        let (dx, dy) = Point::new(3.0, -4.0).offset_from(Point::new(1.0, 1.0));
        assert_eq!((dx, dy), (2.0, -5.0));
    }

    #[test]
    fn test_degrees_display_and_serde() {
        assert_eq!(Degrees::new(45.0).to_string(), "45°");
        let json = serde_json::to_string(&Degrees::new(-225.0)).unwrap();
        assert_eq!(json, "-225.0");
    }
}
