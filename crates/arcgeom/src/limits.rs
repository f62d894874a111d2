use crate::point::{Degrees, Point};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ArcError {
    #[error("arc radius must be a positive finite number, got {0}")]
    InvalidRadius(f64),
    #[error("arc angle is not finite: {0}")]
    NonFiniteAngle(f64),
    #[error("arc start angle {start} must be below end angle {end}")]
    InvertedAngles { start: f64, end: f64 },
}

/// Start and end of the visible arc, drawn clockwise from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcAngles {
    pub start: Degrees,
    pub end: Degrees,
}

impl ArcAngles {
    pub fn new(start: impl Into<Degrees>, end: impl Into<Degrees>) -> Result<Self, ArcError> {
        let (start, end) = (start.into(), end.into());

        for angle in [start, end] {
            if !angle.is_finite() {
                return Err(ArcError::NonFiniteAngle(*angle));
            }
        }
        if start >= end {
            return Err(ArcError::InvertedAngles {
                start: *start,
                end: *end,
            });
        }

        Ok(Self { start, end })
    }

    pub fn span(&self) -> f64 {
        *self.end - *self.start
    }
}

impl Default for ArcAngles {
    fn default() -> Self {
        Self {
            start: Degrees::new(-225.0),
            end: Degrees::new(45.0),
        }
    }
}

/// Boundary points and exclusion ranges of an arc, valid for one layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcLimits {
    pub start_point: Point,
    pub end_point: Point,
    pub left_bounds: RangeInclusive<f64>,
    pub right_bounds: RangeInclusive<f64>,
}

impl Default for ArcLimits {
    fn default() -> Self {
        Self {
            start_point: Point::default(),
            end_point: Point::default(),
            left_bounds: 0.0..=0.0,
            right_bounds: 0.0..=0.0,
        }
    }
}

impl ArcLimits {
    pub fn compute(center: Point, radius: f64, angles: ArcAngles) -> Result<Self, ArcError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ArcError::InvalidRadius(radius));
        }

        Ok(Self {
            start_point: Point::on_circle(center, radius, angles.start),
            end_point: Point::on_circle(center, radius, angles.end),
            left_bounds: *angles.start..=0.0,
            right_bounds: -180.0..=*angles.end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_compute_default_arc() {
        let limits =
            ArcLimits::compute(Point::new(0.0, 0.0), 100.0, ArcAngles::default()).unwrap();

        let half_diagonal = 100.0 / 2f64.sqrt();
        // -225 is lower left on screen, 45 lower right
        assert_close(limits.start_point.x, -half_diagonal);
        assert_close(limits.start_point.y, half_diagonal);
        assert_close(limits.end_point.x, half_diagonal);
        assert_close(limits.end_point.y, half_diagonal);

        assert_eq!(limits.left_bounds, -225.0..=0.0);
        assert_eq!(limits.right_bounds, -180.0..=45.0);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let angles = ArcAngles::new(-200.0, 20.0).unwrap();
        let center = Point::new(137.5, 137.5);
        let a = ArcLimits::compute(center, 125.0, angles).unwrap();
        let b = ArcLimits::compute(center, 125.0, angles).unwrap();

        assert_eq!(a.start_point.x.to_bits(), b.start_point.x.to_bits());
        assert_eq!(a.start_point.y.to_bits(), b.start_point.y.to_bits());
        assert_eq!(a.end_point.x.to_bits(), b.end_point.x.to_bits());
        assert_eq!(a.end_point.y.to_bits(), b.end_point.y.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_radius() {
        let angles = ArcAngles::default();
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ArcLimits::compute(Point::default(), radius, angles),
                Err(ArcError::InvalidRadius(_))
            ));
        }
    }

    #[test]
    fn test_angle_validation() {
        assert_eq!(
            ArcAngles::new(45.0, -225.0),
            Err(ArcError::InvertedAngles {
                start: 45.0,
                end: -225.0
            })
        );
        assert!(ArcAngles::new(10.0, 10.0).is_err());
        assert!(matches!(
            ArcAngles::new(f64::NEG_INFINITY, 0.0),
            Err(ArcError::NonFiniteAngle(_))
        ));
        assert_eq!(ArcAngles::default().span(), 270.0);
    }

    #[test]
    fn test_default_limits_are_empty() {
        let limits = ArcLimits::default();
        assert_eq!(limits.start_point, Point::default());
        assert!(limits.left_bounds.contains(&0.0));
        assert!(!limits.right_bounds.contains(&1.0));
    }
}
