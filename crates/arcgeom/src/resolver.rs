use crate::limits::ArcLimits;
use crate::point::{Degrees, Point};
use crate::quadrant::Quadrant;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use thiserror::Error;

/// Below the center the angle is capped to the horizontal +/- this, which
/// pins the thumb to an arc end instead of letting it fall into the gap.
pub const DOWN_SIDE_CONSTRAINT: f64 = FRAC_PI_4;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Rejection {
    #[error("touch at {angle} ({quadrant}) is across the gap from the pinned thumb")]
    Gap { quadrant: Quadrant, angle: Degrees },
    #[error("touch has no horizontal offset and is not above the center")]
    Vertical,
    #[error("touch coordinates are not finite")]
    NonFinite,
}

/// Signed arc angle of a touch, in degrees.
///
/// Results span roughly `-225..=45` for the default arc: the right half maps
/// to `-90..=45`, the upper left to `-180..-90`, and the lower left continues
/// past -180 instead of wrapping to the positive side. Callers must handle
/// that extended range as is.
///
/// A touch straight above the center (`dx == 0`) resolves to -90. Straight
/// below, or exactly on the center, is rejected as [`Rejection::Vertical`].
///
/// When the thumb rests exactly on an arc end, a touch on the far side of the
/// gap is rejected so the thumb cannot jump across it.
pub fn resolve_angle(
    touch: Point,
    center: Point,
    limits: &ArcLimits,
    thumb: Point,
) -> Result<Degrees, Rejection> {
    let (dx, dy) = touch.offset_from(center);
    if !(dx.is_finite() && dy.is_finite()) {
        return Err(Rejection::NonFinite);
    }

    let quadrant = Quadrant::classify(dx, dy);

    let mut radians = if dx == 0.0 {
        if dy < 0.0 {
            FRAC_PI_2
        } else {
            return Err(Rejection::Vertical);
        }
    } else {
        (dy.abs() / dx).atan()
    };

    if quadrant.is_in_down_side() {
        radians = radians.clamp(-DOWN_SIDE_CONSTRAINT, DOWN_SIDE_CONSTRAINT);
    }

    let addition = if dx < 0.0 { 180.0 } else { 0.0 };
    let degrees = Degrees::from_radians(radians).value() + addition;

    let normalized = match quadrant {
        Quadrant::RightDown => degrees,
        Quadrant::LeftDown => -(180.0 + (180.0 - degrees)),
        Quadrant::RightUp | Quadrant::LeftUp => -degrees,
    };

    let pinned_at_start = thumb == limits.start_point;
    let pinned_at_end = thumb == limits.end_point;

    if (limits.right_bounds.contains(&normalized)
        && quadrant != Quadrant::LeftDown
        && pinned_at_start)
        || (limits.left_bounds.contains(&normalized)
            && quadrant != Quadrant::RightDown
            && pinned_at_end)
    {
        let angle = Degrees::new(normalized);
        log::trace!("rejecting {angle} in {quadrant}, thumb pinned at an arc end");
        return Err(Rejection::Gap { quadrant, angle });
    }

    Ok(Degrees::new(normalized))
}

/// Where the thumb is drawn for a given arc angle.
pub fn point_in_arc(center: Point, radius: f64, angle: Degrees) -> Point {
    Point::on_circle(center, radius, angle)
}
