use serde::Serialize;
use strum::{Display as StrumDisplay, EnumIter};

/// Where a touch sits relative to the slider center, screen convention
/// (positive dy is below the center).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, StrumDisplay)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Quadrant {
    RightUp,
    RightDown,
    LeftUp,
    LeftDown,
}

impl Quadrant {
    /// Strict sign tests. A zero component on either axis lands in `LeftUp`.
    pub fn classify(dx: f64, dy: f64) -> Self {
        if dy > 0.0 && dx > 0.0 {
            Self::RightDown
        } else if dy > 0.0 && dx < 0.0 {
            Self::LeftDown
        } else if dy < 0.0 && dx > 0.0 {
            Self::RightUp
        } else {
            Self::LeftUp
        }
    }

    pub fn is_in_down_side(&self) -> bool {
        matches!(self, Self::RightDown | Self::LeftDown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_classify_signs() {
        assert_eq!(Quadrant::classify(3.0, 4.0), Quadrant::RightDown);
        assert_eq!(Quadrant::classify(-3.0, 4.0), Quadrant::LeftDown);
        assert_eq!(Quadrant::classify(3.0, -4.0), Quadrant::RightUp);
        assert_eq!(Quadrant::classify(-3.0, -4.0), Quadrant::LeftUp);
    }

    // Regression: zero components fall through to the last branch. This is
    // the observed tie-break, not a geometric claim.
    #[test]
    fn test_classify_axis_tie_break() {
        assert_eq!(Quadrant::classify(0.0, 5.0), Quadrant::LeftUp);
        assert_eq!(Quadrant::classify(0.0, -5.0), Quadrant::LeftUp);
        assert_eq!(Quadrant::classify(5.0, 0.0), Quadrant::LeftUp);
        assert_eq!(Quadrant::classify(-5.0, 0.0), Quadrant::LeftUp);
        assert_eq!(Quadrant::classify(0.0, 0.0), Quadrant::LeftUp);
        assert_eq!(Quadrant::classify(-0.0, 5.0), Quadrant::LeftUp);
    }

    #[test]
    fn test_down_side() {
        let down: Vec<_> = Quadrant::iter().filter(Quadrant::is_in_down_side).collect();
        assert_eq!(down, vec![Quadrant::RightDown, Quadrant::LeftDown]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quadrant::LeftDown.to_string(), "leftDown");
        assert_eq!(Quadrant::RightUp.to_string(), "rightUp");
    }
}
