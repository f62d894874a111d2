use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub lower: f64,
    pub upper: f64,
}

impl Domain {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    fn min(&self) -> f64 {
        self.lower.min(self.upper)
    }

    fn max(&self) -> f64 {
        self.lower.max(self.upper)
    }
}

impl From<(f64, f64)> for Domain {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RescaleError {
    #[error("source domain {lower}..{upper} has zero width")]
    InvalidRange { lower: f64, upper: f64 },
    #[error("domain bound is not finite: {0}")]
    NonFinite(f64),
}

/// Linear map from one domain onto another.
///
/// Either domain may be descending. The source domain must have a non-zero
/// width; the target may be degenerate (everything maps to one value).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rescale {
    from: Domain,
    to: Domain,
}

impl Rescale {
    pub fn new(from: impl Into<Domain>, to: impl Into<Domain>) -> Result<Self, RescaleError> {
        let (from, to) = (from.into(), to.into());

        if let Some(bad) = [from.lower, from.upper, to.lower, to.upper]
            .into_iter()
            .find(|b| !b.is_finite())
        {
            return Err(RescaleError::NonFinite(bad));
        }
        if from.width() == 0.0 {
            return Err(RescaleError::InvalidRange {
                lower: from.lower,
                upper: from.upper,
            });
        }

        Ok(Self { from, to })
    }

    /// The reverse mapping. Fails when the target domain is degenerate.
    pub fn inverse(&self) -> Result<Self, RescaleError> {
        Self::new(self.to, self.from)
    }

    fn interpolate(&self, t: f64) -> f64 {
        self.to.lower * (1.0 - t) + self.to.upper * t
    }

    fn uninterpolate(&self, x: f64) -> f64 {
        (x - self.from.lower) / self.from.width()
    }

    pub fn rescale(&self, x: f64) -> f64 {
        self.interpolate(self.uninterpolate(x))
    }

    pub fn rescale_and_clamp(&self, x: f64) -> f64 {
        self.rescale(x).clamp(self.to.min(), self.to.max())
    }
}

pub fn rescale(
    from: impl Into<Domain>,
    to: impl Into<Domain>,
    x: f64,
) -> Result<f64, RescaleError> {
    Ok(Rescale::new(from, to)?.rescale(x))
}

pub fn rescale_and_clamp(
    from: impl Into<Domain>,
    to: impl Into<Domain>,
    x: f64,
) -> Result<f64, RescaleError> {
    Ok(Rescale::new(from, to)?.rescale_and_clamp(x))
}

/// Rounds half away from zero to `places` decimals.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let divisor = 10f64.powi(places);
    (value * divisor).round() / divisor
}
