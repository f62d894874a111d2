use super::listener::{ListenerSlot, ThumbValueListener};
use super::{CENTER_VALUE, VALUE_DOMAIN, VALUE_PLACES};
use crate::config::{self, ConfigError, Configuration};
use crate::events::SliderEvent;
use arcgeom::{
    ArcAngles, ArcError, ArcLimits, Degrees, Point, Rejection, Rescale, RescaleError,
    point_in_arc, resolve_angle, round_to_places,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Arc(#[from] ArcError),
    #[error(transparent)]
    Rescale(#[from] RescaleError),
    #[error("slider must be square, got {width}x{height}")]
    NotSquare { width: f64, height: f64 },
    #[error("slider has not been laid out yet")]
    NotLaidOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThumbState {
    pub value: f64,
    pub point: Point,
}

/// Everything a renderer needs to stroke the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcPath {
    pub center: Point,
    pub radius: f64,
    pub start_radians: f64,
    pub end_radians: f64,
    pub clockwise: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliderAction {
    pub should_redraw: bool,
    pub value_changed: Option<f64>,
    pub rejection: Option<Rejection>,
}

impl SliderAction {
    pub fn redraw() -> Self {
        Self {
            should_redraw: true,
            ..Self::default()
        }
    }

    pub fn changed(value: f64) -> Self {
        Self {
            should_redraw: true,
            value_changed: Some(value),
            rejection: None,
        }
    }

    pub fn rejected(rejection: Rejection) -> Self {
        Self {
            rejection: Some(rejection),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Layout {
    side: f64,
    center: Point,
    radius: f64,
}

/// Headless arc slider: geometry, thumb state and the value listener.
#[derive(Debug)]
pub struct ArcSlider {
    configuration: Configuration,
    angles: ArcAngles,
    to_value: Rescale,
    to_angle: Rescale,
    layout: Option<Layout>,
    limits: ArcLimits,
    thumb: ThumbState,
    listener: ListenerSlot,
    config_path: Option<PathBuf>,
}

impl ArcSlider {
    pub fn new(configuration: Configuration) -> Result<Self, SliderError> {
        configuration.validate()?;
        let angles = configuration.arc_angles()?;
        let to_value = Rescale::new((*angles.start, *angles.end), VALUE_DOMAIN)?;

        Ok(Self {
            to_angle: to_value.inverse()?,
            to_value,
            angles,
            thumb: ThumbState {
                value: configuration.initial_thumb_position,
                point: Point::default(),
            },
            configuration,
            layout: None,
            limits: ArcLimits::default(),
            listener: ListenerSlot::default(),
            config_path: None,
        })
    }

    /// Reloads read this file instead of the per-user configuration.
    pub fn set_config_path(&mut self, path: impl Into<PathBuf>) {
        self.config_path = Some(path.into());
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn angles(&self) -> ArcAngles {
        self.angles
    }

    pub fn limits(&self) -> &ArcLimits {
        &self.limits
    }

    pub fn thumb(&self) -> ThumbState {
        self.thumb
    }

    pub fn value(&self) -> f64 {
        self.thumb.value
    }

    pub fn center(&self) -> Option<Point> {
        self.layout.map(|l| l.center)
    }

    pub fn radius(&self) -> Option<f64> {
        self.layout.map(|l| l.radius)
    }

    pub fn set_listener<L: ThumbValueListener + 'static>(&mut self, listener: &Rc<L>) {
        self.listener.set(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener.clear();
    }

    /// Arc angle that shows `value`.
    pub fn angle_for(&self, value: f64) -> Degrees {
        Degrees::new(self.to_angle.rescale_and_clamp(value))
    }

    pub fn arc_path(&self) -> Option<ArcPath> {
        self.layout.map(|l| ArcPath {
            center: l.center,
            radius: l.radius,
            start_radians: self.angles.start.to_radians(),
            end_radians: self.angles.end.to_radians(),
            clockwise: true,
        })
    }

    /// Sizes the slider to a `width` x `height` view and places the thumb
    /// at its current value.
    pub fn layout(&mut self, width: f64, height: f64) -> Result<SliderAction, SliderError> {
        if width != height {
            return Err(SliderError::NotSquare { width, height });
        }

        let center = Point::new(width / 2.0, width / 2.0);
        let radius = width / 2.0 - self.configuration.thumb_radius / 2.0;
        self.limits = ArcLimits::compute(center, radius, self.angles)?;

        let layout = Layout {
            side: width,
            center,
            radius,
        };
        self.layout = Some(layout);
        self.thumb.point = point_in_arc(center, radius, self.angle_for(self.thumb.value));

        log::debug!(
            "layout {}x{}: radius {}, thumb at {:?}",
            width,
            height,
            radius,
            self.thumb.point
        );
        Ok(SliderAction::redraw())
    }

    /// Moves the thumb towards `touch`, given in slider-local coordinates.
    pub fn drag_to(&mut self, touch: Point) -> Result<SliderAction, SliderError> {
        let layout = self.layout.ok_or(SliderError::NotLaidOut)?;

        let angle = match resolve_angle(touch, layout.center, &self.limits, self.thumb.point) {
            Ok(angle) => angle,
            Err(rejection) => {
                log::debug!("ignoring drag to {:?}: {}", touch, rejection);
                return Ok(SliderAction::rejected(rejection));
            }
        };

        let value = round_to_places(self.to_value.rescale_and_clamp(*angle), VALUE_PLACES);
        self.thumb = ThumbState {
            value,
            point: point_in_arc(layout.center, layout.radius, angle),
        };

        if value == CENTER_VALUE {
            log::debug!("thumb passed the center detent");
        }
        self.listener.notify(value);

        Ok(SliderAction::changed(value))
    }

    /// Snaps the thumb to the middle of the arc, whatever its position.
    pub fn move_to_center(&mut self) -> SliderAction {
        self.thumb.value = CENTER_VALUE;
        if let Some(layout) = self.layout {
            self.thumb.point =
                point_in_arc(layout.center, layout.radius, self.angle_for(CENTER_VALUE));
        }
        self.listener.notify(CENTER_VALUE);

        SliderAction::changed(CENTER_VALUE)
    }

    /// Swaps in a new configuration, keeping the thumb value and the last
    /// layout size. The old configuration stays in place on error.
    pub fn reconfigure(&mut self, configuration: Configuration) -> Result<SliderAction, SliderError> {
        let mut next = Self::new(configuration)?;
        next.thumb.value = self.thumb.value;
        next.listener = std::mem::take(&mut self.listener);
        next.config_path = self.config_path.clone();

        if let Some(layout) = self.layout
            && let Err(e) = next.layout(layout.side, layout.side)
        {
            self.listener = std::mem::take(&mut next.listener);
            return Err(e);
        }

        *self = next;
        Ok(SliderAction::redraw())
    }

    pub fn handle(&mut self, event: SliderEvent) -> Result<SliderAction, SliderError> {
        match event {
            SliderEvent::Layout { width, height } => self.layout(width, height),
            SliderEvent::Drag(point) => self.drag_to(point),
            SliderEvent::DoubleTap => Ok(self.move_to_center()),
            SliderEvent::ConfigReload => self.reload(),
        }
    }

    /// Re-reads the configuration file. A file that fails to load or
    /// validate leaves the current configuration in place.
    pub fn reload(&mut self) -> Result<SliderAction, SliderError> {
        let loaded = match &self.config_path {
            Some(path) => config::load_config_from(path),
            None => config::load_config(),
        };
        let configuration =
            loaded.inspect_err(|e| log::error!("Failed to reload config: {}", e))?;
        self.reconfigure(configuration)
    }
}
