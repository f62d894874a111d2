use arcgeom::Point;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum SliderEvent {
    Layout { width: f64, height: f64 },
    Drag(Point),
    DoubleTap,
    ConfigReload,
}

#[derive(Debug, Error, PartialEq)]
pub enum EventParseError {
    #[error("empty event line")]
    Empty,
    #[error("unknown event {0:?}")]
    Unknown(String),
    #[error("{event} expects {expected} argument(s), got {got}")]
    Arity {
        event: &'static str,
        expected: &'static str,
        got: usize,
    },
    #[error("invalid number {0:?}")]
    Number(String),
}

fn number(s: &str) -> Result<f64, EventParseError> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| EventParseError::Number(s.to_string()))
}

/// One event per line: `layout <w> [<h>]`, `drag <x> <y>`, `tap`, `reload`.
impl FromStr for SliderEvent {
    type Err = EventParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(EventParseError::Empty)?;
        let args: Vec<&str> = words.collect();

        match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("layout", [side]) => {
                let side = number(side)?;
                Ok(Self::Layout {
                    width: side,
                    height: side,
                })
            }
            ("layout", [width, height]) => Ok(Self::Layout {
                width: number(width)?,
                height: number(height)?,
            }),
            ("layout", _) => Err(EventParseError::Arity {
                event: "layout",
                expected: "1 or 2",
                got: args.len(),
            }),
            ("drag", [x, y]) => Ok(Self::Drag(Point::new(number(x)?, number(y)?))),
            ("drag", _) => Err(EventParseError::Arity {
                event: "drag",
                expected: "2",
                got: args.len(),
            }),
            ("tap" | "doubletap", []) => Ok(Self::DoubleTap),
            ("reload", []) => Ok(Self::ConfigReload),
            ("tap" | "doubletap" | "reload", _) => Err(EventParseError::Arity {
                event: "tap/reload",
                expected: "0",
                got: args.len(),
            }),
            _ => Err(EventParseError::Unknown(name.to_string())),
        }
    }
}

/// Skips blank lines and `#` comments.
pub fn is_event_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with('#')
}
