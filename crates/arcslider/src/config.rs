use arcgeom::{ArcAngles, ArcError};
use derive_more::{Deref, From, Into};
use directories::ProjectDirs;
use palette::{Alpha, Srgba};
use palette::rgb::Srgb;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorParseError {
    #[error("invalid hex color {0:?}")]
    Hex(String),
    #[error("unknown color name {0:?}")]
    Unknown(String),
}

/// An sRGB color with alpha, written as `#rrggbb`, `#rrggbbaa` or a name.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr, Deref, From, Into)]
pub struct Color(Srgba<u8>);

impl Color {
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(Alpha {
            color: Srgb::new(red, green, blue),
            alpha,
        })
    }

    pub const CLEAR: Self = Self::rgba(0, 0, 0, 0);
    pub const GRAY: Self = Self::rgba(128, 128, 128, 255);
    pub const ORANGE: Self = Self::rgba(255, 128, 0, 255);
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    fn named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "clear" | "transparent" => Some(Self::CLEAR),
            "gray" | "grey" => Some(Self::GRAY),
            "orange" => Some(Self::ORANGE),
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            _ => None,
        }
    }

    fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim_start_matches('#');
        let bad = || ColorParseError::Hex(s.to_string());
        if !digits.is_ascii() {
            return Err(bad());
        }

        let (rgb, alpha) = match digits.len() {
            3 | 6 => (digits, 255),
            8 => (
                &digits[..6],
                u8::from_str_radix(&digits[6..], 16).map_err(|_| bad())?,
            ),
            _ => return Err(bad()),
        };
        let rgb: Srgb<u8> = rgb.parse().map_err(|_| bad())?;

        Ok(Self::rgba(rgb.red, rgb.green, rgb.blue, alpha))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::parse_hex(s);
        }
        Self::named(s).ok_or_else(|| ColorParseError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.0.into_components();
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Appearance and geometry of one arc slider.
///
/// Only the two angles and the thumb radius feed the geometry; the colors and
/// line width are carried for whoever paints the control.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Configuration {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub line_width: f64,
    pub thumb_radius: f64,
    pub thumb_color: Color,
    pub start_angle: f64,
    pub end_angle: f64,
    pub initial_thumb_position: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            fill_color: Color::CLEAR,
            stroke_color: Color::GRAY,
            line_width: 1.5,
            thumb_radius: 25.0,
            thumb_color: Color::ORANGE,
            start_angle: -225.0,
            end_angle: 45.0,
            initial_thumb_position: 0.5,
        }
    }
}

impl Configuration {
    pub fn arc_angles(&self) -> Result<ArcAngles, ArcError> {
        ArcAngles::new(self.start_angle, self.end_angle)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.arc_angles()?;

        if !(self.thumb_radius.is_finite() && self.thumb_radius > 0.0) {
            return Err(ConfigError::Invalid {
                field: "thumb_radius",
                value: self.thumb_radius,
            });
        }
        if !(self.line_width.is_finite() && self.line_width >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "line_width",
                value: self.line_width,
            });
        }
        if !(0.0..=1.0).contains(&self.initial_thumb_position) {
            return Err(ConfigError::Invalid {
                field: "initial_thumb_position",
                value: self.initial_thumb_position,
            });
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid arc: {0}")]
    Arc(#[from] ArcError),
    #[error("Invalid {field}: {value}")]
    Invalid { field: &'static str, value: f64 },
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "arcslider", "arc-slider").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn build<S>(source: S) -> Result<Configuration, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let s = config::Config::builder()
        .add_source(source)
        .add_source(config::Environment::with_prefix("ARC_SLIDER"))
        .build()?;

    let configuration: Configuration = s.try_deserialize()?;
    configuration.validate()?;
    Ok(configuration)
}

pub fn load_config_from(path: &Path) -> Result<Configuration, ConfigError> {
    build(config::File::from(path).required(false))
}

pub fn load_config() -> Result<Configuration, ConfigError> {
    load_config_from(&get_config_path()?)
}

pub fn load_or_default() -> Configuration {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to the default configuration: {}", e);
            Configuration::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Configuration, ConfigError> {
        build(config::File::from_str(toml, config::FileFormat::Toml))
    }

    #[test]
    fn test_color_deserialization() {
        let cases = vec![
            ("\"clear\"", Color::CLEAR),
            ("\"Gray\"", Color::GRAY),
            ("\"grey\"", Color::GRAY),
            ("\"ORANGE\"", Color::ORANGE),
            ("\"#ffffff\"", Color::WHITE),
            ("\"#000\"", Color::BLACK),
            ("\"#ff800080\"", Color::rgba(255, 128, 0, 128)),
        ];

        for (json, expected) in cases {
            let deserialized: Color = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_color_rejects_garbage() {
        assert_eq!(
            "mauve".parse::<Color>(),
            Err(ColorParseError::Unknown("mauve".to_string()))
        );
        assert!(matches!("#12345".parse::<Color>(), Err(ColorParseError::Hex(_))));
        assert!(matches!("#gggggg".parse::<Color>(), Err(ColorParseError::Hex(_))));
        assert!(serde_json::from_str::<Color>("\"#zz\"").is_err());
    }

    #[test]
    fn test_color_display_round_trip() {
        let color = Color::rgba(18, 52, 86, 120);
        assert_eq!(color.to_string(), "#12345678");
        assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        assert_eq!(
            serde_json::to_string(&Color::ORANGE).unwrap(),
            "\"#ff8000ff\""
        );
    }

    #[test]
    fn test_bundled_default_config_matches_defaults() {
        assert_eq!(parse(DEFAULT_CONFIG).unwrap(), Configuration::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let configuration = parse("thumb_radius = 30.0\nstart_angle = -200.0\n").unwrap();
        assert_eq!(configuration.thumb_radius, 30.0);
        assert_eq!(configuration.start_angle, -200.0);
        assert_eq!(configuration.end_angle, 45.0);
        assert_eq!(configuration.thumb_color, Color::ORANGE);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            parse("start_angle = 90.0\nend_angle = 45.0\n"),
            Err(ConfigError::Arc(ArcError::InvertedAngles { .. }))
        ));
        assert!(matches!(
            parse("thumb_radius = 0.0\n"),
            Err(ConfigError::Invalid {
                field: "thumb_radius",
                ..
            })
        ));
        assert!(matches!(
            parse("initial_thumb_position = 1.5\n"),
            Err(ConfigError::Invalid {
                field: "initial_thumb_position",
                ..
            })
        ));
        assert!(matches!(
            parse("thumb_color = \"mauve\"\n"),
            Err(ConfigError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("arc-slider-missing-config.toml");
        assert_eq!(load_config_from(&path).unwrap(), Configuration::default());
    }
}
