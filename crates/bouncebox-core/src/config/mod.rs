//! Scene configuration loaded from a declarative text file.

mod error;
pub mod parser;

pub use error::{ConfigError, ConfigResult};
pub use parser::{NumericPolicy, ParseOutcome, Parser};

use crate::shapes::{Shape, ShapeColor};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default location of the scene file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.txt";

/// Window dimensions in logical pixels. Not validated by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowSettings {
    pub width: i32,
    pub height: i32,
}

/// Label font styling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontSettings {
    pub path: PathBuf,
    /// Character size in pixels.
    pub size: i32,
    pub color: ShapeColor,
}

/// Everything a scene file describes. Owns every shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameConfig {
    pub window: WindowSettings,
    pub font: FontSettings,
    /// Shapes in file order; indices into this list are selection indices.
    pub shapes: Vec<Shape>,
}

impl GameConfig {
    /// Read and parse a scene file with the strict numeric policy.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::load_from_with(path, NumericPolicy::default())
    }

    /// Read and parse a scene file.
    pub fn load_from_with(path: impl AsRef<Path>, policy: NumericPolicy) -> ConfigResult<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Parser::new(&src).with_policy(policy).parse()?;
        log::info!(
            "Loaded {} with {} shape(s), window {}x{}",
            path.display(),
            config.shapes.len(),
            config.window.width,
            config.window.height
        );
        Ok(config)
    }
}

impl FromStr for GameConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Window w={} h={}", self.window.width, self.window.height)?;
        write!(
            f,
            "\n{} size={} color={}",
            self.font.path.display(),
            self.font.size,
            self.font.color
        )?;
        for shape in &self.shapes {
            write!(f, "\n{shape}")?;
        }
        Ok(())
    }
}

/// Parse scene source text with the strict numeric policy.
pub fn parse_str(src: &str) -> ConfigResult<GameConfig> {
    Parser::new(src).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCENE: &str = "\
Window 800 600
Font fonts/Hack-Regular.ttf 18 255 255 255
Circle CGreen 100 100 -0.03 0.02 0 255 0 50
Rectangle RRed 200 200 0.1 0.15 255 0 0 50 25
Circle CBlue 200.25 100.5 0.02 0.04 0 0 255 100
";

    #[test]
    fn test_parse_round_trip_description() {
        let config: GameConfig = SCENE.parse().unwrap();
        let expected = "\
Window w=800 h=600
fonts/Hack-Regular.ttf size=18 color=(255,255,255)
Circle CGreen, draw=true, scale=1, position (100,100), velocity (-0.03,0.02), color (0,255,0), radius=50
Rectangle RRed, draw=true, scale=1, position (200,200), velocity (0.1,0.15), color (255,0,0), size (50,25)
Circle CBlue, draw=true, scale=1, position (200.25,100.5), velocity (0.02,0.04), color (0,0,255), radius=100";
        assert_eq!(config.to_string(), expected);
    }

    #[test]
    fn test_description_reparses_to_same_numbers() {
        let config = parse_str(SCENE).unwrap();
        for (shape, line) in config.shapes.iter().zip(config.to_string().lines().skip(2)) {
            let numbers: Vec<f64> = line
                .split(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
                .filter_map(|t| t.parse().ok())
                .collect();
            let props = shape.props();
            // scale, x, y, vx, vy, r, g, b, then geometry
            assert!((numbers[0] - props.scale).abs() < 1e-9);
            assert!((numbers[1] - props.position.x).abs() < 1e-9);
            assert!((numbers[2] - props.position.y).abs() < 1e-9);
            assert!((numbers[3] - props.velocity.x).abs() < 1e-9);
            assert!((numbers[4] - props.velocity.y).abs() < 1e-9);
            assert!((numbers[5] - props.color.r as f64).abs() < 1e-9);
            assert!((numbers[6] - props.color.g as f64).abs() < 1e-9);
            assert!((numbers[7] - props.color.b as f64).abs() < 1e-9);
            match shape {
                Shape::Circle(c) => assert!((numbers[8] - c.radius).abs() < 1e-9),
                Shape::Rectangle(r) => {
                    assert!((numbers[8] - r.size.width).abs() < 1e-9);
                    assert!((numbers[9] - r.size.height).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_description_without_shapes() {
        let config = parse_str("Window 640 480 Font a.ttf 12 1 2 3").unwrap();
        assert_eq!(config.to_string(), "Window w=640 h=480\na.ttf size=12 color=(1,2,3)");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SCENE.as_bytes()).unwrap();

        let config = GameConfig::load_from(file.path()).unwrap();
        assert_eq!(config.window, WindowSettings { width: 800, height: 600 });
        assert_eq!(config.font.path, PathBuf::from("fonts/Hack-Regular.ttf"));
        assert_eq!(config.font.size, 18);
        let names: Vec<_> = config.shapes.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["CGreen", "RRed", "CBlue"]);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = GameConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { path: ref p, .. } if p == &path));
    }

    #[test]
    fn test_load_from_with_zero_fill() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Window 800 tall").unwrap();

        assert!(GameConfig::load_from(file.path()).is_err());
        let config = GameConfig::load_from_with(file.path(), NumericPolicy::ZeroFill).unwrap();
        assert_eq!(config.window, WindowSettings { width: 800, height: 0 });
    }
}
