//! Record parser for the whitespace-token scene format.
//!
//! ```text
//! Window    <width> <height>
//! Font      <path> <size> <r> <g> <b>
//! Circle    <name> <x> <y> <vx> <vy> <r> <g> <b> <radius>
//! Rectangle <name> <x> <y> <vx> <vy> <r> <g> <b> <w> <h>
//! ```
//!
//! Tokens are separated by any whitespace; line breaks carry no meaning
//! beyond diagnostics. There is no quoting, so names and paths cannot
//! contain spaces.

use super::error::{ConfigError, ConfigResult};
use super::{FontSettings, GameConfig, WindowSettings};
use crate::shapes::{Circle, Rectangle, ShapeColor, ShapeProps};
use kurbo::{Point, Size, Vec2};
use std::path::PathBuf;
use std::str::FromStr;

const WINDOW: &str = "Window";
const FONT: &str = "Font";
const CIRCLE: &str = "Circle";
const RECTANGLE: &str = "Rectangle";

/// How malformed numeric tokens are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPolicy {
    /// Reject the record with [`ConfigError::InvalidNumber`].
    #[default]
    Strict,
    /// Substitute zero for the bad field, default the rest of its record,
    /// keep that record and stop parsing without an error.
    ZeroFill,
}

// ── Token ─────────────────────────────────────────────────────────────────

/// A whitespace-delimited token and the 1-based line it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    pub text: &'s str,
    pub line: usize,
}

/// Split a source into tokens, keeping line numbers for diagnostics.
pub fn tokenize(src: &str) -> Vec<Token<'_>> {
    src.lines()
        .enumerate()
        .flat_map(|(index, line)| {
            line.split_whitespace().map(move |text| Token { text, line: index + 1 })
        })
        .collect()
}

// ── Parser ────────────────────────────────────────────────────────────────

/// Config built so far plus the error that stopped parsing, if any.
#[derive(Debug)]
pub struct ParseOutcome {
    pub config: GameConfig,
    pub error: Option<ConfigError>,
}

impl ParseOutcome {
    pub fn into_result(self) -> ConfigResult<GameConfig> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.config),
        }
    }
}

pub struct Parser<'s> {
    tokens: Vec<Token<'s>>,
    pos: usize,
    policy: NumericPolicy,
    /// Set by a zero-filled field; later fields of the record read as defaults.
    stalled: bool,
}

impl<'s> Parser<'s> {
    pub fn new(src: &'s str) -> Self {
        Self {
            tokens: tokenize(src),
            pos: 0,
            policy: NumericPolicy::default(),
            stalled: false,
        }
    }

    pub fn with_policy(mut self, policy: NumericPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse every record, failing on the first bad one.
    pub fn parse(self) -> ConfigResult<GameConfig> {
        self.parse_partial().into_result()
    }

    /// Parse records until the first failure and keep what was built before it.
    ///
    /// A record that fails halfway contributes nothing.
    pub fn parse_partial(mut self) -> ParseOutcome {
        let mut config = GameConfig::default();
        while let Some(head) = self.advance() {
            if let Err(err) = self.parse_record(head, &mut config) {
                return ParseOutcome { config, error: Some(err) };
            }
            if self.stalled {
                log::warn!("parsing stopped after zero-filled record at line {}", head.line);
                break;
            }
        }
        ParseOutcome { config, error: None }
    }

    fn advance(&mut self) -> Option<Token<'s>> {
        let tok = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(tok)
    }

    fn last_line(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.line)
            .unwrap_or(1)
    }

    fn expect(&mut self, record: &'static str, field: &'static str) -> ConfigResult<Token<'s>> {
        let line = self.last_line();
        self.advance()
            .ok_or(ConfigError::MissingField { record, field, line })
    }

    fn string(&mut self, record: &'static str, field: &'static str) -> ConfigResult<String> {
        if self.stalled {
            return Ok(String::new());
        }
        Ok(self.expect(record, field)?.text.to_string())
    }

    fn number<T>(&mut self, record: &'static str, field: &'static str) -> ConfigResult<T>
    where
        T: FromStr + Default,
    {
        if self.stalled {
            return Ok(T::default());
        }
        let tok = self.expect(record, field)?;
        match tok.text.parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) => self.malformed(record, field, tok),
        }
    }

    fn float(&mut self, record: &'static str, field: &'static str) -> ConfigResult<f64> {
        if self.stalled {
            return Ok(0.0);
        }
        let tok = self.expect(record, field)?;
        match tok.text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => self.malformed(record, field, tok),
        }
    }

    fn malformed<T: Default>(
        &mut self,
        record: &'static str,
        field: &'static str,
        tok: Token<'s>,
    ) -> ConfigResult<T> {
        match self.policy {
            NumericPolicy::Strict => Err(ConfigError::InvalidNumber {
                record,
                field,
                token: tok.text.to_string(),
                line: tok.line,
            }),
            NumericPolicy::ZeroFill => {
                log::warn!(
                    "{record} `{field}` at line {}: `{}` is not a number, using 0 for the rest of the record",
                    tok.line,
                    tok.text
                );
                self.stalled = true;
                Ok(T::default())
            }
        }
    }

    fn color(&mut self, record: &'static str) -> ConfigResult<ShapeColor> {
        let line = self.last_line();
        let r = self.number::<i64>(record, "r")?;
        let g = self.number::<i64>(record, "g")?;
        let b = self.number::<i64>(record, "b")?;
        let (color, clamped) = ShapeColor::from_channels(r, g, b);
        if clamped {
            log::warn!("{record} color ({r},{g},{b}) near line {line} clamped to {color}");
        }
        Ok(color)
    }

    // ── Records ───────────────────────────────────────────────────────────

    fn parse_record(&mut self, head: Token<'s>, config: &mut GameConfig) -> ConfigResult<()> {
        match head.text {
            WINDOW => {
                let width = self.number(WINDOW, "width")?;
                let height = self.number(WINDOW, "height")?;
                config.window = WindowSettings { width, height };
                log::debug!("line {}: window {}x{}", head.line, width, height);
            }
            FONT => {
                let path = PathBuf::from(self.string(FONT, "path")?);
                let size = self.number(FONT, "size")?;
                let color = self.color(FONT)?;
                log::debug!("line {}: font {} size {}", head.line, path.display(), size);
                config.font = FontSettings { path, size, color };
            }
            CIRCLE => {
                let props = self.shape_props(CIRCLE)?;
                let radius = self.float(CIRCLE, "radius")?;
                log::debug!("line {}: circle `{}`", head.line, props.name);
                config.shapes.push(Circle::new(props, radius).into());
            }
            RECTANGLE => {
                let props = self.shape_props(RECTANGLE)?;
                let width = self.float(RECTANGLE, "width")?;
                let height = self.float(RECTANGLE, "height")?;
                log::debug!("line {}: rectangle `{}`", head.line, props.name);
                config
                    .shapes
                    .push(Rectangle::new(props, Size::new(width, height)).into());
            }
            other => {
                return Err(ConfigError::UnknownKeyword {
                    keyword: other.to_string(),
                    line: head.line,
                });
            }
        }
        Ok(())
    }

    /// `<name> <x> <y> <vx> <vy> <r> <g> <b>`, shared by both shape records.
    fn shape_props(&mut self, record: &'static str) -> ConfigResult<ShapeProps> {
        let name = self.string(record, "name")?;
        let x = self.float(record, "x")?;
        let y = self.float(record, "y")?;
        let vx = self.float(record, "vx")?;
        let vy = self.float(record, "vy")?;
        let color = self.color(record)?;
        Ok(ShapeProps::new(name, Point::new(x, y), Vec2::new(vx, vy), color))
    }
}
