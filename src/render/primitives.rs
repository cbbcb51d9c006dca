use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS color string (`#rrggbb`, `#rgb` or `rgba(r,g,b,a)`)
/// so chart settings stay readable in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    pub fn parse(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_color(input));
        }

        let (body, expects_alpha) = if let Some(body) = trimmed
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            (body, true)
        } else if let Some(body) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            (body, false)
        } else {
            return Err(invalid_color(input));
        };

        let channels = body
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid_color(input))?;
        let color = match (channels.as_slice(), expects_alpha) {
            ([r, g, b], false) => Self::rgb(r / 255.0, g / 255.0, b / 255.0),
            ([r, g, b, a], true) => Self::rgba(r / 255.0, g / 255.0, b / 255.0, *a),
            _ => return Err(invalid_color(input)),
        };
        color.validate()?;
        Ok(color)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let expand = |digit: u8| digit * 16 + digit;
    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<_>>>()?;
    match digits.as_slice() {
        [r, g, b] => Some(Color::rgb8(expand(*r), expand(*g), expand(*b))),
        [r1, r0, g1, g0, b1, b0] => Some(Color::rgb8(
            r1 * 16 + r0,
            g1 * 16 + g0,
            b1 * 16 + b0,
        )),
        _ => None,
    }
}

fn invalid_color(input: &str) -> ChartError {
    ChartError::InvalidData(format!("unsupported color `{input}`"))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to_byte = |channel: f64| (channel * 255.0).round().clamp(0.0, 255.0) as u8;
        if self.alpha >= 1.0 {
            write!(
                f,
                "#{:02x}{:02x}{:02x}",
                to_byte(self.red),
                to_byte(self.green),
                to_byte(self.blue)
            )
        } else {
            write!(
                f,
                "rgba({},{},{},{})",
                to_byte(self.red),
                to_byte(self.green),
                to_byte(self.blue),
                self.alpha
            )
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// One stop of a linear gradient; `offset` is in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    #[must_use]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient between two device-space endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }

    pub fn add_color_stop(&mut self, stop: ColorStop) {
        self.stops.push(stop);
    }
}

/// Fill or stroke source.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Self::Linear(gradient)
    }
}

/// Horizontal text alignment relative to the text anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}
