//! RGB colors and CSS color parsing.
//!
//! Colors enter the crate as CSS color text (`#888`, `#888888`, `gray`,
//! `rgb(136, 136, 136)`, `rgb(50% 50% 50% / 0.4)`, `hsl(0, 0%, 53.33%)`,
//! `hwb(120 0% 0%)`) or as RGB triples, and are normalized to an [`Rgb`] with
//! integer channels in `0..=255`. Alpha components are accepted and
//! discarded.
//!
//! Parsing is delegated to `cssparser`'s color parser. Colors outside sRGB
//! (`lab()`, `lch()`, `oklab()`, `oklch()`, `color()`) and `currentcolor` are
//! rejected.

use std::fmt;
use std::str::FromStr;

use cssparser::{hsl_to_rgb, hwb_to_rgb, Color, Parser, ParserInput};
use serde::{Deserialize, Serialize};

use crate::style::StyleSpecError;

/// An opaque RGB color with 8-bit channels.
///
/// Renders as `rgb(r, g, b)`, the form understood by the graph library's
/// style syntax.
///
/// # Example
///
/// ```rust
/// use netstyle::Rgb;
///
/// let gray: Rgb = "#888888".parse().unwrap();
/// assert_eq!(gray, Rgb::new(136, 136, 136));
/// assert_eq!(gray.to_string(), "rgb(136, 136, 136)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses CSS color text.
    ///
    /// # Errors
    ///
    /// Returns [`StyleSpecError::InvalidColor`] if the text is not a hex
    /// color, a named color, or `rgb()`/`hsl()`/`hwb()` functional notation.
    pub fn parse(input: &str) -> Result<Self, StyleSpecError> {
        parse_css_color(input).ok_or_else(|| StyleSpecError::InvalidColor {
            input: input.to_string(),
        })
    }

    /// Returns the channels as floats, in `[r, g, b]` order.
    pub fn channels(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = StyleSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::parse(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

/// Anything a color-valued style can be built from.
///
/// Text is parsed lazily by [`ColorInput::resolve`]; triples are already
/// normalized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// CSS color text.
    Text(String),
    /// An RGB triple.
    Rgb(Rgb),
}

impl ColorInput {
    /// Normalizes the input to an RGB triple.
    ///
    /// # Errors
    ///
    /// Returns [`StyleSpecError::InvalidColor`] when text input does not parse.
    pub fn resolve(self) -> Result<Rgb, StyleSpecError> {
        match self {
            ColorInput::Text(text) => Rgb::parse(&text),
            ColorInput::Rgb(rgb) => Ok(rgb),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        ColorInput::Text(text.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        ColorInput::Text(text)
    }
}

impl From<&String> for ColorInput {
    fn from(text: &String) -> Self {
        ColorInput::Text(text.clone())
    }
}

impl From<Rgb> for ColorInput {
    fn from(rgb: Rgb) -> Self {
        ColorInput::Rgb(rgb)
    }
}

impl From<(u8, u8, u8)> for ColorInput {
    fn from(triple: (u8, u8, u8)) -> Self {
        ColorInput::Rgb(triple.into())
    }
}

impl From<[u8; 3]> for ColorInput {
    fn from(channels: [u8; 3]) -> Self {
        ColorInput::Rgb(channels.into())
    }
}

fn parse_css_color(text: &str) -> Option<Rgb> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let color = Color::parse(&mut parser).ok()?;
    parser.expect_exhausted().ok()?;
    match color {
        Color::Rgba(rgba) => Some(Rgb::new(
            channel(rgba.red),
            channel(rgba.green),
            channel(rgba.blue),
        )),
        Color::Hsl(hsl) => {
            let (r, g, b) = hsl_to_rgb(turns(hsl.hue), unit(hsl.saturation), unit(hsl.lightness));
            Some(from_unit_channels(r, g, b))
        }
        Color::Hwb(hwb) => {
            let (r, g, b) = hwb_to_rgb(turns(hwb.hue), unit(hwb.whiteness), unit(hwb.blackness));
            Some(from_unit_channels(r, g, b))
        }
        // currentcolor has no fixed value; lab, lch and color() are not sRGB.
        _ => None,
    }
}

// A `none` component counts as zero.
fn channel(value: impl Into<Option<u8>>) -> u8 {
    value.into().unwrap_or(0)
}

fn unit(value: impl Into<Option<f32>>) -> f32 {
    value.into().unwrap_or(0.0)
}

/// Hue in degrees, as parsed, to the `[0, 1)` turn fraction the conversions take.
fn turns(degrees: impl Into<Option<f32>>) -> f32 {
    (unit(degrees) / 360.0).rem_euclid(1.0)
}

fn from_unit_channels(r: f32, g: f32, b: f32) -> Rgb {
    let scale = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(scale(r), scale(g), scale(b))
}
