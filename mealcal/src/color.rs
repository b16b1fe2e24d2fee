//! HSL colors as used by the calendar swatches, and the RGB distance the
//! color manager ranks candidates by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("malformed color: {0:?}")]
    Malformed(String),
    #[error("hue out of range: {0}")]
    HueOutOfRange(u32),
    #[error("{channel} out of range: {value}")]
    PercentOutOfRange { channel: &'static str, value: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hsl {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

impl Hsl {
    /// Builds a color from components already known to be in range, such as
    /// palette constants.
    ///
    /// Panics when `hue >= 360` or a percentage exceeds 100; use
    /// [`Hsl::try_new`] or [`str::parse`] for values that come from user
    /// input or stored data.
    #[track_caller]
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        assert!(hue < 360, "hue must be below 360");
        assert!(saturation <= 100, "saturation must be a percentage");
        assert!(lightness <= 100, "lightness must be a percentage");
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn try_new(hue: u32, saturation: u32, lightness: u32) -> Result<Self, ColorParseError> {
        if hue >= 360 {
            return Err(ColorParseError::HueOutOfRange(hue));
        }
        if saturation > 100 {
            return Err(ColorParseError::PercentOutOfRange {
                channel: "saturation",
                value: saturation,
            });
        }
        if lightness > 100 {
            return Err(ColorParseError::PercentOutOfRange {
                channel: "lightness",
                value: lightness,
            });
        }

        Ok(Self {
            hue: hue as u16,
            saturation: saturation as u8,
            lightness: lightness as u8,
        })
    }

    pub fn hue(self) -> u16 {
        self.hue
    }

    pub fn saturation(self) -> u8 {
        self.saturation
    }

    pub fn lightness(self) -> u8 {
        self.lightness
    }

    pub const fn with_lightness(self, lightness: u8) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }

    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.hue) / 360.0;
        let s = f64::from(self.saturation) / 100.0;
        let l = f64::from(self.lightness) / 100.0;

        if self.saturation == 0 {
            let grey = channel_to_byte(l);
            return Rgb {
                r: grey,
                g: grey,
                b: grey,
            };
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb {
            r: channel_to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
            g: channel_to_byte(hue_to_channel(p, q, h)),
            b: channel_to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl FromStr for Hsl {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || ColorParseError::Malformed(input.to_string());

        let body = input.trim().strip_prefix("hsl(").ok_or_else(malformed)?;
        match match_triple(body) {
            Some(((hue, saturation, lightness), "")) => {
                Self::try_new(hue, saturation, lightness)
            }
            _ => Err(malformed()),
        }
    }
}

impl TryFrom<String> for Hsl {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hsl> for String {
    fn from(color: Hsl) -> Self {
        color.to_string()
    }
}

fn scan_hsl(input: &str) -> Result<Hsl, ColorParseError> {
    input
        .match_indices("hsl(")
        .find_map(|(start, prefix)| match_triple(&input[start + prefix.len()..]))
        .map(|((hue, saturation, lightness), _)| Hsl::try_new(hue, saturation, lightness))
        .unwrap_or_else(|| Err(ColorParseError::Malformed(input.to_string())))
}

fn match_triple(body: &str) -> Option<((u32, u32, u32), &str)> {
    let (hue, rest) = take_digits(body)?;
    let rest = rest.strip_prefix(',')?.trim_start();
    let (saturation, rest) = take_digits(rest)?;
    let rest = rest.strip_prefix("%,")?.trim_start();
    let (lightness, rest) = take_digits(rest)?;
    let rest = rest.strip_prefix("%)")?;
    Some(((hue, saturation, lightness), rest))
}

fn take_digits(raw: &str) -> Option<(u32, &str)> {
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    if end == 0 {
        return None;
    }
    // Overlong runs saturate and are then rejected as out of range.
    let value = raw[..end].parse().unwrap_or(u32::MAX);
    Some((value, &raw[end..]))
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel_to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

pub fn distance(a: Hsl, b: Hsl) -> f64 {
    a.to_rgb().distance(b.to_rgb())
}

pub fn distance_str(a: &str, b: &str) -> f64 {
    rgb_from_str(a).distance(rgb_from_str(b))
}

/// Converts the first `hsl(...)` found in `input` to RGB. Strings without
/// one, or whose components are out of range, render as black.
pub fn rgb_from_str(input: &str) -> Rgb {
    match scan_hsl(input) {
        Ok(color) => color.to_rgb(),
        Err(err) => {
            warn!(%err, "falling back to black for unparseable color");
            Rgb::BLACK
        }
    }
}
