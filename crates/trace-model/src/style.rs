//! Tracer stroke style.

use serde::{Deserialize, Serialize};

/// How the tracer line is stroked by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracerStyle {
    /// Colour at the first point (hex, `#RRGGBB`).
    pub start_color: String,
    /// Colour at the newest visible point (hex, `#RRGGBB`).
    pub end_color: String,
    /// Stroke width in pixels at the tail; tapers toward the head.
    pub line_width: u32,
    /// Glow radius hint, passed through to the renderer.
    pub glow_intensity: u32,
}

impl Default for TracerStyle {
    fn default() -> Self {
        Self {
            start_color: "#FFD700".to_string(),
            end_color: "#FF4500".to_string(),
            line_width: 4,
            glow_intensity: 10,
        }
    }
}

impl TracerStyle {
    /// Parse both gradient endpoints.
    pub fn gradient(&self) -> Result<(Rgba, Rgba), ColorParseError> {
        Ok((Rgba::from_hex(&self.start_color)?, Rgba::from_hex(&self.end_color)?))
    }
}

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::InvalidLength {
                value: hex.to_string(),
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit {
                value: hex.to_string(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorParseError::InvalidDigit {
                value: hex.to_string(),
            })
        };

        Ok(Self::opaque(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Channel-wise interpolation, truncating toward zero. Alpha is opaque.
    pub fn lerp(a: &Rgba, b: &Rgba, t: f64) -> Rgba {
        let mix = |c1: u8, c2: u8| {
            let v = c1 as f64 + (c2 as f64 - c1 as f64) * t;
            v.trunc().clamp(0.0, 255.0) as u8
        };
        Rgba::opaque(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Errors parsing a hex colour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Colour {value:?} must have six hex digits")]
    InvalidLength { value: String },

    #[error("Colour {value:?} contains a non-hex digit")]
    InvalidDigit { value: String },
}
