//! Color handling for stylesheet values
//!
//! This module provides the color token carried by abbreviation trees and the
//! formatter used to turn a color into text for placeholder labels.

use serde::{Deserialize, Serialize};

/// A color literal with RGBA components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0.0-1.0)
    #[serde(default = "opaque")]
    pub a: f32,
    /// Color as it was authored
    #[serde(default)]
    pub raw: String,
}

fn opaque() -> f32 {
    1.0
}

impl ColorValue {
    /// Create a new color with RGB components and full opacity
    pub fn new_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0, raw: String::new() }
    }

    /// Create a new color with RGBA components
    pub fn new_rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a, raw: String::new() }
    }

    /// Parse a hex color string and return a color
    /// Supports 1-digit (#g, gray), 3-digit (#rgb), 6-digit (#rrggbb), and 8-digit (#rrggbbaa) hex formats
    pub fn from_hex(hex_value: &str) -> Option<Self> {
        let hex_part = hex_value.strip_prefix('#').unwrap_or(hex_value);
        if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        let mut color = match hex_part.len() {
            1 => {
                let v = channel(&hex_part.repeat(2))?;
                Self::new_rgb(v, v, v)
            }
            3 => {
                let r = channel(&hex_part[0..1].repeat(2))?;
                let g = channel(&hex_part[1..2].repeat(2))?;
                let b = channel(&hex_part[2..3].repeat(2))?;
                Self::new_rgb(r, g, b)
            }
            6 => Self::new_rgb(
                channel(&hex_part[0..2])?,
                channel(&hex_part[2..4])?,
                channel(&hex_part[4..6])?,
            ),
            8 => {
                let a = channel(&hex_part[6..8])?;
                Self::new_rgba(
                    channel(&hex_part[0..2])?,
                    channel(&hex_part[2..4])?,
                    channel(&hex_part[4..6])?,
                    a as f32 / 255.0,
                )
            }
            _ => return None,
        };
        color.raw = hex_value.to_string();
        Some(color)
    }

    /// Whether every channel is zero, alpha included
    pub fn is_transparent(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0 && self.a == 0.0
    }

    /// Convert to hex string format (#rrggbb), or #rgb when `short` and every channel allows it
    pub fn to_hex(&self, short: bool) -> String {
        let channels = [self.r, self.g, self.b];
        if short && channels.into_iter().all(|c| (c >> 4) == (c & 0x0f)) {
            format!("#{:x}{:x}{:x}", self.r & 0x0f, self.g & 0x0f, self.b & 0x0f)
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    /// Convert to `rgba(r, g, b, a)`
    pub fn to_rgba(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Turns a color token into the text shown in placeholder labels
pub trait ColorFormatter {
    fn format(&self, color: &ColorValue, short_hex: bool) -> String;
}

/// Hex for opaque colors, `rgba()` for translucent ones, `transparent` for all-zero
#[derive(Debug, Clone, Copy, Default)]
pub struct HexColorFormatter;

impl ColorFormatter for HexColorFormatter {
    fn format(&self, color: &ColorValue, short_hex: bool) -> String {
        if color.is_transparent() {
            "transparent".to_string()
        } else if color.a == 1.0 {
            color.to_hex(short_hex)
        } else {
            color.to_rgba()
        }
    }
}
