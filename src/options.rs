//! Generator configuration: error correction level, margin, colors and size.

use crate::config::{DEFAULT_MARGIN, DEFAULT_WIDTH_PX, MAX_MARGIN, MAX_WIDTH_PX, MIN_WIDTH_PX};
use once_cell::sync::Lazy;
use qrcode::EcLevel;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static HEX_COLOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// QR redundancy level, trading capacity for damage tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub const ALL: [ErrorCorrection; 4] = [
        ErrorCorrection::L,
        ErrorCorrection::M,
        ErrorCorrection::Q,
        ErrorCorrection::H,
    ];

    /// Single-letter code used as the `<select>` value.
    pub fn code(self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ErrorCorrection::L => "Low (7%)",
            ErrorCorrection::M => "Medium (15%)",
            ErrorCorrection::Q => "Quartile (25%)",
            ErrorCorrection::H => "High (30%)",
        }
    }

    pub fn ec_level(self) -> EcLevel {
        match self {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "L" | "l" => Ok(ErrorCorrection::L),
            "M" | "m" => Ok(ErrorCorrection::M),
            "Q" | "q" => Ok(ErrorCorrection::Q),
            "H" | "h" => Ok(ErrorCorrection::H),
            other => Err(format!("Unknown error correction level: {}", other)),
        }
    }
}

/// Color parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid hex color: {}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0x00, 0x00, 0x00);
    pub const WHITE: Rgba = Rgba::opaque(0xff, 0xff, 0xff);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 0xff }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbb`, the only form `<input type="color">` accepts.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Accepts `RGB`, `RGBA`, `RRGGBB` and `RRGGBBAA`, with or without `#`.
impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !HEX_COLOR_REGEX.is_match(digits) {
            return Err(ColorParseError(s.to_string()));
        }

        let mut expanded: String = if digits.len() < 6 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };
        if expanded.len() == 6 {
            expanded.push_str("ff");
        }

        let value =
            u32::from_str_radix(&expanded, 16).map_err(|_| ColorParseError(s.to_string()))?;
        let [r, g, b, a] = value.to_be_bytes();
        Ok(Rgba { r, g, b, a })
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "{}", self.to_hex_rgb())
        } else {
            write!(f, "{}{:02x}", self.to_hex_rgb(), self.a)
        }
    }
}

/// Options handed to the encoder together with the content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QrOptions {
    pub error_correction: ErrorCorrection,
    /// Quiet zone around the symbol, in modules.
    pub margin: u32,
    pub dark: Rgba,
    pub light: Rgba,
    /// Requested image side in pixels.
    pub width: u32,
}

impl QrOptions {
    /// Clamp a requested width into the range the UI exposes.
    pub fn clamp_width(width: u32) -> u32 {
        width.clamp(MIN_WIDTH_PX, MAX_WIDTH_PX)
    }

    /// Clamp a requested margin to the largest one the UI accepts.
    pub fn clamp_margin(margin: u32) -> u32 {
        margin.min(MAX_MARGIN)
    }
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::default(),
            margin: DEFAULT_MARGIN,
            dark: Rgba::BLACK,
            light: Rgba::WHITE,
            width: DEFAULT_WIDTH_PX,
        }
    }
}
