//! QR encoding service: turns (content, options) into a PNG image payload.
//!
//! Module placement and error correction come from the `qrcode` crate and
//! PNG serialization from `image`. This module only rasterizes the module
//! grid into pixels with the configured colors, margin and width.
//!
//! # Raster layout
//! - Symbol side is the module count plus `2 * margin`.
//! - When the requested width fits the symbol, the scale is fractional and
//!   the image is exactly `width` pixels square.
//! - Otherwise every module is [`FALLBACK_SCALE`] pixels wide.

use crate::config::{FALLBACK_SCALE, MAX_MARGIN};
use crate::options::QrOptions;
use base64::Engine as _;
use image::{ImageError, ImageFormat, Rgba as RgbaPixel, RgbaImage};
use qrcode::types::QrError;
use qrcode::{Color, QrCode};
use std::fmt;
use std::io::Cursor;
use std::rc::Rc;

/// Anything that can produce an image payload for the generator.
pub trait Encoder {
    fn encode(&self, content: &str, options: &QrOptions) -> Result<ImagePayload, EncodeError>;
}

#[derive(Debug)]
pub enum EncodeError {
    /// The content does not fit a QR symbol with the chosen options.
    Qr(QrError),
    Png(ImageError),
    /// The quiet zone is wider than the largest accepted margin.
    MarginTooLarge { margin: u32, max: u32 },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Qr(e) => write!(f, "QR encoding failed: {}", e),
            EncodeError::Png(e) => write!(f, "PNG encoding failed: {}", e),
            EncodeError::MarginTooLarge { margin, max } => {
                write!(f, "Margin {} exceeds the maximum of {} modules", margin, max)
            }
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Qr(e) => Some(e),
            EncodeError::Png(e) => Some(e),
            EncodeError::MarginTooLarge { .. } => None,
        }
    }
}

impl From<QrError> for EncodeError {
    fn from(e: QrError) -> Self {
        EncodeError::Qr(e)
    }
}

impl From<ImageError> for EncodeError {
    fn from(e: ImageError) -> Self {
        EncodeError::Png(e)
    }
}

/// A finished PNG. Cloning shares the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    png: Rc<[u8]>,
    width: u32,
    height: u32,
}

impl ImagePayload {
    pub fn new(png: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            png: png.into(),
            width,
            height,
        }
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `data:` URL usable as an `<img src>` or download `href`.
    pub fn data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }
}

/// Production encoder backed by the `qrcode` and `image` crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

impl Encoder for QrEncoder {
    fn encode(&self, content: &str, options: &QrOptions) -> Result<ImagePayload, EncodeError> {
        if options.margin > MAX_MARGIN {
            return Err(EncodeError::MarginTooLarge {
                margin: options.margin,
                max: MAX_MARGIN,
            });
        }
        let level = options.error_correction.ec_level();
        let code = QrCode::with_error_correction_level(content.as_bytes(), level)?;
        let image = rasterize(&code, options);
        let (width, height) = image.dimensions();

        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(ImagePayload::new(png, width, height))
    }
}

/// Paint the module grid of `code` into an RGBA image.
fn rasterize(code: &QrCode, options: &QrOptions) -> RgbaImage {
    let modules = code.width();
    let colors = code.to_colors();
    let symbol_modules = modules as u32 + options.margin * 2;

    let (side, scale) = if options.width >= symbol_modules {
        (options.width, options.width as f64 / symbol_modules as f64)
    } else {
        (symbol_modules * FALLBACK_SCALE, FALLBACK_SCALE as f64)
    };
    let scaled_margin = options.margin as f64 * scale;
    let inner_end = side as f64 - scaled_margin;

    let dark = RgbaPixel(options.dark.to_array());
    let light = RgbaPixel(options.light.to_array());

    // Samples which module a pixel coordinate falls into, if any.
    let module_at = |p: u32| -> Option<usize> {
        let p = p as f64;
        if p < scaled_margin || p >= inner_end {
            return None;
        }
        let idx = ((p - scaled_margin) / scale).floor() as usize;
        Some(idx.min(modules - 1))
    };

    RgbaImage::from_fn(side, side, |x, y| match (module_at(x), module_at(y)) {
        (Some(col), Some(row)) if colors[row * modules + col] == Color::Dark => dark,
        _ => light,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ErrorCorrection, Rgba};

    fn decode(payload: &ImagePayload) -> RgbaImage {
        image::load_from_memory_with_format(payload.png_bytes(), ImageFormat::Png)
            .expect("payload is a valid PNG")
            .to_rgba8()
    }

    #[test]
    fn default_options_produce_exact_width() {
        let payload = QrEncoder
            .encode("https://example.com", &QrOptions::default())
            .unwrap();
        assert!(!payload.png_bytes().is_empty());
        assert_eq!((payload.width(), payload.height()), (256, 256));

        let decoded = decode(&payload);
        assert_eq!(decoded.dimensions(), (256, 256));
    }

    #[test]
    fn width_change_resizes_output() {
        let small = QrOptions {
            width: 128,
            ..QrOptions::default()
        };
        let payload = QrEncoder.encode("https://example.com", &small).unwrap();
        assert_eq!((payload.width(), payload.height()), (128, 128));
        assert_eq!(decode(&payload).dimensions(), (128, 128));
    }

    #[test]
    fn repeated_encodes_are_identical() {
        let options = QrOptions {
            error_correction: ErrorCorrection::H,
            dark: Rgba::opaque(0x12, 0x34, 0x56),
            ..QrOptions::default()
        };
        let first = QrEncoder.encode("hello world", &options).unwrap();
        let second = QrEncoder.encode("hello world", &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn margin_uses_light_color_and_finder_uses_dark() {
        let options = QrOptions {
            dark: Rgba::opaque(0xff, 0x00, 0x00),
            light: Rgba::opaque(0x00, 0x00, 0xff),
            ..QrOptions::default()
        };
        let decoded = decode(&QrEncoder.encode("A", &options).unwrap());

        // Version 1 is 21 modules, plus 4 on each side: 29 * scale = 256.
        let scale = 256.0 / 29.0;
        assert_eq!(decoded.get_pixel(0, 0).0, [0x00, 0x00, 0xff, 0xff]);
        let finder = (4.5 * scale) as u32;
        assert_eq!(decoded.get_pixel(finder, finder).0, [0xff, 0x00, 0x00, 0xff]);
    }

    #[test]
    fn zero_margin_starts_with_dark_finder() {
        let options = QrOptions {
            margin: 0,
            ..QrOptions::default()
        };
        let decoded = decode(&QrEncoder.encode("A", &options).unwrap());
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0xff]);
    }

    #[test]
    fn oversized_symbol_falls_back_to_fixed_scale() {
        // Long enough to need a symbol wider than 128 modules plus margin.
        let content = "x".repeat(1500);
        let options = QrOptions {
            width: 128,
            error_correction: ErrorCorrection::L,
            ..QrOptions::default()
        };
        let payload = QrEncoder.encode(&content, &options).unwrap();
        let code =
            QrCode::with_error_correction_level(content.as_bytes(), qrcode::EcLevel::L).unwrap();
        let expected = (code.width() as u32 + 8) * FALLBACK_SCALE;
        assert_eq!((payload.width(), payload.height()), (expected, expected));
    }

    #[test]
    fn content_too_long_is_an_error() {
        let content = "x".repeat(4000);
        let options = QrOptions {
            error_correction: ErrorCorrection::H,
            ..QrOptions::default()
        };
        let err = QrEncoder.encode(&content, &options).unwrap_err();
        assert!(matches!(err, EncodeError::Qr(QrError::DataTooLong)));
    }

    #[test]
    fn oversized_margin_is_an_error() {
        for margin in [MAX_MARGIN + 1, 1000, u32::MAX / 2 + 1, u32::MAX] {
            let options = QrOptions {
                margin,
                ..QrOptions::default()
            };
            let err = QrEncoder.encode("A", &options).unwrap_err();
            assert!(matches!(
                err,
                EncodeError::MarginTooLarge { margin: m, max: MAX_MARGIN } if m == margin
            ));
        }
    }

    #[test]
    fn largest_margin_still_encodes() {
        let options = QrOptions {
            margin: MAX_MARGIN,
            ..QrOptions::default()
        };
        // 21 modules + 2 * 16 = 53 modules, which still fits 256 px.
        let payload = QrEncoder.encode("A", &options).unwrap();
        assert_eq!((payload.width(), payload.height()), (256, 256));
    }

    #[test]
    fn data_url_is_png_base64() {
        let payload = ImagePayload::new(vec![1, 2, 3], 1, 1);
        assert_eq!(payload.data_url(), "data:image/png;base64,AQID");
    }
}
