//! Application-level configuration constants.

use log::Level;

// UI Behavior
pub const DEBOUNCE_MS: u32 = 300;
pub const DOWNLOAD_FILENAME: &str = "qr-code.png";

// Default values for the generator options
pub const DEFAULT_WIDTH_PX: u32 = 256;
pub const DEFAULT_MARGIN: u32 = 4;

// Min/Max limits for input fields
pub const MIN_WIDTH_PX: u32 = 128;
pub const MAX_WIDTH_PX: u32 = 512;
pub const WIDTH_STEP_PX: u32 = 32;
pub const MAX_MARGIN: u32 = 16;

/// Pixels per module when the requested width cannot fit the symbol.
pub const FALLBACK_SCALE: u32 = 4;

/// Console log level: verbose while developing, quieter in release builds.
pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::Debug
} else {
    Level::Info
};
