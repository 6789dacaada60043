//! Client-side QR code generator.
//!
//! Text and options typed into the form are debounced, encoded into a PNG
//! with the `qrcode` and `image` crates, previewed, and offered as a
//! `qr-code.png` download. Everything runs in the browser; nothing is sent
//! over the network or persisted.

pub mod components;
pub mod config;
pub mod encoder;
pub mod export;
pub mod generator;
pub mod hooks;
pub mod options;
pub mod scheduler;
pub mod session;
pub mod utils;

pub use encoder::{EncodeError, Encoder, ImagePayload, QrEncoder};
pub use generator::Generator;
pub use options::{ErrorCorrection, QrOptions, Rgba};
pub use session::{Session, SessionAction};
