//! Per-mount session state of the generator form.
//!
//! Created with defaults when the form mounts and dropped with it; nothing is
//! persisted. All mutation goes through [`SessionAction`] so the latest image
//! is only ever replaced as a whole.

use crate::encoder::ImagePayload;
use crate::options::{ErrorCorrection, QrOptions, Rgba};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub input_text: String,
    pub options: QrOptions,
    pub latest_image: Option<ImagePayload>,
    pub options_panel_visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    EditText(String),
    SetErrorCorrection(ErrorCorrection),
    /// Clamped to the largest accepted margin.
    SetMargin(u32),
    SetDark(Rgba),
    SetLight(Rgba),
    /// Clamped into the slider range.
    SetWidth(u32),
    ToggleOptionsPanel,
    ImageReady(ImagePayload),
    ImageCleared,
}

impl From<Option<ImagePayload>> for SessionAction {
    fn from(update: Option<ImagePayload>) -> Self {
        match update {
            Some(image) => SessionAction::ImageReady(image),
            None => SessionAction::ImageCleared,
        }
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::EditText(text) => next.input_text = text,
            SessionAction::SetErrorCorrection(level) => next.options.error_correction = level,
            SessionAction::SetMargin(margin) => {
                next.options.margin = QrOptions::clamp_margin(margin)
            }
            SessionAction::SetDark(color) => next.options.dark = color,
            SessionAction::SetLight(color) => next.options.light = color,
            SessionAction::SetWidth(width) => next.options.width = QrOptions::clamp_width(width),
            SessionAction::ToggleOptionsPanel => {
                next.options_panel_visible = !next.options_panel_visible
            }
            SessionAction::ImageReady(image) => next.latest_image = Some(image),
            SessionAction::ImageCleared => next.latest_image = None,
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}
