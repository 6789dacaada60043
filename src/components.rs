//! Yew view components for the QR generator form.
//!
//! Components render from props and report edits through callbacks; the
//! session reducer in the page owns all state.

use crate::config::{DEFAULT_MARGIN, MAX_MARGIN, MAX_WIDTH_PX, MIN_WIDTH_PX, WIDTH_STEP_PX};
use crate::encoder::ImagePayload;
use crate::hooks::use_validated_input;
use crate::options::{ErrorCorrection, QrOptions, Rgba};
use crate::utils::{parse_color, parse_error_correction, parse_width, validate_margin};
use log::warn;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Preview card: the latest image and its download button, or a placeholder.
#[derive(Properties, PartialEq)]
pub struct PreviewProps {
    pub image: Option<ImagePayload>,
    pub ondownload: Callback<MouseEvent>,
}

#[function_component(Preview)]
pub fn preview(props: &PreviewProps) -> Html {
    html! {
        <div class="preview-card">
            <h3>{ "Preview" }</h3>
            <div class="preview-image">
                if let Some(image) = &props.image {
                    <img
                        src={image.data_url()}
                        alt="Generated QR Code"
                        width={image.width().to_string()}
                        height={image.height().to_string()}
                    />
                } else {
                    <div class="preview-placeholder">
                        <p>{ "Enter content to generate QR code" }</p>
                    </div>
                }
            </div>
            if props.image.is_some() {
                <button class="btn-primary" onclick={props.ondownload.clone()}>
                    { "Download PNG" }
                </button>
            }
        </div>
    }
}

/// Slider for the output size in pixels.
#[derive(Properties, PartialEq)]
pub struct SizeSliderProps {
    pub width: u32,
    pub onchange: Callback<u32>,
}

#[function_component(SizeSlider)]
pub fn size_slider(props: &SizeSliderProps) -> Html {
    let oninput = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_width(&input.value()) {
                Ok(width) => onchange.emit(width),
                Err(err) => warn!("Ignoring size input: {}", err),
            }
        })
    };

    html! {
        <div class="form-group">
            <label for="size">{ format!("Size: {}px", props.width) }</label>
            <input type="range"
                id="size"
                min={MIN_WIDTH_PX.to_string()}
                max={MAX_WIDTH_PX.to_string()}
                step={WIDTH_STEP_PX.to_string()}
                value={props.width.to_string()}
                {oninput}
            />
        </div>
    }
}

/// Native color picker bound to an [`Rgba`].
#[derive(Properties, PartialEq)]
pub struct ColorPickerProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: Rgba,
    pub onchange: Callback<Rgba>,
}

#[function_component(ColorPicker)]
pub fn color_picker(props: &ColorPickerProps) -> Html {
    let oninput = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_color(&input.value()) {
                Ok(color) => onchange.emit(color),
                Err(err) => warn!("Ignoring color input: {}", err),
            }
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input type="color"
                id={props.id.clone()}
                value={props.value.to_hex_rgb()}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorCorrectionSelectProps {
    pub value: ErrorCorrection,
    pub onchange: Callback<ErrorCorrection>,
}

#[function_component(ErrorCorrectionSelect)]
pub fn error_correction_select(props: &ErrorCorrectionSelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match parse_error_correction(&select.value()) {
                Ok(level) => onchange.emit(level),
                Err(err) => warn!("Ignoring error correction input: {}", err),
            }
        })
    };

    html! {
        <div class="form-group">
            <label for="error_correction">{ "Error Correction" }</label>
            <select id="error_correction" {onchange}>
                { ErrorCorrection::ALL.iter().map(|level| html! {
                    <option value={level.code()} selected={*level == props.value}>
                        { level.label() }
                    </option>
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Margin in modules, validated on change or Enter.
#[derive(Properties, PartialEq)]
pub struct MarginInputProps {
    pub value: u32,
    pub onchange: Callback<u32>,
}

#[function_component(MarginInput)]
pub fn margin_input(props: &MarginInputProps) -> Html {
    let margin = use_validated_input(
        props.value,
        Rc::new(validate_margin),
        props.onchange.clone(),
    );

    let onkeydown = {
        let on_commit = margin.on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_commit.emit(());
            }
        })
    };

    html! {
        <div class="form-group">
            <label for="margin">{ "Margin (modules)" }</label>
            <input type="number"
                id="margin"
                min="0"
                max={MAX_MARGIN.to_string()}
                value={margin.text.clone()}
                class={if margin.error.is_some() { "invalid" } else { "" }}
                placeholder={DEFAULT_MARGIN.to_string()}
                oninput={margin.on_text_input.clone()}
                onchange={margin.on_commit.reform(|_| ())}
                {onkeydown}
            />
            if let Some(ref err) = margin.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

/// All option controls; each edit is reported through its own callback.
#[derive(Properties, PartialEq)]
pub struct OptionsPanelProps {
    pub options: QrOptions,
    pub on_dark: Callback<Rgba>,
    pub on_light: Callback<Rgba>,
    pub on_width: Callback<u32>,
    pub on_error_correction: Callback<ErrorCorrection>,
    pub on_margin: Callback<u32>,
}

#[function_component(OptionsPanel)]
pub fn options_panel(props: &OptionsPanelProps) -> Html {
    let options = &props.options;
    html! {
        <div class="options-panel">
            <div class="form-row">
                <ColorPicker
                    id="dark_color"
                    label="Foreground"
                    value={options.dark}
                    onchange={props.on_dark.clone()}
                />
                <ColorPicker
                    id="light_color"
                    label="Background"
                    value={options.light}
                    onchange={props.on_light.clone()}
                />
            </div>
            <SizeSlider width={options.width} onchange={props.on_width.clone()} />
            <ErrorCorrectionSelect
                value={options.error_correction}
                onchange={props.on_error_correction.clone()}
            />
            <MarginInput value={options.margin} onchange={props.on_margin.clone()} />
        </div>
    }
}
