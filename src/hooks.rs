use crate::config::DEBOUNCE_MS;
use crate::encoder::{ImagePayload, QrEncoder};
use crate::generator::Generator;
use crate::options::QrOptions;
use crate::scheduler::TimeoutScheduler;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for a validated input field.
#[derive(Clone)]
pub struct ValidatedInput {
    /// The current text content of the input field.
    pub text: String,
    /// An optional error message if validation failed.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event. Updates the internal text state.
    pub on_text_input: Callback<InputEvent>,
    /// Callback to trigger parsing and validation of the current text.
    /// Typically used with `onchange` or after an Enter key press on the text input.
    pub on_commit: Callback<()>,
}

/// Custom hook to manage state for a validated input field.
///
/// `on_valid` receives every successfully parsed value.
#[hook]
pub fn use_validated_input<T>(
    initial_value: T,
    parse_and_validate: Rc<dyn Fn(&str) -> Result<T, String>>,
    on_valid: Callback<T>,
) -> ValidatedInput
where
    T: Clone + PartialEq + std::fmt::Display + 'static,
{
    let text_state_handle: UseStateHandle<String> = use_state(|| initial_value.to_string());
    let error_state_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let on_commit = {
        let current_text_handle = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        Callback::from(move |_: ()| match parse_and_validate(&(*current_text_handle)) {
            Ok(parsed_val) => {
                current_text_handle.set(parsed_val.to_string()); // Update text to canonical form
                error_setter.set(None);
                on_valid.emit(parsed_val);
            }
            Err(err_msg) => error_setter.set(Some(err_msg)),
        })
    };

    ValidatedInput {
        text: (*text_state_handle).clone(),
        error: (*error_state_handle).clone(),
        on_text_input,
        on_commit,
    }
}

/// Re-encode the preview whenever `text` or `options` change.
///
/// One generator lives per mounted component; unmounting drops it, which
/// cancels any pending timer.
#[hook]
pub fn use_debounced_encoder(
    text: String,
    options: QrOptions,
    on_update: Callback<Option<ImagePayload>>,
) {
    let generator = use_mut_ref(|| {
        Generator::new(QrEncoder, TimeoutScheduler, DEBOUNCE_MS, on_update)
    });

    use_effect_with((text, options), move |(text, options)| {
        generator.borrow_mut().request(text, options);
    });
}
