//! Main module for the QR Studio application using Yew.
//! Wires the session reducer, the debounced encoder and the view components.

use log::{error, info};
use qr_studio::{
    components::{OptionsPanel, Preview},
    config::LOG_LEVEL,
    export,
    hooks::use_debounced_encoder,
    ErrorCorrection, ImagePayload, Rgba, Session, SessionAction,
};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

/// Callback that wraps its value into a session action and dispatches it.
fn dispatch_with<T: 'static>(
    session: &UseReducerHandle<Session>,
    make: fn(T) -> SessionAction,
) -> Callback<T> {
    let session = session.clone();
    Callback::from(move |value| session.dispatch(make(value)))
}

/// Generator form: text input, options panel and preview.
#[function_component(QrGenerator)]
fn qr_generator() -> Html {
    let session = use_reducer(Session::default);

    {
        let dispatcher = session.dispatcher();
        use_debounced_encoder(
            session.input_text.clone(),
            session.options.clone(),
            Callback::from(move |update: Option<ImagePayload>| {
                dispatcher.dispatch(SessionAction::from(update))
            }),
        );
    }

    let on_text_input = {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            session.dispatch(SessionAction::EditText(input.value()));
        })
    };

    let toggle_options = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::ToggleOptionsPanel))
    };

    let on_download = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(download) = export::prepare(session.latest_image.as_ref()) else {
                return;
            };
            match export::trigger(&download) {
                Ok(()) => info!("Saved {}", download.filename),
                Err(e) => error!("Error downloading QR code: {:?}", e),
            }
        })
    };

    let on_dark: Callback<Rgba> = dispatch_with(&session, SessionAction::SetDark);
    let on_light: Callback<Rgba> = dispatch_with(&session, SessionAction::SetLight);
    let on_width: Callback<u32> = dispatch_with(&session, SessionAction::SetWidth);
    let on_margin: Callback<u32> = dispatch_with(&session, SessionAction::SetMargin);
    let on_error_correction: Callback<ErrorCorrection> =
        dispatch_with(&session, SessionAction::SetErrorCorrection);

    html! {
        <div class="generator">
            <div class="generator-header">
                <h2>{ "Generate QR Code" }</h2>
                <p>{ "Enter text or URL to create a QR code" }</p>
            </div>

            <div class="generator-grid">
                <div class="input-card">
                    <div class="form-group">
                        <label for="content">{ "Text or URL" }</label>
                        <textarea
                            id="content"
                            rows="4"
                            placeholder="Enter text, URL, or any content..."
                            value={session.input_text.clone()}
                            oninput={on_text_input}
                        />
                    </div>

                    <button class="btn-secondary small" onclick={toggle_options}>
                        { "Options" }
                    </button>

                    if session.options_panel_visible {
                        <OptionsPanel
                            options={session.options.clone()}
                            {on_dark}
                            {on_light}
                            {on_width}
                            {on_error_correction}
                            {on_margin}
                        />
                    }
                </div>

                <Preview image={session.latest_image.clone()} ondownload={on_download} />
            </div>
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <main class="container">
            <QrGenerator />
        </main>
    }
}

/// Entry point: installs panic/log hooks and mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(LOG_LEVEL) {
        web_sys::console::error_1(&e.to_string().into());
    }
    yew::Renderer::<App>::new().render();
}
