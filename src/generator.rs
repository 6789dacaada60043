//! Debounced encoder call.
//!
//! Every change to the input text or options goes through
//! [`Generator::request`]. Whitespace-only text clears the preview at once;
//! anything else is encoded once the input has been quiet for the configured
//! interval. Only the last request of a burst reaches the encoder.
//!
//! Encoder failures are logged and swallowed: the preview keeps whatever it
//! showed before, and the next edit naturally retries.

use crate::encoder::{Encoder, ImagePayload};
use crate::options::QrOptions;
use crate::scheduler::Scheduler;
use log::{debug, error};
use std::rc::Rc;
use yew::Callback;

pub struct Generator<E, S: Scheduler> {
    encoder: Rc<E>,
    scheduler: S,
    quiet_ms: u32,
    /// `Some(image)` after a successful encode, `None` when the text is cleared.
    on_update: Callback<Option<ImagePayload>>,
    pending: Option<S::Handle>,
}

impl<E: Encoder + 'static, S: Scheduler> Generator<E, S> {
    pub fn new(
        encoder: E,
        scheduler: S,
        quiet_ms: u32,
        on_update: Callback<Option<ImagePayload>>,
    ) -> Self {
        Self {
            encoder: Rc::new(encoder),
            scheduler,
            quiet_ms,
            on_update,
            pending: None,
        }
    }

    /// Cancel any scheduled encode and react to the new state.
    pub fn request(&mut self, text: &str, options: &QrOptions) {
        // Dropping the old handle cancels its timer.
        self.pending = None;

        if text.trim().is_empty() {
            self.on_update.emit(None);
            return;
        }

        let encoder = Rc::clone(&self.encoder);
        let on_update = self.on_update.clone();
        let content = text.to_owned();
        let options = options.clone();
        let handle = self.scheduler.schedule(
            self.quiet_ms,
            Box::new(move || match encoder.encode(&content, &options) {
                Ok(image) => {
                    debug!(
                        "Encoded {} bytes of content into {}x{} PNG",
                        content.len(),
                        image.width(),
                        image.height()
                    );
                    on_update.emit(Some(image));
                }
                Err(e) => error!("Error generating QR code: {}", e),
            }),
        );
        self.pending = Some(handle);
    }
}
