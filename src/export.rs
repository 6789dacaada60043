//! Export action: saves the current preview as a PNG file.

use crate::config::DOWNLOAD_FILENAME;
use crate::encoder::ImagePayload;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

/// A ready-to-save file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: &'static str,
    pub href: String,
}

/// The download for the current image, or `None` when there is nothing to save.
pub fn prepare(image: Option<&ImagePayload>) -> Option<Download> {
    image.map(|image| Download {
        filename: DOWNLOAD_FILENAME,
        href: image.data_url(),
    })
}

/// Click a detached `<a download>` pointing at the payload.
pub fn trigger(download: &Download) -> Result<(), JsValue> {
    let link: HtmlAnchorElement = gloo_utils::document()
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    link.set_download(download.filename);
    link.set_href(&download.href);
    link.click();
    Ok(())
}
