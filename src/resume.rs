use crate::telemetry::{log_event, LogLevel};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use js_sys::{Array, Uint8Array};
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const RESUME_MIME_TYPE: &str = "application/pdf";
const OBJECT_URL_REVOKE_DELAY_MS: u32 = 1_000;

/// Downloads the resume as a file, opening it in a new tab when any step of
/// the download fails.
pub fn download_resume(path: String, file_name: String, log_level: LogLevel) {
    spawn_local(async move {
        if let Err(reason) = save_as_file(&path, &file_name).await {
            log_event(
                log_level,
                LogLevel::Warn,
                "resume_download_fallback",
                json!({ "path": path, "reason": reason }),
            );
            open_in_new_tab(&path);
        }
    });
}

async fn save_as_file(path: &str, file_name: &str) -> Result<(), &'static str> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|_| "request failed")?;

    if !response.ok() {
        return Err("received non-success response");
    }

    let bytes = response
        .binary()
        .await
        .map_err(|_| "failed reading response body")?;

    let parts = Array::of1(&Uint8Array::from(bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(RESUME_MIME_TYPE);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "failed building blob")?;
    let object_url = Url::create_object_url_with_blob(&blob).map_err(|_| "failed creating object url")?;

    let anchor = window()
        .and_then(|w| w.document())
        .and_then(|d| d.create_element("a").ok())
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok());

    let Some(anchor) = anchor else {
        let _ = Url::revoke_object_url(&object_url);
        return Err("document unavailable");
    };

    anchor.set_href(&object_url);
    anchor.set_download(file_name);
    anchor.click();

    Timeout::new(OBJECT_URL_REVOKE_DELAY_MS, move || {
        let _ = Url::revoke_object_url(&object_url);
    })
    .forget();

    Ok(())
}

fn open_in_new_tab(path: &str) {
    if let Some(win) = window() {
        let _ = win.open_with_url_and_target(path, "_blank");
    }
}
