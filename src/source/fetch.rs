//! Fetched-document adapter: one cache-bypassing same-origin GET of the
//! schedule page, parsed into a detached `Document`.
use js_sys::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, DomParser, Request, RequestCache, RequestInit, Response, SupportedType};

/// Well-known location of the full schedule page, used when the current
/// document carries no schedule markup of its own.
pub const SCHEDULE_PATH: &str = "programma.html";

pub async fn fetch_schedule_document() -> Result<Document, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from(Error::new("no window")))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(SCHEDULE_PATH, &opts)?;

    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response.dyn_into()?;
    if !response.ok() {
        return Err(Error::new(&format!(
            "schedule fetch returned status {}",
            response.status()
        ))
        .into());
    }

    let body = JsFuture::from(response.text()?).await?;
    let body = body
        .as_string()
        .ok_or_else(|| JsValue::from(Error::new("schedule response body is not text")))?;

    let parser = DomParser::new()?;
    parser.parse_from_string(&body, SupportedType::TextHtml)
}
