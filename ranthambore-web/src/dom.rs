//! Browser helpers. Every accessor returns `Option`/`Result` so callers
//! can no-op when a target is missing.
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

#[must_use]
pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Milliseconds since the epoch from the JS clock.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Today's local date as `YYYY-MM-DD`, for `min` attributes on date
/// inputs. Empty off the browser.
#[must_use]
pub fn today_iso() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Open an outbound link (WhatsApp, `tel:`, `mailto:`) in a new tab.
///
/// # Errors
/// Returns the browser error if the window cannot open the URL.
pub fn open_url(url: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    win.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

/// Blocking confirmation prompt; `false` when no window is available.
#[must_use]
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn print_page() {
    if let Some(win) = window()
        && let Err(err) = win.print()
    {
        console_error(&js_error_message(&err));
    }
}

/// Offer `text` as a plain-text file download via a data URL.
///
/// # Errors
/// Returns an error if the document or the temporary anchor is unavailable.
pub fn download_text(filename: &str, text: &str) -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("document body unavailable"))?;
    let href = format!(
        "data:text/plain;charset=utf-8,{}",
        String::from(js_sys::encode_uri_component(text))
    );
    let anchor = doc
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&href);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

/// Copy text to the clipboard, resolving once the browser accepts it.
///
/// # Errors
/// Returns an error if the clipboard API rejects the write.
#[allow(clippy::future_not_send)]
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let promise = win.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}
