//! Browser implementation of the workflow's environment trait.
//!
//! All ambient browser state (user agent, touch points, viewport,
//! share and clipboard entry points) is read here and nowhere else.
//! Presence of `navigator.share` / `navigator.clipboard` is probed by
//! reflection on the JS object, since the generated bindings expose
//! the methods regardless of what the browser actually implements.

use share_core::{EnvFailure, ShareEnv, ShareError, ShareTarget};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomException, HtmlDocument, HtmlTextAreaElement, Navigator, ShareData};

/// The one production [`ShareEnv`]: reads real `web_sys` state.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEnv;

impl BrowserEnv {
    /// Wall-clock milliseconds, for the widget's feedback window.
    pub fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

fn navigator() -> Option<Navigator> {
    web_sys::window().map(|window| window.navigator())
}

fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// Best-effort message for a JS error value.
fn js_message(value: &JsValue) -> String {
    if let Some(exception) = value.dyn_ref::<DomException>() {
        format!("{}: {}", exception.name(), exception.message())
    } else {
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value))
    }
}

fn share_data(target: &ShareTarget) -> ShareData {
    let data = ShareData::new();
    data.set_title(&target.title);
    data.set_text(&target.text);
    data.set_url(&target.url);
    data
}

impl ShareEnv for BrowserEnv {
    fn user_agent(&self) -> String {
        navigator()
            .and_then(|nav| nav.user_agent().ok())
            .unwrap_or_default()
    }

    fn has_touch(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        has_property(window.as_ref(), "ontouchstart")
            || window.navigator().max_touch_points() > 0
    }

    fn viewport_width(&self) -> u32 {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .map(|width| width as u32)
            .unwrap_or(0)
    }

    fn supports_share(&self) -> bool {
        navigator()
            .map(|nav| has_property(nav.as_ref(), "share"))
            .unwrap_or(false)
    }

    fn can_share_url(&self, url: &str) -> Option<bool> {
        let nav = navigator()?;
        if !has_property(nav.as_ref(), "canShare") {
            return None;
        }
        let data = ShareData::new();
        data.set_url(url);
        Some(nav.can_share_with_data(&data))
    }

    fn supports_clipboard(&self) -> bool {
        navigator()
            .map(|nav| has_property(nav.as_ref(), "clipboard"))
            .unwrap_or(false)
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), EnvFailure> {
        let nav = navigator().ok_or_else(|| EnvFailure::new("no window"))?;
        JsFuture::from(nav.clipboard().write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| EnvFailure::new(js_message(&err)))
    }

    async fn legacy_copy(&self, text: &str) -> Result<(), EnvFailure> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| EnvFailure::new("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| EnvFailure::new("no document body"))?;

        let surface: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(|err| EnvFailure::new(js_message(&err)))?
            .dyn_into()
            .map_err(|_| EnvFailure::new("textarea element has unexpected type"))?;
        surface.set_value(text);
        surface
            .set_attribute("style", "position: fixed; top: 0; left: -9999px; opacity: 0")
            .map_err(|err| EnvFailure::new(js_message(&err)))?;
        surface
            .set_attribute("readonly", "")
            .map_err(|err| EnvFailure::new(js_message(&err)))?;

        body.append_child(&surface)
            .map_err(|err| EnvFailure::new(js_message(&err)))?;
        surface.select();
        let copied = document
            .dyn_ref::<HtmlDocument>()
            .map(|doc| doc.exec_command("copy"))
            .unwrap_or_else(|| Err(JsValue::from_str("document does not support execCommand")));
        surface.remove();

        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err(EnvFailure::new("copy command rejected")),
            Err(err) => Err(EnvFailure::new(js_message(&err))),
        }
    }

    async fn native_share(&self, target: &ShareTarget) -> Result<(), ShareError> {
        let nav = navigator().ok_or_else(|| ShareError::Failed("no window".to_string()))?;
        JsFuture::from(nav.share_with_data(&share_data(target)))
            .await
            .map(|_| ())
            .map_err(|err| {
                let name = err
                    .dyn_ref::<DomException>()
                    .map(|exception| exception.name())
                    .unwrap_or_default();
                ShareError::from_exception(&name, js_message(&err))
            })
    }
}
