//! AMI Dashboard (browser)
//!
//! Compiles to WebAssembly and drives the dashboard page served by the AMI
//! backend. The page template provides `#clock`, `#calendar` and `#bottom`;
//! this module starts the clock and loads content once the DOM is ready, and
//! exports the functions the page's own scripts call:
//!
//! - `openPopup()` / `removePopup()`
//! - `shrinkBar(seconds)`
//! - `appendChat(html)`
//! - `reload()`
//!
//! They are module exports and are also set on `window` at start-up, so
//! classic inline scripts can call `window.openPopup()` without importing
//! the module.

use ami_dashboard::{popup, Dashboard, DashboardConfig, DashboardError, TrustedHtml};
use std::cell::RefCell;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod dom;
mod logging;
mod platform;
mod transport;

pub use dom::{BrowserDocument, BrowserElement};
pub use platform::BrowserPlatform;
pub use transport::GlooTransport;

thread_local! {
    static DASHBOARD: RefCell<Option<Dashboard<BrowserPlatform>>> = const { RefCell::new(None) };
}

fn dashboard() -> Result<Dashboard<BrowserPlatform>, JsValue> {
    DASHBOARD
        .with(|slot| slot.borrow().clone())
        .ok_or_else(|| JsValue::from_str("dashboard is not running"))
}

fn to_js(error: DashboardError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn expose<T>(window: &web_sys::Window, name: &str, closure: Closure<T>) -> Result<(), JsValue>
where
    T: ?Sized + WasmClosure,
{
    js_sys::Reflect::set(window, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}

/// Set the exported functions as globals on `window`
pub fn install_globals() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    expose(
        &window,
        "openPopup",
        Closure::wrap(Box::new(open_popup) as Box<dyn Fn() -> Result<(), JsValue>>),
    )?;
    expose(
        &window,
        "removePopup",
        Closure::wrap(Box::new(remove_popup) as Box<dyn Fn() -> Result<(), JsValue>>),
    )?;
    expose(
        &window,
        "shrinkBar",
        Closure::wrap(Box::new(shrink_bar) as Box<dyn Fn(f64) -> Result<(), JsValue>>),
    )?;
    expose(
        &window,
        "appendChat",
        Closure::wrap(
            Box::new(|text: String| append_chat(&text)) as Box<dyn Fn(String) -> Result<(), JsValue>>
        ),
    )?;
    expose(
        &window,
        "reload",
        Closure::wrap(Box::new(reload) as Box<dyn Fn() -> Result<(), JsValue>>),
    )?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = DashboardConfig::browser();
    logging::init(&config.logging);

    let document = BrowserDocument::current().ok_or_else(|| JsValue::from_str("no document"))?;
    let platform = BrowserPlatform::new(
        document.clone(),
        GlooTransport::new(&config.server.base_url),
    );
    let dashboard = Dashboard::new(platform, config);
    DASHBOARD.with(|slot| *slot.borrow_mut() = Some(dashboard.clone()));
    install_globals()?;

    // The module may finish loading after DOMContentLoaded has already fired
    if document.is_loading() {
        let on_ready = Closure::wrap(Box::new(move |_: web_sys::Event| {
            dashboard.start();
        }) as Box<dyn FnMut(web_sys::Event)>);
        document
            .inner()
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        dashboard.start();
    }

    Ok(())
}

#[wasm_bindgen(js_name = openPopup)]
pub fn open_popup() -> Result<(), JsValue> {
    dashboard()?.open_popup().map_err(to_js)
}

#[wasm_bindgen(js_name = removePopup)]
pub fn remove_popup() -> Result<(), JsValue> {
    dashboard()?.remove_popup();
    Ok(())
}

/// Start the countdown; the popup closes after `duration` seconds
#[wasm_bindgen(js_name = shrinkBar)]
pub fn shrink_bar(duration: f64) -> Result<(), JsValue> {
    let duration = popup::countdown(duration).map_err(to_js)?;
    dashboard()?.shrink_bar(duration).map_err(to_js)
}

/// Append `text` (markup) to the open popup, if any
#[wasm_bindgen(js_name = appendChat)]
pub fn append_chat(text: &str) -> Result<(), JsValue> {
    dashboard()?
        .append_chat(&TrustedHtml::new(text))
        .map(|_| ())
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn reload() -> Result<(), JsValue> {
    dashboard()?.reload();
    Ok(())
}
