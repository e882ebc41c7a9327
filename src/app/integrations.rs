//! Third-party collaborators: the consent widget and the ad slot.
//!
//! Both are best-effort. Failures land in the log as diagnostics and are
//! never surfaced to the user.

use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

const AD_CLIENT: &str = "ca-pub-7439745986350224";
const AD_SLOT: &str = "9183746521";

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("consent panel unavailable: {0}")]
    Consent(String),
    #[error("ad slot registration failed: {0}")]
    AdQueue(String),
}

fn js_err(value: JsValue) -> String {
    format!("{value:?}")
}

/// Capability for opening the cookie-consent preferences dialog. Injected
/// via context so the rest of the app never touches the global handle.
pub trait ConsentPanel: Send + Sync {
    fn reveal(&self) -> Result<(), IntegrationError>;
}

/// Klaro exposes a global `show(config, modal)`: the first argument is
/// unused when the script loaded its own config, the second forces display.
pub struct KlaroPanel;

impl ConsentPanel for KlaroPanel {
    fn reveal(&self) -> Result<(), IntegrationError> {
        let window = window();
        let klaro = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("klaro"))
            .map_err(|e| IntegrationError::Consent(js_err(e)))?;
        if klaro.is_undefined() {
            return Err(IntegrationError::Consent(
                "window.klaro is not loaded".to_string(),
            ));
        }
        let show = js_sys::Reflect::get(&klaro, &JsValue::from_str("show"))
            .map_err(|e| IntegrationError::Consent(js_err(e)))?;
        let show: js_sys::Function = show
            .dyn_into()
            .map_err(|_| IntegrationError::Consent("klaro.show is not callable".to_string()))?;
        show.call2(&klaro, &JsValue::UNDEFINED, &JsValue::TRUE)
            .map_err(|e| IntegrationError::Consent(js_err(e)))?;
        Ok(())
    }
}

/// Passive ad placeholder, registered with the third-party queue once per
/// page load.
#[component]
pub fn AdSlot() -> impl IntoView {
    Effect::new(move |_| {
        if let Err(err) = register_ad_slot() {
            log::error!("{err}");
        }
    });

    view! {
        <ins
            class="adsbygoogle ad-slot"
            style="display:block"
            data-ad-client=AD_CLIENT
            data-ad-slot=AD_SLOT
            data-ad-format="auto"
            data-full-width-responsive="true"
        ></ins>
    }
}

fn register_ad_slot() -> Result<(), IntegrationError> {
    let window = window();
    let key = JsValue::from_str("adsbygoogle");
    let queue = js_sys::Reflect::get(window.as_ref(), &key)
        .map_err(|e| IntegrationError::AdQueue(js_err(e)))?;
    let queue: js_sys::Array = if queue.is_undefined() {
        let created = js_sys::Array::new();
        js_sys::Reflect::set(window.as_ref(), &key, created.as_ref())
            .map_err(|e| IntegrationError::AdQueue(js_err(e)))?;
        created
    } else {
        queue
            .dyn_into()
            .map_err(|_| IntegrationError::AdQueue("adsbygoogle is not an array".to_string()))?
    };
    queue.push(&js_sys::Object::new());
    Ok(())
}
