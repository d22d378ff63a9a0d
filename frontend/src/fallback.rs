use log::error;
use maud::html;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::components::theme::THEME_KEY;
use crate::storage::{BrowserStore, KeyValueStore};
use crate::widget::position::POSITION_KEY;

pub fn fallback_markup(detail: Option<&str>) -> String {
    html! {
        div class="error-screen" {
            h1 { "Something went wrong" }
            p { "حدث خطأ غير متوقع. Please reload the page or reset your saved preferences." }
            @if let Some(detail) = detail {
                pre class="error-detail" { (detail) }
            }
            div class="error-actions" {
                button id="error-reload" { "Reload" }
                button id="error-reset" { "Reset" }
            }
        }
    }
    .into_string()
}

fn bind_click(id: &str, action: impl FnMut() + 'static) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let callback = Closure::wrap(Box::new(action) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
    // The page is gone at this point; the listener lives until reload.
    callback.forget();
}

fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}

fn show_fallback(message: String) {
    let detail = cfg!(debug_assertions).then_some(message);
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    body.set_inner_html(&fallback_markup(detail.as_deref()));
    bind_click("error-reload", reload);
    bind_click("error-reset", || {
        let store = BrowserStore;
        for key in [POSITION_KEY, THEME_KEY] {
            let _ = store.remove(key);
        }
        reload();
    });
}

/// Replaces the page with an error screen on any panic.
pub fn install_panic_fallback() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        let message = info.to_string();
        error!("render failure: {}", message);
        show_fallback(message);
    }));
}
