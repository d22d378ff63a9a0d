use log::{debug, warn};
use web_sys::window;

use crate::content::{ContactChannel, DEFAULT_WHATSAPP_GREETING};

/// Where contact actions send the browser.
pub trait Navigator {
    /// Replace the current document location.
    fn assign(&self, url: &str);
    /// Open the url in a new browsing context.
    fn open_new(&self, url: &str);
}

#[derive(Clone, Copy, Default, PartialEq)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn assign(&self, url: &str) {
        if let Some(window) = window() {
            if window.location().set_href(url).is_err() {
                warn!("navigation to {} refused", url);
            }
        }
    }

    fn open_new(&self, url: &str) {
        if let Some(window) = window() {
            if window.open_with_url_and_target(url, "_blank").is_err() {
                warn!("popup for {} blocked", url);
            }
        }
    }
}

pub fn tel_uri(channel: &ContactChannel) -> Option<String> {
    if !channel.enabled {
        return None;
    }
    let number = channel.number_or_address.trim();
    if number.is_empty() {
        return None;
    }
    Some(format!("tel:{}", number))
}

pub fn whatsapp_url(channel: &ContactChannel) -> Option<String> {
    if !channel.enabled {
        return None;
    }
    let digits: String = channel
        .number_or_address
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    let message = channel
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_WHATSAPP_GREETING);
    Some(format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(message)
    ))
}

/// Returns whether a navigation happened.
pub fn call_phone(channel: &ContactChannel, navigator: &dyn Navigator) -> bool {
    match tel_uri(channel) {
        Some(uri) => {
            navigator.assign(&uri);
            true
        }
        None => {
            debug!("phone channel disabled or empty, ignoring");
            false
        }
    }
}

/// Returns whether a new context was opened.
pub fn open_whatsapp(channel: &ContactChannel, navigator: &dyn Navigator) -> bool {
    match whatsapp_url(channel) {
        Some(url) => {
            navigator.open_new(&url);
            true
        }
        None => {
            debug!("whatsapp channel disabled or empty, ignoring");
            false
        }
    }
}
