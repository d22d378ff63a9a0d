use gloo_net::http::Request;
use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::content::{ContactButtons, Service, SiteBundle, SiteText};

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = format!("{}{}", get_backend_url(), path);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("request to {} failed: {}", url, e))?;
    if !response.ok() {
        return Err(format!("{} answered {}", url, response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("{} returned invalid json: {}", url, e))
}

/// Loads each configuration part on its own; a failed part keeps its default.
/// The flag is true when every part came from the server.
pub async fn load_site_bundle() -> (SiteBundle, bool) {
    let mut bundle = SiteBundle::default();
    let mut complete = true;

    match fetch_json::<SiteText>("/api/site").await {
        Ok(site) => bundle.site = site,
        Err(e) => {
            warn!("using default site text: {}", e);
            complete = false;
        }
    }
    match fetch_json::<Vec<Service>>("/api/services").await {
        Ok(services) => bundle.services = services,
        Err(e) => {
            warn!("using default services: {}", e);
            complete = false;
        }
    }
    match fetch_json::<ContactButtons>("/api/contact-buttons").await {
        Ok(buttons) => bundle.contact_buttons = buttons,
        Err(e) => {
            warn!("using default contact buttons: {}", e);
            complete = false;
        }
    }

    if complete {
        info!("site configuration loaded");
    }
    (bundle, complete)
}
