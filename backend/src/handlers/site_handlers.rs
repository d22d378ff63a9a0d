use std::sync::Arc;
use axum::{
    Json,
    extract::State,
};

use crate::AppState;
use crate::errors::AppError;
use crate::models::site_models::{ContactButtons, Service, SiteText};

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn get_site(State(state): State<Arc<AppState>>) -> Json<SiteText> {
    Json(state.content.site.clone())
}

pub async fn get_services(State(state): State<Arc<AppState>>) -> Json<Vec<Service>> {
    Json(state.content.services.clone())
}

pub async fn get_contact_buttons(State(state): State<Arc<AppState>>) -> Json<ContactButtons> {
    Json(state.content.contact_buttons.clone())
}

pub async fn api_not_found() -> AppError {
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get, test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = get(test_state(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn services_come_back_sorted() {
        let state = test_state();
        let (status, body) = get(state, "/api/services").await;
        assert_eq!(status, StatusCode::OK);
        let services: Vec<Service> = serde_json::from_str(&body).unwrap();
        let orders: Vec<i32> = services.iter().map(|s| s.sort_order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn site_and_contact_buttons_are_served() {
        let (status, body) = get(test_state(), "/api/site").await;
        assert_eq!(status, StatusCode::OK);
        let site: SiteText = serde_json::from_str(&body).unwrap();
        assert_eq!(site.phone, "+966501234567");

        let (status, body) = get(test_state(), "/api/contact-buttons").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["whatsapp"]["number"], "966501234567");
        assert!(json["phone"].get("message").is_none());
    }

    #[tokio::test]
    async fn unknown_api_path_is_json_404() {
        let (status, body) = get(test_state(), "/api/nope/deeper").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "not found");
    }

    #[tokio::test]
    async fn bare_api_prefix_is_json_404() {
        for uri in ["/api", "/api/"] {
            let (status, body) = get(test_state(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            let json: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(json["error"], "not found");
        }
    }
}
