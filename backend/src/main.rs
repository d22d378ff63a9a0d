use dotenvy::dotenv;
use axum::{
    routing::get,
    Router,
};
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer, Any};
use tower_http::services::ServeDir;
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;
use axum::handler::Handler;

mod errors;
mod config {
    pub mod app_config;
}
mod handlers {
    pub mod page_handlers;
    pub mod site_handlers;
}
mod models {
    pub mod site_models;
}
mod repositories {
    pub mod content_repository;
}
mod utils {
    pub mod seo;
}

use config::app_config::Config;
use handlers::page_handlers;
use handlers::site_handlers;
use repositories::content_repository::{ContentRepository, FsContentSource, SiteContent};

pub struct AppState {
    config: Config,
    content: SiteContent,
    shell: String,
}

/// Development accepts any origin (trunk serves the frontend on its own
/// port). Otherwise only the public site may call the api from a browser.
fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.is_development() {
        AllowOrigin::from(Any)
    } else {
        match HeaderValue::from_str(&config.public_url) {
            Ok(origin) => AllowOrigin::exact(origin),
            Err(e) => {
                tracing::warn!("PUBLIC_URL is not a valid origin ({}), cross-origin calls disabled", e);
                AllowOrigin::list(Vec::<HeaderValue>::new())
            }
        }
    };
    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::OPTIONS,
        ])
        .allow_origin(origin)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_TYPE])
}

pub fn app(state: Arc<AppState>) -> Router {
    let shell_service = page_handlers::shell.with_state(state.clone());
    let static_files = ServeDir::new(&state.config.static_dir)
        .append_index_html_on_directories(false)
        .fallback(shell_service);

    Router::new()
        .route("/api/health", get(site_handlers::health_check))
        .route("/api/site", get(site_handlers::get_site))
        .route("/api/services", get(site_handlers::get_services))
        .route("/api/contact-buttons", get(site_handlers::get_contact_buttons))
        .route("/api", get(site_handlers::api_not_found))
        .route("/api/", get(site_handlers::api_not_found))
        .route("/api/{*rest}", get(site_handlers::api_not_found))
        .route("/", get(page_handlers::shell))
        .route("/index.html", get(page_handlers::shell))
        .fallback_service(static_files)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(&state.config))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("starting in {} mode", config.environment);

    let content = ContentRepository::load(&FsContentSource::new(&config.content_dir));
    let shell = page_handlers::build_shell(&config, &content)?;

    let addr = config.server_addr;
    let state = Arc::new(AppState {
        config,
        content,
        shell,
    });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::io;
    use tower::ServiceExt;

    use crate::repositories::content_repository::{MockContentSource, SERVICES_FILE};

    pub fn test_config() -> Config {
        Config {
            server_addr: "127.0.0.1:0".parse().unwrap(),
            environment: "test".to_string(),
            content_dir: "does-not-exist".into(),
            static_dir: "does-not-exist".into(),
            public_url: "http://localhost:3000".to_string(),
        }
    }

    pub fn test_state() -> Arc<AppState> {
        test_state_with(test_config())
    }

    pub fn test_state_with(config: Config) -> Arc<AppState> {
        let mut source = MockContentSource::new();
        source.expect_read().returning(|name| match name {
            SERVICES_FILE => Ok(r#"[
                {"id":"c","title":"C","description":"","icon":"","sort_order":3},
                {"id":"a","title":"A","description":"","icon":"","sort_order":1},
                {"id":"b","title":"B","description":"","icon":"","sort_order":2}
            ]"#
            .to_string()),
            _ => Err(io::Error::new(io::ErrorKind::NotFound, "missing")),
        });
        let content = ContentRepository::load(&source);
        let shell = page_handlers::build_shell(&config, &content).unwrap();
        Arc::new(AppState {
            config,
            content,
            shell,
        })
    }

    pub async fn get(state: Arc<AppState>, uri: &str) -> (StatusCode, String) {
        let response = app(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read(response).await
    }

    pub async fn read(response: axum::response::Response) -> (StatusCode, String) {
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}
