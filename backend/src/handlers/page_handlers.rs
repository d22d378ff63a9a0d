use std::io::ErrorKind;
use std::sync::Arc;
use axum::{
    extract::State,
    response::Html,
};

use crate::AppState;
use crate::config::app_config::Config;
use crate::errors::AppError;
use crate::repositories::content_repository::SiteContent;
use crate::utils::seo;

/// Renders the document every page path answers with: the built index
/// (or a bare shell) with metadata in its head.
pub fn build_shell(config: &Config, content: &SiteContent) -> Result<String, AppError> {
    let index = config.static_dir.join("index.html");
    let template = match std::fs::read_to_string(&index) {
        Ok(template) => Some(template),
        Err(e) => {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!("could not read {}: {}", index.display(), e);
            } else {
                tracing::info!("no built index at {}, using bare shell", index.display());
            }
            None
        }
    };
    let head = seo::head_tags(content, &config.public_url)
        .map_err(|e| AppError::Render(e.to_string()))?;
    Ok(seo::render_shell(template.as_deref(), &head))
}

pub async fn shell(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.shell.clone())
}
