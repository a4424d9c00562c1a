use gloo_net::http::Request;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Descargar el fragmento HTML de una vista
pub async fn fetch_view(config: &AppConfig, view_name: &str) -> AppResult<String> {
    let path = config.view_path(view_name);
    log::debug!("📄 [VIEW] GET {}", path);

    let response = Request::get(&path).send().await?;
    if !response.ok() {
        log::warn!("⚠️ [VIEW] {} respondió HTTP {}", path, response.status());
        return Err(AppError::ViewNotFound(view_name.to_string()));
    }

    Ok(response.text().await?)
}
