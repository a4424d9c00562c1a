// ============================================================================
// ERRORES - Tipo de error común de la app
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Respuesta `{ "error": true, "message": ... }` de la API
    #[error("{0}")]
    Api(String),

    #[error("Halaman {0} tidak ditemukan.")]
    ViewNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Not supported: {0}")]
    Unsupported(String),

    #[error("JS error: {0}")]
    Js(String),
}

impl AppError {
    /// Mensaje para mostrar al usuario (alert / texto inline)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(msg) => msg.clone(),
            AppError::Http { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        AppError::Js(message)
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(format!("Parse error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_not_found_message_matches_404_fragment_text() {
        let err = AppError::ViewNotFound("about".to_string());
        assert_eq!(err.to_string(), "Halaman about tidak ditemukan.");
    }

    #[test]
    fn api_error_shows_server_message_to_user() {
        let err = AppError::Api("Invalid password".to_string());
        assert_eq!(err.user_message(), "Invalid password");
    }

    #[test]
    fn http_error_falls_back_to_display_without_body() {
        let err = AppError::Http { status: 500, message: String::new() };
        assert_eq!(err.user_message(), "HTTP 500: ");

        let err = AppError::Http { status: 401, message: "Unauthorized".to_string() };
        assert_eq!(err.user_message(), "Unauthorized");
    }
}
