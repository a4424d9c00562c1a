// ============================================================================
// APP - Arranque: navegación + router + service worker
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::AppConfig;
use crate::dom::get_element_by_id;
use crate::router::{init_router, setup_navigation};
use crate::services::notification_service::register_service_worker;
use crate::state::AppState;
use crate::utils::constants::MAIN_CONTENT_ID;

/// Aplicación principal
pub struct App {
    state: AppState,
}

impl App {
    /// Crear nueva aplicación
    pub fn new(config: AppConfig) -> Result<Self, JsValue> {
        if get_element_by_id(MAIN_CONTENT_ID).is_none() {
            return Err(JsValue::from_str("No #main-content element found"));
        }

        Ok(Self {
            state: AppState::new(config),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Enlazar layout y cargar la ruta actual
    pub fn start(&self) -> Result<(), JsValue> {
        setup_navigation()?;
        init_router(&self.state)?;

        let sw_path = self.state.config.service_worker_path.clone();
        spawn_local(async move {
            if let Err(e) = register_service_worker(&sw_path).await {
                log::warn!("⚠️ [APP] Service worker no registrado: {}", e);
            }
        });

        log::info!(
            "✅ [APP] Router listo (autenticado: {})",
            self.state.auth.is_authenticated()
        );
        Ok(())
    }
}
