// ============================================================================
// DICODING STORY - FRONTEND (RUST PURO + WASM)
// ============================================================================
// - Router: hash -> fragmento HTML en views/ -> wiring de la vista
// - Views: listeners por vista (lista, formulario, login, registro, perfil)
// - Services: API de historias, auth, push, carga de fragmentos
// - State: localStorage (token/name/pushSubscribed) + estado de navegación
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod maps;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::AppConfig;

// Instancia global: el router vive toda la página
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("🚀 Dicoding Story - Rust + WASM");

    let already_started = APP.with(|cell| cell.borrow().is_some());
    if already_started {
        log::warn!("⚠️ App ya iniciada, ignorando");
        return Ok(());
    }

    // Páginas sin layout (p.ej. el runner de tests) no arrancan el router
    let app = match App::new(AppConfig::default()) {
        Ok(app) => app,
        Err(e) => {
            log::error!("❌ Elemen #main-content tidak ditemukan: {:?}", e);
            return Ok(());
        }
    };
    app.start()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Forzar re-evaluación de la ruta actual (llamable desde JavaScript)
#[wasm_bindgen]
pub fn reload_current_view() {
    APP.with(|cell| {
        if let Some(ref app) = *cell.borrow() {
            router::handle_hash_change(app.state());
        } else {
            log::warn!("⚠️ App no está inicializada");
        }
    });
}
