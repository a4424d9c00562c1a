// ============================================================================
// MAPS - FFI al glue JS del mapa (Leaflet en la página)
// ============================================================================
// Solo wrappers: el JS define `initStoryMap` y `addStoryMarkers` en window.
// Si no existen se registra el error y la vista sigue funcionando.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::config::MapConfig;
use crate::dom::get_element_by_id;
use crate::models::story::{markers_for, Story};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = initStoryMap)]
    fn init_story_map(container_id: &str, lat: f64, lng: f64, zoom: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = addStoryMarkers)]
    fn add_story_markers(markers_json: &str) -> Result<(), JsValue>;
}

/// `initMap()`: inicializar el mapa en el contenedor configurado
pub fn init_map(config: &MapConfig) {
    if get_element_by_id(&config.container_id).is_none() {
        log::debug!("🗺️ [MAP] #{} no está en la vista", config.container_id);
        return;
    }

    match init_story_map(
        &config.container_id,
        config.default_center_lat,
        config.default_center_lng,
        config.default_zoom,
    ) {
        Ok(()) => log::info!("🗺️ [MAP] Mapa inicializado"),
        Err(e) => log::error!("❌ [MAP] initStoryMap falló: {:?}", e),
    }
}

/// Pintar en el mapa las historias que tienen coordenadas
pub fn show_story_markers(stories: &[Story]) {
    let markers = markers_for(stories);
    let json = match serde_json::to_string(&markers) {
        Ok(json) => json,
        Err(e) => {
            log::error!("❌ [MAP] Error serializando marcadores: {}", e);
            return;
        }
    };

    if let Err(e) = add_story_markers(&json) {
        log::warn!("⚠️ [MAP] addStoryMarkers no disponible: {:?}", e);
    }
}
