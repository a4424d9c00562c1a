// ============================================================================
// ADD STORY VIEW - Formulario de nueva historia (setupForm)
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlButtonElement, HtmlInputElement};

use crate::dom::{alert, get_element_by_id, get_typed_by_id, input_value, on_submit, set_hash};
use crate::error::{AppError, AppResult};
use crate::models::route::STORY_LIST_HASH;
use crate::state::AppState;

const FORM_ID: &str = "add-story-form";
const DESCRIPTION_ID: &str = "description";
const PHOTO_ID: &str = "photo";
const LAT_ID: &str = "lat";
const LON_ID: &str = "lon";
const SUBMIT_ID: &str = "submit-story-btn";

/// Límite de la API para la foto (1 MB)
pub const MAX_PHOTO_BYTES: f64 = 1_000_000.0;

/// Coordenada opcional: vacío -> None, fuera de rango -> error
pub fn parse_coordinate(raw: &str, limit: f64, label: &str) -> AppResult<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| AppError::Api(format!("{} tidak valid.", label)))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(AppError::Api(format!("{} di luar jangkauan.", label)));
    }
    Ok(Some(value))
}

fn build_form_data() -> AppResult<FormData> {
    let description = input_value(DESCRIPTION_ID);
    if description.trim().is_empty() {
        return Err(AppError::Api("Deskripsi wajib diisi.".to_string()));
    }

    let photo = get_typed_by_id::<HtmlInputElement>(PHOTO_ID)
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
        .ok_or_else(|| AppError::Api("Foto wajib dipilih.".to_string()))?;
    if photo.size() > MAX_PHOTO_BYTES {
        return Err(AppError::Api("Ukuran foto maksimal 1MB.".to_string()));
    }

    let lat = parse_coordinate(&input_value(LAT_ID), 90.0, "Latitude")?;
    let lon = parse_coordinate(&input_value(LON_ID), 180.0, "Longitude")?;
    if lat.is_some() != lon.is_some() {
        return Err(AppError::Api("Latitude dan longitude harus diisi bersamaan.".to_string()));
    }

    let form = FormData::new()?;
    form.append_with_str("description", description.trim())?;
    form.append_with_blob("photo", &photo)?;
    if let (Some(lat), Some(lon)) = (lat, lon) {
        form.append_with_str("lat", &lat.to_string())?;
        form.append_with_str("lon", &lon.to_string())?;
    }
    Ok(form)
}

fn set_busy(busy: bool) {
    if let Some(button) = get_typed_by_id::<HtmlButtonElement>(SUBMIT_ID) {
        button.set_disabled(busy);
    }
}

async fn post_story(state: &AppState) -> AppResult<()> {
    let token = state
        .auth
        .token()
        .ok_or_else(|| AppError::Api("Silakan login terlebih dahulu.".to_string()))?;
    let form = build_form_data()?;
    state.api.add_story(&token, form).await?;
    Ok(())
}

async fn submit(state: AppState) {
    let result = post_story(&state).await;

    set_busy(false);
    match result {
        Ok(()) => {
            log::info!("✅ [ADD-STORY] Historia publicada");
            alert("Cerita berhasil ditambahkan!");
            set_hash(STORY_LIST_HASH);
        }
        Err(e) => {
            log::error!("❌ [ADD-STORY] {}", e);
            alert(&format!("Gagal menambahkan cerita: {}", e.user_message()));
        }
    }
}

/// `setupForm()`
pub fn wire(state: &AppState) -> AppResult<()> {
    let Some(form) = get_element_by_id(FORM_ID) else {
        log::warn!("⚠️ [ADD-STORY] #{} no existe", FORM_ID);
        return Ok(());
    };

    let state = state.clone();
    on_submit(&form, move || {
        set_busy(true);
        spawn_local(submit(state.clone()));
    })
}
