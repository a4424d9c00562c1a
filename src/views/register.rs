// ============================================================================
// REGISTER VIEW - Formulario de registro
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::dom::{alert, get_element_by_id, input_value, on_submit, set_hash};
use crate::error::AppResult;
use crate::models::route::LOGIN_HASH;
use crate::services::auth_service;
use crate::state::AppState;

pub fn wire(state: &AppState) -> AppResult<()> {
    let Some(form) = get_element_by_id("register-form") else {
        return Ok(());
    };

    let state = state.clone();
    on_submit(&form, move || {
        let name = input_value("name");
        let email = input_value("reg-email");
        let password = input_value("reg-password");
        let state = state.clone();

        spawn_local(async move {
            match auth_service::register(&state, &name, &email, &password).await {
                Ok(()) => {
                    alert("Pendaftaran berhasil! Silakan login.");
                    set_hash(LOGIN_HASH);
                }
                Err(e) => {
                    log::error!("❌ [REGISTER] {}", e);
                    alert(&format!("Pendaftaran gagal: {}", e.user_message()));
                }
            }
        });
    })
}
