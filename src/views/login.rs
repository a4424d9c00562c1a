// ============================================================================
// LOGIN VIEW - Formulario de login
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::dom::{alert, get_element_by_id, input_value, on_submit, set_hash};
use crate::error::AppResult;
use crate::models::route::STORY_LIST_HASH;
use crate::services::auth_service;
use crate::state::AppState;

/// Destino tras login: el hash pendiente o la lista de historias
pub fn post_login_target(pending: Option<String>) -> String {
    pending.unwrap_or_else(|| STORY_LIST_HASH.to_string())
}

pub fn wire(state: &AppState) -> AppResult<()> {
    let Some(form) = get_element_by_id("login-form") else {
        return Ok(());
    };

    let state = state.clone();
    on_submit(&form, move || {
        let email = input_value("email");
        let password = input_value("password");
        let state = state.clone();

        spawn_local(async move {
            match auth_service::login(&state, &email, &password).await {
                Ok(_) => {
                    let target = post_login_target(state.router.take_redirect());
                    log::info!("➡️ [LOGIN] Redirigiendo a {}", target);
                    set_hash(&target);
                }
                Err(e) => {
                    log::error!("❌ [LOGIN] {}", e);
                    alert(&format!("Login gagal: {}", e.user_message()));
                }
            }
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_redirect_wins_over_default() {
        assert_eq!(post_login_target(Some("#/profile".to_string())), "#/profile");
        assert_eq!(post_login_target(None), "#/story-list");
    }
}
