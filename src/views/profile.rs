// ============================================================================
// PROFILE VIEW - Nombre, logout y toggle de notificaciones push
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlButtonElement};

use crate::dom::{get_element_by_id, on_click, set_display, set_text_content};
use crate::error::AppResult;
use crate::services::auth_service;
use crate::services::notification_service::{is_push_supported, subscribe_to_push, unsubscribe_from_push};
use crate::state::AppState;

const PROCESSING_LABEL: &str = "Memproses...";
const ENABLE_LABEL: &str = "🔔 Aktifkan Notifikasi";
const DISABLE_LABEL: &str = "❌ Nonaktifkan Notifikasi";

const STATUS_UNSUPPORTED: &str = "Browser ini tidak mendukung notifikasi push.";
const STATUS_ACTIVE: &str =
    "✅ Notifikasi aktif. Anda akan menerima pemberitahuan saat ada cerita baru.";
const STATUS_ENABLED: &str = "✅ Notifikasi berhasil diaktifkan!";
const STATUS_DISABLED: &str = "❌ Notifikasi dinonaktifkan.";

struct NotificationControls {
    section: Element,
    enable_btn: HtmlButtonElement,
    disable_btn: HtmlButtonElement,
    status: Element,
}

impl NotificationControls {
    fn find() -> Option<Self> {
        Some(Self {
            section: get_element_by_id("notification-section")?,
            enable_btn: get_element_by_id("enable-notif-btn")?.dyn_into().ok()?,
            disable_btn: get_element_by_id("disable-notif-btn")?.dyn_into().ok()?,
            status: get_element_by_id("notif-status")?,
        })
    }

    /// Mostrar el botón que corresponde al estado de suscripción
    fn show_subscribed(&self, subscribed: bool) {
        let (enable, disable) = if subscribed { ("none", "inline-block") } else { ("inline-block", "none") };
        let _ = set_display(&self.enable_btn, enable);
        let _ = set_display(&self.disable_btn, disable);
    }

    fn set_status(&self, text: &str) {
        set_text_content(&self.status, text);
    }
}

fn set_processing(button: &HtmlButtonElement, processing: bool, idle_label: &str) {
    button.set_disabled(processing);
    button.set_text_content(Some(if processing { PROCESSING_LABEL } else { idle_label }));
}

pub fn wire(state: &AppState) -> AppResult<()> {
    if let (Some(name_el), Some(name)) = (get_element_by_id("profile-name"), state.auth.name()) {
        set_text_content(&name_el, &name);
    }

    if let Some(logout_btn) = get_element_by_id("logout-btn") {
        let state = state.clone();
        on_click(&logout_btn, move |_| auth_service::logout(&state))?;
    }

    match NotificationControls::find() {
        Some(controls) => wire_notifications(state, controls),
        None => Ok(()),
    }
}

fn wire_notifications(state: &AppState, controls: NotificationControls) -> AppResult<()> {
    if !is_push_supported() {
        controls.set_status(STATUS_UNSUPPORTED);
        return Ok(());
    }

    set_display(&controls.section, "block")?;
    let subscribed = state.auth.push_subscribed();
    controls.set_status(if subscribed { STATUS_ACTIVE } else { "" });
    controls.show_subscribed(subscribed);

    let controls = Rc::new(controls);

    {
        let state = state.clone();
        let controls = controls.clone();
        let button = controls.enable_btn.clone();
        on_click(&button, move |_| {
            let state = state.clone();
            let controls = controls.clone();
            spawn_local(async move {
                set_processing(&controls.enable_btn, true, ENABLE_LABEL);
                match subscribe_to_push(&state).await {
                    Ok(()) => {
                        controls.set_status(STATUS_ENABLED);
                        controls.show_subscribed(true);
                    }
                    Err(e) => {
                        log::error!("❌ [PROFILE] Suscripción push: {}", e);
                        let message = e.user_message();
                        let message = if message.is_empty() { "Coba lagi.".to_string() } else { message };
                        controls.set_status(&format!("❌ Gagal: {}", message));
                    }
                }
                set_processing(&controls.enable_btn, false, ENABLE_LABEL);
            });
        })?;
    }

    {
        let state = state.clone();
        let controls = controls.clone();
        let button = controls.disable_btn.clone();
        on_click(&button, move |_| {
            let state = state.clone();
            let controls = controls.clone();
            spawn_local(async move {
                set_processing(&controls.disable_btn, true, DISABLE_LABEL);
                match unsubscribe_from_push(&state).await {
                    Ok(()) => {
                        controls.set_status(STATUS_DISABLED);
                        controls.show_subscribed(false);
                    }
                    Err(e) => {
                        log::error!("❌ [PROFILE] Desuscripción push: {}", e);
                        controls.set_status(&format!("Gagal menonaktifkan: {}", e.user_message()));
                    }
                }
                set_processing(&controls.disable_btn, false, DISABLE_LABEL);
            });
        })?;
    }

    Ok(())
}
