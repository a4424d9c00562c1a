// ============================================================================
// NOTIFICATION SERVICE - Web Push (suscribir / desuscribir)
// ============================================================================

use js_sys::{Object, Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{PushSubscription, PushSubscriptionOptionsInit, ServiceWorkerRegistration};

use crate::dom::window;
use crate::error::{AppError, AppResult};
use crate::models::push::decode_vapid_key;
use crate::models::PushSubscriptionJson;
use crate::state::AppState;

/// `'serviceWorker' in navigator && 'PushManager' in window`
pub fn is_push_supported() -> bool {
    let Some(win) = window() else {
        return false;
    };
    let has_sw = Reflect::has(&win.navigator(), &JsValue::from_str("serviceWorker")).unwrap_or(false);
    let has_push = Reflect::has(&win, &JsValue::from_str("PushManager")).unwrap_or(false);
    has_sw && has_push
}

/// Registrar el service worker al arrancar (si el navegador lo soporta)
pub async fn register_service_worker(script_url: &str) -> AppResult<()> {
    let win = window().ok_or_else(|| AppError::Dom("No window".to_string()))?;
    if !Reflect::has(&win.navigator(), &JsValue::from_str("serviceWorker")).unwrap_or(false) {
        return Err(AppError::Unsupported("serviceWorker".to_string()));
    }

    JsFuture::from(win.navigator().service_worker().register(script_url)).await?;
    log::info!("🛠️ [PUSH] Service worker registrado: {}", script_url);
    Ok(())
}

async fn ready_registration() -> AppResult<ServiceWorkerRegistration> {
    if !is_push_supported() {
        return Err(AppError::Unsupported("Push API".to_string()));
    }
    let win = window().ok_or_else(|| AppError::Dom("No window".to_string()))?;
    let ready = win.navigator().service_worker().ready()?;
    let registration = JsFuture::from(ready).await?;
    registration
        .dyn_into::<ServiceWorkerRegistration>()
        .map_err(AppError::from)
}

fn subscription_json(subscription: &PushSubscription) -> AppResult<PushSubscriptionJson> {
    let json: String = js_sys::JSON::stringify(subscription)?.into();
    Ok(serde_json::from_str(&json)?)
}

fn require_token(state: &AppState) -> AppResult<String> {
    state
        .auth
        .token()
        .ok_or_else(|| AppError::Api("Silakan login terlebih dahulu.".to_string()))
}

/// Subscribe this browser and register the subscription with the API
pub async fn subscribe_to_push(state: &AppState) -> AppResult<()> {
    let token = require_token(state)?;
    let registration = ready_registration().await?;

    let key = decode_vapid_key(&state.config.vapid_public_key)
        .map_err(|e| AppError::Unsupported(format!("VAPID key inválida: {}", e)))?;

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("userVisibleOnly"), &JsValue::TRUE)?;
    Reflect::set(
        &options,
        &JsValue::from_str("applicationServerKey"),
        &Uint8Array::from(key.as_slice()),
    )?;
    let options: PushSubscriptionOptionsInit = options.unchecked_into();

    let promise = registration.push_manager()?.subscribe_with_options(&options)?;
    let subscription: PushSubscription = JsFuture::from(promise).await?.dyn_into()?;
    let json = subscription_json(&subscription)?;

    if let Err(e) = state.api.subscribe_push(&token, &json).await {
        // Sin registro en la API la suscripción local no sirve
        if let Ok(promise) = subscription.unsubscribe() {
            let _ = JsFuture::from(promise).await;
        }
        return Err(e);
    }

    state.auth.set_push_subscribed(true)?;
    log::info!("🔔 [PUSH] Suscripción activa: {}", json.endpoint);
    Ok(())
}

/// Remove the subscription from the API and from the browser
pub async fn unsubscribe_from_push(state: &AppState) -> AppResult<()> {
    let token = require_token(state)?;
    let registration = ready_registration().await?;

    let current = JsFuture::from(registration.push_manager()?.get_subscription()?).await?;
    if current.is_null() || current.is_undefined() {
        log::info!("🔕 [PUSH] No había suscripción en el navegador");
        state.auth.set_push_subscribed(false)?;
        return Ok(());
    }

    let subscription: PushSubscription = current.dyn_into()?;
    state
        .api
        .unsubscribe_push(&token, &subscription.endpoint())
        .await?;
    JsFuture::from(subscription.unsubscribe()?).await?;

    state.auth.set_push_subscribed(false)?;
    log::info!("🔕 [PUSH] Suscripción eliminada");
    Ok(())
}
