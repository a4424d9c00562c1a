// ============================================================================
// ROUTER - Hash route -> fragmento HTML -> cableado de la vista
// ============================================================================
// Flujo: hashchange -> handle_hash_change -> load_view
//   1. gate de autenticación (rutas protegidas sin token -> #/login)
//   2. fade-out, espera, fetch de views/<name>.html
//   3. reemplazo del contenido (View Transitions si existe) + wiring de la vista
// Solo la carga más reciente puede escribir en #main-content.
// ============================================================================

use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::dom::{
    add_class, current_hash, document, get_element_by_id, on_click, on_event, query_selector_all,
    remove_class, set_document_title, set_hash, set_inner_html, toggle_class, window,
};
use crate::error::{AppError, AppResult};
use crate::models::route::{is_protected, HOME_HASH, LOGIN_HASH};
use crate::models::{Route, View};
use crate::services::{auth_service, fetch_view};
use crate::state::AppState;
use crate::utils::constants::{
    DRAWER_BUTTON_ID, FADE_OUT_CLASS, HASH_LINK_SELECTOR, MAIN_CONTENT_ID, NAVIGATION_DRAWER_ID,
    OPEN_CLASS,
};
use crate::utils::html::not_found_fragment;
use crate::views::wire_view;

/// Cargar la ruta actual y escuchar `hashchange` (registrar una sola vez)
pub fn init_router(state: &AppState) -> AppResult<()> {
    handle_hash_change(state);

    let win = window().ok_or_else(|| AppError::Dom("No window".to_string()))?;
    let state = state.clone();
    on_event(&win, "hashchange", move |_| handle_hash_change(&state))
}

pub fn handle_hash_change(state: &AppState) {
    let hash = current_hash();
    log::debug!("🧭 [ROUTER] hashchange: '{}'", hash);

    match Route::parse(&hash) {
        Route::Logout => auth_service::logout(state),
        Route::View(View::Login) if state.auth.is_authenticated() => {
            log::info!("🧭 [ROUTER] Ya autenticado, #/login -> #/");
            set_hash(HOME_HASH);
        }
        Route::View(view) => {
            set_document_title(&view.title(&state.config.app_title));
            load_view(state, view);
        }
    }
}

pub fn load_view(state: &AppState, view: View) {
    let Some(main) = get_element_by_id(MAIN_CONTENT_ID) else {
        log::error!("❌ [ROUTER] Elemen #{} tidak ditemukan.", MAIN_CONTENT_ID);
        return;
    };

    let hash = current_hash();
    if is_protected(&hash) && !state.auth.is_authenticated() {
        log::warn!("🔒 [ROUTER] Access denied. Redirecting to {}.", LOGIN_HASH);
        state.router.set_redirect(hash);
        set_hash(LOGIN_HASH);
        return;
    }

    let seq = state.router.begin_load();
    let _ = add_class(&main, FADE_OUT_CLASS);

    let state = state.clone();
    Timeout::new(state.config.transition_delay_ms, move || {
        spawn_local(async move {
            if !state.router.is_current(seq) {
                return;
            }

            let result = fetch_view(&state.config, view.name()).await;
            if !state.router.is_current(seq) {
                log::debug!("🧭 [ROUTER] Descartando '{}' (navegación más reciente)", view.name());
                return;
            }

            match result {
                Ok(html) => swap_content(&state, &main, html, view, seq),
                Err(e) => {
                    log::error!("❌ [ROUTER] Gagal memuat view: {}", e);
                    set_inner_html(&main, &not_found_fragment(&e.to_string()));
                    let _ = remove_class(&main, FADE_OUT_CLASS);
                }
            }
        });
    })
    .forget();
}

/// Reemplazar el contenido dentro de `document.startViewTransition` si existe
fn swap_content(state: &AppState, main: &Element, html: String, view: View, seq: u64) {
    let start_transition = document().and_then(|doc| {
        Reflect::get(&doc, &JsValue::from_str("startViewTransition"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .map(|f| (doc, f))
    });

    let Some((doc, start)) = start_transition else {
        apply_view(state, main, &html, view);
        return;
    };

    let callback = {
        let (state, main, html) = (state.clone(), main.clone(), html.clone());
        Closure::once_into_js(move || {
            if state.router.is_current(seq) {
                apply_view(&state, &main, &html, view);
            }
        })
    };

    if let Err(e) = start.call1(&doc, &callback) {
        log::warn!("⚠️ [ROUTER] startViewTransition falló: {:?}", e);
        apply_view(state, main, &html, view);
    }
}

fn apply_view(state: &AppState, main: &Element, html: &str, view: View) {
    set_inner_html(main, html);
    let _ = remove_class(main, FADE_OUT_CLASS);

    if let Err(e) = intercept_hash_links(Some(main)) {
        log::error!("❌ [ROUTER] Error enlazando links: {}", e);
    }
    if let Err(e) = wire_view(view, state) {
        log::error!("❌ [ROUTER] Error preparando vista '{}': {}", view.name(), e);
    }
    log::info!("📄 [ROUTER] Vista '{}' cargada", view.name());
}

/// `a[href^="#"]`: navegar por hash sin recargar
fn intercept_hash_links(root: Option<&Element>) -> AppResult<()> {
    for link in query_selector_all(root, HASH_LINK_SELECTOR)? {
        let href = link.get_attribute("href").unwrap_or_default();
        on_click(&link, move |e: MouseEvent| {
            e.prevent_default();
            set_hash(&href);
        })?;
    }
    Ok(())
}

/// Enlaces del layout + botón del drawer
pub fn setup_navigation() -> AppResult<()> {
    intercept_hash_links(None)?;

    let (Some(drawer_btn), Some(drawer)) = (
        get_element_by_id(DRAWER_BUTTON_ID),
        get_element_by_id(NAVIGATION_DRAWER_ID),
    ) else {
        return Ok(());
    };

    {
        let drawer = drawer.clone();
        on_click(&drawer_btn, move |_| {
            let _ = toggle_class(&drawer, OPEN_CLASS);
        })?;
    }

    // Elegir un destino cierra el drawer
    for link in query_selector_all(Some(&drawer), HASH_LINK_SELECTOR)? {
        let drawer = drawer.clone();
        on_click(&link, move |_| {
            let _ = remove_class(&drawer, OPEN_CLASS);
        })?;
    }
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::dom::has_class;
    use gloo_timers::future::TimeoutFuture;
    use web_sys::HtmlElement;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const ABOUT_FRAGMENT: &str =
        r##"<h2>Tentang</h2><a id="to-register" href="#/register">Daftar</a>"##;

    fn mount_main() -> Element {
        let doc = document().unwrap();
        if let Some(old) = doc.get_element_by_id(MAIN_CONTENT_ID) {
            old.remove();
        }
        let main = doc.create_element("main").unwrap();
        main.set_id(MAIN_CONTENT_ID);
        main.class_list().add_1(FADE_OUT_CLASS).unwrap();
        doc.body().unwrap().append_child(&main).unwrap();
        main
    }

    #[wasm_bindgen_test]
    fn applied_view_injects_fragment_and_routes_its_links() {
        let main = mount_main();
        let state = AppState::new(AppConfig::default());
        set_hash("#/about");

        apply_view(&state, &main, ABOUT_FRAGMENT, View::About);

        assert!(main.inner_html().contains("<h2>Tentang</h2>"));
        assert!(!has_class(&main, FADE_OUT_CLASS));

        get_element_by_id("to-register")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
        assert_eq!(current_hash(), "#/register");
        main.remove();
    }

    #[wasm_bindgen_test]
    async fn swap_content_applies_current_load() {
        let main = mount_main();
        let state = AppState::new(AppConfig::default());
        let seq = state.router.begin_load();

        swap_content(&state, &main, ABOUT_FRAGMENT.to_string(), View::About, seq);
        // Con View Transitions el callback corre en otra tarea
        TimeoutFuture::new(300).await;

        assert!(main.inner_html().contains("to-register"));
        assert!(!has_class(&main, FADE_OUT_CLASS));
        main.remove();
    }
}
