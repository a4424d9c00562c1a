// Tests de navegador: wasm-pack test --headless --firefox
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

use story_pwa::config::AppConfig;
use story_pwa::dom::{current_hash, document, get_element_by_id, has_class, set_hash};
use story_pwa::models::View;
use story_pwa::router::{handle_hash_change, load_view, setup_navigation};
use story_pwa::state::{AppState, AuthState};
use story_pwa::views::profile;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(id: &str, tag: &str) -> Element {
    let doc = document().unwrap();
    if let Some(old) = doc.get_element_by_id(id) {
        old.remove();
    }
    let el = doc.create_element(tag).unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

fn test_state() -> AppState {
    AppState::new(AppConfig {
        transition_delay_ms: 0,
        views_base_path: "/__missing_views__".to_string(),
        ..AppConfig::default()
    })
}

#[wasm_bindgen_test]
fn auth_state_follows_local_storage_token() {
    let auth = AuthState::new();
    auth.clear().unwrap();
    assert!(!auth.is_authenticated());

    auth.set_session("tok-123", "Ayu").unwrap();
    assert!(auth.is_authenticated());
    assert_eq!(auth.token().as_deref(), Some("tok-123"));
    assert_eq!(auth.name().as_deref(), Some("Ayu"));

    auth.clear().unwrap();
    assert!(!auth.is_authenticated());
    assert_eq!(auth.name(), None);
}

#[wasm_bindgen_test]
fn push_flag_is_stored_as_string_boolean() {
    let auth = AuthState::new();
    auth.set_push_subscribed(true).unwrap();
    assert!(auth.push_subscribed());
    auth.set_push_subscribed(false).unwrap();
    assert!(!auth.push_subscribed());
}

#[wasm_bindgen_test]
fn protected_route_without_token_redirects_to_login() {
    let main = mount("main-content", "main");
    let state = test_state();
    state.auth.clear().unwrap();

    set_hash("#/profile?tab=notif");
    load_view(&state, View::Profile);

    assert_eq!(current_hash(), "#/login");
    assert_eq!(state.router.peek_redirect().as_deref(), Some("#/profile?tab=notif"));
    assert!(!has_class(&main, "fade-out"));
    main.remove();
}

#[wasm_bindgen_test]
fn login_route_when_authenticated_goes_home() {
    let main = mount("main-content", "main");
    let state = test_state();
    state.auth.set_session("tok", "Ayu").unwrap();

    set_hash("#/login");
    handle_hash_change(&state);
    assert_eq!(current_hash(), "#/");

    state.auth.clear().unwrap();
    main.remove();
}

#[wasm_bindgen_test]
fn load_view_without_main_content_is_a_no_op() {
    if let Some(old) = get_element_by_id("main-content") {
        old.remove();
    }
    let state = test_state();
    load_view(&state, View::About);
    assert_eq!(state.router.peek_redirect(), None);
}

#[wasm_bindgen_test]
fn drawer_button_toggles_open_class() {
    let button = mount("drawer-button", "button");
    let drawer = mount("navigation-drawer", "nav");
    drawer.set_inner_html(r##"<a id="drawer-link" href="#/about">About</a>"##);

    setup_navigation().unwrap();

    click(&button);
    assert!(has_class(&drawer, "open"));

    // Elegir un enlace cierra el drawer y navega
    click(&get_element_by_id("drawer-link").unwrap());
    assert!(!has_class(&drawer, "open"));
    assert_eq!(current_hash(), "#/about");

    button.remove();
    drawer.remove();
}

#[wasm_bindgen_test]
async fn missing_fragment_renders_404() {
    let main = mount("main-content", "main");
    let state = test_state();

    set_hash("#/about");
    load_view(&state, View::About);
    assert!(has_class(&main, "fade-out"));

    TimeoutFuture::new(1_000).await;

    let html = main.inner_html();
    assert!(html.contains("<h2>404</h2>"), "got: {}", html);
    assert!(html.contains("Halaman about tidak ditemukan."), "got: {}", html);
    assert!(!has_class(&main, "fade-out"));
    main.remove();
}

#[wasm_bindgen_test]
async fn newer_navigation_discards_stale_load() {
    let main = mount("main-content", "main");
    let state = test_state();

    set_hash("#/about");
    load_view(&state, View::About);
    set_hash("#/register");
    load_view(&state, View::Register);

    TimeoutFuture::new(1_000).await;

    let html = main.inner_html();
    assert!(html.contains("Halaman register tidak ditemukan."), "got: {}", html);
    assert!(!html.contains("Halaman about"), "got: {}", html);
    main.remove();
}

#[wasm_bindgen_test]
fn hash_change_sets_view_title() {
    let main = mount("main-content", "main");
    let state = test_state();

    set_hash("#/about");
    handle_hash_change(&state);
    assert_eq!(document().unwrap().title(), "About | Dicoding Story");

    set_hash("#/register?ref=nav");
    handle_hash_change(&state);
    assert_eq!(document().unwrap().title(), "Register | Dicoding Story");
    main.remove();
}

#[wasm_bindgen_test]
fn logout_route_clears_session_but_keeps_push_flag() {
    let main = mount("main-content", "main");
    let state = test_state();
    state.auth.set_session("tok", "Ayu").unwrap();
    state.auth.set_push_subscribed(true).unwrap();

    set_hash("#/logout");
    handle_hash_change(&state);

    assert_eq!(state.auth.token(), None);
    assert_eq!(state.auth.name(), None);
    assert!(state.auth.push_subscribed());
    assert_eq!(current_hash(), "#/login");

    state.auth.set_push_subscribed(false).unwrap();
    main.remove();
}

#[wasm_bindgen_test]
fn profile_shows_name_and_logout_button_ends_session() {
    let name_el = mount("profile-name", "span");
    let logout_btn = mount("logout-btn", "button");
    let state = test_state();
    state.auth.set_session("tok", "Ayu").unwrap();
    set_hash("#/profile");

    profile::wire(&state).unwrap();
    assert_eq!(name_el.text_content().as_deref(), Some("Ayu"));

    click(&logout_btn);
    assert!(!state.auth.is_authenticated());
    assert_eq!(current_hash(), "#/login");

    name_el.remove();
    logout_btn.remove();
}
