/// URL base de la API de historias
/// Configurable en tiempo de compilación via `STORY_API_URL` (ver build.rs)
pub const DEFAULT_API_URL: &str = "https://story-api.dicoding.dev/v1";

/// Carpeta de los fragmentos HTML, relativa al script
pub const DEFAULT_VIEWS_BASE_PATH: &str = "../views";

// Claves de localStorage
pub const TOKEN_KEY: &str = "token";
pub const NAME_KEY: &str = "name";
pub const PUSH_SUBSCRIBED_KEY: &str = "pushSubscribed";

// IDs del layout principal
pub const MAIN_CONTENT_ID: &str = "main-content";
pub const DRAWER_BUTTON_ID: &str = "drawer-button";
pub const NAVIGATION_DRAWER_ID: &str = "navigation-drawer";

// Clases CSS
pub const FADE_OUT_CLASS: &str = "fade-out";
pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";

/// Selector de enlaces internos (hash routes)
pub const HASH_LINK_SELECTOR: &str = "a[href^=\"#\"]";
