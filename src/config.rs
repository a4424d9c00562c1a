use crate::utils::constants::{DEFAULT_API_URL, DEFAULT_VIEWS_BASE_PATH};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL base de la API de historias (sin `/` final)
    pub api_base_url: String,
    /// Carpeta de fragmentos HTML de vistas
    pub views_base_path: String,
    /// Sufijo del título del documento
    pub app_title: String,
    /// Duración del fade-out antes de cambiar de vista (ms)
    pub transition_delay_ms: u32,
    /// Clave pública VAPID (base64 url-safe) para Web Push
    pub vapid_public_key: String,
    /// Script del service worker (push)
    pub service_worker_path: String,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("STORY_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            views_base_path: option_env!("VIEWS_BASE_PATH")
                .unwrap_or(DEFAULT_VIEWS_BASE_PATH)
                .trim_end_matches('/')
                .to_string(),
            app_title: "Dicoding Story".to_string(),
            transition_delay_ms: 300,
            vapid_public_key: option_env!("VAPID_PUBLIC_KEY")
                .unwrap_or(DEFAULT_VAPID_PUBLIC_KEY)
                .to_string(),
            service_worker_path: "./sw.js".to_string(),
            map_config: MapConfig::default(),
        }
    }
}

impl AppConfig {
    /// Ruta del fragmento HTML de una vista: `../views/<name>.html`
    pub fn view_path(&self, view_name: &str) -> String {
        format!("{}/{}.html", self.views_base_path, view_name)
    }
}

/// Clave VAPID publicada por la API de Dicoding Story
const DEFAULT_VAPID_PUBLIC_KEY: &str =
    "BCCs2eonMI-6H2ctvFaWg-UYdDv387Vno_bzUzALpB442r2lCnsHmtrx8biyPi_E-1fSGABK_Qs_GlvPoJJqxbk";

#[derive(Debug, Clone)]
pub struct MapConfig {
    pub container_id: String,
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map".to_string(),
            // Indonesia
            default_center_lat: -2.5489,
            default_center_lng: 118.0149,
            default_zoom: 5.0,
        }
    }
}
