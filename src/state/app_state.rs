// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::config::AppConfig;
use crate::services::api_client::ApiClient;
use crate::state::{AuthState, LoadSequence, RouterState};
use std::rc::Rc;

/// Estado compartido por router y vistas (clonado barato en cada closure)
#[derive(Clone)]
pub struct AppState {
    pub config: Rc<AppConfig>,
    pub auth: AuthState,
    pub router: RouterState,
    /// Peticiones de `GET /stories` (filtros y re-entradas a la vista)
    pub stories: LoadSequence,
    pub api: ApiClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let api = ApiClient::new(&config.api_base_url);
        Self {
            config: Rc::new(config),
            auth: AuthState::new(),
            router: RouterState::new(),
            stories: LoadSequence::new(),
            api,
        }
    }
}
