// ============================================================================
// AUTH STATE - Estado de autenticación (respaldado por localStorage)
// ============================================================================
// Invariante: token presente => autenticado. No hay copia en memoria del token
// para que una pestaña que hace logout se refleje en la siguiente navegación.
// ============================================================================

use crate::error::AppResult;
use crate::utils::constants::{NAME_KEY, PUSH_SUBSCRIBED_KEY, TOKEN_KEY};
use crate::utils::storage::{get_flag, get_item, remove_item, set_flag, set_item};

#[derive(Clone, Copy, Default)]
pub struct AuthState;

impl AuthState {
    pub fn new() -> Self {
        Self
    }

    /// `requireAuth`: hay token guardado
    pub fn is_authenticated(&self) -> bool {
        self.token().map(|t| !t.is_empty()).unwrap_or(false)
    }

    pub fn token(&self) -> Option<String> {
        get_item(TOKEN_KEY)
    }

    /// Nombre para mostrar cacheado al hacer login
    pub fn name(&self) -> Option<String> {
        get_item(NAME_KEY)
    }

    pub fn set_session(&self, token: &str, name: &str) -> AppResult<()> {
        set_item(TOKEN_KEY, token)?;
        set_item(NAME_KEY, name)
    }

    /// Logout - limpiar token y nombre
    pub fn clear(&self) -> AppResult<()> {
        remove_item(TOKEN_KEY)?;
        remove_item(NAME_KEY)
    }

    pub fn push_subscribed(&self) -> bool {
        get_flag(PUSH_SUBSCRIBED_KEY)
    }

    pub fn set_push_subscribed(&self, subscribed: bool) -> AppResult<()> {
        set_flag(PUSH_SUBSCRIBED_KEY, subscribed)
    }
}
