use web_sys::{window, Storage};

use crate::error::{AppError, AppResult};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

fn require_storage() -> AppResult<Storage> {
    get_local_storage().ok_or_else(|| AppError::Storage("localStorage no disponible".to_string()))
}

/// Leer un valor de texto plano (p.ej. `token`, `name`)
pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) -> AppResult<()> {
    require_storage()?
        .set_item(key, value)
        .map_err(|_| AppError::Storage(format!("Error guardando {} en localStorage", key)))
}

pub fn remove_item(key: &str) -> AppResult<()> {
    require_storage()?
        .remove_item(key)
        .map_err(|_| AppError::Storage(format!("Error eliminando {} de localStorage", key)))
}

/// Flags booleanos guardados como `"true"` / `"false"`
pub fn get_flag(key: &str) -> bool {
    get_item(key).as_deref() == Some("true")
}

pub fn set_flag(key: &str, value: bool) -> AppResult<()> {
    set_item(key, if value { "true" } else { "false" })
}
