use crate::dom::set_hash;
use crate::error::{AppError, AppResult};
use crate::models::route::LOGIN_HASH;
use crate::models::{LoginRequest, LoginResult, RegisterRequest};
use crate::state::AppState;

/// Mínimo que exige la API para contraseñas
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate login input before hitting the network
pub fn validate_login(email: &str, password: &str) -> AppResult<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Api("Email dan password wajib diisi.".to_string()));
    }
    Ok(())
}

/// Validate registration input before hitting the network
pub fn validate_registration(name: &str, email: &str, password: &str) -> AppResult<()> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Api("Semua kolom wajib diisi.".to_string()));
    }
    if !email.contains('@') {
        return Err(AppError::Api("Format email tidak valid.".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Api(format!(
            "Password minimal {} karakter.",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Log in and persist `token` + `name` in localStorage
pub async fn login(state: &AppState, email: &str, password: &str) -> AppResult<LoginResult> {
    validate_login(email, password)?;

    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let result = state.api.login(&request).await?;
    state.auth.set_session(&result.token, &result.name)?;
    log::info!("✅ [AUTH] Login exitoso: {}", result.name);
    Ok(result)
}

/// Register a new account (does not log in)
pub async fn register(state: &AppState, name: &str, email: &str, password: &str) -> AppResult<()> {
    validate_registration(name, email, password)?;

    let request = RegisterRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let message = state.api.register(&request).await?;
    log::info!("✅ [AUTH] Registro: {}", message.message);
    Ok(())
}

/// Clear the session and go to the login view
pub fn logout(state: &AppState) {
    if let Err(e) = state.auth.clear() {
        log::error!("❌ [AUTH] Error limpiando sesión: {}", e);
    }
    log::info!("👋 [AUTH] Logout");
    set_hash(LOGIN_HASH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        assert!(validate_login("", "secret").is_err());
        assert!(validate_login("a@b.c", "").is_err());
        assert!(validate_login("a@b.c", "secret").is_ok());
    }

    #[test]
    fn registration_checks_email_and_password_length() {
        assert!(validate_registration("Ayu", "ayu@mail.com", "12345678").is_ok());
        assert_eq!(
            validate_registration("Ayu", "ayu.mail.com", "12345678").unwrap_err(),
            AppError::Api("Format email tidak valid.".to_string())
        );
        assert_eq!(
            validate_registration("Ayu", "ayu@mail.com", "1234567").unwrap_err(),
            AppError::Api("Password minimal 8 karakter.".to_string())
        );
        assert!(validate_registration("  ", "ayu@mail.com", "12345678").is_err());
    }
}
