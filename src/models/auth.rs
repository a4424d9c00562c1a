use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub user_id: String,
    pub name: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub error: bool,
    pub message: String,
    pub login_result: Option<LoginResult>,
}

/// Respuesta genérica `{ error, message }`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub error: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_login_result() {
        let json = r#"{
            "error": false,
            "message": "success",
            "loginResult": { "userId": "user-yj5pc_LARC_AgK61", "name": "Arif Faizin", "token": "eyJhbGci" }
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        let result = response.login_result.unwrap();
        assert_eq!(result.name, "Arif Faizin");
        assert_eq!(result.token, "eyJhbGci");
    }

    #[test]
    fn failed_login_has_no_result() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"error": true, "message": "Invalid password"}"#).unwrap();
        assert!(response.error);
        assert!(response.login_result.is_none());
    }
}
