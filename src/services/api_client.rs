// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Habla con la API de historias. El token lo pasa quien llama.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;

use crate::error::{AppError, AppResult};
use crate::models::push::UnsubscribeRequest;
use crate::models::{
    ApiMessage, LoginRequest, LoginResponse, LoginResult, PushSubscriptionJson, RegisterRequest,
    StoriesResponse, Story, StoryFilter,
};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST /login
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginResult> {
        log::info!("🔐 [API] Login para {}", request.email);
        let response = Request::post(&self.url("/login"))
            .json(request)?
            .send()
            .await?;

        let body: LoginResponse = read_json(response).await?;
        if body.error {
            return Err(AppError::Api(body.message));
        }
        body.login_result
            .ok_or_else(|| AppError::Api("Respuesta de login sin loginResult".to_string()))
    }

    /// POST /register
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<ApiMessage> {
        log::info!("📝 [API] Registro para {}", request.email);
        let response = Request::post(&self.url("/register"))
            .json(request)?
            .send()
            .await?;
        read_message(response).await
    }

    /// GET /stories?location=<0|1>
    pub async fn get_stories(&self, token: &str, filter: StoryFilter) -> AppResult<Vec<Story>> {
        let url = self.url(&format!("/stories?location={}", filter.location_param()));
        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await?;

        let body: StoriesResponse = read_json(response).await?;
        if body.error {
            return Err(AppError::Api(body.message));
        }
        log::info!("📚 [API] {} historias recibidas", body.list_story.len());
        Ok(body.list_story)
    }

    /// POST /stories (multipart: description, photo, lat?, lon?)
    pub async fn add_story(&self, token: &str, form: FormData) -> AppResult<ApiMessage> {
        let response = Request::post(&self.url("/stories"))
            .header("Authorization", &bearer(token))
            .body(form)?
            .send()
            .await?;
        read_message(response).await
    }

    /// POST /notifications/subscribe
    pub async fn subscribe_push(
        &self,
        token: &str,
        subscription: &PushSubscriptionJson,
    ) -> AppResult<ApiMessage> {
        let response = Request::post(&self.url("/notifications/subscribe"))
            .header("Authorization", &bearer(token))
            .json(subscription)?
            .send()
            .await?;
        read_message(response).await
    }

    /// DELETE /notifications/subscribe
    pub async fn unsubscribe_push(&self, token: &str, endpoint: &str) -> AppResult<ApiMessage> {
        let response = Request::delete(&self.url("/notifications/subscribe"))
            .header("Authorization", &bearer(token))
            .json(&UnsubscribeRequest { endpoint })?
            .send()
            .await?;
        read_message(response).await
    }
}

/// Parsear el cuerpo; en error HTTP usar el `message` de la API si viene
async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let status = response.status();
    let status_text = response.status_text();
    let text = response.text().await?;

    if !(200..300).contains(&status) {
        return Err(match serde_json::from_str::<ApiMessage>(&text) {
            Ok(msg) => AppError::Api(msg.message),
            Err(_) => AppError::Http { status, message: status_text },
        });
    }

    serde_json::from_str(&text).map_err(AppError::from)
}

async fn read_message(response: Response) -> AppResult<ApiMessage> {
    let body: ApiMessage = read_json(response).await?;
    if body.error {
        return Err(AppError::Api(body.message));
    }
    Ok(body)
}
