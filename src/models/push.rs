use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// `PushSubscription.toJSON()` recortado a lo que pide la API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushSubscriptionJson {
    pub endpoint: String,
    pub keys: PushKeys,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushKeys {
    pub p256dh: String,
    pub auth: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnsubscribeRequest<'a> {
    pub endpoint: &'a str,
}

/// Decodificar la clave VAPID (base64 url-safe, con o sin padding)
pub fn decode_vapid_key(key: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let trimmed = key.trim().trim_end_matches('=');
    // Algunas claves se publican con el alfabeto estándar
    let normalized: String = trimmed
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_NO_PAD.decode(normalized)
}
