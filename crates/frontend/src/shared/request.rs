//! Envelope-aware request helpers.
//!
//! Every resource model funnels its calls through here so the error policy
//! lives in one place: failures come back as human-readable `String`s built
//! from the API's error envelope (or a generic fallback), never as panics or
//! unhandled rejections.

use contracts::shared::api::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;
use crate::system::auth::storage;

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Read the error envelope off a non-2xx response; fall back to the status.
async fn error_message(response: Response) -> String {
    let status = response.status();
    if let Ok(body) = response.json::<ApiErrorBody>().await {
        if let Some(message) = body.into_message() {
            return message;
        }
    }
    format!("HTTP {}", status)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = authorize(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = authorize(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    decode(response).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = authorize(Request::patch(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    decode(response).await
}

/// DELETE with no response body expected beyond the status envelope.
pub async fn delete(path: &str) -> Result<(), String> {
    let response = authorize(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// DELETE carrying a JSON body (media URL removal).
pub async fn delete_with_body<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = authorize(Request::delete(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}
