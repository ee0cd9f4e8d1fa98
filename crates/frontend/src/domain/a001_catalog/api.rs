use super::error::LoadError;
use gloo_net::http::Request;
use serde_json::Value;

/// Fetch the static catalogue payload. Single attempt, no retry.
pub async fn fetch_catalog(url: &str) -> Result<Value, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::NetworkOrHttpFailure(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(LoadError::NetworkOrHttpFailure(format!(
            "HTTP error! status: {}",
            response.status()
        )));
    }

    let text = response
        .text()
        .await
        .map_err(|e| LoadError::NetworkOrHttpFailure(format!("Failed to read response: {}", e)))?;

    parse_payload(&text)
}

/// Text that is not JSON at all is reported like any other malformed payload
pub fn parse_payload(text: &str) -> Result<Value, LoadError> {
    serde_json::from_str(text)
        .map_err(|e| LoadError::MalformedPayload(format!("JSON invalide : {}", e)))
}
