//! HTTP plumbing shared by the provider adapters.

use reqwest::{Response, StatusCode};

use crate::ports::AIError;

/// Default wait when a 429 body carries no usable hint.
const DEFAULT_RETRY_AFTER_SECS: u32 = 30;

/// Maps a failed `send()` onto our error kinds.
pub(crate) fn send_error(err: reqwest::Error) -> AIError {
    if err.is_timeout() {
        AIError::Timeout
    } else if err.is_connect() {
        AIError::network(format!("Connection failed: {}", err))
    } else {
        AIError::network(err.to_string())
    }
}

/// Passes successful responses through and turns the rest into errors.
pub(crate) async fn check_status(response: Response) -> Result<Response, AIError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, body))
}

/// Classifies a non-success status and its body.
pub(crate) fn status_error(status: StatusCode, body: String) -> AIError {
    match status.as_u16() {
        401 | 403 => AIError::AuthenticationFailed,
        // Gemini reports a bad key as a 400.
        400 if body.contains("API_KEY_INVALID") => AIError::AuthenticationFailed,
        400 => AIError::InvalidRequest(body),
        429 => AIError::rate_limited(parse_retry_after(&body)),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

/// Extracts a retry hint from either provider's 429 body.
///
/// OpenAI embeds "try again in Ns" in the message; Gemini attaches a
/// `RetryInfo` detail with `retryDelay: "Ns"`.
fn parse_retry_after(body: &str) -> u32 {
    let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) else {
        return DEFAULT_RETRY_AFTER_SECS;
    };
    let error = &parsed["error"];

    if let Some(details) = error["details"].as_array() {
        for detail in details {
            if let Some(delay) = detail["retryDelay"].as_str() {
                if let Some(secs) = leading_seconds(delay) {
                    return secs;
                }
            }
        }
    }

    if let Some(message) = error["message"].as_str() {
        if let Some(idx) = message.find("try again in ") {
            if let Some(secs) = leading_seconds(&message[idx + 13..]) {
                return secs;
            }
        }
    }

    DEFAULT_RETRY_AFTER_SECS
}

fn leading_seconds(text: &str) -> Option<u32> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}
