//! Simple API Key Authentication (Bearer Token)

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

/// API Key from secrets
static API_KEY: std::sync::OnceLock<String> = std::sync::OnceLock::new();

/// Initialize the API key
pub fn init_api_key(key: String) {
    let _ = API_KEY.set(key);
}

/// Get the API key
fn get_api_key() -> Option<&'static str> {
    API_KEY.get().map(|s| s.as_str())
}

/// Check an Authorization header value against the expected key
fn authorize(expected: &str, auth_header: Option<&str>) -> Result<(), StatusCode> {
    match auth_header.map(|h| h.strip_prefix("Bearer ")) {
        Some(Some(token)) if token == expected => Ok(()),
        Some(Some(_)) => {
            tracing::warn!("Invalid API key attempted");
            Err(StatusCode::UNAUTHORIZED)
        }
        Some(None) => {
            tracing::warn!("Invalid Authorization header format");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("Missing Authorization header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

/// Authentication middleware
/// Validates Bearer token against the API key
pub async fn auth_middleware(request: Request, next: Next) -> Result<Response, StatusCode> {
    let api_key = match get_api_key() {
        Some(key) if !key.is_empty() => key,
        // No API key configured = auth disabled (for development)
        _ => return Ok(next.run(request).await),
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    authorize(api_key, auth_header)?;
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_accepts_matching_bearer() {
        assert!(authorize("s3cret", Some("Bearer s3cret")).is_ok());
    }

    #[test]
    fn test_authorize_rejects_bad_headers() {
        assert_eq!(
            authorize("s3cret", Some("Bearer nope")),
            Err(StatusCode::UNAUTHORIZED)
        );
        assert_eq!(
            authorize("s3cret", Some("Basic s3cret")),
            Err(StatusCode::UNAUTHORIZED)
        );
        assert_eq!(authorize("s3cret", None), Err(StatusCode::UNAUTHORIZED));
    }
}
