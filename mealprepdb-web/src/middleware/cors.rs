use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Create a CORS layer for the given allowed origins.
///
/// `["*"]` allows any origin and should only appear in development
/// configurations.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if allowed_origins.iter().any(|origin| origin == "*") {
        tracing::warn!("CORS configured to allow any origin - use only in development");
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse::<HeaderValue>().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS];
    let headers: Vec<HeaderName> = vec![
        HeaderName::from_static("authorization"),
        HeaderName::from_static("accept"),
        HeaderName::from_static("accept-language"),
        HeaderName::from_static("content-language"),
        HeaderName::from_static("content-type"),
    ];

    cors.allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(60 * 30))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_builds_for_explicit_origins() {
        let origins = vec!["http://localhost".to_string(), "https://localhost".to_string()];
        let _layer = cors_layer(&origins);
    }

    #[test]
    fn test_layer_builds_for_wildcard() {
        let _layer = cors_layer(&["*".to_string()]);
    }
}
