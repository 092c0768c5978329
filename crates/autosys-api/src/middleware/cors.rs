//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use autosys_core::config::CorsConfig;

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

/// Builds a CORS tower layer from configuration.
///
/// Browsers reject a literal `*` on credentialed requests, so with
/// credentials enabled a wildcard mirrors the request instead.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let credentials = config.allow_credentials;
    let mut layer = CorsLayer::new();

    // Origins
    layer = match (is_wildcard(&config.allowed_origins), credentials) {
        (true, true) => layer.allow_origin(AllowOrigin::mirror_request()),
        (true, false) => layer.allow_origin(Any),
        (false, _) => {
            let origins: Vec<HeaderValue> = config
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            layer.allow_origin(origins)
        }
    };

    // Methods
    layer = match (is_wildcard(&config.allowed_methods), credentials) {
        (true, true) => layer.allow_methods(AllowMethods::mirror_request()),
        (true, false) => layer.allow_methods(Any),
        (false, _) => {
            let methods: Vec<Method> = config
                .allowed_methods
                .iter()
                .filter_map(|m| m.parse().ok())
                .collect();
            layer.allow_methods(methods)
        }
    };

    // Headers
    layer = match (is_wildcard(&config.allowed_headers), credentials) {
        (true, true) => layer.allow_headers(AllowHeaders::mirror_request()),
        (true, false) => layer.allow_headers(Any),
        (false, _) => {
            let headers: Vec<HeaderName> = config
                .allowed_headers
                .iter()
                .filter_map(|h| h.parse().ok())
                .collect();
            layer.allow_headers(headers)
        }
    };

    layer
        .allow_credentials(credentials)
        .max_age(Duration::from_secs(config.max_age_seconds))
}
