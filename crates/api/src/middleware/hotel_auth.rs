//! Hotel session authentication middleware.
//!
//! Validates the Bearer session token issued at login and injects the
//! authenticated hotel identity into request extensions for the admin
//! route handlers.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::app::AppState;
use crate::config::JwtAuthConfig;
use shared::jwt::{extract_hotel_id, JwtConfig};

/// Authenticated hotel identity extracted from the session token.
#[derive(Debug, Clone)]
pub struct HotelContext {
    /// Hotel ID from the token subject claim.
    pub hotel_id: Uuid,
    /// Hotel code the session is scoped to.
    pub hotel_code: String,
}

impl HotelContext {
    /// Validates a session token and returns the hotel identity.
    pub fn validate(jwt_config: &JwtConfig, token: &str) -> Result<Self, String> {
        let claims = jwt_config
            .validate_session_token(token)
            .map_err(|e| format!("Invalid token: {}", e))?;

        let hotel_id =
            extract_hotel_id(&claims).map_err(|_| "Invalid hotel ID in token".to_string())?;

        Ok(HotelContext {
            hotel_id,
            hotel_code: claims.hotel_code,
        })
    }

    /// Creates a JwtConfig from JwtAuthConfig.
    pub fn create_jwt_config(config: &JwtAuthConfig) -> Result<JwtConfig, String> {
        JwtConfig::with_leeway(
            &config.private_key,
            &config.public_key,
            config.session_expiry_secs,
            config.leeway_secs,
        )
        .map_err(|e| format!("Failed to initialize JWT config: {}", e))
    }
}

/// Middleware that requires a valid hotel session token.
///
/// Validates the Bearer token in the Authorization header and rejects
/// requests without one. The hotel identity is stored in request
/// extensions for use by downstream handlers.
pub async fn require_hotel_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    // Extract Bearer token from Authorization header
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            return unauthorized_response("Missing or invalid Authorization header");
        }
    };

    // Create JWT config
    let jwt_config = match HotelContext::create_jwt_config(&state.config.jwt) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to create JWT config: {}", e);
            return internal_error_response("Authentication service unavailable");
        }
    };

    // Validate the token
    match HotelContext::validate(&jwt_config, token) {
        Ok(ctx) => {
            req.extensions_mut().insert(ctx);
            next.run(req).await
        }
        Err(e) => {
            tracing::debug!("Session token validation failed: {}", e);
            unauthorized_response("Invalid or expired session token")
        }
    }
}

/// Helper to create unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "unauthorized",
            "message": message
        })),
    )
        .into_response()
}

/// Helper to create internal error response.
fn internal_error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": message
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_jwt_config_rejects_invalid_keys() {
        let config = JwtAuthConfig {
            private_key: "not a pem".to_string(),
            public_key: "not a pem".to_string(),
            session_expiry_secs: 3600,
            leeway_secs: 30,
        };
        assert!(HotelContext::create_jwt_config(&config).is_err());
    }
}
