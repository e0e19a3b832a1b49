//! Hotel admin authentication service.
//!
//! Verifies dashboard pass-codes against their stored Argon2id hashes and
//! issues signed session tokens. Unknown hotel codes and wrong pass-codes
//! produce the same error so the response never reveals which part failed.

use domain::models::hotel::{HotelLoginRequest, HotelSessionResponse, HotelSummary};
use persistence::repositories::HotelRepository;
use shared::jwt::JwtConfig;
use shared::password::verify_pass_code;

use crate::config::JwtAuthConfig;
use crate::error::ApiError;

const INVALID_CREDENTIALS: &str = "Invalid hotel code or pass-code";

/// Service handling hotel-admin login.
#[derive(Clone)]
pub struct HotelAuthService {
    hotels: HotelRepository,
    jwt: JwtAuthConfig,
}

impl HotelAuthService {
    pub fn new(hotels: HotelRepository, jwt: JwtAuthConfig) -> Self {
        Self { hotels, jwt }
    }

    /// Authenticates a hotel admin and issues a session token.
    ///
    /// Any failure in the lookup or hash verification maps to the same
    /// 401 so the caller cannot distinguish an unknown code from a wrong
    /// pass-code.
    pub async fn login(
        &self,
        request: &HotelLoginRequest,
    ) -> Result<HotelSessionResponse, ApiError> {
        let entity = self
            .hotels
            .find_by_code(&request.hotel_code)
            .await?
            .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        let verified = verify_pass_code(&request.pass_code, &entity.pass_code_hash)
            .map_err(|e| ApiError::Internal(format!("Pass-code verification failed: {}", e)))?;

        if !verified {
            tracing::debug!(hotel_code = %request.hotel_code, "Pass-code mismatch");
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let jwt_config = JwtConfig::with_leeway(
            &self.jwt.private_key,
            &self.jwt.public_key,
            self.jwt.session_expiry_secs,
            self.jwt.leeway_secs,
        )
        .map_err(|e| ApiError::Internal(format!("JWT configuration error: {}", e)))?;

        let hotel = entity.into_model();
        let (token, _jti) = jwt_config
            .generate_session_token(hotel.id, &hotel.code)
            .map_err(|e| ApiError::Internal(format!("Token generation failed: {}", e)))?;

        tracing::info!(hotel_code = %hotel.code, "Hotel admin logged in");

        Ok(HotelSessionResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt.session_expiry_secs,
            hotel: HotelSummary::from(&hotel),
        })
    }
}
