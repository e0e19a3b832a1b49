//! Hotel entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::hotel::Hotel;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the hotels table.
///
/// Carries the Argon2id pass-code hash, which never crosses into the
/// domain model.
#[derive(Debug, Clone, FromRow)]
pub struct HotelEntity {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub reviews_link: Option<String>,
    pub pass_code_hash: String,
    pub created_at: DateTime<Utc>,
}

impl HotelEntity {
    /// Converts to the domain model, dropping the credential hash.
    pub fn into_model(self) -> Hotel {
        Hotel {
            id: self.id,
            code: self.code,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            location: self.location,
            address: self.address,
            phone: self.phone,
            email: self.email,
            reviews_link: self.reviews_link,
            created_at: self.created_at,
        }
    }
}
