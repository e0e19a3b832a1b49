//! Hotel repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::HotelEntity;
use crate::metrics::QueryTimer;

/// Escapes LIKE metacharacters so a user-supplied search term matches
/// literally. Postgres treats backslash as the default escape character.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Repository for hotel-related database operations.
#[derive(Clone)]
pub struct HotelRepository {
    pool: PgPool,
}

impl HotelRepository {
    /// Creates a new HotelRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find a hotel by its public code.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<HotelEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_hotel_by_code");
        let result = sqlx::query_as::<_, HotelEntity>(
            r#"
            SELECT id, code, name, description, image_url, location, address,
                   phone, email, reviews_link, pass_code_hash, created_at
            FROM hotels
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a hotel by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<HotelEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_hotel_by_id");
        let result = sqlx::query_as::<_, HotelEntity>(
            r#"
            SELECT id, code, name, description, image_url, location, address,
                   phone, email, reviews_link, pass_code_hash, created_at
            FROM hotels
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List hotels for the public catalog, optionally filtered by a
    /// case-insensitive substring of the name or description.
    pub async fn search(&self, term: Option<&str>) -> Result<Vec<HotelEntity>, sqlx::Error> {
        let timer = QueryTimer::new("search_hotels");
        let result = if let Some(term) = term {
            let pattern = format!("%{}%", escape_like(term));
            sqlx::query_as::<_, HotelEntity>(
                r#"
                SELECT id, code, name, description, image_url, location, address,
                       phone, email, reviews_link, pass_code_hash, created_at
                FROM hotels
                WHERE name ILIKE $1 OR description ILIKE $1
                ORDER BY name
                "#,
            )
            .bind(pattern)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, HotelEntity>(
                r#"
                SELECT id, code, name, description, image_url, location, address,
                       phone, email, reviews_link, pass_code_hash, created_at
                FROM hotels
                ORDER BY name
                "#,
            )
            .fetch_all(&self.pool)
            .await
        };
        timer.record();
        result
    }

    /// Resolve contact emails for a set of hotel IDs.
    ///
    /// Unknown IDs are silently skipped; the result order follows the
    /// database, not the input.
    pub async fn emails_by_ids(&self, ids: &[Uuid]) -> Result<Vec<(Uuid, String)>, sqlx::Error> {
        let timer = QueryTimer::new("hotel_emails_by_ids");
        let result = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT id, email FROM hotels WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
