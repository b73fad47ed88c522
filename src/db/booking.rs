use sqlx::PgPool;

use crate::{
    error::Error,
    model::{Booking, UserId},
};

use super::error::DatabaseError;

/// Read access to bookings, always scoped to the renter that owns them.
#[async_trait::async_trait]
pub trait BookingRepository: Send + Sync {
    /// First booking with `id == booking_id` owned by `renter_id`, if any.
    async fn find_for_renter(
        &self,
        booking_id: &str,
        renter_id: &UserId,
    ) -> Result<Option<Booking>, Error>;
}

#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BookingRepository for PgBookingRepository {
    #[tracing::instrument(name = "get booking for renter", skip_all, fields(booking_id = %booking_id, renter_id = %renter_id))]
    async fn find_for_renter(
        &self,
        booking_id: &str,
        renter_id: &UserId,
    ) -> Result<Option<Booking>, Error> {
        sqlx::query_as::<_, Booking>(
            r#"
            SELECT
                id, ship_id, total_price, start_date, end_date
            FROM
                bookings
            WHERE
                id = $1 AND renter_id = $2
            LIMIT 1;
        "#,
        )
        .bind(booking_id)
        .bind(renter_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Error::Database(DatabaseError::DatabaseError(e)))
    }
}
