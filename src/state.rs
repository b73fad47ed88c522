use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use crate::{
    configuration::Config,
    db::booking::{BookingRepository, PgBookingRepository},
    view::Views,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub bookings: Arc<dyn BookingRepository>,
    pub views: Arc<Views>,
}

pub type SharedAppState = Arc<AppState>;

impl AppState {
    pub async fn init(config: Config) -> Result<Self, anyhow::Error> {
        let pool = PgPoolOptions::new()
            .min_connections(config.database.min_connections)
            .max_connections(config.database.max_connections)
            .connect_lazy_with(config.database.with_db());

        if config.application.run_migration {
            tracing::warn!("Running database migrations...");
            sqlx::migrate!("./migrations").run(&pool).await?;
        }

        let bookings = Arc::new(PgBookingRepository::new(pool));

        Self::with_repository(config, bookings)
    }

    /// Builds the state around an already constructed booking repository.
    pub fn with_repository(
        config: Config,
        bookings: Arc<dyn BookingRepository>,
    ) -> Result<Self, anyhow::Error> {
        let views = Arc::new(Views::new()?);

        Ok(AppState {
            config,
            bookings,
            views,
        })
    }
}
