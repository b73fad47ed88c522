use std::collections::HashMap;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use validator::Validate;

use crate::{
    db::booking::BookingRepository,
    error::{BookingError, Error},
    model::{BookingData, UserId},
    state::SharedAppState,
};

const BOOKING_ID_PARAMETER: &str = "booking_id";

#[derive(Debug, Validate)]
pub struct BookingPath {
    #[validate(length(min = 1, max = 128))]
    pub booking_id: String,
}

/// Pulls `booking_id` out of the matched route. A route registered without
/// it is a wiring defect, reported before any lookup happens.
///
/// Runs after `jwt_auth_middleware`, so an unauthenticated request to such a
/// route is answered with 401 rather than this error.
pub fn require_booking_id(params: &HashMap<String, String>) -> Result<BookingPath, Error> {
    let booking_id = params
        .get(BOOKING_ID_PARAMETER)
        .ok_or(Error::MissingRouteParameter(BOOKING_ID_PARAMETER))?;

    let path = BookingPath {
        booking_id: booking_id.to_owned(),
    };
    path.validate().map_err(Error::Validation)?;

    Ok(path)
}

#[tracing::instrument(name = "load booking", skip_all, fields(booking_id = %booking_id, user_id = %user_id))]
pub async fn load_booking(
    bookings: &dyn BookingRepository,
    user_id: &UserId,
    booking_id: &str,
) -> Result<BookingData, Error> {
    let booking = bookings
        .find_for_renter(booking_id, user_id)
        .await?
        .ok_or(BookingError::NotFound)?;

    Ok(BookingData { booking })
}

#[tracing::instrument(name = "[GET] bookings/{booking_id}", skip_all)]
pub async fn show(
    State(app_state): State<SharedAppState>,
    Extension(user_id): Extension<UserId>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<Json<BookingData>, Error> {
    let path = require_booking_id(&params)?;

    let result = load_booking(app_state.bookings.as_ref(), &user_id, &path.booking_id).await?;

    Ok(Json(result))
}

#[tracing::instrument(name = "[GET] bookings/{booking_id}/page", skip_all)]
pub async fn page(
    State(app_state): State<SharedAppState>,
    Extension(user_id): Extension<UserId>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<Response, Error> {
    let path = require_booking_id(&params)?;

    match load_booking(app_state.bookings.as_ref(), &user_id, &path.booking_id).await {
        Ok(data) => {
            let html = app_state.views.render_booking_page(&data, "")?;

            Ok(Html(html).into_response())
        }
        Err(Error::Booking(BookingError::NotFound)) => {
            let html = app_state.views.render_not_found(&path.booking_id)?;

            Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
        }
        Err(error) => {
            tracing::error!(err.msg = %error, "Unexpected failure while loading booking page");

            Err(error)
        }
    }
}
