use axum::http::StatusCode;

#[tracing::instrument(name = "[GET] home", skip_all)]
pub async fn index() -> StatusCode {
    StatusCode::OK
}
