use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    auth::{AuthOutcome, error::AuthError, resolve_user_id},
    error::Error,
    state::SharedAppState,
};

/// Rejects unauthenticated requests and stores the caller's `UserId` in the
/// request extensions.
#[tracing::instrument(name = "[MIDDLEWARE] jwt auth", skip_all, fields(user_id))]
pub async fn jwt_auth_middleware(
    State(app_state): State<SharedAppState>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    let user_id = match resolve_user_id(req.headers(), &app_state.config.jwt) {
        AuthOutcome::Authenticated(user_id) => user_id,
        AuthOutcome::Unauthenticated => {
            return Err(AuthError::Unauthenticated.into());
        }
    };

    tracing::Span::current().record("user_id", tracing::field::display(&user_id));
    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}
