pub mod error;
pub mod jwt;

use axum::http::{HeaderMap, header::AUTHORIZATION};

use crate::{configuration::Jwt, model::UserId};

pub use jwt::{decode_jwt, encode_jwt};

/// Outcome of identifying the caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(UserId),
    Unauthenticated,
}

/// Resolves the caller from an `Authorization: Bearer <jwt>` header.
pub fn resolve_user_id(headers: &HeaderMap, jwt: &Jwt) -> AuthOutcome {
    let Some(auth_header) = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    else {
        return AuthOutcome::Unauthenticated;
    };

    let mut header = auth_header.split_whitespace();
    let (bearer, token) = match (header.next(), header.next()) {
        (Some(bearer), Some(token)) => (bearer, token),
        _ => return AuthOutcome::Unauthenticated,
    };

    if !bearer.eq_ignore_ascii_case("bearer") {
        return AuthOutcome::Unauthenticated;
    }

    match decode_jwt(token, jwt) {
        Ok(token_data) => AuthOutcome::Authenticated(UserId(token_data.claims.user_id)),
        Err(error) => {
            tracing::debug!(err.msg = %error, "Rejected bearer token");
            AuthOutcome::Unauthenticated
        }
    }
}
