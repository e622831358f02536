use crate::{error::AppError, AppState};
use axum::{async_trait, extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use database::AuthUser;
use std::sync::Arc;

/// The authenticated principal of a request.
///
/// Identity always flows from the session token in the `Authorization`
/// header; by security policy no handler ever reads identity-bearing fields
/// from query parameters or request bodies.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthUser,
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::Unauthenticated)?;

        // An unknown or expired token is a 401; only a failed lookup is a
        // store error.
        let user = state
            .ledger
            .find_user_by_session(token)
            .await?
            .ok_or(AppError::Unauthenticated)?;

        Ok(AuthContext { user })
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/reports/profit-loss");
        if let Some(value) = value {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (parts, _body) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn extracts_bearer_token() {
        let parts = parts_with_auth(Some("Bearer session-token-123"));
        assert_eq!(bearer_token(&parts), Some("session-token-123"));
    }

    #[test]
    fn rejects_missing_or_malformed_headers() {
        assert_eq!(bearer_token(&parts_with_auth(None)), None);
        assert_eq!(bearer_token(&parts_with_auth(Some("Basic abc"))), None);
        assert_eq!(bearer_token(&parts_with_auth(Some("Bearer "))), None);
    }
}
