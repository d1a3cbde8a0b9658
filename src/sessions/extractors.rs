use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use super::cookie::cookie_value;
use crate::state::AppState;

/// The session id carried by the request cookie, if any. Never rejects;
/// a missing or malformed cookie is simply `None`.
pub struct SessionId(pub Option<Uuid>);

/// The logged-in user's id, resolved through the session store. Never
/// rejects; pages decide for themselves what an anonymous request sees.
pub struct MaybeUser(pub Option<i32>);

fn session_id_from_parts(parts: &Parts, state: &AppState) -> Option<Uuid> {
    let header = parts
        .headers
        .get(axum::http::header::COOKIE)?
        .to_str()
        .ok()?;
    let raw = cookie_value(header, &state.config.session.cookie_name)?;
    Uuid::parse_str(raw).ok()
}

#[async_trait]
impl FromRequestParts<AppState> for SessionId {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(SessionId(session_id_from_parts(parts, state)))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id =
            session_id_from_parts(parts, state).and_then(|sid| state.sessions.user_id(sid));
        Ok(MaybeUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_cookie(cookie: Option<String>) -> Parts {
        let mut builder = Request::builder().uri("/bookmarks");
        if let Some(c) = cookie {
            builder = builder.header(axum::http::header::COOKIE, c);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn resolves_user_from_live_session() {
        let state = AppState::fake();
        let sid = state.sessions.start(9, time::Duration::minutes(5));
        let mut parts = parts_with_cookie(Some(format!("linkshelf_session={}", sid)));

        let MaybeUser(user_id) = MaybeUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(user_id, Some(9));
    }

    #[tokio::test]
    async fn missing_cookie_is_anonymous() {
        let state = AppState::fake();
        let mut parts = parts_with_cookie(None);

        let MaybeUser(user_id) = MaybeUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(user_id, None);
    }

    #[tokio::test]
    async fn garbage_cookie_is_anonymous() {
        let state = AppState::fake();
        let mut parts = parts_with_cookie(Some("linkshelf_session=not-a-uuid".into()));

        let MaybeUser(user_id) = MaybeUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(user_id, None);
    }

    #[tokio::test]
    async fn revoked_session_is_anonymous() {
        let state = AppState::fake();
        let sid = state.sessions.start(9, time::Duration::minutes(5));
        state.sessions.revoke(sid);
        let mut parts = parts_with_cookie(Some(format!("linkshelf_session={}", sid)));

        let MaybeUser(user_id) = MaybeUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(user_id, None);
    }
}
