use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use crate::pages;
use crate::sessions::cookie::{clear_session_cookie, set_session_cookie};
use crate::sessions::extractors::SessionId;
use crate::state::AppState;
use crate::users::{password::verify_password, repo_types::User};

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/new", get(new_session))
        .route("/sessions", post(create_session))
        .route("/sessions/delete", post(delete_session))
}

/// Form body for the login page.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET /sessions/new
pub async fn new_session() -> Html<String> {
    Html(pages::login_page())
}

/// POST /sessions
#[instrument(skip(state, form))]
pub async fn create_session(
    State(state): State<AppState>,
    Form(mut form): Form<LoginForm>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    form.email = form.email.trim().to_lowercase();

    let user = match User::find_by_email(&state.db, &form.email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(email = %form.email, "login unknown email");
            return Err((StatusCode::UNAUTHORIZED, "Invalid credentials".into()));
        }
        Err(e) => {
            error!(error = %e, "find_by_email failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let ok = match verify_password(&form.password, &user.password) {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "verify_password failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    if !ok {
        warn!(email = %form.email, user_id = user.id, "login invalid password");
        return Err((StatusCode::UNAUTHORIZED, "Invalid credentials".into()));
    }

    let session_id = state
        .sessions
        .start(user.id, state.config.session.ttl());

    let mut headers = HeaderMap::new();
    set_session_cookie(&mut headers, &state.config.session.cookie_name, session_id);

    info!(user_id = user.id, "login ok");
    Ok((headers, Redirect::to("/bookmarks")))
}

/// POST /sessions/delete
#[instrument(skip(state))]
pub async fn delete_session(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> impl IntoResponse {
    if let Some(sid) = session_id {
        state.sessions.revoke(sid);
    }

    let mut headers = HeaderMap::new();
    clear_session_cookie(&mut headers, &state.config.session.cookie_name);

    (headers, Redirect::to("/sessions/new"))
}
