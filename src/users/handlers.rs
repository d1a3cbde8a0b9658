use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Form, Router,
};
use tracing::{error, info, instrument};

use crate::pages;
use crate::sessions::cookie::set_session_cookie;
use crate::state::AppState;
use crate::users::{dto::RegisterForm, password::hash_password, repo_types::User};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/new", get(new_user))
        .route("/users", post(create_user))
}

/// GET /users/new
pub async fn new_user() -> Html<String> {
    Html(pages::register_page())
}

/// POST /users
#[instrument(skip(state, form))]
pub async fn create_user(
    State(state): State<AppState>,
    Form(mut form): Form<RegisterForm>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    form.email = form.email.trim().to_lowercase();

    let hash = match hash_password(&form.password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "hash_password failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let user = match User::create(&state.db, &form.email, &hash).await {
        Ok(u) => u,
        Err(e) => {
            error!(error = %e, "create user failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let session_id = state
        .sessions
        .start(user.id, state.config.session.ttl());

    let mut headers = HeaderMap::new();
    set_session_cookie(&mut headers, &state.config.session.cookie_name, session_id);

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((headers, Redirect::to("/bookmarks")))
}
