use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tracing::{error, instrument, warn};

use crate::bookmarks::repo_types::Bookmark;
use crate::pages;
use crate::sessions::extractors::MaybeUser;
use crate::state::AppState;
use crate::users::{dto::PublicUser, repo_types::User};

pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route("/", get(|| async { Redirect::to("/bookmarks") }))
}

/// Form body for adding a bookmark.
#[derive(Debug, Deserialize)]
pub struct BookmarkForm {
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// GET /bookmarks
#[instrument(skip(state))]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    MaybeUser(user_id): MaybeUser,
) -> Result<Html<String>, (StatusCode, String)> {
    let user = User::find(&state.db, user_id).await.map_err(internal)?;

    let (user, bookmarks) = match user {
        Some(u) => {
            let bookmarks = Bookmark::list_by_user(&state.db, u.id)
                .await
                .map_err(internal)?;
            (Some(PublicUser::from(u)), bookmarks)
        }
        None => (None, Vec::new()),
    };

    Ok(Html(pages::bookmarks_page(user.as_ref(), &bookmarks)))
}

/// POST /bookmarks
#[instrument(skip(state, form))]
pub async fn create_bookmark(
    State(state): State<AppState>,
    MaybeUser(user_id): MaybeUser,
    Form(form): Form<BookmarkForm>,
) -> Result<Redirect, (StatusCode, String)> {
    let Some(user_id) = user_id else {
        warn!("create_bookmark without a session");
        return Err((StatusCode::UNAUTHORIZED, "Log in to add bookmarks".into()));
    };

    let title = if form.title.trim().is_empty() {
        form.url.clone()
    } else {
        form.title.trim().to_string()
    };

    if let Err(e) = Bookmark::create(&state.db, user_id, &form.url, &title).await {
        error!(error = %e, user_id, "create bookmark failed");
        return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
    }

    Ok(Redirect::to("/bookmarks"))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    error!(error = %e, "bookmark page failed");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
