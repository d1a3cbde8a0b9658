use crate::state::AppState;
use axum::Router;

pub mod cookie;
pub(crate) mod extractors;
pub mod handlers;
pub mod store;

pub fn router() -> Router<AppState> {
    handlers::session_routes()
}
