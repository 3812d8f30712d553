use axum::Router;
use axum::routing::post;

use crate::state::AppState;

pub mod handler;
pub mod model;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/quality", post(handler::label_quality))
}
