//! Greeting route.

use axum::extract::Query;
use axum::response::Json;
use serde::Deserialize;

use crate::services::greeting::{self, Greeting};

#[derive(Debug, Deserialize)]
pub struct HelloParams {
    pub name: Option<String>,
}

/// `GET /api/hello?name=`: return a greeting and its creation timestamp.
pub async fn hello(Query(params): Query<HelloParams>) -> Json<Greeting> {
    tracing::debug!(name = ?params.name, "greeting requested");
    Json(greeting::create_greeting(params.name.as_deref()))
}
