//! API routes module

pub mod categories;
pub mod health;
pub mod products;
pub mod suppliers;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/categoria", categories::router(state))
        .nest("/fornecedor", suppliers::router(state))
        .nest("/produto", products::router(state))
        .merge(health::router(state.clone()))
}
