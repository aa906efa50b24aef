//! Category routes

use axum::Router;
use domain_categories::{handlers, CategoryService, ImageStore, PgCategoryRepository};

use crate::state::AppState;

/// Create the category router backed by PostgreSQL
pub fn router(state: &AppState) -> Router {
    let repository = PgCategoryRepository::new(state.db.clone());
    let images = ImageStore::new(&state.config.upload_dir);
    let service = CategoryService::new(repository, images);
    handlers::router(service)
}
