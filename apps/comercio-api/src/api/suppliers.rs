//! Supplier routes

use axum::Router;
use domain_suppliers::{handlers, PgSupplierRepository, RegistryClient, SupplierService};

use crate::state::AppState;

/// Create the supplier router backed by PostgreSQL and the external registries
pub fn router(state: &AppState) -> Router {
    let repository = PgSupplierRepository::new(state.db.clone());
    let registry = RegistryClient::with_base_urls(
        state.config.cnpj_api_url.clone(),
        state.config.cep_api_url.clone(),
    );
    let service = SupplierService::new(repository, registry);
    handlers::router(service)
}
