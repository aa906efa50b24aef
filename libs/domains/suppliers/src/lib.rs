//! Suppliers Domain
//!
//! Resource slice for suppliers, plus the external registry lookups that
//! resolve a tax identifier (CNPJ) to a company record and a postal code
//! (CEP) to an address record.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod registry_client;
pub mod registry_models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{SupplierError, SupplierResult};
pub use handlers::ApiDoc;
pub use models::{CreateSupplier, Supplier, SupplierDto};
pub use postgres::PgSupplierRepository;
pub use registry_client::RegistryClient;
pub use registry_models::{AddressRecord, CompanyRecord};
pub use repository::{InMemorySupplierRepository, SupplierRepository};
pub use service::SupplierService;
