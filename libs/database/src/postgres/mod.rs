pub mod connector;
pub mod health;

pub use connector::{connect, connect_with_options, connect_with_retry, run_migrations};
pub use health::check_health;
