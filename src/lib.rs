//! # TyreHub Marketplace Service
//!
//! Backend for a tyre sales, booking and delivery marketplace. Customers book
//! tyre deliveries, dealers list stock, drivers fulfil bookings and EV
//! station operators publish charging availability.
//!
//! ## Architecture
//!
//! - **domain**: Marketplace entities, role rules and repository traits
//! - **infrastructure**: SeaORM persistence and session token verification
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Errors, money conversion and shutdown coordination

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::create_api_router;
