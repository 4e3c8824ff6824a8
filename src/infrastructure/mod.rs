//! Infrastructure layer - external concerns

pub mod crypto;
pub mod database;

pub use crypto::{JwtConfig, SessionClaims};
pub use database::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
