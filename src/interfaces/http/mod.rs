//! HTTP REST API interfaces
//!
//! - `middleware`: bearer-token authentication
//! - `modules`: handlers and DTOs per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

#[cfg(test)]
pub(crate) mod test_support;

pub use router::create_api_router;
