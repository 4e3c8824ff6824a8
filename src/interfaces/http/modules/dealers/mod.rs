//! Dealers module: dealer profiles and subscriptions

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
