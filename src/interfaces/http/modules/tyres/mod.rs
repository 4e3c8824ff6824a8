//! Tyres module: dealer catalogue and stock

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
