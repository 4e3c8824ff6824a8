//! Feedback module: post-booking ratings

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
