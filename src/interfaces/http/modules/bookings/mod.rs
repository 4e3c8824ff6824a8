//! Bookings module: customer requests, driver assignment, completion

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
