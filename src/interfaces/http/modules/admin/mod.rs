//! Admin module: user approval and oversight

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
