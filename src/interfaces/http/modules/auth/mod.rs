//! Auth module: current user, role selection, session sync

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
