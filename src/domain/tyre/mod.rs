//! Tyre catalogue aggregate

pub mod model;
pub mod repository;

pub use model::{NewTyre, Tyre};
pub use repository::TyreRepository;
