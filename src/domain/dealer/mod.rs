//! Dealer aggregate

pub mod model;
pub mod repository;

pub use model::{Dealer, NewDealer, DEFAULT_SUBSCRIPTION};
pub use repository::DealerRepository;
