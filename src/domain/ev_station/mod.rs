//! EV charging station aggregate

pub mod model;
pub mod repository;

pub use model::{EvStation, NewEvStation, DEFAULT_AVAILABILITY};
pub use repository::EvStationRepository;
