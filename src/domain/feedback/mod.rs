//! Feedback aggregate

pub mod model;
pub mod repository;

pub use model::{Feedback, NewFeedback, MAX_RATING, MIN_RATING};
pub use repository::FeedbackRepository;
