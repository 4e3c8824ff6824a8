//! Domain layer: marketplace aggregates and their repository interfaces

pub mod booking;
pub mod dealer;
pub mod ev_station;
pub mod feedback;
pub mod payment;
pub mod repositories;
pub mod tyre;
pub mod user;

pub use booking::{Booking, BookingRepository, BookingStatus, NewBooking};
pub use dealer::{Dealer, DealerRepository, NewDealer};
pub use ev_station::{EvStation, EvStationRepository, NewEvStation};
pub use feedback::{Feedback, FeedbackRepository, NewFeedback};
pub use payment::{NewPayment, Payment, PaymentRepository, PaymentStatus};
pub use repositories::{DomainResult, RepositoryProvider};
pub use tyre::{NewTyre, Tyre, TyreRepository};
pub use user::{NewUser, UpsertUser, User, UserRepository, UserRole};

pub use crate::shared::errors::DomainError;
