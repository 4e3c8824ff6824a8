//! Database entities module

pub mod booking;
pub mod dealer;
pub mod ev_station;
pub mod feedback;
pub mod payment;
pub mod tyre;
pub mod user;

pub use booking::Entity as Booking;
pub use dealer::Entity as Dealer;
pub use ev_station::Entity as EvStation;
pub use feedback::Entity as Feedback;
pub use payment::Entity as Payment;
pub use tyre::Entity as Tyre;
pub use user::Entity as User;
