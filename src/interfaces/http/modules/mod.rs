//! HTTP feature modules, one per resource

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod dealers;
pub mod ev_stations;
pub mod feedback;
pub mod health;
pub mod payments;
pub mod request_id;
pub mod tyres;
