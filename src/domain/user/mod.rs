//! User aggregate
//!
//! Contains the User entity, role enumeration, DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto;

pub use dto::{NewUser, UpsertUser};
pub use model::{User, UserRole};
pub use repository::UserRepository;
