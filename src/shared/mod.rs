//! Cross-cutting helpers shared by every layer

pub mod errors;
pub mod money;
pub mod shutdown;

pub use errors::*;
pub use money::{from_minor_units, to_minor_units};
pub use shutdown::{ShutdownCoordinator, ShutdownSignal};
