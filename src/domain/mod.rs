//! src/domain/mod.rs
mod email;
pub use email::{Email, Error as EmailError};

mod allergen;
pub use allergen::{Allergen, Allergens, Error as AllergenError};

mod subscriber;
pub use subscriber::{Subscriber, ValidationError};
