//! src/domain/subscriber.rs
use crate::domain::{allergen, email, Allergens, Email};
use crate::routes::SubscribeBody;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error(transparent)]
    Email(#[from] email::Error),
    #[error(transparent)]
    Allergen(#[from] allergen::Error),
}

/// A validated preference record, ready to be persisted.
#[derive(Debug, Clone)]
pub struct Subscriber {
    pub email: Email,
    pub is_vegan: bool,
    pub is_vegetarian: bool,
    pub is_halal: bool,
    pub allergens: Allergens,
}

impl TryFrom<SubscribeBody> for Subscriber {
    type Error = ValidationError;

    fn try_from(body: SubscribeBody) -> Result<Self, Self::Error> {
        Ok(Self {
            email: Email::parse(body.email)?,
            is_vegan: body.is_vegan,
            is_vegetarian: body.is_vegetarian,
            is_halal: body.is_halal,
            allergens: Allergens::try_from(body.allergens)?,
        })
    }
}
