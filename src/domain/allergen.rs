//! src/domain/allergen.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0} is not a recognized allergen")]
    Unknown(String),
}

/// The fixed vocabulary of allergen tags the kitchen reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Allergen {
    Peanuts,
    Shellfish,
    Gluten,
    Dairy,
    Soy,
}

impl Allergen {
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s {
            "peanuts" => Ok(Allergen::Peanuts),
            "shellfish" => Ok(Allergen::Shellfish),
            "gluten" => Ok(Allergen::Gluten),
            "dairy" => Ok(Allergen::Dairy),
            "soy" => Ok(Allergen::Soy),
            other => Err(Error::Unknown(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Allergen::Peanuts => "peanuts",
            Allergen::Shellfish => "shellfish",
            Allergen::Gluten => "gluten",
            Allergen::Dairy => "dairy",
            Allergen::Soy => "soy",
        }
    }
}

impl std::fmt::Display for Allergen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of allergens a subscriber wants flagged. Checkbox toggles map onto
/// `insert` and `remove`; duplicates collapse, order is vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allergens(BTreeSet<Allergen>);

impl Allergens {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn insert(&mut self, allergen: Allergen) {
        self.0.insert(allergen);
    }

    pub fn remove(&mut self, allergen: Allergen) {
        self.0.remove(&allergen);
    }

    pub fn contains(&self, allergen: Allergen) -> bool {
        self.0.contains(&allergen)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().map(|a| a.as_str().to_string()).collect()
    }
}

impl TryFrom<Vec<String>> for Allergens {
    type Error = Error;

    fn try_from(values: Vec<String>) -> Result<Self, Self::Error> {
        let mut allergens = Allergens::new();
        for value in values {
            allergens.insert(Allergen::parse(&value)?);
        }
        Ok(allergens)
    }
}
