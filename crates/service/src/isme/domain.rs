use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single named entry on the list. Identity is the name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IsMe {
    pub name: String,
}

impl IsMe {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<models::isme::Model> for IsMe {
    fn from(m: models::isme::Model) -> Self {
        Self { name: m.name }
    }
}
