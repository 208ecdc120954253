use serde::{Deserialize, Serialize};

/// A named region with its population, as stored in the `regions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub population: i64,
}

impl Region {
    #[must_use]
    pub fn new(name: impl Into<String>, population: i64) -> Self {
        Self { name: name.into(), population }
    }
}
