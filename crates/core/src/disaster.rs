use serde::{Deserialize, Serialize};

/// A disaster event ready to be inserted.
///
/// `region` and `date` are free text: the region is not checked against the
/// `regions` table and the date is never parsed. `None` means the column was
/// absent from the source row, an empty string means the cell was blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDisaster {
    pub region: Option<String>,
    pub date: Option<String>,
    pub severity_score: f64,
    pub casualties: i64,
    pub displaced: i64,
}

impl NewDisaster {
    #[must_use]
    pub fn new(region: &str, date: &str, severity_score: f64) -> Self {
        Self {
            region: Some(region.to_owned()),
            date: Some(date.to_owned()),
            severity_score,
            casualties: 0,
            displaced: 0,
        }
    }

    #[must_use]
    pub const fn casualties(mut self, casualties: i64) -> Self {
        self.casualties = casualties;
        self
    }

    #[must_use]
    pub const fn displaced(mut self, displaced: i64) -> Self {
        self.displaced = displaced;
        self
    }
}
