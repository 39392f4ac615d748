use serde::{Deserialize, Serialize};

use crate::month::{recent_months, MonthKey};

/// Presentation-facing settings consumed by the view shells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Display currency code; amounts themselves are plain numbers in a
    /// single currency unit.
    pub currency: String,
    /// How many buckets the month selector offers.
    pub months_shown: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "RSD".into(),
            months_shown: 12,
        }
    }
}

impl Config {
    /// The month selector's buckets, oldest first, ending at the current
    /// month.
    pub fn selectable_months(&self) -> Vec<MonthKey> {
        recent_months(self.months_shown)
    }
}
