use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of record kinds a user can track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Category {
    Hydration,
    Diet,
    Workout,
    Sleep,
    Weight,
    Steps,
}

impl Category {
    /// Display order used by the progress view.
    pub const ALL: [Category; 6] = [
        Category::Workout,
        Category::Diet,
        Category::Hydration,
        Category::Sleep,
        Category::Weight,
        Category::Steps,
    ];

    /// Canonical name, also used in record file names (`alice_Sleep.txt`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hydration => "Hydration",
            Category::Diet => "Diet",
            Category::Workout => "Workout",
            Category::Sleep => "Sleep",
            Category::Weight => "Weight",
            Category::Steps => "Steps",
        }
    }

    /// Case-insensitive lookup (`"sleep"`, `"SLEEP"` → Sleep).
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Only these categories have a numeric series worth charting.
    pub fn is_chartable(&self) -> bool {
        matches!(self, Category::Sleep | Category::Weight)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
