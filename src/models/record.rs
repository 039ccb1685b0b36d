use super::{amount::Amount, category::Category, workout_kind::WorkoutKind};
use crate::errors::{AppError, AppResult};
use crate::utils::date::{TIMESTAMP_FORMAT, format_timestamp};
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Separator the Diet line format puts right after the food item.
pub const FOOD_SEPARATOR: &str = ", Quantity: ";

/// Category-specific payload of a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category")]
pub enum Entry {
    Workout { kind: WorkoutKind, minutes: u32 },
    Diet { food: String, grams: u32 },
    Hydration { liters: Amount },
    Weight { kg: Amount },
    Sleep { minutes: u32 },
    Steps { count: u64 },
}

/// One timestamped line of a user's record file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime, // ⇔ "DateTime: YYYY-MM-DD HH:MM:SS"
    #[serde(flatten)]
    pub entry: Entry,
}

impl Record {
    pub fn new(entry: Entry, timestamp: NaiveDateTime) -> Self {
        Self { timestamp, entry }
    }

    pub fn category(&self) -> Category {
        match self.entry {
            Entry::Workout { .. } => Category::Workout,
            Entry::Diet { .. } => Category::Diet,
            Entry::Hydration { .. } => Category::Hydration,
            Entry::Weight { .. } => Category::Weight,
            Entry::Sleep { .. } => Category::Sleep,
            Entry::Steps { .. } => Category::Steps,
        }
    }

    pub fn timestamp_str(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// Reject records whose encoded line could not be read back.
    pub fn validate(&self) -> AppResult<()> {
        if let Entry::Diet { food, .. } = &self.entry {
            if food.contains(['\n', '\r']) {
                return Err(AppError::Validation(
                    "food item must fit on a single line".into(),
                ));
            }
            if food.contains(FOOD_SEPARATOR) {
                return Err(AppError::Validation(format!(
                    "food item must not contain '{}'",
                    FOOD_SEPARATOR.trim()
                )));
            }
        }
        Ok(())
    }
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
}
