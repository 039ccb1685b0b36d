use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Amount, Category, Entry, Record, WorkoutKind};
use chrono::NaiveDateTime;

/// Raw field values as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct RecordInput {
    pub kind: Option<WorkoutKind>,
    pub minutes: Option<i64>,
    pub food: Option<String>,
    pub grams: Option<i64>,
    pub liters: Option<String>,
    pub kg: Option<String>,
    pub count: Option<i64>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Build and validate a record of `category` from raw input.
    ///
    /// Nothing is written here, so a rejected input never touches a file.
    pub fn build(
        category: Category,
        input: &RecordInput,
        timestamp: NaiveDateTime,
    ) -> AppResult<Record> {
        let entry = match category {
            Category::Workout => Entry::Workout {
                kind: input.kind.unwrap_or_default(),
                minutes: whole(input.minutes, "--minutes", category)?,
            },
            Category::Diet => {
                let food = input
                    .food
                    .as_deref()
                    .map(str::trim)
                    .ok_or_else(|| missing("--food", category))?;
                Entry::Diet {
                    food: food.to_string(),
                    grams: whole(input.grams, "--grams", category)?,
                }
            }
            Category::Hydration => Entry::Hydration {
                liters: amount(input.liters.as_deref(), "--liters", category)?,
            },
            Category::Weight => Entry::Weight {
                kg: amount(input.kg.as_deref(), "--kg", category)?,
            },
            Category::Sleep => Entry::Sleep {
                minutes: whole(input.minutes, "--minutes", category)?,
            },
            Category::Steps => Entry::Steps {
                count: whole(input.count, "--count", category)?,
            },
        };

        let record = Record::new(entry, timestamp);
        record.validate()?;
        Ok(record)
    }

    pub fn apply(
        store: &RecordStore,
        username: &str,
        category: Category,
        input: &RecordInput,
        timestamp: NaiveDateTime,
    ) -> AppResult<Record> {
        let record = Self::build(category, input, timestamp)?;
        store.append(username, &record)?;
        Ok(record)
    }
}

fn missing(flag: &str, category: Category) -> AppError {
    AppError::Validation(format!("{flag} is required for {category} records"))
}

fn whole<T: TryFrom<i64>>(value: Option<i64>, flag: &str, category: Category) -> AppResult<T> {
    let v = value.ok_or_else(|| missing(flag, category))?;
    if v < 0 {
        return Err(AppError::Validation(format!(
            "{flag} cannot be negative (got {v})"
        )));
    }
    T::try_from(v).map_err(|_| AppError::Validation(format!("{flag} is too large (got {v})")))
}

fn amount(value: Option<&str>, flag: &str, category: Category) -> AppResult<Amount> {
    let raw = value.ok_or_else(|| missing(flag, category))?;
    Amount::parse(raw).ok_or_else(|| {
        AppError::Validation(format!(
            "{flag} must be a non-negative number such as 0.5 or 72.25 (got '{raw}')"
        ))
    })
}
