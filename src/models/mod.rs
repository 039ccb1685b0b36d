pub mod amount;
pub mod category;
pub mod record;
pub mod workout_kind;

pub use amount::Amount;
pub use category::Category;
pub use record::{Entry, Record};
pub use workout_kind::WorkoutKind;
