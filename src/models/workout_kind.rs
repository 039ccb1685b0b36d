use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum WorkoutKind {
    Cardio,
    Yoga,
    Gym,
    Running,
    Sport,
    #[default]
    Unknown,
}

impl WorkoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Cardio => "Cardio",
            WorkoutKind::Yoga => "Yoga",
            WorkoutKind::Gym => "Gym",
            WorkoutKind::Running => "Running",
            WorkoutKind::Sport => "Sport",
            WorkoutKind::Unknown => "Unknown",
        }
    }

    /// Exact match on the stored name; anything else is not a kind we wrote.
    pub fn from_stored(s: &str) -> Option<Self> {
        match s {
            "Cardio" => Some(WorkoutKind::Cardio),
            "Yoga" => Some(WorkoutKind::Yoga),
            "Gym" => Some(WorkoutKind::Gym),
            "Running" => Some(WorkoutKind::Running),
            "Sport" => Some(WorkoutKind::Sport),
            "Unknown" => Some(WorkoutKind::Unknown),
            _ => None,
        }
    }
}
