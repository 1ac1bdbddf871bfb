use serde::{Deserialize, Serialize};

/// Record of one completed session, appended to the profile's report
/// list and never rewritten afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutReport {
    pub id: String,
    pub date: String,
    pub workout_name: String,
    pub duration: String,
    pub calories_burned: u32,
    pub exercises_completed: u32,
    pub total_exercises: u32,
    /// Percent, 0-100.
    pub completion_rate: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgress {
    pub date: String,
    pub completed_exercises: u32,
    pub total_exercises: u32,
    pub estimated_calories: String,
    pub duration: String,
}
