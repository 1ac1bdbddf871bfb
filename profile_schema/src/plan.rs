use serde::{Deserialize, Serialize};

/// One entry of a plan's weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: String,
    pub workout_name: String,
    pub exercises: Vec<String>,
    pub duration: String,
    pub difficulty: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub is_today: bool,
}

impl DayPlan {
    /// Copy with the completed flag set. Screens snapshot the day, flip
    /// the flag and patch the whole plan back, so the top-level merge
    /// contract stays intact.
    pub fn with_completed(&self, completed: bool) -> DayPlan {
        DayPlan {
            completed,
            ..self.clone()
        }
    }
}

/// A workout plan, either picked from the canned catalog or generated.
/// `current_week <= total_weeks` holds for any plan this crate's
/// consumers produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub frequency: String,
    pub focus: String,
    pub current_week: u32,
    pub total_weeks: u32,
    #[serde(default)]
    pub weekly_schedule: Vec<DayPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_at: Option<String>,
    #[serde(default)]
    pub ai_generated: bool,
}

/// Full description of one exercise, the shape the timer and detail
/// screens consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSpec {
    pub id: String,
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub duration: String,
    pub rest_time: String,
    pub difficulty: String,
    pub target_muscles: Vec<String>,
    pub calories: u32,
    pub description: String,
    pub benefits: String,
}
