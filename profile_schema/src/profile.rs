use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::plan::{ExerciseSpec, WorkoutPlan};
use crate::report::{DailyProgress, WorkoutReport};
use crate::settings::AppSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryGoal {
    LoseWeight,
    Maintain,
    GainWeight,
}

impl PrimaryGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryGoal::LoseWeight => "lose-weight",
            PrimaryGoal::Maintain => "maintain",
            PrimaryGoal::GainWeight => "gain-weight",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown primary goal: {0} (expected lose-weight, maintain or gain-weight)")]
pub struct ParseGoalError(pub String);

impl FromStr for PrimaryGoal {
    type Err = ParseGoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lose-weight" => Ok(PrimaryGoal::LoseWeight),
            "maintain" => Ok(PrimaryGoal::Maintain),
            "gain-weight" => Ok(PrimaryGoal::GainWeight),
            other => Err(ParseGoalError(other.to_string())),
        }
    }
}

/// Scan results from the body-composition screen. Every reading is
/// independently optional; values are non-negative by contract, the
/// schema does not enforce ranges.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyComposition {
    pub body_fat: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub visceral_fat: Option<f64>,
    pub bmr: Option<f64>,
}

/// The whole session state. Starts empty and accumulates fields as the
/// user moves through the flow; discarded at session end.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_goal: Option<PrimaryGoal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_goals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_composition: Option<BodyComposition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_plan: Option<WorkoutPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_exercise: Option<ExerciseSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_workouts_completed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_calories_burned: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_workout_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_reports: Option<Vec<WorkoutReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_progress: Option<DailyProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_exercises: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_settings: Option<AppSettings>,
}

impl UserProfile {
    /// Consuming form of [`merge`].
    pub fn merged(self, patch: ProfilePatch) -> UserProfile {
        merge(&self, patch)
    }
}

/// A partial profile. A `Some` field replaces the whole corresponding
/// profile field on merge; a `None` field leaves it untouched. There is
/// deliberately no way to clear a field back to empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_goal: Option<PrimaryGoal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_goals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_composition: Option<BodyComposition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_plan: Option<WorkoutPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_exercise: Option<ExerciseSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_workouts_completed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_calories_burned: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_workout_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_reports: Option<Vec<WorkoutReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_progress: Option<DailyProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_exercises: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_settings: Option<AppSettings>,
}

/// Shallow top-level merge. Each key present in the patch overwrites the
/// profile's value in full; nested structures are replaced, never
/// deep-merged. Keys absent from the patch are untouched. Pure and
/// idempotent: applying the same patch twice equals applying it once.
pub fn merge(profile: &UserProfile, patch: ProfilePatch) -> UserProfile {
    let mut next = profile.clone();
    if let Some(v) = patch.email {
        next.email = Some(v);
    }
    if let Some(v) = patch.height_cm {
        next.height_cm = Some(v);
    }
    if let Some(v) = patch.weight_kg {
        next.weight_kg = Some(v);
    }
    if let Some(v) = patch.gender {
        next.gender = Some(v);
    }
    if let Some(v) = patch.primary_goal {
        next.primary_goal = Some(v);
    }
    if let Some(v) = patch.specific_goals {
        next.specific_goals = Some(v);
    }
    if let Some(v) = patch.body_composition {
        next.body_composition = Some(v);
    }
    if let Some(v) = patch.workout_plan {
        next.workout_plan = Some(v);
    }
    if let Some(v) = patch.current_exercise {
        next.current_exercise = Some(v);
    }
    if let Some(v) = patch.total_workouts_completed {
        next.total_workouts_completed = Some(v);
    }
    if let Some(v) = patch.total_calories_burned {
        next.total_calories_burned = Some(v);
    }
    if let Some(v) = patch.last_workout_date {
        next.last_workout_date = Some(v);
    }
    if let Some(v) = patch.workout_reports {
        next.workout_reports = Some(v);
    }
    if let Some(v) = patch.daily_progress {
        next.daily_progress = Some(v);
    }
    if let Some(v) = patch.completed_exercises {
        next.completed_exercises = Some(v);
    }
    if let Some(v) = patch.app_settings {
        next.app_settings = Some(v);
    }
    next
}
