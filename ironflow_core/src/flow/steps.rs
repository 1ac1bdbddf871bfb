use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One named screen in the onboarding-to-dashboard sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    Auth,
    UserDetails,
    Goals,
    BodyComposition,
    SpecificGoals,
    BodyModel,
    ModelComparison,
    WorkoutPlan,
    Recommendations,
    Dashboard,
    DailyWorkout,
    ExerciseDetail,
    WorkoutTimer,
    DailyProgress,
    DailySummary,
    WeeklyPerformance,
    ChatbotRecommendation,
    WorkoutCompletion,
    Reports,
    Settings,
}

/// The canonical screen order. A configuration constant, not a computed
/// value; controllers take it by default and tests may inject shorter
/// lists.
pub const STEP_ORDER: [StepId; 20] = [
    StepId::Auth,
    StepId::UserDetails,
    StepId::Goals,
    StepId::BodyComposition,
    StepId::SpecificGoals,
    StepId::BodyModel,
    StepId::ModelComparison,
    StepId::WorkoutPlan,
    StepId::Recommendations,
    StepId::Dashboard,
    StepId::DailyWorkout,
    StepId::ExerciseDetail,
    StepId::WorkoutTimer,
    StepId::DailyProgress,
    StepId::DailySummary,
    StepId::WeeklyPerformance,
    StepId::ChatbotRecommendation,
    StepId::WorkoutCompletion,
    StepId::Reports,
    StepId::Settings,
];

impl StepId {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::Auth => "auth",
            StepId::UserDetails => "user-details",
            StepId::Goals => "goals",
            StepId::BodyComposition => "body-composition",
            StepId::SpecificGoals => "specific-goals",
            StepId::BodyModel => "body-model",
            StepId::ModelComparison => "model-comparison",
            StepId::WorkoutPlan => "workout-plan",
            StepId::Recommendations => "recommendations",
            StepId::Dashboard => "dashboard",
            StepId::DailyWorkout => "daily-workout",
            StepId::ExerciseDetail => "exercise-detail",
            StepId::WorkoutTimer => "workout-timer",
            StepId::DailyProgress => "daily-progress",
            StepId::DailySummary => "daily-summary",
            StepId::WeeklyPerformance => "weekly-performance",
            StepId::ChatbotRecommendation => "chatbot-recommendation",
            StepId::WorkoutCompletion => "workout-completion",
            StepId::Reports => "reports",
            StepId::Settings => "settings",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown step: {0}")]
pub struct ParseStepError(pub String);

impl FromStr for StepId {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STEP_ORDER
            .iter()
            .copied()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| ParseStepError(s.to_string()))
    }
}
