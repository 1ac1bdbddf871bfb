use profile_schema::{ExerciseSpec, UserProfile};

use crate::catalog::exercise_by_name;

/// Today's fully-expanded workout, ready for the daily-workout screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWorkout {
    pub day: String,
    pub focus: String,
    pub duration: String,
    pub estimated_calories: u32,
    pub exercises: Vec<ExerciseSpec>,
}

fn fallback_workout() -> DailyWorkout {
    let exercises = vec![exercise_by_name("Push-ups")];
    let estimated_calories = exercises.iter().map(|e| e.calories).sum();
    DailyWorkout {
        day: "Day 1".to_string(),
        focus: "Upper Body Strength".to_string(),
        duration: "45 minutes".to_string(),
        estimated_calories,
        exercises,
    }
}

/// Resolves today's workout from the selected plan's weekly schedule.
///
/// Preference order: the entry flagged `is_today`, then the entry at the
/// weekday index (0 = Sunday), then the first entry. A profile with no
/// plan or an empty schedule gets the built-in fallback workout.
pub fn today_workout(profile: &UserProfile, weekday: usize) -> DailyWorkout {
    let schedule = match profile
        .workout_plan
        .as_ref()
        .filter(|plan| !plan.weekly_schedule.is_empty())
    {
        Some(plan) => &plan.weekly_schedule,
        None => return fallback_workout(),
    };

    let today = schedule
        .iter()
        .find(|day| day.is_today)
        .or_else(|| schedule.get(weekday))
        .unwrap_or(&schedule[0]);

    let exercises: Vec<ExerciseSpec> = today
        .exercises
        .iter()
        .map(|name| exercise_by_name(name))
        .collect();
    let estimated_calories = exercises.iter().map(|e| e.calories).sum();

    DailyWorkout {
        day: today.day.clone(),
        focus: today.workout_name.clone(),
        duration: today.duration.clone(),
        estimated_calories,
        exercises,
    }
}
