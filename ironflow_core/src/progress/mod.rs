use profile_schema::{ProfilePatch, UserProfile, WorkoutReport};

/// What a finished timer session produces, before it is turned into a
/// report and folded into the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutOutcome {
    pub workout_name: String,
    pub duration: String,
    pub calories_burned: u32,
    pub exercises_completed: u32,
    pub total_exercises: u32,
    pub kind: String,
}

/// Builds the append-only report record for a completed session.
/// `seq` disambiguates report ids within one session.
pub fn completion_report(outcome: &WorkoutOutcome, date: &str, seq: usize) -> WorkoutReport {
    let completion_rate = if outcome.total_exercises == 0 {
        0
    } else {
        outcome.exercises_completed * 100 / outcome.total_exercises
    };
    WorkoutReport {
        id: format!("workout_{seq}"),
        date: date.to_string(),
        workout_name: outcome.workout_name.clone(),
        duration: outcome.duration.clone(),
        calories_burned: outcome.calories_burned,
        exercises_completed: outcome.exercises_completed,
        total_exercises: outcome.total_exercises,
        completion_rate,
        kind: outcome.kind.clone(),
    }
}

/// The completion screen's profile update: append the report and bump
/// the monotone counters. Snapshot-and-replace on `workout_reports`
/// keeps the top-level merge contract intact.
pub fn completion_patch(profile: &UserProfile, report: WorkoutReport) -> ProfilePatch {
    let mut reports = profile.workout_reports.clone().unwrap_or_default();
    let date = report.date.clone();
    let calories = report.calories_burned;
    reports.push(report);

    ProfilePatch {
        workout_reports: Some(reports),
        total_workouts_completed: Some(profile.total_workouts_completed.unwrap_or(0) + 1),
        total_calories_burned: Some(profile.total_calories_burned.unwrap_or(0) + calories),
        last_workout_date: Some(date),
        ..Default::default()
    }
}

/// Canned milestones shown on the completion screen. `report_count` is
/// the report list length after the new report was appended.
pub fn achievements(report_count: usize, report: &WorkoutReport) -> Vec<String> {
    let mut earned = Vec::new();
    if report_count == 1 {
        earned.push("First Workout Complete!".to_string());
    }
    if report_count == 10 {
        earned.push("10 Workouts Milestone!".to_string());
    }
    if report.completion_rate == 100 {
        earned.push("Perfect Workout!".to_string());
    }
    if report.calories_burned > 300 {
        earned.push("Calorie Crusher!".to_string());
    }
    earned
}

/// Records one finished exercise. Set semantics: inserting an id that
/// is already present leaves the list unchanged.
pub fn mark_exercise_complete(profile: &UserProfile, exercise_id: &str) -> ProfilePatch {
    let mut completed = profile.completed_exercises.clone().unwrap_or_default();
    if !completed.iter().any(|id| id == exercise_id) {
        completed.push(exercise_id.to_string());
    }
    ProfilePatch {
        completed_exercises: Some(completed),
        ..Default::default()
    }
}

/// Flips one schedule day to completed and patches the whole plan back.
/// Returns `None` when there is no plan or the index is out of range.
pub fn mark_day_completed(profile: &UserProfile, day_index: usize) -> Option<ProfilePatch> {
    let plan = profile.workout_plan.as_ref()?;
    let day = plan.weekly_schedule.get(day_index)?;

    let mut next = plan.clone();
    next.weekly_schedule[day_index] = day.with_completed(true);
    Some(ProfilePatch {
        workout_plan: Some(next),
        ..Default::default()
    })
}
