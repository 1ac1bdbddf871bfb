use ironflow_core::progress::{
    achievements, completion_patch, completion_report, mark_day_completed,
    mark_exercise_complete, WorkoutOutcome,
};
use profile_schema::{merge, DayPlan, UserProfile, WorkoutPlan};

fn outcome() -> WorkoutOutcome {
    WorkoutOutcome {
        workout_name: "Upper Body Strength".into(),
        duration: "42 minutes".into(),
        calories_burned: 285,
        exercises_completed: 5,
        total_exercises: 5,
        kind: "strength".into(),
    }
}

fn plan_with_days() -> WorkoutPlan {
    WorkoutPlan {
        id: "beginner-strength".into(),
        name: "Beginner Strength".into(),
        duration: "4 weeks".into(),
        frequency: "3x/week".into(),
        focus: "Building foundation strength".into(),
        current_week: 1,
        total_weeks: 4,
        weekly_schedule: vec![
            DayPlan {
                day: "Monday".into(),
                workout_name: "Upper Body".into(),
                exercises: vec!["Push-ups".into(), "Plank".into()],
                duration: "45 min".into(),
                difficulty: "Beginner".into(),
                completed: false,
                is_today: true,
            },
            DayPlan {
                day: "Wednesday".into(),
                workout_name: "Lower Body".into(),
                exercises: vec!["Squats".into(), "Lunges".into()],
                duration: "45 min".into(),
                difficulty: "Beginner".into(),
                completed: false,
                is_today: false,
            },
        ],
        selected_at: None,
        ai_generated: false,
    }
}

#[test]
fn report_computes_the_completion_rate() {
    let mut partial = outcome();
    partial.exercises_completed = 3;
    let report = completion_report(&partial, "2024-03-04", 1);

    assert_eq!(report.id, "workout_1");
    assert_eq!(report.completion_rate, 60);
    assert_eq!(report.kind, "strength");
    assert_eq!(report.date, "2024-03-04");
}

#[test]
fn completion_patch_appends_and_bumps_counters() {
    let profile = UserProfile {
        total_workouts_completed: Some(4),
        total_calories_burned: Some(1200),
        workout_reports: Some(vec![completion_report(&outcome(), "2024-03-01", 1)]),
        ..Default::default()
    };

    let report = completion_report(&outcome(), "2024-03-04", 2);
    let merged = merge(&profile, completion_patch(&profile, report));

    assert_eq!(merged.total_workouts_completed, Some(5));
    assert_eq!(merged.total_calories_burned, Some(1485));
    assert_eq!(merged.last_workout_date.as_deref(), Some("2024-03-04"));
    assert_eq!(merged.workout_reports.unwrap().len(), 2);
}

#[test]
fn completion_patch_starts_counters_from_zero() {
    let profile = UserProfile::default();
    let report = completion_report(&outcome(), "2024-03-04", 1);
    let merged = merge(&profile, completion_patch(&profile, report));

    assert_eq!(merged.total_workouts_completed, Some(1));
    assert_eq!(merged.total_calories_burned, Some(285));
    assert_eq!(merged.workout_reports.unwrap().len(), 1);
}

#[test]
fn achievement_milestones() {
    let perfect = completion_report(&outcome(), "2024-03-04", 1);
    assert_eq!(
        achievements(1, &perfect),
        vec!["First Workout Complete!", "Perfect Workout!"]
    );

    let mut big = outcome();
    big.calories_burned = 320;
    big.exercises_completed = 4;
    let report = completion_report(&big, "2024-03-04", 10);
    assert_eq!(
        achievements(10, &report),
        vec!["10 Workouts Milestone!", "Calorie Crusher!"]
    );

    let mut partial = outcome();
    partial.exercises_completed = 4;
    let ordinary = completion_report(&partial, "2024-03-04", 5);
    assert!(achievements(5, &ordinary).is_empty());
}

#[test]
fn completed_exercises_behave_as_a_set() {
    let profile = UserProfile::default();
    let profile = merge(&profile, mark_exercise_complete(&profile, "push-ups"));
    let profile = merge(&profile, mark_exercise_complete(&profile, "squats"));
    // Duplicate insert is a no-op.
    let profile = merge(&profile, mark_exercise_complete(&profile, "push-ups"));

    assert_eq!(
        profile.completed_exercises,
        Some(vec!["push-ups".to_string(), "squats".to_string()])
    );
}

#[test]
fn mark_day_completed_replaces_the_whole_plan() {
    let profile = UserProfile {
        workout_plan: Some(plan_with_days()),
        ..Default::default()
    };

    let patch = mark_day_completed(&profile, 0).unwrap();
    let merged = merge(&profile, patch);

    let schedule = merged.workout_plan.unwrap().weekly_schedule;
    assert!(schedule[0].completed);
    assert!(!schedule[1].completed);
}

#[test]
fn mark_day_completed_handles_missing_plan_and_bad_index() {
    assert!(mark_day_completed(&UserProfile::default(), 0).is_none());

    let profile = UserProfile {
        workout_plan: Some(plan_with_days()),
        ..Default::default()
    };
    assert!(mark_day_completed(&profile, 7).is_none());
}
