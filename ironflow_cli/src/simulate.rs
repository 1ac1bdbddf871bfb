use ironflow_core::flow::{FlowController, FlowEvent, StepId};
use log::info;
use ironflow_core::progress::{achievements, completion_patch, completion_report, WorkoutOutcome};
use ironflow_core::timer::{ExerciseTimer, Phase, TickOutcome, TimerConfig};
use plan_coach::{select_plan, today_workout, Advisor, CannedAdvisor};
use profile_schema::{BodyComposition, Gender, PrimaryGoal, ProfilePatch};

// Fixed stand-ins for wall-clock values, so runs are reproducible.
const SESSION_DATE: &str = "2024-03-04";
const SELECTED_AT: &str = "2024-03-04T09:00:00Z";

/// Scripted end-to-end session: onboarding patches, plan selection,
/// today's workout, one timed exercise and the completion report.
pub fn run_session(sets: u32) -> anyhow::Result<()> {
    let mut flow = FlowController::new();
    info!("scripted session begins ({sets} sets)");

    println!("Session start at step '{}'", flow.current_step());

    // Onboarding screens, each committing its patch before moving on.
    flow.update(ProfilePatch {
        email: Some("user@example.com".to_string()),
        ..Default::default()
    });
    flow.next(); // user-details
    flow.update(ProfilePatch {
        height_cm: Some(170.0),
        weight_kg: Some(70.0),
        gender: Some(Gender::Male),
        ..Default::default()
    });
    flow.next(); // goals
    flow.update(ProfilePatch {
        primary_goal: Some(PrimaryGoal::LoseWeight),
        ..Default::default()
    });
    flow.next(); // body-composition
    flow.update(ProfilePatch {
        body_composition: Some(BodyComposition {
            body_fat: Some(18.5),
            muscle_mass: Some(42.0),
            visceral_fat: Some(7.0),
            bmr: Some(1650.0),
        }),
        ..Default::default()
    });
    flow.next(); // specific-goals
    flow.update(ProfilePatch {
        specific_goals: Some(vec!["toned arms".to_string(), "core strength".to_string()]),
        ..Default::default()
    });

    // Skip the model screens straight to plan selection.
    flow.go_to(StepId::WorkoutPlan);
    let plan = plan_coach::generate_plan(flow.profile());
    println!("Plan: {} ({})", plan.name, plan.focus);
    flow.update(ProfilePatch {
        workout_plan: Some(select_plan(plan, SELECTED_AT)),
        ..Default::default()
    });

    flow.go_to(StepId::DailyWorkout);
    let workout = today_workout(flow.profile(), 1);
    println!(
        "Today: {} - {} ({}, ~{} kcal, {} exercises)",
        workout.day,
        workout.focus,
        workout.duration,
        workout.estimated_calories,
        workout.exercises.len()
    );

    let exercise = workout
        .exercises
        .first()
        .cloned()
        .unwrap_or_else(|| plan_coach::exercise_by_name("Push-ups"));
    flow.update(ProfilePatch {
        current_exercise: Some(exercise.clone()),
        ..Default::default()
    });

    flow.go_to(StepId::WorkoutTimer);
    let config = TimerConfig {
        total_sets: sets,
        ..TimerConfig::for_exercise(&exercise)
    };
    let mut timer = ExerciseTimer::new(config)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    run_timer(&mut timer, &exercise.name);

    // Completion: report, counters, achievements.
    flow.go_to(StepId::WorkoutCompletion);
    let outcome = WorkoutOutcome {
        workout_name: workout.focus.clone(),
        duration: workout.duration.clone(),
        calories_burned: workout.estimated_calories,
        exercises_completed: 1,
        total_exercises: workout.exercises.len().max(1) as u32,
        kind: "strength".to_string(),
    };
    let seq = flow
        .profile()
        .workout_reports
        .as_ref()
        .map_or(0, |r| r.len())
        + 1;
    let report = completion_report(&outcome, SESSION_DATE, seq);
    let earned = achievements(seq, &report);
    flow.update(completion_patch(flow.profile(), report.clone()));

    println!(
        "Report: {} | {} | {} kcal | {}% complete",
        report.workout_name, report.duration, report.calories_burned, report.completion_rate
    );
    for achievement in &earned {
        println!("Achievement: {achievement}");
    }

    let advice = CannedAdvisor::new().advise("I want to build more muscle");
    println!("Coach: {}", advice.reply);

    flow.go_to(StepId::Reports);
    println!(
        "Session end at step '{}' ({} workouts, {} kcal total)",
        flow.current_step(),
        flow.profile().total_workouts_completed.unwrap_or(0),
        flow.profile().total_calories_burned.unwrap_or(0)
    );

    let moves = flow
        .take_events()
        .iter()
        .filter(|e| matches!(e, FlowEvent::StepChanged(_)))
        .count();
    println!("Flow events: {moves} step changes");

    Ok(())
}

fn run_timer(timer: &mut ExerciseTimer, exercise_name: &str) {
    println!("Timer: {} x{} sets", exercise_name, timer.total_sets());
    println!("Tick | Set | Phase");
    println!("-----|-----|---------------------------");

    timer.start();
    let mut tick = 0u32;
    print_row(tick, timer);

    while timer.phase() != Phase::Completed {
        let outcome = timer.tick();
        tick += 1;
        // Only transition rows; second-by-second rows would drown the table.
        match outcome {
            TickOutcome::RestStarted
            | TickOutcome::SetStarted
            | TickOutcome::ExerciseCompleted => print_row(tick, timer),
            TickOutcome::Advanced => {}
            TickOutcome::Idle => break,
        }
    }
}

fn print_row(tick: u32, timer: &ExerciseTimer) {
    println!(
        "{tick:>4} | {:>3} | {}",
        timer.current_set(),
        timer.phase_label()
    );
}
