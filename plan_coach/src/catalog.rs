use profile_schema::{ExerciseSpec, WorkoutPlan};

fn plan(
    id: &str,
    name: &str,
    duration: &str,
    total_weeks: u32,
    frequency: &str,
    focus: &str,
) -> WorkoutPlan {
    WorkoutPlan {
        id: id.to_string(),
        name: name.to_string(),
        duration: duration.to_string(),
        frequency: frequency.to_string(),
        focus: focus.to_string(),
        current_week: 1,
        total_weeks,
        weekly_schedule: Vec::new(),
        selected_at: None,
        ai_generated: false,
    }
}

/// The four canned plans offered on the plan screen. Schedules ship
/// empty; weeks are filled in when a plan is selected.
pub fn predefined_plans() -> Vec<WorkoutPlan> {
    vec![
        plan(
            "beginner-strength",
            "Beginner Strength",
            "4 weeks",
            4,
            "3x/week",
            "Building foundation strength",
        ),
        plan(
            "muscle-building",
            "Muscle Building",
            "6 weeks",
            6,
            "4x/week",
            "Hypertrophy and muscle growth",
        ),
        plan(
            "fat-loss",
            "Fat Loss Circuit",
            "4 weeks",
            4,
            "5x/week",
            "High-intensity fat burning",
        ),
        plan(
            "full-body",
            "Full Body Workout",
            "5 weeks",
            5,
            "3x/week",
            "Complete body conditioning",
        ),
    ]
}

struct ExerciseRow {
    key: &'static str,
    id: &'static str,
    name: &'static str,
    sets: u32,
    reps: &'static str,
    duration: &'static str,
    rest_time: &'static str,
    difficulty: &'static str,
    target_muscles: &'static [&'static str],
    calories: u32,
    description: &'static str,
    benefits: &'static str,
}

const EXERCISES: &[ExerciseRow] = &[
    ExerciseRow {
        key: "Push-ups",
        id: "push-ups",
        name: "Push-ups",
        sets: 3,
        reps: "12-15",
        duration: "3 minutes",
        rest_time: "60 seconds",
        difficulty: "Beginner",
        target_muscles: &["Chest", "Shoulders", "Triceps"],
        calories: 45,
        description: "Classic upper body exercise targeting chest and arms",
        benefits: "Builds chest strength, improves core stability",
    },
    ExerciseRow {
        key: "Squats",
        id: "squats",
        name: "Bodyweight Squats",
        sets: 3,
        reps: "15-20",
        duration: "4 minutes",
        rest_time: "60 seconds",
        difficulty: "Beginner",
        target_muscles: &["Quadriceps", "Glutes", "Hamstrings"],
        calories: 60,
        description: "Fundamental lower body movement",
        benefits: "Strengthens legs, improves mobility",
    },
    ExerciseRow {
        key: "Plank",
        id: "plank",
        name: "Plank Hold",
        sets: 3,
        reps: "30-45 seconds",
        duration: "3 minutes",
        rest_time: "45 seconds",
        difficulty: "Intermediate",
        target_muscles: &["Core", "Shoulders", "Back"],
        calories: 35,
        description: "Isometric core strengthening exercise",
        benefits: "Builds core strength, improves posture",
    },
    ExerciseRow {
        key: "Lunges",
        id: "lunges",
        name: "Forward Lunges",
        sets: 3,
        reps: "10 each leg",
        duration: "5 minutes",
        rest_time: "60 seconds",
        difficulty: "Beginner",
        target_muscles: &["Quadriceps", "Glutes", "Calves"],
        calories: 55,
        description: "Unilateral leg strengthening exercise",
        benefits: "Improves balance, builds leg strength",
    },
    ExerciseRow {
        key: "Burpees",
        id: "burpees",
        name: "Burpees",
        sets: 3,
        reps: "8-12",
        duration: "4 minutes",
        rest_time: "90 seconds",
        difficulty: "High",
        target_muscles: &["Full Body", "Core", "Cardio"],
        calories: 80,
        description: "High-intensity full body exercise",
        benefits: "Burns calories, improves cardiovascular fitness",
    },
    ExerciseRow {
        key: "Mountain Climbers",
        id: "mountain-climbers",
        name: "Mountain Climbers",
        sets: 3,
        reps: "20 each leg",
        duration: "4 minutes",
        rest_time: "60 seconds",
        difficulty: "Intermediate",
        target_muscles: &["Core", "Shoulders", "Legs"],
        calories: 70,
        description: "High-intensity cardio and core exercise",
        benefits: "Burns calories, improves cardiovascular fitness",
    },
];

impl ExerciseRow {
    fn to_spec(&self) -> ExerciseSpec {
        ExerciseSpec {
            id: self.id.to_string(),
            name: self.name.to_string(),
            sets: self.sets,
            reps: self.reps.to_string(),
            duration: self.duration.to_string(),
            rest_time: self.rest_time.to_string(),
            difficulty: self.difficulty.to_string(),
            target_muscles: self.target_muscles.iter().map(|m| m.to_string()).collect(),
            calories: self.calories,
            description: self.description.to_string(),
            benefits: self.benefits.to_string(),
        }
    }
}

/// Looks a schedule entry's exercise name up in the catalog. Unknown
/// names get the generic fallback spec built from the name itself.
pub fn exercise_by_name(name: &str) -> ExerciseSpec {
    if let Some(row) = EXERCISES.iter().find(|row| row.key == name) {
        return row.to_spec();
    }
    ExerciseSpec {
        id: slug(name),
        name: name.to_string(),
        sets: 3,
        reps: "10-15".to_string(),
        duration: "3 minutes".to_string(),
        rest_time: "60 seconds".to_string(),
        difficulty: "Beginner".to_string(),
        target_muscles: vec!["General".to_string()],
        calories: 40,
        description: format!("{name} exercise"),
        benefits: "Improves fitness and strength".to_string(),
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}
