use log::debug;
use profile_schema::{UserProfile, WorkoutPlan};

/// The "AI" plan: a fixed 6-week template with a focus line built from
/// the user's goals. Deterministic by design.
pub fn generate_plan(profile: &UserProfile) -> WorkoutPlan {
    let goal = profile
        .primary_goal
        .map(|g| g.as_str().to_string())
        .unwrap_or_else(|| "general fitness".to_string());
    let specifics = profile
        .specific_goals
        .as_deref()
        .unwrap_or_default()
        .join(", ");
    let focus = if specifics.is_empty() {
        format!("Customized for {goal}")
    } else {
        format!("Customized for {goal} with {specifics}")
    };
    debug!("generated personalized plan for {goal}");

    WorkoutPlan {
        id: "ai-generated".to_string(),
        name: "Personalized AI Plan".to_string(),
        duration: "6 weeks".to_string(),
        frequency: "4x/week".to_string(),
        focus,
        current_week: 1,
        total_weeks: 6,
        weekly_schedule: Vec::new(),
        selected_at: None,
        ai_generated: true,
    }
}

/// Stamps the selection moment and rewinds to week 1, the way the plan
/// screen submits its choice.
pub fn select_plan(mut plan: WorkoutPlan, selected_at: &str) -> WorkoutPlan {
    plan.selected_at = Some(selected_at.to_string());
    plan.current_week = 1;
    plan
}
