mod simulate;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use plan_coach::{phase_recommendations, PlanDuration};
use profile_schema::{PrimaryGoal, UserProfile, WorkoutPlan};

#[derive(Debug, Parser)]
#[command(name = "ironflow")]
#[command(about = "Fitness session core CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a scripted onboarding-to-completion session.
    Simulate {
        /// Sets for the timed exercise.
        #[arg(long, default_value_t = 3)]
        sets: u32,
    },
    /// Generate a workout plan as JSON.
    Plan {
        /// Primary goal: lose-weight, maintain or gain-weight.
        #[arg(long)]
        goal: String,
        /// Plan duration: 1-month, 3-month, 6-month or 1-year.
        #[arg(long, default_value = "3-month")]
        duration: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load a plan JSON and print a summary.
    Show { input: PathBuf },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Simulate { sets } => {
            simulate::run_session(sets).context("simulation failed")?;
        }
        Command::Plan {
            goal,
            duration,
            output,
        } => {
            let goal: PrimaryGoal = goal
                .parse()
                .map_err(|e: profile_schema::ParseGoalError| anyhow::anyhow!(e.to_string()))
                .context("invalid --goal")?;
            let duration: PlanDuration = duration
                .parse()
                .map_err(|e: plan_coach::ParseDurationError| anyhow::anyhow!(e.to_string()))
                .context("invalid --duration")?;

            let profile = UserProfile {
                primary_goal: Some(goal),
                ..Default::default()
            };
            let plan = plan_coach::generate_plan(&profile);

            let json = serde_json::to_string_pretty(&plan).context("failed to serialize plan")?;
            let out_path = output.unwrap_or_else(|| default_output_path(goal));
            fs::write(&out_path, json)
                .with_context(|| format!("failed to write: {}", out_path.display()))?;

            println!("wrote {} ({})", out_path.display(), duration.title());
            for phase in phase_recommendations(duration) {
                println!("  {} (weeks {}): {}", phase.phase, phase.weeks, phase.focus);
            }
        }
        Command::Show { input } => {
            let plan = load_plan_json(&input)
                .with_context(|| format!("show failed: {}", input.display()))?;
            print_plan(&plan);
        }
    }

    Ok(())
}

fn load_plan_json(path: &Path) -> anyhow::Result<WorkoutPlan> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read plan: {}", path.display()))?;
    let plan: WorkoutPlan = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse plan json: {}", path.display()))?;
    Ok(plan)
}

fn print_plan(plan: &WorkoutPlan) {
    println!("{} [{}]", plan.name, plan.id);
    println!("  {} | {} | week {}/{}", plan.duration, plan.frequency, plan.current_week, plan.total_weeks);
    println!("  focus: {}", plan.focus);
    if plan.ai_generated {
        println!("  ai-generated");
    }
    for day in &plan.weekly_schedule {
        let mark = if day.completed { "x" } else { " " };
        println!("  [{mark}] {}: {} ({})", day.day, day.workout_name, day.duration);
    }
}

fn default_output_path(goal: PrimaryGoal) -> PathBuf {
    PathBuf::from(format!("{}.plan.json", goal.as_str()))
}
