//! Canned coaching: plan catalog, "AI" plan generation, phase
//! recommendations, keyword advice and daily-workout resolution.
//! Everything is deterministic and synchronous; latency theatre belongs
//! to the presentation layer, not here.

pub mod advice;
pub mod catalog;
pub mod generate;
pub mod phases;
pub mod schedule;

pub use advice::{Advice, Advisor, CannedAdvisor};
pub use catalog::{exercise_by_name, predefined_plans};
pub use generate::{generate_plan, select_plan};
pub use phases::{phase_recommendations, ParseDurationError, PhaseRecommendation, PlanDuration};
pub use schedule::{today_workout, DailyWorkout};
