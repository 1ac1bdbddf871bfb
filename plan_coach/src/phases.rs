use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanDuration {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl PlanDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanDuration::OneMonth => "1-month",
            PlanDuration::ThreeMonths => "3-month",
            PlanDuration::SixMonths => "6-month",
            PlanDuration::OneYear => "1-year",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PlanDuration::OneMonth => "1 Month Plan",
            PlanDuration::ThreeMonths => "3 Month Plan",
            PlanDuration::SixMonths => "6 Month Plan",
            PlanDuration::OneYear => "1 Year Plan",
        }
    }

    pub fn focus(&self) -> &'static str {
        match self {
            PlanDuration::OneMonth => "Foundation building and habit formation",
            PlanDuration::ThreeMonths => "Significant body composition changes",
            PlanDuration::SixMonths => "Major strength and physique improvements",
            PlanDuration::OneYear => "Elite fitness level achievement",
        }
    }
}

impl fmt::Display for PlanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown plan duration: {0} (expected 1-month, 3-month, 6-month or 1-year)")]
pub struct ParseDurationError(pub String);

impl FromStr for PlanDuration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-month" => Ok(PlanDuration::OneMonth),
            "3-month" => Ok(PlanDuration::ThreeMonths),
            "6-month" => Ok(PlanDuration::SixMonths),
            "1-year" => Ok(PlanDuration::OneYear),
            other => Err(ParseDurationError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseRecommendation {
    pub phase: String,
    pub weeks: String,
    pub focus: String,
    pub workouts: Vec<String>,
}

fn phase(name: &str, weeks: &str, focus: &str, workouts: &[&str]) -> PhaseRecommendation {
    PhaseRecommendation {
        phase: name.to_string(),
        weeks: weeks.to_string(),
        focus: focus.to_string(),
        workouts: workouts.iter().map(|w| w.to_string()).collect(),
    }
}

/// The canned three-phase progression shown after picking a plan
/// duration. The same three phases regardless of duration; the chosen
/// duration only labels the surrounding screen.
pub fn phase_recommendations(_duration: PlanDuration) -> Vec<PhaseRecommendation> {
    vec![
        phase(
            "Phase 1: Foundation",
            "1-4",
            "Building base fitness and movement quality",
            &[
                "Full body workouts 3x/week",
                "Cardio 2x/week",
                "Rest and recovery",
            ],
        ),
        phase(
            "Phase 2: Progression",
            "5-8",
            "Increasing intensity and volume",
            &[
                "Upper/Lower split 4x/week",
                "HIIT cardio 2x/week",
                "Flexibility training",
            ],
        ),
        phase(
            "Phase 3: Specialization",
            "9-12",
            "Goal-specific training focus",
            &[
                "Targeted muscle groups",
                "Advanced techniques",
                "Performance tracking",
            ],
        ),
    ]
}
