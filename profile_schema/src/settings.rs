use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lbs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
    Mi,
}

/// Flat toggle bag from the settings screen. Patched as one unit like
/// every other top-level profile field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub notifications: bool,
    pub workout_reminders: bool,
    pub progress_updates: bool,
    pub rest_timer_sound: bool,
    pub auto_next_exercise: bool,
    pub default_rest_time_secs: u32,
    /// 1-10 scale.
    pub workout_intensity: u8,
    pub dark_mode: bool,
    pub haptic_feedback: bool,
    pub auto_sync: bool,
    pub share_progress: bool,
    pub anonymous_data: bool,
    pub weight_unit: WeightUnit,
    pub distance_unit: DistanceUnit,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            workout_reminders: true,
            progress_updates: true,
            rest_timer_sound: true,
            auto_next_exercise: false,
            default_rest_time_secs: 60,
            workout_intensity: 7,
            dark_mode: true,
            haptic_feedback: true,
            auto_sync: true,
            share_progress: false,
            anonymous_data: true,
            weight_unit: WeightUnit::Kg,
            distance_unit: DistanceUnit::Km,
        }
    }
}
