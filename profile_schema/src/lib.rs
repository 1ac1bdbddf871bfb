pub mod plan;
pub mod profile;
pub mod report;
pub mod settings;

pub use plan::{DayPlan, ExerciseSpec, WorkoutPlan};
pub use profile::{
    merge, BodyComposition, Gender, ParseGoalError, PrimaryGoal, ProfilePatch, UserProfile,
};
pub use report::{DailyProgress, WorkoutReport};
pub use settings::{AppSettings, DistanceUnit, WeightUnit};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn primary_goal_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_value(PrimaryGoal::LoseWeight).unwrap();
        assert_eq!(json, "lose-weight");

        let parsed: PrimaryGoal = serde_json::from_str("\"gain-weight\"").unwrap();
        assert_eq!(parsed, PrimaryGoal::GainWeight);

        assert_eq!(PrimaryGoal::from_str("maintain"), Ok(PrimaryGoal::Maintain));
        assert!(PrimaryGoal::from_str("bulk").is_err());
    }

    #[test]
    fn profile_serializes_camel_case_and_skips_empty_fields() {
        let profile = UserProfile {
            height_cm: Some(170.0),
            gender: Some(Gender::Male),
            ..Default::default()
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["heightCm"], 170.0);
        assert_eq!(json["gender"], "male");
        assert!(json.get("weightKg").is_none());
        assert!(json.get("workoutPlan").is_none());
    }

    #[test]
    fn report_kind_serializes_as_type() {
        let report = WorkoutReport {
            id: "workout_1".into(),
            date: "2024-01-01".into(),
            workout_name: "Upper Body Strength".into(),
            duration: "42 minutes".into(),
            calories_burned: 285,
            exercises_completed: 5,
            total_exercises: 5,
            completion_rate: 100,
            kind: "strength".into(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "strength");
        assert_eq!(json["caloriesBurned"], 285);
    }

    #[test]
    fn day_plan_flags_default_to_false() {
        let json = r#"{
            "day": "Monday",
            "workoutName": "Upper Body",
            "exercises": ["Push-ups"],
            "duration": "45 min",
            "difficulty": "Beginner"
        }"#;

        let day: DayPlan = serde_json::from_str(json).unwrap();
        assert!(!day.completed);
        assert!(!day.is_today);
    }

    #[test]
    fn settings_defaults_match_the_settings_screen() {
        let settings = AppSettings::default();
        assert!(settings.notifications);
        assert!(!settings.auto_next_exercise);
        assert!(!settings.share_progress);
        assert_eq!(settings.default_rest_time_secs, 60);
        assert_eq!(settings.workout_intensity, 7);
        assert_eq!(settings.weight_unit, WeightUnit::Kg);
        assert_eq!(settings.distance_unit, DistanceUnit::Km);

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["weightUnit"], "kg");
        assert_eq!(json["distanceUnit"], "km");
        assert_eq!(json["defaultRestTimeSecs"], 60);
    }

    #[test]
    fn merge_overwrites_present_keys_and_keeps_the_rest() {
        let profile = UserProfile {
            height_cm: Some(170.0),
            weight_kg: Some(70.0),
            ..Default::default()
        };

        let merged = merge(
            &profile,
            ProfilePatch {
                gender: Some(Gender::Male),
                ..Default::default()
            },
        );

        assert_eq!(merged.height_cm, Some(170.0));
        assert_eq!(merged.weight_kg, Some(70.0));
        assert_eq!(merged.gender, Some(Gender::Male));
    }

    #[test]
    fn merge_replaces_nested_objects_in_full() {
        let profile = UserProfile {
            body_composition: Some(BodyComposition {
                body_fat: Some(18.0),
                muscle_mass: Some(40.0),
                visceral_fat: None,
                bmr: None,
            }),
            ..Default::default()
        };

        // A patched bodyComposition carrying only bmr replaces the whole
        // sub-object; bodyFat and muscleMass do not survive the merge.
        let merged = merge(
            &profile,
            ProfilePatch {
                body_composition: Some(BodyComposition {
                    bmr: Some(1650.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );

        let comp = merged.body_composition.unwrap();
        assert_eq!(comp.bmr, Some(1650.0));
        assert_eq!(comp.body_fat, None);
        assert_eq!(comp.muscle_mass, None);
    }

    #[test]
    fn merge_is_idempotent() {
        let patch = ProfilePatch {
            height_cm: Some(180.0),
            specific_goals: Some(vec!["toned arms".into()]),
            ..Default::default()
        };

        let once = merge(&UserProfile::default(), patch.clone());
        let twice = merge(&once, patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_accumulates_across_screens() {
        // Profile starts empty; two screens patch in sequence.
        let profile = UserProfile::default()
            .merged(ProfilePatch {
                height_cm: Some(170.0),
                weight_kg: Some(70.0),
                ..Default::default()
            })
            .merged(ProfilePatch {
                gender: Some(Gender::Male),
                ..Default::default()
            });

        assert_eq!(profile.height_cm, Some(170.0));
        assert_eq!(profile.weight_kg, Some(70.0));
        assert_eq!(profile.gender, Some(Gender::Male));
    }
}
