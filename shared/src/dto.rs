use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub sex: Option<String>,
    /// Body mass in kg; drives resolution of relative weight formulas.
    #[serde(alias = "weight")]
    pub body_weight_kg: Option<f64>,
    pub height_cm: Option<u32>,
    pub level: Option<String>,
    pub goal: Option<String>,
    pub split: Option<String>,
    pub duration_weeks: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub profile: Option<UserProfile>,
}

/// Canonical routine document the pipeline guarantees on success.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Routine {
    pub weeks: Vec<Week>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Week {
    pub week: u32,
    pub days: Vec<Day>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// 1..7 by convention, not strictly enforced.
    pub day_of_week: u32,
    /// Never empty: a day without exercises carries one rest sentinel.
    pub items: Vec<RoutineItem>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutineItem {
    pub exercise_id: String,
    pub exercise_name: String,
    pub group: String,
    pub sets: u32,
    /// Kept as text: models answer "8-12" or "hasta el fallo" as often as a number.
    pub reps: String,
    pub weight_formula: String,
    pub notes: Option<String>,
}

impl RoutineItem {
    /// Sentinel inserted when a day arrives with no exercises at all.
    pub fn rest() -> Self {
        RoutineItem {
            exercise_id: "rest".into(),
            exercise_name: "Descanso".into(),
            group: "rest".into(),
            sets: 0,
            reps: String::new(),
            weight_formula: String::new(),
            notes: None,
        }
    }
}
