//! Maps vendor-shaped routine JSON into the canonical document. Every
//! coercion here is total: missing or oddly-typed fields get positional or
//! generic defaults, and only the absence of a weeks collection is fatal.

use serde_json::Value;

use shared::dto::{Day, Routine, RoutineItem, UserProfile, Week};
use shared::error::{PipelineError, Result};

use crate::catalog;
use crate::weight;

/// Normalize a parsed model answer into a [`Routine`].
///
/// The weeks collection is taken from a `weeks` field, or from the top
/// level when the model answered with a bare array. A week keeps the day
/// count the model supplied; no padding to a 7-slot grid.
pub fn normalize_routine(root: &Value, profile: Option<&UserProfile>) -> Result<Routine> {
    let weeks_node = root
        .get("weeks")
        .filter(|w| w.is_array())
        .or_else(|| root.is_array().then_some(root))
        .and_then(Value::as_array)
        .ok_or_else(|| PipelineError::Structure("no 'weeks' collection".into()))?;

    let body_weight = profile.and_then(|p| p.body_weight_kg);

    let mut weeks = Vec::with_capacity(weeks_node.len());
    for (idx, wnode) in weeks_node.iter().enumerate() {
        let number = wnode
            .get("week")
            .and_then(Value::as_u64)
            .map(|n| n as u32)
            .unwrap_or(idx as u32 + 1);

        let days_node = wnode
            .get("days")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let days = days_node
            .iter()
            .enumerate()
            .map(|(didx, dnode)| normalize_day(dnode, didx as u32 + 1, body_weight))
            .collect();

        weeks.push(Week {
            week: number,
            days,
        });
    }

    if weeks.is_empty() {
        return Err(PipelineError::Structure("'weeks' collection is empty".into()));
    }
    Ok(Routine { weeks })
}

fn normalize_day(dnode: &Value, position: u32, body_weight: Option<f64>) -> Day {
    let day_of_week = ["dayOfWeek", "day", "weekday"]
        .iter()
        .find_map(|k| dnode.get(*k))
        .and_then(coerce_day_number)
        .unwrap_or(position);

    let mut items: Vec<RoutineItem> = ["items", "exercises", "exerciseList"]
        .iter()
        .find_map(|k| dnode.get(*k))
        .and_then(Value::as_array)
        .map(|nodes| nodes.iter().map(|n| normalize_item(n, body_weight)).collect())
        .unwrap_or_default();

    if items.is_empty() {
        items.push(RoutineItem::rest());
    }

    Day {
        day_of_week,
        items,
    }
}

fn coerce_day_number(v: &Value) -> Option<u32> {
    match v {
        Value::Number(n) => n.as_u64().map(|n| n as u32),
        Value::String(s) => {
            catalog::weekday_number(s).or_else(|| s.trim().parse::<u32>().ok())
        }
        _ => None,
    }
}

fn normalize_item(inode: &Value, body_weight: Option<f64>) -> RoutineItem {
    let name_field = inode
        .get("exerciseName")
        .or_else(|| inode.get("name"))
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let exercise_id = inode
        .get("exerciseId")
        .or_else(|| inode.get("id"))
        .map(scalar_text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| name_field.as_deref().map(catalog::slugify))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".into());

    let exercise_name = name_field.unwrap_or_else(|| exercise_id.clone());

    let group = inode
        .get("group")
        .or_else(|| inode.get("muscle"))
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| catalog::group_for_exercise(&exercise_name).map(str::to_string))
        .unwrap_or_else(|| "General".into());

    let sets = inode.get("sets").map(coerce_sets).unwrap_or(0);

    let reps = inode
        .get("reps")
        .map(|v| match v {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .unwrap_or_default();

    let weight_formula = inode
        .get("weightFormula")
        .map(scalar_text)
        .map(|raw| weight::resolve_weight(&raw, body_weight))
        .unwrap_or_default();

    let notes = match inode.get("notes") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };

    RoutineItem {
        exercise_id,
        exercise_name,
        group,
        sets,
        reps,
        weight_formula,
        notes,
    }
}

fn coerce_sets(v: &Value) -> u32 {
    match v {
        Value::Number(n) => n
            .as_u64()
            .map(|n| n as u32)
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u32))
            .unwrap_or(0),
        Value::String(s) => {
            let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    }
}

fn scalar_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
