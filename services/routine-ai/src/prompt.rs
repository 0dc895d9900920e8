//! Builds the DeepSeek prompt: strict-JSON instructions, the exercise
//! catalog the model is allowed to pick from, and a profile summary.

use std::fmt::Display;
use std::fmt::Write;

use shared::dto::UserProfile;

use crate::catalog::EXERCISE_CATALOG;

pub const SYSTEM_PROMPT: &str = "Eres un asistente que responde SOLO con JSON válido.";

const OUTPUT_EXAMPLE: &str = "{ \"weeks\": [ { \"week\": 1, \"days\": [ { \"dayOfWeek\": 1, \
\"items\": [ { \"exerciseId\": \"press_banca\", \"exerciseName\": \"Press de banca\", \
\"group\": \"Pecho\", \"sets\": 3, \"reps\": 10, \"weightFormula\": \"40 kg\" } ] } ] } ] }";

fn fmt_opt<T: Display>(v: &Option<T>) -> String {
    v.as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".into())
}

pub fn build_prompt(profile: Option<&UserProfile>) -> String {
    let mut p = String::new();
    p.push_str("RESPONDE SÓLO con JSON válido. Sin explicaciones.\n");
    p.push_str("Formato estricto de salida (ejemplo):\n");
    p.push_str(OUTPUT_EXAMPLE);
    p.push_str("\n\n");

    p.push_str("USAR SOLO los ejercicios listados por grupo (no otros)...\n");
    for (group, names) in EXERCISE_CATALOG {
        let _ = writeln!(p, "{}: {}", group, names.join(", "));
    }
    p.push('\n');

    p.push_str("REGLAS:\n");
    p.push_str("- Cada item debe tener: exerciseId, exerciseName, group, sets, reps, weightFormula.\n");
    p.push_str("- Devuelve exactamente durationWeeks semanas solicitadas por el usuario.\n");
    p.push_str("- Si un día no tiene ejercicios devuelve un item con exerciseId \"rest\" y sets 0.\n");
    p.push_str("- weightFormula preferiblemente en kg (ej: \"37.5 kg\") o \"Peso corporal\".\n");
    p.push_str("- NO devuelvas texto fuera del JSON.\n\n");

    p.push_str("Usuario: ");
    match profile {
        Some(pr) => {
            let _ = write!(
                p,
                "name={}, age={}, sex={}, weight={}kg, heightCm={}cm, level={}, goal={}, split={}, durationWeeks={}.",
                fmt_opt(&pr.name),
                fmt_opt(&pr.age),
                fmt_opt(&pr.sex),
                fmt_opt(&pr.body_weight_kg),
                fmt_opt(&pr.height_cm),
                fmt_opt(&pr.level),
                fmt_opt(&pr.goal),
                fmt_opt(&pr.split),
                pr.duration_weeks.unwrap_or(4),
            );
        }
        None => p.push_str("perfil no proporcionado, usa valores por defecto."),
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_catalog_and_profile() {
        let profile = UserProfile {
            name: Some("Ana".into()),
            body_weight_kg: Some(62.5),
            duration_weeks: Some(6),
            ..UserProfile::default()
        };
        let p = build_prompt(Some(&profile));
        assert!(p.contains("Pecho: Press de banca"));
        assert!(p.contains("weight=62.5kg"));
        assert!(p.contains("durationWeeks=6."));
        assert!(p.contains("\"weeks\""));
    }

    #[test]
    fn prompt_without_profile_uses_defaults_line() {
        let p = build_prompt(None);
        assert!(p.contains("perfil no proporcionado"));
    }
}
