//! Resolves free-form weight expressions coming out of the model into a
//! display value: "<n.n> kg", the bodyweight marker, or the original text
//! when nothing applies. Never fails.

use once_cell::sync::Lazy;
use regex::Regex;

static KG_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:[.,][0-9]+)?)\s*(?i:kg)").unwrap());
static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]*\.?[0-9]+)\s*%$").unwrap());
static FACTOR_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([0-9]*\.?[0-9]+)\s*\*\s*(?:bodyweight|body_weight|body\s+weight|peso\s+corporal)$")
        .unwrap()
});
static BODY_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:bodyweight|body_weight|body\s+weight|peso\s+corporal)\s*\*\s*([0-9]*\.?[0-9]+)$")
        .unwrap()
});

/// Canonical display form for the "use the athlete's body mass" marker.
pub const BODYWEIGHT_LITERAL: &str = "Peso corporal";

fn fmt_kg(v: f64) -> String {
    format!("{:.1} kg", v)
}

fn known(body_weight: Option<f64>) -> Option<f64> {
    body_weight.filter(|w| *w > 0.0)
}

fn is_bodyweight_marker(lower: &str) -> bool {
    matches!(lower, "peso corporal" | "bodyweight" | "body weight" | "body_weight")
}

fn multiplier_factor(t: &str) -> Option<f64> {
    FACTOR_FIRST
        .captures(t)
        .or_else(|| BODY_FIRST.captures(t))
        .and_then(|c| c[1].parse::<f64>().ok())
}

/// Apply the resolution rules in order, first match wins.
pub fn resolve_weight(raw: &str, body_weight: Option<f64>) -> String {
    let t = raw.trim();
    if t.is_empty() {
        return String::new();
    }

    let lower = t.to_lowercase();

    // Already carries a unit: re-emit the numeric part in canonical form.
    if lower.contains("kg") {
        if let Some(c) = KG_VALUE.captures(t) {
            if let Ok(v) = c[1].replace(',', ".").parse::<f64>() {
                return fmt_kg(v);
            }
        }
        return t.to_string();
    }

    if is_bodyweight_marker(&lower) {
        return BODYWEIGHT_LITERAL.to_string();
    }

    if let Some(c) = PERCENT.captures(t) {
        if let (Some(bw), Ok(pct)) = (known(body_weight), c[1].parse::<f64>()) {
            return fmt_kg(bw * pct / 100.0);
        }
        return t.to_string();
    }

    if let Some(factor) = multiplier_factor(t) {
        if let Some(bw) = known(body_weight) {
            return fmt_kg(factor * bw);
        }
        return t.to_string();
    }

    if let Ok(v) = t.replace(',', ".").parse::<f64>() {
        return fmt_kg(v);
    }

    t.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_stays_blank() {
        assert_eq!(resolve_weight("", Some(80.0)), "");
        assert_eq!(resolve_weight("   ", None), "");
    }

    #[test]
    fn kg_values_are_reformatted() {
        assert_eq!(resolve_weight("37.5kg", None), "37.5 kg");
        assert_eq!(resolve_weight("40 kg", Some(80.0)), "40.0 kg");
        assert_eq!(resolve_weight("aprox 22,5 KG", None), "22.5 kg");
    }

    #[test]
    fn bodyweight_markers() {
        assert_eq!(resolve_weight("Peso corporal", Some(80.0)), "Peso corporal");
        assert_eq!(resolve_weight("bodyweight", None), "Peso corporal");
        assert_eq!(resolve_weight("Body Weight", Some(70.0)), "Peso corporal");
    }

    #[test]
    fn percentage_of_body_weight() {
        assert_eq!(resolve_weight("50%", Some(80.0)), "40.0 kg");
        assert_eq!(resolve_weight("75%", Some(80.0)), "60.0 kg");
        // Without a body weight the text survives untouched.
        assert_eq!(resolve_weight("50%", None), "50%");
    }

    #[test]
    fn multiplier_in_either_order() {
        assert_eq!(resolve_weight("0.5 * bodyWeight", Some(80.0)), "40.0 kg");
        assert_eq!(resolve_weight("bodyWeight * 0.5", Some(80.0)), "40.0 kg");
        assert_eq!(resolve_weight("0.4*body_weight", Some(80.0)), "32.0 kg");
        assert_eq!(resolve_weight("0.5 * bodyWeight", None), "0.5 * bodyWeight");
    }

    #[test]
    fn bare_number_gets_unit() {
        assert_eq!(resolve_weight("40", None), "40.0 kg");
        assert_eq!(resolve_weight("22,5", None), "22.5 kg");
    }

    #[test]
    fn unresolvable_text_passes_through() {
        assert_eq!(resolve_weight("a gusto", Some(80.0)), "a gusto");
        assert_eq!(resolve_weight("RPE 8", None), "RPE 8");
    }
}
