//! Static lookup tables: the per-group exercise catalog (shared by prompt
//! construction and muscle-group inference) and the weekday names. All of
//! them are read-only constants, safe to share across concurrent requests.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// (group, exercises) in the order they are listed in the prompt.
pub const EXERCISE_CATALOG: &[(&str, &[&str])] = &[
    (
        "Pecho",
        &[
            "Press de banca",
            "Press inclinado con mancuernas",
            "Aperturas con mancuernas",
            "Fondos en paralelas",
        ],
    ),
    (
        "Espalda",
        &[
            "Dominadas",
            "Remo con barra",
            "Peso muerto",
            "Jalón al pecho en polea",
        ],
    ),
    (
        "Hombros",
        &[
            "Press militar",
            "Elevaciones laterales",
            "Pájaros",
            "Encogimientos",
        ],
    ),
    (
        "Bíceps",
        &[
            "Curl con barra",
            "Curl alternado con mancuernas",
            "Curl en banco Scott",
        ],
    ),
    (
        "Tríceps",
        &["Fondos en paralelas", "Extensión en polea", "Press francés"],
    ),
    (
        "Piernas",
        &[
            "Sentadilla con barra",
            "Prensa de pierna",
            "Peso muerto rumano",
            "Zancadas",
            "Elevaciones de talones",
        ],
    ),
    (
        "Abdomen/Core",
        &[
            "Crunch abdominal",
            "Plancha",
            "Elevaciones de piernas colgado",
            "Rueda abdominal",
        ],
    ),
];

/// Lowercased, accent-folded exercise name → group.
static GROUP_BY_EXERCISE: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (group, names) in EXERCISE_CATALOG {
        for name in *names {
            map.insert(fold(name), *group);
        }
    }
    map
});

/// Weekday names in English and Spanish (accent-folded) → 1..7.
static WEEKDAYS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("monday", 1),
        ("lunes", 1),
        ("tuesday", 2),
        ("martes", 2),
        ("wednesday", 3),
        ("miercoles", 3),
        ("thursday", 4),
        ("jueves", 4),
        ("friday", 5),
        ("viernes", 5),
        ("saturday", 6),
        ("sabado", 6),
        ("sunday", 7),
        ("domingo", 7),
    ])
});

/// Lowercase and strip the Spanish diacritics that show up in exercise and
/// weekday names, so lookups are case- and accent-insensitive.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

pub fn weekday_number(name: &str) -> Option<u32> {
    WEEKDAYS.get(fold(name.trim()).as_str()).copied()
}

pub fn group_for_exercise(name: &str) -> Option<&'static str> {
    GROUP_BY_EXERCISE.get(fold(name.trim()).as_str()).copied()
}

/// Slug form of an exercise name, used when the model sent no usable id:
/// folded, whitespace collapsed to `_`, anything else non `[a-z0-9_-]` dropped.
pub fn slugify(name: &str) -> String {
    let mut out = String::new();
    let mut prev_sep = false;
    for c in fold(name.trim()).chars() {
        if c.is_whitespace() {
            if !prev_sep && !out.is_empty() {
                out.push('_');
                prev_sep = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            out.push(c);
            prev_sep = false;
        }
    }
    out.trim_end_matches('_').to_string()
}
