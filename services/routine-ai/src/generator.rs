//! Orchestrates one generation attempt: prompt → vendor call → extraction,
//! repair and normalization into the canonical routine. Holds no state
//! across requests; a failed attempt surfaces as an error and the caller
//! owns any fallback decision.

use tracing::{debug, warn};

use shared::deepseek_client::ChatVendor;
use shared::dto::{GenerateRequest, Routine};
use shared::error::Result;

use crate::{envelope, json_relaxed, normalize, prompt};

pub async fn generate_routine(vendor: &dyn ChatVendor, req: &GenerateRequest) -> Result<Routine> {
    let user_prompt = prompt::build_prompt(req.profile.as_ref());
    debug!("calling vendor with prompt length={} chars", user_prompt.len());

    let raw = vendor.chat(prompt::SYSTEM_PROMPT, &user_prompt).await?;
    normalize_raw_response(&raw, req)
}

/// The synchronous half of the pipeline, from raw vendor body to canonical
/// routine. Split out so tests can drive it with canned envelopes.
pub fn normalize_raw_response(raw: &str, req: &GenerateRequest) -> Result<Routine> {
    let profile = req.profile.as_ref();

    let text = envelope::extract_assistant_text(raw);
    debug!("assistant text length={} chars", text.len());

    let value = json_relaxed::parse_json_relaxed(&text)?;
    let routine = normalize::normalize_routine(&value, profile)?;

    if let Some(expected) = profile.and_then(|p| p.duration_weeks) {
        if routine.weeks.len() != expected as usize {
            warn!(
                "model returned {} weeks, profile asked for {}",
                routine.weeks.len(),
                expected
            );
        }
    }
    Ok(routine)
}
