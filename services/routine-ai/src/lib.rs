//! Turns unreliable LLM output into a canonical multi-week workout routine:
//! envelope text location, fence and escape cleanup, balanced-block
//! extraction and repair, and shape normalization.

pub mod catalog;
pub mod envelope;
pub mod generator;
pub mod json_relaxed;
pub mod normalize;
pub mod prompt;
pub mod weight;
