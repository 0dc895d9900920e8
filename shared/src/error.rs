use thiserror::Error;

/// Failures that stop a generation attempt. Everything upstream of the
/// final structure check prefers defaults over raising, so the surface
/// here is deliberately small: the caller either gets a full canonical
/// routine or one of these.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("vendor network error: {0}")]
    Network(String),
    #[error("vendor http error: {0}")]
    Http(u16),
    #[error("vendor returned an empty body")]
    EmptyResponse,
    #[error("no balanced JSON block found in model output")]
    UnbalancedJson,
    #[error("invalid JSON after repair: {0}")]
    InvalidJson(String),
    #[error("unexpected routine structure: {0}")]
    Structure(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
