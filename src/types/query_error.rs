use thiserror::Error;

/// The caller supplied an unusable time window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Missing start or end date")]
    MissingParameter,

    #[error("Invalid {parameter} date-time '{value}'")]
    InvalidDateTime {
        parameter: &'static str,
        value: String,
    },
}
