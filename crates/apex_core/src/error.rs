use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("no drivers in the active roster")]
    EmptyRoster,

    #[error("unknown team: {0}")]
    UnknownTeam(String),

    #[error("season is complete: all {0} races have been run")]
    SeasonComplete(usize),

    #[error("roster invariant violated: {0}")]
    RosterInvariant(String),

    #[error("unsupported schema version: {0}")]
    SchemaVersion(u8),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl SimError {
    /// Invariant breaks indicate a logic defect rather than a runtime
    /// condition the host can recover from.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SimError::RosterInvariant(_))
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            SimError::Deserialization(err.to_string())
        } else {
            SimError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
