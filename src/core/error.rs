use thiserror::Error;

use crate::core::types::ActorId;

#[derive(Error, Debug)]
pub enum WarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid schedule for {day}: {reason}")]
    InvalidSchedule { day: String, reason: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Duplicate actor in snapshot: {0:?}")]
    DuplicateActor(ActorId),
}

pub type Result<T> = std::result::Result<T, WarError>;
