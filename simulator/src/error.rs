use thiserror::Error;

use shared_resources::{ConfigError, Move, MoveError};

#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid assigner input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("move {mv} is outside a building with {elevators} elevators and {floors} floors")]
    MoveOutOfRange {
        mv: Move,
        elevators: usize,
        floors: usize,
    },

    #[error("status display thread panicked")]
    DisplayPanicked,
}
