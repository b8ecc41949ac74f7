//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from dungeon assembly and content generation so clients can
//! bubble them up with consistent context. Decision cores never produce these.
use game_content::GenerationError;
use game_core::DungeonError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Dungeon(#[from] DungeonError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("dungeon has no entrance")]
    MissingEntrance,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
