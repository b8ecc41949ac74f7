use game_core::DungeonError;

/// Errors raised while generating a dungeon from content tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("a dungeon needs at least {minimum} rooms, got {requested}")]
    TooFewRooms { requested: usize, minimum: usize },

    #[error("content table `{0}` is empty")]
    EmptyTable(&'static str),

    #[error("range `{name}` is inverted: {min} > {max}")]
    InvalidRange {
        name: &'static str,
        min: i32,
        max: i32,
    },

    #[error(transparent)]
    Dungeon(#[from] DungeonError),
}
