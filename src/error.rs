//! Error types for album construction.

use crate::GENRES;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Genre is not in the allowed set
    #[error("invalid genre `{genre}`, expected one of {}", GENRES.join(", "))]
    InvalidGenre { genre: String },
}

impl Error {
    pub fn invalid_genre(genre: impl Into<String>) -> Self {
        Self::InvalidGenre {
            genre: genre.into(),
        }
    }
}
