use crate::GENRES;

/// Returns true if `genre` is one of the allowed [`GENRES`]. Matching is exact.
pub fn check_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}
