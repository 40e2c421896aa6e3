use log::debug;
use serde::Serialize;

use crate::count::{ALBUM_COUNT, AlbumCounter};
use crate::error::{Error, Result};
use crate::genre;

/// An album with a validated genre.
///
/// The release date is stored as given; `D` can be any date-like value.
/// Every successfully constructed album is counted exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album<D = String> {
    genre: String,
    release_date: D,
}

impl Album {
    pub const GENRES: &'static [&'static str] = crate::GENRES;

    pub fn check_genre(genre: &str) -> bool {
        genre::check_genre(genre)
    }
}

impl<D> Album<D> {
    /// Validates `genre` and, if allowed, bumps the process-wide album count and
    /// returns the album.
    /// Rejected genres leave the count untouched.
    pub fn new(genre: impl Into<String>, date: D) -> Result<Self> {
        Self::with_counter(genre, date, &ALBUM_COUNT)
    }

    /// Same as [`Album::new`], tallying into `counter` instead of the process-wide count.
    pub fn with_counter(
        genre: impl Into<String>,
        date: D,
        counter: &AlbumCounter,
    ) -> Result<Self> {
        let genre = genre.into();
        if !genre::check_genre(&genre) {
            debug!("Rejected album with genre {:?}", genre);
            return Err(Error::invalid_genre(genre));
        }

        let count = counter.increment();
        debug!("Album added: {} (count: {})", genre, count);

        Ok(Album {
            genre,
            release_date: date,
        })
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn release_date(&self) -> &D {
        &self.release_date
    }

    pub fn into_parts(self) -> (String, D) {
        (self.genre, self.release_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_genres_set_fields() {
        let counter = AlbumCounter::new();
        for genre in Album::GENRES {
            let album = Album::with_counter(*genre, "2020-01-01".to_string(), &counter).unwrap();
            assert_eq!(album.genre(), *genre);
            assert_eq!(album.release_date(), "2020-01-01");
        }
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn test_rock_rejected_without_counting() {
        let counter = AlbumCounter::new();
        let result = Album::with_counter("Rock", "1969", &counter);
        assert_eq!(result, Err(Error::invalid_genre("Rock")));
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_mixed_constructions_count_only_valid() {
        let counter = AlbumCounter::new();
        let genres = ["Hip-Hop", "Rock", "Pop", "Metal", "Jazz"];
        let accepted = genres
            .iter()
            .filter_map(|g| Album::with_counter(*g, (), &counter).ok())
            .count();
        assert_eq!(accepted, 3);
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn test_explicit_increment_independent_of_construction() {
        let counter = AlbumCounter::new();
        Album::with_counter("Pop", 1999u16, &counter).unwrap();
        counter.increase_by(5);
        assert_eq!(counter.get(), 6);
    }

    #[test]
    fn test_release_date_stored_as_given() {
        #[derive(Debug, Clone, PartialEq)]
        struct Date {
            year: u16,
            month: u8,
        }

        let counter = AlbumCounter::new();
        let date = Date { year: 1959, month: 8 };
        let album = Album::with_counter("Jazz", date.clone(), &counter).unwrap();
        assert_eq!(album.into_parts(), ("Jazz".to_string(), date));
    }

    #[test]
    fn test_genres_on_type() {
        assert_eq!(Album::GENRES, crate::GENRES);
        assert_eq!(Album::GENRES, ["Hip-Hop", "Pop", "Jazz"]);
    }

    #[test]
    fn test_check_genre_on_type() {
        assert!(Album::check_genre("Hip-Hop"));
        assert!(!Album::check_genre("Rock"));
    }

    #[test]
    fn test_serialize_json() {
        let counter = AlbumCounter::new();
        let album = Album::with_counter("Pop", "1982-11-30".to_string(), &counter).unwrap();
        let json = serde_json::to_value(&album).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "genre": "Pop", "release_date": "1982-11-30" })
        );
    }

    proptest! {
        /// Allowed genres always construct and keep the date untouched
        #[test]
        fn valid_genre_keeps_date(index in 0..3usize, date in "\\PC{0,30}") {
            let counter = AlbumCounter::new();
            let genre = Album::GENRES[index];
            let album = Album::with_counter(genre, date.clone(), &counter).unwrap();
            prop_assert_eq!(album.genre(), genre);
            prop_assert_eq!(album.release_date(), &date);
            prop_assert_eq!(counter.get(), 1);
        }

        /// Unknown genres never construct and never count
        #[test]
        fn invalid_genre_not_counted(genre in "\\PC{0,20}") {
            prop_assume!(!Album::check_genre(&genre));
            let counter = AlbumCounter::new();
            let result = Album::with_counter(genre.clone(), (), &counter);
            prop_assert_eq!(result, Err(Error::InvalidGenre { genre }));
            prop_assert_eq!(counter.get(), 0);
        }
    }
}
