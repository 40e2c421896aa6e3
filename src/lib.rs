pub const GENRES: &[&str] = &["Hip-Hop", "Pop", "Jazz"];

mod album;
mod count;
mod error;
mod genre;

pub use album::Album;
pub use count::{AlbumCounter, album_count, increase_album_count, increase_album_count_by};
pub use error::{Error, Result};
pub use genre::check_genre;
