pub mod artist;
pub mod ids;
pub mod song;

pub use artist::Artist;
pub use ids::{ArtistId, SongId};
pub use song::Song;
