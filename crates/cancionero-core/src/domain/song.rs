use crate::domain::ids::{ArtistId, SongId};
use serde::{Deserialize, Serialize};

/// La Canción (Song): el extremo "pertenece a" de la relación.
///
/// Solo se construye a través de
/// [`SongRegistry::create_song`](crate::registry::SongRegistry::create_song),
/// que la registra en el mismo momento. El artista solo puede cambiarse
/// desde el registro, así el índice interno nunca queda desincronizado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  /// Identificador único de la canción dentro del sistema.
  pub id: SongId,
  /// El título de la canción.
  pub name: String,
  /// Género o categoría libre ("pop", "rock"...).
  pub genre: String,
  /// Artista actual, si lo hay.
  pub(crate) artist_id: Option<ArtistId>,
}

impl Song {
  pub(crate) fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
    Song { id: SongId::new(), name: name.into(), genre: genre.into(), artist_id: None }
  }

  pub fn artist_id(&self) -> Option<ArtistId> {
    self.artist_id
  }

  /// `true` si la canción pertenece actualmente a `artist_id`.
  pub fn belongs_to(&self, artist_id: ArtistId) -> bool {
    self.artist_id == Some(artist_id)
  }
}
