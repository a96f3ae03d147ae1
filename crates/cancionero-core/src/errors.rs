// crates/cancionero-core/src/errors.rs
use thiserror::Error;

use crate::domain::{ArtistId, SongId};

/// Error genérico del núcleo de Cancionero.
///
/// Las capas superiores (CLI, binarios de prueba, etc.) deberían mapear este
/// error a mensajes de usuario o logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
  /// Se pidió el artista de una canción que todavía no tiene ninguno.
  #[error("song {0} has no artist")]
  NoArtist(SongId),

  #[error("song not found: {0}")]
  SongNotFound(SongId),

  #[error("artist not found: {0}")]
  ArtistNotFound(ArtistId),
}
