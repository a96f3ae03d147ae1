mod index;

use std::collections::{HashMap, btree_set};
use std::slice;

use tracing::debug;

use crate::config::RegistryConfig;
use crate::domain::{Artist, ArtistId, Song, SongId};
use crate::errors::CoreError;

use self::index::ArtistIndex;

/// Registro de todas las canciones creadas, en orden de inserción.
///
/// Es la única fuente de verdad de la relación artista/canción:
/// - cada canción aparece exactamente una vez, desde su creación,
/// - nunca se eliminan canciones,
/// - la vista "canciones de un artista" se deriva filtrando este registro.
///
/// Con `index_by_artist` activado se mantiene además un [`ArtistIndex`]
/// interno. El resultado de las consultas es idéntico con o sin índice.
#[derive(Debug, Default)]
pub struct SongRegistry {
  songs: Vec<Song>,
  positions: HashMap<SongId, usize>,
  by_artist: Option<ArtistIndex>,
}

impl SongRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: &RegistryConfig) -> Self {
    Self {
      songs: Vec::with_capacity(config.capacity_hint()),
      positions: HashMap::with_capacity(config.capacity_hint()),
      by_artist: config.index_by_artist.then(ArtistIndex::default),
    }
  }

  /// Crea una canción sin artista y la registra al final.
  pub fn create_song(&mut self, name: impl Into<String>, genre: impl Into<String>) -> SongId {
    let song = Song::new(name, genre);
    let id = song.id;
    self.register(song);
    id
  }

  fn register(&mut self, song: Song) {
    let position = self.songs.len();
    debug!(song_id = %song.id, name = %song.name, position, "registered song");
    self.positions.insert(song.id, position);
    self.songs.push(song);
  }

  /// Todas las canciones, en orden de inserción.
  pub fn all(&self) -> &[Song] {
    &self.songs
  }

  pub fn get(&self, id: SongId) -> Option<&Song> {
    self.positions.get(&id).map(|&position| &self.songs[position])
  }

  pub fn len(&self) -> usize {
    self.songs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.songs.is_empty()
  }

  pub fn is_indexed(&self) -> bool {
    self.by_artist.is_some()
  }

  /// Asigna `artist` como artista de la canción, reemplazando el anterior.
  ///
  /// No hay limpieza recíproca que hacer: el artista anterior deja de ver la
  /// canción en cuanto se vuelva a consultar.
  pub fn set_artist(&mut self, song_id: SongId, artist: &Artist) -> Result<(), CoreError> {
    let position = *self.positions.get(&song_id).ok_or(CoreError::SongNotFound(song_id))?;
    let previous = self.songs[position].artist_id.replace(artist.id);

    if let Some(index) = &mut self.by_artist {
      if let Some(previous) = previous {
        index.remove(previous, position);
      }
      index.insert(artist.id, position);
    }

    debug!(song_id = %song_id, artist_id = %artist.id, ?previous, "song artist set");
    Ok(())
  }

  /// Canciones cuyo artista actual es `artist_id`, en orden de registro.
  ///
  /// Es perezoso y se recalcula en cada llamada.
  pub fn songs_by(&self, artist_id: ArtistId) -> SongsBy<'_> {
    let source = match &self.by_artist {
      Some(index) => Source::Indexed { songs: &self.songs, positions: index.get(artist_id) },
      None => Source::Scan { songs: self.songs.iter(), artist_id },
    };
    SongsBy { source }
  }
}

/// Iterador devuelto por [`SongRegistry::songs_by`].
#[derive(Debug)]
pub struct SongsBy<'a> {
  source: Source<'a>,
}

#[derive(Debug)]
enum Source<'a> {
  Scan { songs: slice::Iter<'a, Song>, artist_id: ArtistId },
  Indexed { songs: &'a [Song], positions: Option<btree_set::Iter<'a, usize>> },
}

impl<'a> Iterator for SongsBy<'a> {
  type Item = &'a Song;

  fn next(&mut self) -> Option<Self::Item> {
    match &mut self.source {
      Source::Scan { songs, artist_id } => {
        let artist_id = *artist_id;
        songs.find(|song| song.belongs_to(artist_id))
      }
      Source::Indexed { songs, positions } => {
        let songs: &'a [Song] = *songs;
        positions.as_mut()?.next().map(|&position| &songs[position])
      }
    }
  }
}
