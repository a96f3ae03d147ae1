use indexmap::IndexMap;
use tracing::debug;

use crate::config::RegistryConfig;
use crate::domain::{Artist, ArtistId, Song, SongId};
use crate::errors::CoreError;
use crate::registry::SongRegistry;

/// Catálogo en memoria: artistas conocidos + registro de canciones.
///
/// El catálogo guarda a los artistas solo para poder resolver un `ArtistId`
/// a su nombre. Qué canciones pertenecen a quién se decide siempre en el
/// [`SongRegistry`].
#[derive(Debug, Default)]
pub struct Catalog {
  artists: IndexMap<ArtistId, Artist>,
  songs: SongRegistry,
}

impl Catalog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: &RegistryConfig) -> Self {
    Self { artists: IndexMap::new(), songs: SongRegistry::with_config(config) }
  }

  // -------- COMMAND (write) --------

  pub fn create_artist(&mut self, name: impl Into<String>) -> ArtistId {
    self.insert_artist(Artist::new(name))
  }

  /// Añade un artista construido fuera del catálogo.
  pub fn insert_artist(&mut self, artist: Artist) -> ArtistId {
    let id = artist.id;
    debug!(artist_id = %id, name = %artist.name, "artist added to catalog");
    self.artists.insert(id, artist);
    id
  }

  pub fn create_song(&mut self, name: impl Into<String>, genre: impl Into<String>) -> SongId {
    self.songs.create_song(name, genre)
  }

  /// Cambia el artista de una canción. Es la única escritura que crea la
  /// relación.
  pub fn set_artist(&mut self, song_id: SongId, artist_id: ArtistId) -> Result<(), CoreError> {
    let artist = self.artists.get(&artist_id).ok_or(CoreError::ArtistNotFound(artist_id))?;
    self.songs.set_artist(song_id, artist)
  }

  /// Lado "tiene muchas" de [`Catalog::set_artist`]; no guarda nada más.
  pub fn add_song(&mut self, artist_id: ArtistId, song_id: SongId) -> Result<(), CoreError> {
    self.set_artist(song_id, artist_id)
  }

  /// Crea una canción y se la asigna al artista.
  ///
  /// El artista se valida antes de crear nada, así un id desconocido no deja
  /// canciones huérfanas en el registro.
  pub fn add_song_by_name(
    &mut self,
    artist_id: ArtistId,
    name: impl Into<String>,
    genre: impl Into<String>,
  ) -> Result<SongId, CoreError> {
    self.ensure_artist(artist_id)?;
    let song_id = self.songs.create_song(name, genre);
    self.add_song(artist_id, song_id)?;
    Ok(song_id)
  }

  // -------- QUERY (read) --------

  pub fn find_artist(&self, id: ArtistId) -> Option<&Artist> {
    self.artists.get(&id)
  }

  pub fn find_song(&self, id: SongId) -> Option<&Song> {
    self.songs.get(id)
  }

  /// Artistas en el orden en que se añadieron.
  pub fn list_artists(&self) -> Vec<&Artist> {
    self.artists.values().collect()
  }

  pub fn song_count(&self) -> usize {
    self.songs.len()
  }

  /// Canciones del artista, en orden de registro. Se recalcula en cada
  /// llamada.
  pub fn songs_of(&self, artist_id: ArtistId) -> Result<Vec<&Song>, CoreError> {
    self.ensure_artist(artist_id)?;
    Ok(self.songs.songs_by(artist_id).collect())
  }

  /// Nombre del artista actual de la canción.
  pub fn artist_name(&self, song_id: SongId) -> Result<&str, CoreError> {
    let song = self.songs.get(song_id).ok_or(CoreError::SongNotFound(song_id))?;
    let artist_id = song.artist_id().ok_or(CoreError::NoArtist(song_id))?;
    let artist = self.artists.get(&artist_id).ok_or(CoreError::ArtistNotFound(artist_id))?;
    Ok(&artist.name)
  }

  /// Géneros distintos de las canciones del artista, por orden de aparición.
  pub fn genres_of(&self, artist_id: ArtistId) -> Result<Vec<&str>, CoreError> {
    self.ensure_artist(artist_id)?;

    let mut genres: Vec<&str> = Vec::new();
    for song in self.songs.songs_by(artist_id) {
      if !genres.contains(&song.genre.as_str()) {
        genres.push(&song.genre);
      }
    }
    Ok(genres)
  }

  fn ensure_artist(&self, artist_id: ArtistId) -> Result<(), CoreError> {
    if self.artists.contains_key(&artist_id) {
      Ok(())
    } else {
      Err(CoreError::ArtistNotFound(artist_id))
    }
  }
}
