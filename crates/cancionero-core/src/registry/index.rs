use std::collections::{BTreeSet, HashMap, btree_set};

use crate::domain::ArtistId;

/// Índice artista -> posiciones en el registro.
///
/// Las posiciones se guardan ordenadas, así que recorrer el índice devuelve
/// las canciones en el mismo orden de inserción que un escaneo lineal.
#[derive(Debug, Default)]
pub(crate) struct ArtistIndex {
  index: HashMap<ArtistId, BTreeSet<usize>>,
}

impl ArtistIndex {
  pub(crate) fn insert(&mut self, artist_id: ArtistId, position: usize) {
    self.index.entry(artist_id).or_default().insert(position);
  }

  pub(crate) fn remove(&mut self, artist_id: ArtistId, position: usize) {
    if let Some(set) = self.index.get_mut(&artist_id) {
      set.remove(&position);
      if set.is_empty() {
        self.index.remove(&artist_id);
      }
    }
  }

  pub(crate) fn get(&self, artist_id: ArtistId) -> Option<btree_set::Iter<'_, usize>> {
    self.index.get(&artist_id).map(|set| set.iter())
  }

  #[cfg(test)]
  fn artists(&self) -> usize {
    self.index.len()
  }
}
