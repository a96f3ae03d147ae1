use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Declara un identificador opaco basado en UUID v4.
macro_rules! uuid_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct $name(Uuid);

    impl $name {
      /// Genera un identificador nuevo y único.
      pub fn new() -> Self {
        $name(Uuid::new_v4())
      }
    }

    impl Default for $name {
      fn default() -> Self {
        Self::new()
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }
  };
}

uuid_id! {
  /// Identificador de un artista.
  ///
  /// Es el *handle* que una canción guarda para apuntar a su artista: un
  /// valor `Copy`, sin propiedad ni conteo de referencias.
  ArtistId
}

uuid_id! {
  /// Identificador de una canción dentro del registro que la creó.
  SongId
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_are_unique_and_print_as_uuid() {
    let a = SongId::new();
    let b = SongId::default();

    assert_ne!(a, b);
    assert_eq!(a.to_string().len(), 36);
    assert_ne!(ArtistId::new().to_string(), ArtistId::new().to_string());
  }
}
