use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};

/// Representa a un artista dentro del catálogo.
///
/// Un artista no guarda ninguna colección de canciones: la relación vive
/// únicamente en cada [`Song`](crate::domain::song::Song), y la lista de
/// canciones de un artista siempre se calcula recorriendo el registro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  /// Identificador único del artista.
  pub id: ArtistId,

  /// Nombre principal (canónico) del artista.
  pub name: String,
}

impl Artist {
  /// Crea un artista nuevo con un identificador recién generado.
  ///
  /// No tiene efectos secundarios: el artista no queda registrado en
  /// ningún catálogo hasta que se inserta explícitamente.
  pub fn new(name: impl Into<String>) -> Self {
    Artist { id: ArtistId::new(), name: name.into() }
  }
}
