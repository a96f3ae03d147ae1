use cancionero_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, TomlConfigBackend};
use serde::{Deserialize, Serialize};
use tracing::info;

const SECTION: &str = "registry";

/// Tope de `initial_capacity`: por encima solo se reserva esto y el registro
/// crece como cualquier `Vec`.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 16;

/// Sección `[registry]` del archivo de configuración.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct RegistryConfig {
  /// Mantener un índice artista -> canciones además del registro.
  ///
  /// No cambia ningún resultado, solo evita el escaneo lineal.
  #[serde(default)]
  pub index_by_artist: bool,

  /// Capacidad inicial reservada para el registro, acotada por
  /// [`MAX_INITIAL_CAPACITY`].
  #[serde(default)]
  pub initial_capacity: usize,
}

impl RegistryConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  /// Lee la sección (o sus valores por defecto) y la vuelve a escribir, así
  /// el usuario encuentra todas las claves en su archivo.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: RegistryConfig = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    info!(index_by_artist = cfg.index_by_artist, initial_capacity = cfg.initial_capacity, "registry config loaded");
    Ok(cfg)
  }

  /// `initial_capacity` ya acotada, lista para `with_capacity`.
  pub fn capacity_hint(&self) -> usize {
    self.initial_capacity.min(MAX_INITIAL_CAPACITY)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cancionero_config::CancioneroPaths;
  use tempfile::tempdir;

  #[test]
  fn missing_file_yields_defaults_and_writes_section() {
    let tmp = tempdir().unwrap();
    let paths = CancioneroPaths::from_base(tmp.path()).unwrap();
    let backend = TomlConfigBackend::new(paths.clone());

    let cfg = RegistryConfig::load_from(&backend).unwrap();

    assert_eq!(cfg, RegistryConfig::default());
    let written = std::fs::read_to_string(paths.config_file()).unwrap();
    assert!(written.contains("[registry]"));
    assert!(written.contains("index_by_artist = false"));
  }

  #[test]
  fn existing_section_is_read() {
    let tmp = tempdir().unwrap();
    let paths = CancioneroPaths::from_base(tmp.path()).unwrap();
    std::fs::write(paths.config_file(), "[registry]\nindex_by_artist = true\n").unwrap();
    let backend = TomlConfigBackend::new(paths);

    let cfg = RegistryConfig::load_from(&backend).unwrap();

    assert!(cfg.index_by_artist);
    assert_eq!(cfg.initial_capacity, 0);
  }

  #[test]
  fn huge_initial_capacity_is_capped() {
    let tmp = tempdir().unwrap();
    let paths = CancioneroPaths::from_base(tmp.path()).unwrap();
    std::fs::write(paths.config_file(), "[registry]\ninitial_capacity = 9223372036854775807\n").unwrap();
    let backend = TomlConfigBackend::new(paths);

    let cfg = RegistryConfig::load_from(&backend).unwrap();
    assert_eq!(cfg.initial_capacity, 9_223_372_036_854_775_807);
    assert_eq!(cfg.capacity_hint(), MAX_INITIAL_CAPACITY);

    let mut catalog = crate::Catalog::with_config(&cfg);
    let artist = catalog.create_artist("Rick Astley");
    let song = catalog.add_song_by_name(artist, "Never Gonna Give You Up", "pop").unwrap();
    assert_eq!(catalog.artist_name(song).unwrap(), "Rick Astley");
  }

  #[test]
  fn written_section_reloads_unchanged() {
    let tmp = tempdir().unwrap();
    let paths = CancioneroPaths::from_base(tmp.path()).unwrap();
    let backend = TomlConfigBackend::new(paths);
    let cfg = RegistryConfig { index_by_artist: true, initial_capacity: 128 };

    backend.save_section(SECTION, &cfg).unwrap();

    assert_eq!(RegistryConfig::load_from(&backend).unwrap(), cfg);
  }
}
