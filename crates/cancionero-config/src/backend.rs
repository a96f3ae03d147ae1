use crate::io::atomic_write_str;
use crate::paths::{CancioneroPaths, ConfigError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;

// toml_edit para escribir sin perder los comentarios del usuario
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: CancioneroPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: CancioneroPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &CancioneroPaths {
    &self.paths
  }

  /// Como [`ConfigBackend::load_section`], pero sin archivo o sin sección
  /// devuelve `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let table: toml::Table = toml::from_str(&content)?;

    let Some(value) = table.get(section) else {
      return Ok(T::default());
    };

    decode(section, value)
  }
}

fn decode<T: DeserializeOwned>(section: &str, value: &toml::Value) -> Result<T, ConfigError> {
  value
    .clone()
    .try_into()
    .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let table: toml::Table = toml::from_str(&content)?;

    let value = table
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode(section, value)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Leer el documento actual, o empezar uno vacío.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) Serializar la sección con `toml` (serde). Sale sin cabecera:
    //      "foo = 1\nbar = 2\n"
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    // 3) Reinterpretarla como tabla de toml_edit.
    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;

    // 4) Reemplazar solo esa sección; el resto del archivo queda igual.
    doc[section] = Item::Table(section_doc.as_table().clone());

    atomic_write_str(&path, &doc.to_string())?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    enabled: bool,
    size: u32,
  }

  fn backend() -> (tempfile::TempDir, TomlConfigBackend) {
    let tmp = tempdir().unwrap();
    let paths = CancioneroPaths::from_base(tmp.path()).unwrap();
    (tmp, TomlConfigBackend::new(paths))
  }

  #[test]
  fn default_when_file_or_section_missing() {
    let (_tmp, backend) = backend();

    let loaded: Sample = backend.load_section_with_default("sample").unwrap();
    assert_eq!(loaded, Sample::default());

    fs::write(backend.paths().config_file(), "[other]\nx = 1\n").unwrap();
    let loaded: Sample = backend.load_section_with_default("sample").unwrap();
    assert_eq!(loaded, Sample::default());
  }

  #[test]
  fn load_section_requires_the_section() {
    let (_tmp, backend) = backend();
    fs::write(backend.paths().config_file(), "[other]\nx = 1\n").unwrap();

    let err = backend.load_section::<Sample>("sample").unwrap_err();
    assert!(matches!(err, ConfigError::Other(msg) if msg.contains("missing section [sample]")));
  }

  #[test]
  fn save_section_keeps_comments_and_other_sections() {
    let (_tmp, backend) = backend();
    let path = backend.paths().config_file();
    fs::write(&path, "# mantenido a mano\n[other]\nx = 1\n").unwrap();

    backend.save_section("sample", &Sample { enabled: true, size: 3 }).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("# mantenido a mano"));
    assert!(written.contains("[other]"));

    let loaded: Sample = backend.load_section("sample").unwrap();
    assert_eq!(loaded, Sample { enabled: true, size: 3 });
  }

  #[test]
  fn bad_section_type_is_reported() {
    let (_tmp, backend) = backend();
    fs::write(backend.paths().config_file(), "[sample]\nenabled = \"yes\"\nsize = 1\n").unwrap();

    let err = backend.load_section::<Sample>("sample").unwrap_err();
    assert!(matches!(err, ConfigError::Other(msg) if msg.starts_with("decode section [sample]")));
  }
}
