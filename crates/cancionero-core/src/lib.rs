pub mod config;
pub mod domain;
pub mod errors;
pub mod registry;
pub mod services;

pub use config::RegistryConfig;
pub use domain::{Artist, ArtistId, Song, SongId};
pub use errors::CoreError;
pub use registry::SongRegistry;
pub use services::Catalog;
