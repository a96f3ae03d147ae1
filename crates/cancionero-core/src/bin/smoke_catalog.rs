use anyhow::Result;
use cancionero_core::{Catalog, RegistryConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  let config = RegistryConfig::load()?;
  let mut catalog = Catalog::with_config(&config);

  let rick = catalog.create_artist("Rick Astley");
  let song = catalog.add_song_by_name(rick, "Never Gonna Give You Up", "pop")?;
  catalog.add_song_by_name(rick, "Together Forever", "pop")?;

  println!("Song {song} belongs to {}", catalog.artist_name(song)?);

  for s in catalog.songs_of(rick)? {
    println!("{} | {} | {}", s.id, s.name, s.genre);
  }

  Ok(())
}
