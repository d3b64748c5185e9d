//! Settings for the player: library location, progress cadence, scrubbing
//! and logging, loaded from an optional TOML file plus environment overrides.

mod load;
mod schema;

pub use schema::*;
