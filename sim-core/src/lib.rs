//! Core 2-D gravitational N-body simulation library.
//!
//! Main components:
//! - [`vector`] — the `Vector2D` value type.
//! - [`body`] — point masses and their position trails.
//! - [`body_set`] — the ordered body collection and spawning.
//! - [`bounds`] — simulation area and wrap-around.
//! - [`force_buffer`] — per-tick scratch buffer of net forces.
//! - [`phases`] — force accumulation and integration for one tick.
//! - [`simulation`] — engine that owns bodies and steps them.
//! - [`clock`] — fixed-timestep scheduling for hosts.
//! - [`config`] — simulation constants, loadable from YAML.
//! - [`types`] — shared type aliases and IDs.

pub mod body;
pub mod body_set;
pub mod bounds;
pub mod clock;
pub mod config;
pub mod force_buffer;
pub mod phases;
pub mod simulation;
pub mod types;
pub mod vector;

pub use body::{Body, BodyError, Trail};
pub use bounds::Bounds;
pub use config::{Config, ConfigError, SpawnRanges};
pub use simulation::Simulation;
pub use vector::Vector2D;
