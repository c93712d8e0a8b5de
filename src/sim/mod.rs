//! Simulation module
//!
//! All gameplay logic lives here. This module must stay presentation-free:
//! - Time only arrives through `Engine::tick`
//! - Seeded RNG only
//! - Entity sequences stay sorted by x
//! - Side effects leave through the event queue

pub mod collision;
pub mod config;
pub mod engine;
pub mod events;
pub mod physics;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::Hitbox;
pub use config::{Config, ConfigError};
pub use engine::Engine;
pub use events::{GameEvent, Listeners};
pub use state::{Collectible, GamePhase, Obstacle, Snapshot};
pub use tick::evaluate;
pub use world::Spawner;
