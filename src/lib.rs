//! # arcade_objectpool
//!
//! Frame-driven object pooling for arcade game entities: recycle enemies,
//! projectiles, and effects between Active and Inactive instead of paying
//! allocation and spawn churn every frame.
//!
//! ## Features
//!
//! - Active/Inactive lifecycle state machine shared by every pooled entity
//! - Per-subtype pool containers with warm-up and grow-on-exhaustion
//! - A controller per entity family: uniform random subtype selection,
//!   family-wide reset and per-frame advance
//! - Explicit `advance(delta_seconds)` ticking: the owning loop drives
//!   everything, single-threaded and deterministic
//! - Typed gameplay event bus (death notifications, pickups)
//! - High-score table and lifetime statistics bookkeeping
//! - Pool metrics with Prometheus text export, plus health reporting
//! - Ready-made entity types for a top-down shooter
//!
//! ## Quick Start
//!
//! ```rust
//! use arcade_objectpool::{PoolContainer, PoolObject};
//! use arcade_objectpool::entities::{Projectile, Vec2};
//!
//! let mut pool = PoolContainer::new("projectile", Box::new(|| Some(Projectile::new())));
//! pool.warm_up(16);
//!
//! // A spawner acquires, positions, then activates.
//! let shot = pool.acquire().unwrap();
//! {
//!     let mut shot = shot.borrow_mut();
//!     shot.activate();
//!     shot.set_position(Vec2::ZERO);
//!     shot.set_direction(Vec2::new(0.0, 1.0));
//! }
//!
//! // The game loop ticks the pool once per frame; expired members
//! // deactivate themselves and become available again.
//! pool.advance(1.0 / 60.0);
//! assert_eq!(pool.active_count(), 1);
//! ```

mod config;
mod container;
mod controller;
pub mod entities;
mod errors;
mod events;
mod health;
mod metrics;
mod poolable;
mod scoreboard;

pub use config::{PoolConfiguration, WarmupStrategy};
pub use container::{EntityFactory, PoolContainer, PoolRef};
pub use controller::{PoolController, PoolSpawnSpec};
pub use errors::{PoolError, PoolResult};
pub use events::{EventBus, GameEvent, SubscriptionId};
pub use health::HealthStatus;
pub use metrics::{MetricsExporter, PoolMetrics};
pub use poolable::{PoolObject, PoolState};
pub use scoreboard::{
    GameStats, HighScoreEntry, HighScoreTable, INVALID_SHIP_INDEX, MAX_HIGH_SCORES,
};
