//! Poolable entity types for a top-down arcade shooter
//!
//! Each type embeds a [`PoolState`] and layers its own payload on the
//! lifecycle: position, movement vector, animation frame. Rendering,
//! collision detection, and audio stay with the host game; these types only
//! carry the simulation state those systems read.

use std::ops::{Add, Mul, Sub};

use rand::Rng;

use crate::events::{EventBus, GameEvent};
use crate::poolable::{PoolObject, PoolState};

/// Minimal 2D vector for entity positions and movement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit-length copy; the zero vector normalizes to itself.
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length > f32::EPSILON {
            Self::new(self.x / length, self.y / length)
        } else {
            Self::ZERO
        }
    }

    pub fn distance_to(self, other: Self) -> f32 {
        (other - self).length()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Hold-off before a freshly activated enemy starts homing, so the spawn
/// animation can telegraph where it will appear.
const ENEMY_SPAWN_DELAY_SECONDS: f32 = 0.3;

/// An enemy ship that homes toward a target point.
#[derive(Debug, Clone)]
pub struct Enemy {
    state: PoolState,
    position: Vec2,
    target: Option<Vec2>,
    move_speed: f32,
    spawn_delay_remaining: f32,
}

impl Enemy {
    /// Off-world parking spot for inactive enemies.
    pub const PARK_POSITION: Vec2 = Vec2::new(-10_000.0, -10_000.0);

    pub fn new(move_speed: f32) -> Self {
        Self {
            state: PoolState::new(),
            position: Self::PARK_POSITION,
            target: None,
            move_speed,
            spawn_delay_remaining: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn set_target(&mut self, target: Option<Vec2>) {
        self.target = target;
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Whether the enemy is still in its spawn-in hold-off.
    pub fn is_spawning(&self) -> bool {
        self.state.is_active() && self.spawn_delay_remaining > 0.0
    }

    /// Kill this enemy: announce the death for scoring/effects, then return
    /// to the pool. A no-op on an inactive enemy.
    pub fn destroy(&mut self, bus: &mut EventBus<GameEvent>) {
        if !self.state.is_active() {
            return;
        }
        bus.publish(&GameEvent::EnemyDestroyed {
            position: self.position,
        });
        self.deactivate();
    }

    fn move_towards_target(&mut self, delta_seconds: f32) {
        let Some(target) = self.target else {
            return;
        };
        let step = self.move_speed * delta_seconds;
        if self.position.distance_to(target) <= step {
            self.position = target;
        } else {
            let direction = (target - self.position).normalized();
            self.position = self.position + direction * step;
        }
    }
}

impl PoolObject for Enemy {
    fn activate(&mut self) {
        self.state.activate();
        self.spawn_delay_remaining = ENEMY_SPAWN_DELAY_SECONDS;
    }

    fn deactivate(&mut self) {
        self.state.deactivate();
        self.position = Self::PARK_POSITION;
        self.target = None;
        self.spawn_delay_remaining = 0.0;
    }

    fn is_active(&self) -> bool {
        self.state.is_active()
    }

    fn advance(&mut self, delta_seconds: f32) {
        if self.state.advance(delta_seconds) {
            self.deactivate();
            return;
        }
        if self.spawn_delay_remaining > 0.0 {
            self.spawn_delay_remaining -= delta_seconds;
            return;
        }
        self.move_towards_target(delta_seconds);
    }
}

const PROJECTILE_LIFETIME_SECONDS: f32 = 3.0;
const PROJECTILE_SPEED: f32 = 800.0;

/// A straight-line shot with a lifetime cap.
#[derive(Debug, Clone)]
pub struct Projectile {
    state: PoolState,
    position: Vec2,
    direction: Vec2,
    speed: f32,
}

impl Projectile {
    pub const PARK_POSITION: Vec2 = Vec2::new(-11_000.0, -11_000.0);

    pub fn new() -> Self {
        Self::with_lifetime(PROJECTILE_LIFETIME_SECONDS)
    }

    pub fn with_lifetime(lifetime_seconds: f32) -> Self {
        Self {
            state: PoolState::with_lifetime(lifetime_seconds),
            position: Self::PARK_POSITION,
            direction: Vec2::ZERO,
            speed: PROJECTILE_SPEED,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Aim the projectile; the direction is stored normalized.
    pub fn set_direction(&mut self, direction: Vec2) {
        self.direction = direction.normalized();
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolObject for Projectile {
    fn activate(&mut self) {
        self.state.activate();
    }

    fn deactivate(&mut self) {
        self.state.deactivate();
        self.position = Self::PARK_POSITION;
        self.direction = Vec2::ZERO;
    }

    fn is_active(&self) -> bool {
        self.state.is_active()
    }

    fn advance(&mut self, delta_seconds: f32) {
        if self.state.advance(delta_seconds) {
            self.deactivate();
            return;
        }
        self.position = self.position + self.direction * (self.speed * delta_seconds);
    }
}

const EXPLOSION_FRAME_COUNT: usize = 8;
const EXPLOSION_FRAME_SECONDS: f32 = 1.0 / 24.0;

/// A one-shot explosion flipbook; deactivates itself when the last frame
/// has played.
#[derive(Debug, Clone)]
pub struct Explosion {
    state: PoolState,
    position: Vec2,
    frame: usize,
    frame_timer: f32,
}

impl Explosion {
    pub const PARK_POSITION: Vec2 = Vec2::new(-12_000.0, -12_000.0);

    pub fn new() -> Self {
        Self {
            state: PoolState::new(),
            position: Self::PARK_POSITION,
            frame: 0,
            frame_timer: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Current flipbook frame, for the renderer.
    pub fn frame(&self) -> usize {
        self.frame
    }
}

impl Default for Explosion {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolObject for Explosion {
    fn activate(&mut self) {
        self.state.activate();
        // Restart the flipbook from the first frame.
        self.frame = 0;
        self.frame_timer = 0.0;
    }

    fn deactivate(&mut self) {
        self.state.deactivate();
        self.position = Self::PARK_POSITION;
        self.frame = 0;
        self.frame_timer = 0.0;
    }

    fn is_active(&self) -> bool {
        self.state.is_active()
    }

    fn advance(&mut self, delta_seconds: f32) {
        if self.state.advance(delta_seconds) {
            self.deactivate();
            return;
        }
        self.frame_timer += delta_seconds;
        while self.frame_timer >= EXPLOSION_FRAME_SECONDS {
            self.frame_timer -= EXPLOSION_FRAME_SECONDS;
            self.frame += 1;
            if self.frame >= EXPLOSION_FRAME_COUNT {
                self.deactivate();
                return;
            }
        }
    }
}

const SPAWN_ANIM_FRAME_COUNT: usize = 6;
// Sized so the whole flipbook covers the enemy spawn-in hold-off.
const SPAWN_ANIM_FRAME_SECONDS: f32 = 0.05;

/// The telegraph flipbook played where an enemy is about to spawn.
#[derive(Debug, Clone)]
pub struct SpawnAnim {
    state: PoolState,
    position: Vec2,
    frame: usize,
    frame_timer: f32,
}

impl SpawnAnim {
    pub const PARK_POSITION: Vec2 = Vec2::new(-13_000.0, -13_000.0);

    pub fn new() -> Self {
        Self {
            state: PoolState::new(),
            position: Self::PARK_POSITION,
            frame: 0,
            frame_timer: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn frame(&self) -> usize {
        self.frame
    }
}

impl Default for SpawnAnim {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolObject for SpawnAnim {
    fn activate(&mut self) {
        self.state.activate();
        self.frame = 0;
        self.frame_timer = 0.0;
    }

    fn deactivate(&mut self) {
        self.state.deactivate();
        self.position = Self::PARK_POSITION;
        self.frame = 0;
        self.frame_timer = 0.0;
    }

    fn is_active(&self) -> bool {
        self.state.is_active()
    }

    fn advance(&mut self, delta_seconds: f32) {
        if self.state.advance(delta_seconds) {
            self.deactivate();
            return;
        }
        self.frame_timer += delta_seconds;
        while self.frame_timer >= SPAWN_ANIM_FRAME_SECONDS {
            self.frame_timer -= SPAWN_ANIM_FRAME_SECONDS;
            self.frame += 1;
            if self.frame >= SPAWN_ANIM_FRAME_COUNT {
                self.deactivate();
                return;
            }
        }
    }
}

const SCORE_MULTIPLIER_LIFETIME_SECONDS: f32 = 8.0;
const SCORE_MULTIPLIER_DRIFT_SPEED: f32 = 40.0;

/// A score-multiplier pickup that drifts until collected or expired.
#[derive(Debug, Clone)]
pub struct ScoreMultiplier {
    state: PoolState,
    position: Vec2,
    drift: Vec2,
    value: i32,
}

impl ScoreMultiplier {
    pub const PARK_POSITION: Vec2 = Vec2::new(-14_000.0, -14_000.0);

    pub fn new(value: i32) -> Self {
        Self {
            state: PoolState::with_lifetime(SCORE_MULTIPLIER_LIFETIME_SECONDS),
            position: Self::PARK_POSITION,
            drift: Vec2::ZERO,
            value,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn drift(&self) -> Vec2 {
        self.drift
    }

    /// Pick a random unit drift direction, as spawners do on activation.
    pub fn randomize_drift<R: Rng>(&mut self, rng: &mut R) {
        let x = rng.gen_range(-1.0f32..=1.0);
        let y = rng.gen_range(-1.0f32..=1.0);
        let direction = Vec2::new(x, y).normalized();
        self.drift = if direction == Vec2::ZERO {
            Vec2::new(1.0, 0.0)
        } else {
            direction
        };
    }

    /// Collect the pickup: announce its value, then return to the pool.
    /// A no-op on an inactive pickup.
    pub fn collect(&mut self, bus: &mut EventBus<GameEvent>) {
        if !self.state.is_active() {
            return;
        }
        bus.publish(&GameEvent::ScoreMultiplierCollected { value: self.value });
        self.deactivate();
    }
}

impl PoolObject for ScoreMultiplier {
    fn activate(&mut self) {
        self.state.activate();
    }

    fn deactivate(&mut self) {
        self.state.deactivate();
        self.position = Self::PARK_POSITION;
        self.drift = Vec2::ZERO;
    }

    fn is_active(&self) -> bool {
        self.state.is_active()
    }

    fn advance(&mut self, delta_seconds: f32) {
        if self.state.advance(delta_seconds) {
            self.deactivate();
            return;
        }
        self.position =
            self.position + self.drift * (SCORE_MULTIPLIER_DRIFT_SPEED * delta_seconds);
    }
}
