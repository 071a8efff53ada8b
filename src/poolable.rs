//! The capability every poolable entity implements

/// Contract between a pool and its members.
///
/// A pool member is either Active (in play, ticking) or Inactive (recycled,
/// parked off-world). Pools only ever read `is_active` and call `deactivate`;
/// activation is the caller's responsibility after an entity has been
/// acquired and positioned.
///
/// # Examples
///
/// ```
/// use arcade_objectpool::{PoolObject, PoolState};
///
/// struct Spark {
///     state: PoolState,
/// }
///
/// impl PoolObject for Spark {
///     fn activate(&mut self) {
///         self.state.activate();
///     }
///
///     fn deactivate(&mut self) {
///         self.state.deactivate();
///     }
///
///     fn is_active(&self) -> bool {
///         self.state.is_active()
///     }
///
///     fn advance(&mut self, delta_seconds: f32) {
///         if self.state.advance(delta_seconds) {
///             self.deactivate();
///         }
///     }
/// }
///
/// let mut spark = Spark { state: PoolState::with_lifetime(1.0) };
/// spark.activate();
/// spark.advance(1.0);
/// assert!(!spark.is_active());
/// ```
pub trait PoolObject {
    /// Bring the entity into play. Implementations restore visibility and
    /// collision and reset the time-alive timer; they do not position the
    /// entity.
    fn activate(&mut self);

    /// Take the entity out of play: hide it, disable collision, park it at
    /// the family's off-world sentinel, and reset the timer. Must be a
    /// no-op on an already-inactive entity.
    fn deactivate(&mut self);

    /// Whether the entity is currently in play.
    fn is_active(&self) -> bool;

    /// Advance the entity by one frame. Called once per frame by the owning
    /// simulation loop while the entity is active; an entity deactivates
    /// itself when its lifetime expires or its work completes.
    fn advance(&mut self, delta_seconds: f32);
}

/// Shared Active/Inactive lifecycle state.
///
/// Embeds the activation flag, the time-alive timer, and the optional
/// lifetime cap. Entities hold one of these and forward the [`PoolObject`]
/// lifecycle methods to it, layering their own payload handling (parking,
/// animation reset) on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolState {
    active: bool,
    time_alive: f32,
    lifetime_seconds: f32,
}

impl PoolState {
    /// A state with no practical lifetime cap. Entities using this
    /// deactivate on an external completion signal instead of a timer.
    pub fn new() -> Self {
        Self {
            active: false,
            time_alive: 0.0,
            lifetime_seconds: f32::MAX,
        }
    }

    /// A state that expires `lifetime_seconds` after activation.
    pub fn with_lifetime(lifetime_seconds: f32) -> Self {
        Self {
            lifetime_seconds,
            ..Self::new()
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
        self.time_alive = 0.0;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.time_alive = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds since activation.
    pub fn time_alive(&self) -> f32 {
        self.time_alive
    }

    pub fn lifetime_seconds(&self) -> f32 {
        self.lifetime_seconds
    }

    /// Advance the time-alive timer. Returns `true` when the step crossed
    /// the lifetime cap; the owning entity is expected to deactivate itself
    /// in response. Inactive states do not tick.
    #[must_use]
    pub fn advance(&mut self, delta_seconds: f32) -> bool {
        if !self.active {
            return false;
        }
        self.time_alive += delta_seconds;
        self.time_alive >= self.lifetime_seconds
    }
}

impl Default for PoolState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_resets_timer() {
        let mut state = PoolState::with_lifetime(5.0);
        state.activate();
        assert!(!state.advance(2.0));
        assert_eq!(state.time_alive(), 2.0);

        state.activate();
        assert_eq!(state.time_alive(), 0.0);
        assert!(state.is_active());
    }

    #[test]
    fn test_expiry_at_exact_lifetime() {
        let mut state = PoolState::with_lifetime(3.0);
        state.activate();
        assert!(!state.advance(1.0));
        assert!(!state.advance(1.0));
        // The step that reaches the cap exactly must report expiry.
        assert!(state.advance(1.0));
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let mut state = PoolState::with_lifetime(3.0);
        state.activate();
        let _ = state.advance(1.0);

        state.deactivate();
        assert!(!state.is_active());
        assert_eq!(state.time_alive(), 0.0);

        state.deactivate();
        assert!(!state.is_active());
        assert_eq!(state.time_alive(), 0.0);
    }

    #[test]
    fn test_inactive_state_does_not_tick() {
        let mut state = PoolState::with_lifetime(1.0);
        assert!(!state.advance(10.0));
        assert_eq!(state.time_alive(), 0.0);
    }

    #[test]
    fn test_default_lifetime_is_effectively_unbounded() {
        let mut state = PoolState::new();
        state.activate();
        assert!(!state.advance(1.0e9));
        assert!(state.is_active());
    }
}
