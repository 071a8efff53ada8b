//! Homogeneous pool of one concrete entity subtype

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::errors::{PoolError, PoolResult};
use crate::health::HealthStatus;
use crate::metrics::{MetricsTracker, PoolMetrics};
use crate::poolable::PoolObject;

/// Shared handle to a pool member.
///
/// Callers only ever receive handles; the member itself stays in its
/// container for the life of the session. Handles must not be held borrowed
/// across pool calls; the container borrows members to scan them.
pub type PoolRef<E> = Rc<RefCell<E>>;

/// Entity construction callback supplied by the surrounding game layer.
///
/// The pool never constructs entities itself; it requests construction and
/// records the result. `None` signals that the world refused the spawn.
pub type EntityFactory<E> = Box<dyn Fn() -> Option<E>>;

/// A pool of recycled instances of a single entity subtype.
///
/// Members toggle between Active and Inactive instead of being constructed
/// and destroyed per use. The member list only ever grows: exhaustion is
/// resolved by creating one more member (with a warning), never by failing
/// the caller or waiting.
///
/// # Examples
///
/// ```
/// use arcade_objectpool::{PoolContainer, PoolObject};
/// use arcade_objectpool::entities::Projectile;
///
/// let mut pool = PoolContainer::new("projectile", Box::new(|| Some(Projectile::new())));
/// pool.warm_up(8);
/// assert_eq!(pool.len(), 8);
///
/// let shot = pool.acquire().unwrap();
/// shot.borrow_mut().activate();
/// assert_eq!(pool.active_count(), 1);
/// ```
pub struct PoolContainer<E: PoolObject> {
    kind: String,
    members: Vec<PoolRef<E>>,
    factory: EntityFactory<E>,
    warmup_size: usize,
    metrics: MetricsTracker,
}

impl<E: PoolObject> PoolContainer<E> {
    /// Create an empty container for `kind`, spawning members via `factory`.
    pub fn new(kind: impl Into<String>, factory: EntityFactory<E>) -> Self {
        Self {
            kind: kind.into(),
            members: Vec::new(),
            factory,
            warmup_size: 0,
            metrics: MetricsTracker::new(),
        }
    }

    /// Pre-create `count` members, each starting Inactive.
    ///
    /// A factory refusal costs the slot: the failure is logged and the pool
    /// simply ends up smaller than requested.
    pub fn warm_up(&mut self, count: usize) {
        for _ in 0..count {
            let _ = self.create_and_add();
        }
        self.warmup_size = self.members.len();
        tracing::debug!(
            kind = %self.kind,
            requested = count,
            created = self.warmup_size,
            "warmed up pool"
        );
    }

    /// Hand out the first inactive member, creating one if every member is
    /// in use.
    ///
    /// The returned member is NOT activated: the caller positions it first,
    /// then calls [`PoolObject::activate`] through the handle. Growth on an
    /// exhausted pool is logged as a warning, a signal that the warm-up
    /// size is too small rather than an error.
    pub fn acquire(&mut self) -> PoolResult<PoolRef<E>> {
        for member in &self.members {
            if !member.borrow().is_active() {
                self.metrics.record_acquired();
                return Ok(Rc::clone(member));
            }
        }

        tracing::warn!(
            kind = %self.kind,
            pool_size = self.members.len(),
            "no available member in the pool; increase the warm-up size"
        );
        self.metrics.record_grown();
        let member = self.create_and_add()?;
        self.metrics.record_acquired();
        Ok(member)
    }

    /// Deactivate every member, leaving the pool fully available.
    ///
    /// Used when restarting gameplay. Members are never removed.
    pub fn reset_all(&mut self) {
        for member in &self.members {
            member.borrow_mut().deactivate();
        }
    }

    /// Advance every active member by one frame.
    pub fn advance(&mut self, delta_seconds: f32) {
        for member in &self.members {
            let mut entity = member.borrow_mut();
            if entity.is_active() {
                entity.advance(delta_seconds);
            }
        }
    }

    /// Randomize member order so the first-found scan does not always hand
    /// out the same members.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.members.shuffle(rng);
    }

    fn create_and_add(&mut self) -> PoolResult<PoolRef<E>> {
        match (self.factory)() {
            Some(entity) => {
                let member = Rc::new(RefCell::new(entity));
                self.members.push(Rc::clone(&member));
                Ok(member)
            }
            None => {
                tracing::warn!(kind = %self.kind, "entity factory failed");
                self.metrics.record_factory_failure();
                Err(PoolError::FactoryFailed(self.kind.clone()))
            }
        }
    }

    /// Subtype label this container pools.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Total members, active and inactive.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members created at warm-up time (before any on-demand growth).
    pub fn warmup_size(&self) -> usize {
        self.warmup_size
    }

    /// Members currently in play.
    pub fn active_count(&self) -> usize {
        self.members
            .iter()
            .filter(|member| member.borrow().is_active())
            .count()
    }

    /// Members parked and ready for reuse.
    pub fn available_count(&self) -> usize {
        self.members.len() - self.active_count()
    }

    /// Snapshot the pool's metrics.
    pub fn metrics(&self) -> PoolMetrics {
        let active = self.active_count();
        self.metrics.get_metrics(
            active,
            self.members.len() - active,
            self.members.len(),
            self.warmup_size,
        )
    }

    /// Current health assessment.
    pub fn health(&self) -> HealthStatus {
        let active = self.active_count();
        HealthStatus::new(
            self.members.len() - active,
            active,
            self.members.len(),
            self.warmup_size,
        )
    }
}
