//! A family of pools, one per entity subtype

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{PoolConfiguration, WarmupStrategy};
use crate::container::{EntityFactory, PoolContainer, PoolRef};
use crate::errors::{PoolError, PoolResult};
use crate::poolable::PoolObject;

/// One subtype registration: a label plus the factory that spawns it.
pub struct PoolSpawnSpec<E: PoolObject> {
    kind: String,
    factory: EntityFactory<E>,
}

impl<E: PoolObject> PoolSpawnSpec<E> {
    pub fn new(kind: impl Into<String>, factory: EntityFactory<E>) -> Self {
        Self {
            kind: kind.into(),
            factory,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// Owner of one [`PoolContainer`] per registered subtype of an entity family.
///
/// Containers are created eagerly, in registration order, at initialization.
/// The controller answers family-wide queries: hand out an instance of a
/// random subtype, reset every pool, tick every pool.
///
/// # Examples
///
/// ```
/// use arcade_objectpool::{PoolConfiguration, PoolController, PoolObject, PoolSpawnSpec};
/// use arcade_objectpool::entities::Enemy;
///
/// let config = PoolConfiguration::new().with_warmup_count(8);
/// let mut enemies = PoolController::initialize(&config, vec![
///     PoolSpawnSpec::new("drone", Box::new(|| Some(Enemy::new(140.0)))),
///     PoolSpawnSpec::new("hunter", Box::new(|| Some(Enemy::new(220.0)))),
/// ]);
///
/// let enemy = enemies.acquire_random().unwrap();
/// enemy.borrow_mut().activate();
/// assert_eq!(enemies.total_active(), 1);
/// ```
pub struct PoolController<E: PoolObject> {
    pools: Vec<PoolContainer<E>>,
    rng: StdRng,
}

impl<E: PoolObject> PoolController<E> {
    /// Create and warm one container per spec.
    ///
    /// A spec with an empty kind is malformed configuration: it is skipped
    /// with a warning, not a fatal error. An empty spec list yields a
    /// controller with no pools.
    pub fn initialize(config: &PoolConfiguration, specs: Vec<PoolSpawnSpec<E>>) -> Self {
        Self::initialize_with_rng(config, specs, StdRng::from_entropy())
    }

    /// Same as [`initialize`](Self::initialize) with a caller-seeded RNG,
    /// for deterministic subtype selection.
    pub fn initialize_with_rng(
        config: &PoolConfiguration,
        specs: Vec<PoolSpawnSpec<E>>,
        mut rng: StdRng,
    ) -> Self {
        let valid_specs = specs.iter().filter(|spec| !spec.kind.is_empty()).count();
        let warmup_per_pool = match config.warmup_strategy {
            WarmupStrategy::PerPool => config.warmup_count,
            WarmupStrategy::SplitAcrossPools => {
                if valid_specs == 0 {
                    0
                } else {
                    config.warmup_count / valid_specs
                }
            }
        };

        let mut pools = Vec::with_capacity(valid_specs);
        for spec in specs {
            if spec.kind.is_empty() {
                tracing::warn!("skipping pool spec with empty kind");
                continue;
            }
            let mut pool = PoolContainer::new(spec.kind, spec.factory);
            pool.warm_up(warmup_per_pool);
            if config.shuffle_after_warmup {
                pool.shuffle(&mut rng);
            }
            pools.push(pool);
        }

        Self { pools, rng }
    }

    /// Hand out an inactive instance of a uniformly random subtype.
    ///
    /// Every subtype has a 1-in-k chance regardless of pool occupancy or
    /// size; selection is per type, not per live instance.
    pub fn acquire_random(&mut self) -> PoolResult<PoolRef<E>> {
        if self.pools.is_empty() {
            return Err(PoolError::NoPools);
        }
        let index = self.rng.gen_range(0..self.pools.len());
        self.pools[index].acquire()
    }

    /// Hand out an inactive instance of a specific subtype.
    ///
    /// With duplicate registrations of a kind, the first one wins.
    pub fn acquire(&mut self, kind: &str) -> PoolResult<PoolRef<E>> {
        self.pools
            .iter_mut()
            .find(|pool| pool.kind() == kind)
            .ok_or_else(|| PoolError::UnknownKind(kind.to_string()))?
            .acquire()
    }

    /// Deactivate every member of every pool, for a gameplay restart.
    pub fn reset_all(&mut self) {
        for pool in &mut self.pools {
            pool.reset_all();
        }
    }

    /// Advance every active member of every pool by one frame.
    pub fn advance_all(&mut self, delta_seconds: f32) {
        for pool in &mut self.pools {
            pool.advance(delta_seconds);
        }
    }

    /// Number of subtype pools.
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Total members across every pool.
    pub fn total_members(&self) -> usize {
        self.pools.iter().map(PoolContainer::len).sum()
    }

    /// Total members currently in play across every pool.
    pub fn total_active(&self) -> usize {
        self.pools.iter().map(PoolContainer::active_count).sum()
    }

    /// The owned pools, for per-pool metrics and health reporting.
    pub fn pools(&self) -> &[PoolContainer<E>] {
        &self.pools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poolable::PoolState;
    use std::collections::HashMap;

    #[derive(Debug)]
    struct Tagged {
        tag: &'static str,
        state: PoolState,
    }

    impl PoolObject for Tagged {
        fn activate(&mut self) {
            self.state.activate();
        }

        fn deactivate(&mut self) {
            self.state.deactivate();
        }

        fn is_active(&self) -> bool {
            self.state.is_active()
        }

        fn advance(&mut self, delta_seconds: f32) {
            if self.state.advance(delta_seconds) {
                self.deactivate();
            }
        }
    }

    fn spec(tag: &'static str) -> PoolSpawnSpec<Tagged> {
        PoolSpawnSpec::new(
            tag,
            Box::new(move || {
                Some(Tagged {
                    tag,
                    state: PoolState::new(),
                })
            }),
        )
    }

    fn seeded_controller(
        config: &PoolConfiguration,
        specs: Vec<PoolSpawnSpec<Tagged>>,
    ) -> PoolController<Tagged> {
        PoolController::initialize_with_rng(config, specs, StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_one_pool_per_subtype_in_order() {
        let config = PoolConfiguration::new().with_warmup_count(3);
        let controller = seeded_controller(&config, vec![spec("a"), spec("b"), spec("c")]);

        assert_eq!(controller.pool_count(), 3);
        let kinds: Vec<&str> = controller.pools().iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, ["a", "b", "c"]);
        assert_eq!(controller.total_members(), 9);
    }

    #[test]
    fn test_empty_kind_is_skipped() {
        let config = PoolConfiguration::new().with_warmup_count(2);
        let controller = seeded_controller(&config, vec![spec("a"), spec(""), spec("b")]);
        assert_eq!(controller.pool_count(), 2);
    }

    #[test]
    fn test_no_pools_is_an_error() {
        let config = PoolConfiguration::new();
        let mut controller: PoolController<Tagged> = seeded_controller(&config, Vec::new());
        assert_eq!(controller.acquire_random().unwrap_err(), PoolError::NoPools);
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let config = PoolConfiguration::new().with_warmup_count(1);
        let mut controller = seeded_controller(&config, vec![spec("a")]);
        assert_eq!(
            controller.acquire("saucer").unwrap_err(),
            PoolError::UnknownKind("saucer".into())
        );
    }

    #[test]
    fn test_acquire_by_kind() {
        let config = PoolConfiguration::new().with_warmup_count(1);
        let mut controller = seeded_controller(&config, vec![spec("a"), spec("b")]);
        let member = controller.acquire("b").unwrap();
        assert_eq!(member.borrow().tag, "b");
    }

    #[test]
    fn test_split_warmup_divides_budget() {
        let config = PoolConfiguration::new()
            .with_warmup_count(10)
            .with_warmup_strategy(WarmupStrategy::SplitAcrossPools);
        let controller = seeded_controller(&config, vec![spec("a"), spec("b")]);

        for pool in controller.pools() {
            assert_eq!(pool.len(), 5);
        }
    }

    #[test]
    fn test_random_selection_is_uniform_per_subtype() {
        let config = PoolConfiguration::new().with_warmup_count(4);
        let mut controller =
            seeded_controller(&config, vec![spec("a"), spec("b"), spec("c"), spec("d")]);

        // Deactivate-after-read keeps pool occupancy constant, so any skew
        // would come from the selection itself.
        let mut counts: HashMap<&'static str, usize> = HashMap::new();
        let draws = 4000;
        for _ in 0..draws {
            let member = controller.acquire_random().unwrap();
            *counts.entry(member.borrow().tag).or_insert(0) += 1;
        }

        let expected = draws / 4;
        for (tag, count) in counts {
            let deviation = (count as f64 - expected as f64).abs() / expected as f64;
            assert!(
                deviation < 0.15,
                "subtype {} drawn {} times, expected about {}",
                tag,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_selection_ignores_occupancy() {
        let config = PoolConfiguration::new().with_warmup_count(2);
        let mut controller = seeded_controller(&config, vec![spec("busy"), spec("idle")]);

        // Saturate one subtype's pool entirely.
        for _ in 0..2 {
            controller.acquire("busy").unwrap().borrow_mut().activate();
        }

        // The saturated subtype must still be chosen (and grow) rather than
        // being skipped in favor of the idle one.
        let mut drew_busy = false;
        for _ in 0..64 {
            let member = controller.acquire_random().unwrap();
            if member.borrow().tag == "busy" {
                drew_busy = true;
                break;
            }
        }
        assert!(drew_busy);
    }

    #[test]
    fn test_reset_all_reaches_every_pool() {
        let config = PoolConfiguration::new().with_warmup_count(2);
        let mut controller = seeded_controller(&config, vec![spec("a"), spec("b")]);

        controller.acquire("a").unwrap().borrow_mut().activate();
        controller.acquire("b").unwrap().borrow_mut().activate();
        assert_eq!(controller.total_active(), 2);

        controller.reset_all();
        assert_eq!(controller.total_active(), 0);
        assert_eq!(controller.total_members(), 4);
    }
}
