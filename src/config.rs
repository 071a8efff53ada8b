//! Pool configuration options

/// How a controller distributes its warm-up budget across subtype pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WarmupStrategy {
    /// Every subtype pool is warmed with the full configured count.
    #[default]
    PerPool,

    /// The configured count is divided evenly among the subtype pools,
    /// so the family as a whole holds roughly `warmup_count` members.
    SplitAcrossPools,
}

/// Configuration for pool warm-up behavior
///
/// # Examples
///
/// ```
/// use arcade_objectpool::{PoolConfiguration, WarmupStrategy};
///
/// let config = PoolConfiguration::new()
///     .with_warmup_count(200)
///     .with_warmup_strategy(WarmupStrategy::SplitAcrossPools)
///     .with_shuffle_after_warmup(true);
///
/// assert_eq!(config.warmup_count, 200);
/// assert_eq!(config.warmup_strategy, WarmupStrategy::SplitAcrossPools);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfiguration {
    /// Number of entities created up front, per pool or per family
    /// depending on [`WarmupStrategy`]
    pub warmup_count: usize,

    /// How the warm-up budget is distributed across a controller's pools
    pub warmup_strategy: WarmupStrategy,

    /// Whether to randomize member order once after warm-up, so the
    /// first-found scan does not always hand out the same members first
    pub shuffle_after_warmup: bool,
}

impl Default for PoolConfiguration {
    fn default() -> Self {
        Self {
            warmup_count: 50,
            warmup_strategy: WarmupStrategy::PerPool,
            shuffle_after_warmup: false,
        }
    }
}

impl PoolConfiguration {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the warm-up count
    ///
    /// # Examples
    ///
    /// ```
    /// use arcade_objectpool::PoolConfiguration;
    ///
    /// let config = PoolConfiguration::new().with_warmup_count(500);
    ///
    /// assert_eq!(config.warmup_count, 500);
    /// ```
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Set the warm-up distribution strategy
    pub fn with_warmup_strategy(mut self, strategy: WarmupStrategy) -> Self {
        self.warmup_strategy = strategy;
        self
    }

    /// Enable or disable the post-warm-up shuffle
    pub fn with_shuffle_after_warmup(mut self, shuffle: bool) -> Self {
        self.shuffle_after_warmup = shuffle;
        self
    }
}
