//! Health monitoring for object pools

/// Health status of an object pool
///
/// # Examples
///
/// ```
/// use arcade_objectpool::PoolContainer;
/// use arcade_objectpool::entities::Projectile;
///
/// let mut pool = PoolContainer::new("projectile", Box::new(|| Some(Projectile::new())));
/// pool.warm_up(4);
///
/// let health = pool.health();
/// assert!(health.is_healthy());
/// assert_eq!(health.available_objects, 4);
/// ```
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the pool is healthy
    pub is_healthy: bool,

    /// Number of warnings detected
    pub warning_count: usize,

    /// Current pool utilization (0.0 to 1.0)
    pub utilization: f64,

    /// Available members count
    pub available_objects: usize,

    /// Active members count
    pub active_objects: usize,

    /// Total pool size
    pub pool_size: usize,

    /// Warning messages
    pub warnings: Vec<String>,
}

impl HealthStatus {
    /// Create a new health status
    pub fn new(available: usize, active: usize, pool_size: usize, warmup_size: usize) -> Self {
        let utilization = if pool_size > 0 {
            active as f64 / pool_size as f64
        } else {
            0.0
        };

        let mut warnings = Vec::new();
        let mut is_healthy = true;

        // Check for high utilization
        if utilization > 0.9 {
            warnings.push(format!("High utilization: {:.1}%", utilization * 100.0));
            is_healthy = false;
        }

        // Growth past the warm-up size means the configured capacity is too small
        if pool_size > warmup_size {
            warnings.push(format!(
                "Pool grew beyond warm-up size ({} > {})",
                pool_size, warmup_size
            ));
        }

        // Check if the pool has nothing to hand out
        if available == 0 && pool_size > 0 {
            warnings.push("Pool is exhausted".to_string());
        }

        Self {
            is_healthy,
            warning_count: warnings.len(),
            utilization,
            available_objects: available,
            active_objects: active,
            pool_size,
            warnings,
        }
    }

    /// Check if the pool is healthy
    pub fn is_healthy(&self) -> bool {
        self.is_healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_pool_is_healthy() {
        let health = HealthStatus::new(10, 0, 10, 10);
        assert!(health.is_healthy());
        assert!(health.warnings.is_empty());
    }

    #[test]
    fn test_high_utilization_is_unhealthy() {
        let health = HealthStatus::new(0, 10, 10, 10);
        assert!(!health.is_healthy());
        assert!(health.warning_count >= 1);
    }

    #[test]
    fn test_growth_beyond_warmup_is_flagged() {
        let health = HealthStatus::new(8, 4, 12, 10);
        assert!(health.warnings.iter().any(|w| w.contains("warm-up")));
    }
}
