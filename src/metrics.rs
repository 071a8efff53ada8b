//! Metrics collection and export for object pools

use std::collections::HashMap;

/// Metrics data for a pool
///
/// # Examples
///
/// ```
/// use arcade_objectpool::{PoolContainer, PoolObject};
/// use arcade_objectpool::entities::Projectile;
///
/// let mut pool = PoolContainer::new("projectile", Box::new(|| Some(Projectile::new())));
/// pool.warm_up(4);
/// pool.acquire().unwrap().borrow_mut().activate();
///
/// let metrics = pool.metrics();
/// assert_eq!(metrics.total_acquired, 1);
/// assert_eq!(metrics.active_objects, 1);
/// assert_eq!(metrics.pool_size, 4);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolMetrics {
    /// Total members handed out by `acquire`
    pub total_acquired: usize,

    /// Times the pool was exhausted and grew by one member
    pub grow_events: usize,

    /// Times the entity factory refused a spawn
    pub factory_failures: usize,

    /// Members currently in play
    pub active_objects: usize,

    /// Members currently parked and available
    pub available_objects: usize,

    /// Total members, active and inactive
    pub pool_size: usize,

    /// Members created at warm-up time
    pub warmup_size: usize,

    /// Pool utilization ratio (0.0 to 1.0)
    pub utilization: f64,
}

impl PoolMetrics {
    /// Export metrics as a HashMap
    pub fn export(&self) -> HashMap<String, String> {
        let mut metrics = HashMap::new();
        metrics.insert("total_acquired".to_string(), self.total_acquired.to_string());
        metrics.insert("grow_events".to_string(), self.grow_events.to_string());
        metrics.insert("factory_failures".to_string(), self.factory_failures.to_string());
        metrics.insert("active_objects".to_string(), self.active_objects.to_string());
        metrics.insert("available_objects".to_string(), self.available_objects.to_string());
        metrics.insert("pool_size".to_string(), self.pool_size.to_string());
        metrics.insert("warmup_size".to_string(), self.warmup_size.to_string());
        metrics.insert("utilization".to_string(), format!("{:.2}", self.utilization));
        metrics
    }
}

/// Metrics exporter for Prometheus format
pub struct MetricsExporter;

impl MetricsExporter {
    /// Export metrics in Prometheus exposition format
    ///
    /// # Examples
    ///
    /// ```
    /// use arcade_objectpool::{MetricsExporter, PoolContainer};
    /// use arcade_objectpool::entities::Projectile;
    /// use std::collections::HashMap;
    ///
    /// let mut pool = PoolContainer::new("projectile", Box::new(|| Some(Projectile::new())));
    /// pool.warm_up(4);
    ///
    /// let mut tags = HashMap::new();
    /// tags.insert("level".to_string(), "asteroid_belt".to_string());
    ///
    /// let output = MetricsExporter::export_prometheus(&pool.metrics(), "projectiles", Some(&tags));
    /// assert!(output.contains("objectpool_members_active"));
    /// assert!(output.contains("level=\"asteroid_belt\""));
    /// ```
    pub fn export_prometheus(
        metrics: &PoolMetrics,
        pool_name: &str,
        tags: Option<&HashMap<String, String>>,
    ) -> String {
        let mut output = String::new();
        let labels = Self::format_labels(pool_name, tags);

        // Gauge metrics
        output.push_str("# HELP objectpool_members_active Members currently in play\n");
        output.push_str("# TYPE objectpool_members_active gauge\n");
        output.push_str(&format!("objectpool_members_active{{{}}} {}\n", labels, metrics.active_objects));

        output.push_str("# HELP objectpool_members_available Members parked and available\n");
        output.push_str("# TYPE objectpool_members_available gauge\n");
        output.push_str(&format!("objectpool_members_available{{{}}} {}\n", labels, metrics.available_objects));

        output.push_str("# HELP objectpool_members Total pool size\n");
        output.push_str("# TYPE objectpool_members gauge\n");
        output.push_str(&format!("objectpool_members{{{}}} {}\n", labels, metrics.pool_size));

        output.push_str("# HELP objectpool_utilization Pool utilization ratio\n");
        output.push_str("# TYPE objectpool_utilization gauge\n");
        output.push_str(&format!("objectpool_utilization{{{}}} {:.2}\n", labels, metrics.utilization));

        // Counter metrics
        output.push_str("# HELP objectpool_acquired_total Total members handed out\n");
        output.push_str("# TYPE objectpool_acquired_total counter\n");
        output.push_str(&format!("objectpool_acquired_total{{{}}} {}\n", labels, metrics.total_acquired));

        output.push_str("# HELP objectpool_grow_events_total Exhaustion growth events\n");
        output.push_str("# TYPE objectpool_grow_events_total counter\n");
        output.push_str(&format!("objectpool_grow_events_total{{{}}} {}\n", labels, metrics.grow_events));

        output.push_str("# HELP objectpool_factory_failures_total Refused entity spawns\n");
        output.push_str("# TYPE objectpool_factory_failures_total counter\n");
        output.push_str(&format!("objectpool_factory_failures_total{{{}}} {}\n", labels, metrics.factory_failures));

        output
    }

    fn format_labels(pool_name: &str, tags: Option<&HashMap<String, String>>) -> String {
        let mut labels = vec![format!("pool=\"{}\"", pool_name)];

        if let Some(tags) = tags {
            for (key, value) in tags {
                labels.push(format!("{}=\"{}\"", key, value));
            }
        }

        labels.join(",")
    }
}

/// Internal metrics tracker
///
/// Plain counters: a container is exclusively owned by one logical thread,
/// so there is nothing to synchronize.
#[derive(Debug, Default)]
pub(crate) struct MetricsTracker {
    total_acquired: usize,
    grow_events: usize,
    factory_failures: usize,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_acquired(&mut self) {
        self.total_acquired += 1;
    }

    pub fn record_grown(&mut self) {
        self.grow_events += 1;
    }

    pub fn record_factory_failure(&mut self) {
        self.factory_failures += 1;
    }

    pub fn get_metrics(
        &self,
        active: usize,
        available: usize,
        pool_size: usize,
        warmup_size: usize,
    ) -> PoolMetrics {
        let utilization = if pool_size > 0 {
            active as f64 / pool_size as f64
        } else {
            0.0
        };

        PoolMetrics {
            total_acquired: self.total_acquired,
            grow_events: self.grow_events,
            factory_failures: self.factory_failures,
            active_objects: active,
            available_objects: available,
            pool_size,
            warmup_size,
            utilization,
        }
    }
}
