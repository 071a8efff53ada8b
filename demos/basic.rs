//! Basic usage examples for the pool container and controller

use arcade_objectpool::entities::{Projectile, Vec2};
use arcade_objectpool::{PoolConfiguration, PoolContainer, PoolController, PoolObject, PoolSpawnSpec};

fn main() {
    println!("=== arcade_objectpool - Basic Examples ===\n");

    // Example 1: Single pool
    single_pool();

    // Example 2: Growth on exhaustion
    growth_on_exhaustion();

    // Example 3: A controller over several subtypes
    subtype_controller();

    // Example 4: Metrics and health
    metrics_and_health();
}

fn single_pool() {
    println!("1. Single Pool:");
    let mut pool = PoolContainer::new("projectile", Box::new(|| Some(Projectile::new())));
    pool.warm_up(8);

    let shot = pool.acquire().unwrap();
    {
        let mut shot = shot.borrow_mut();
        shot.activate();
        shot.set_position(Vec2::new(0.0, -200.0));
        shot.set_direction(Vec2::new(0.0, 1.0));
    }
    println!("   Active: {}", pool.active_count());

    shot.borrow_mut().deactivate();
    println!("   Available after recycle: {}\n", pool.available_count());
}

fn growth_on_exhaustion() {
    println!("2. Growth on Exhaustion:");
    let mut pool = PoolContainer::new("projectile", Box::new(|| Some(Projectile::new())));
    pool.warm_up(2);

    for _ in 0..3 {
        // The third acquire exhausts the pool; it grows by one with a warning.
        pool.acquire().unwrap().borrow_mut().activate();
    }
    println!("   Pool size after 3 acquires from a 2-warm pool: {}", pool.len());
    println!("   Grow events: {}\n", pool.metrics().grow_events);
}

fn subtype_controller() {
    println!("3. Subtype Controller:");
    let config = PoolConfiguration::new().with_warmup_count(8);
    let mut projectiles = PoolController::initialize(
        &config,
        vec![
            PoolSpawnSpec::new("straight", Box::new(|| Some(Projectile::new()))),
            PoolSpawnSpec::new("slow", Box::new(|| {
                let mut shot = Projectile::with_lifetime(6.0);
                shot.set_speed(200.0);
                Some(shot)
            })),
        ],
    );

    let shot = projectiles.acquire_random().unwrap();
    shot.borrow_mut().activate();
    println!("   Pools: {}", projectiles.pool_count());
    println!("   Active across family: {}", projectiles.total_active());

    projectiles.reset_all();
    println!("   Active after reset: {}\n", projectiles.total_active());
}

fn metrics_and_health() {
    println!("4. Metrics and Health:");
    let mut pool = PoolContainer::new("projectile", Box::new(|| Some(Projectile::new())));
    pool.warm_up(5);

    for _ in 0..2 {
        pool.acquire().unwrap().borrow_mut().activate();
    }

    let health = pool.health();
    println!("   Health: {}", if health.is_healthy() { "Healthy" } else { "Unhealthy" });
    println!("   Utilization: {:.1}%", health.utilization * 100.0);
    println!("   Active: {}, Available: {}", health.active_objects, health.available_objects);

    println!("\n   Metrics:");
    for (key, value) in pool.metrics().export() {
        println!("     {}: {}", key, value);
    }
}
