// arcade_objectpool - frame-driven object pooling for arcade game entities

// This is just a binary wrapper - the actual library is in lib.rs
// Run examples with: cargo run --example basic

use arcade_objectpool::entities::{Projectile, Vec2};
use arcade_objectpool::{PoolContainer, PoolObject};

fn main() {
    println!("=== arcade_objectpool v1.0.0 ===");
    println!("See demos/ directory for usage examples");
    println!("Run: cargo run --example basic");
    println!();

    // Quick demo
    println!("Quick Demo:");
    let mut pool = PoolContainer::new("projectile", Box::new(|| Some(Projectile::new())));
    pool.warm_up(16);

    let shot = pool.acquire().expect("warm pool always has a member");
    {
        let mut shot = shot.borrow_mut();
        shot.activate();
        shot.set_position(Vec2::ZERO);
        shot.set_direction(Vec2::new(0.0, 1.0));
    }
    println!("  Active after firing: {}", pool.active_count());

    // Tick until the shot expires back into the pool.
    while pool.active_count() > 0 {
        pool.advance(1.0 / 60.0);
    }
    println!("  Available after expiry: {}", pool.available_count());
}
