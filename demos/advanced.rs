//! Advanced features: a headless gameplay loop wiring pools, the event bus,
//! and score bookkeeping together

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use arcade_objectpool::entities::{Enemy, ScoreMultiplier, Vec2};
use arcade_objectpool::{
    EventBus, GameEvent, GameStats, HighScoreTable, MetricsExporter, PoolConfiguration,
    PoolController, PoolObject, PoolSpawnSpec, WarmupStrategy,
};

fn main() {
    println!("=== arcade_objectpool - Advanced Features ===\n");

    // Example 1: Warm-up strategies
    warmup_strategies();

    // Example 2: Event-driven scoring
    event_driven_scoring();

    // Example 3: High-score table
    high_score_table();

    // Example 4: Prometheus metrics
    prometheus_export();
}

fn enemy_specs() -> Vec<PoolSpawnSpec<Enemy>> {
    vec![
        PoolSpawnSpec::new("drone", Box::new(|| Some(Enemy::new(140.0)))),
        PoolSpawnSpec::new("hunter", Box::new(|| Some(Enemy::new(220.0)))),
        PoolSpawnSpec::new("tank", Box::new(|| Some(Enemy::new(80.0)))),
    ]
}

fn warmup_strategies() {
    println!("1. Warm-up Strategies:");

    let per_pool = PoolConfiguration::new().with_warmup_count(50);
    let controller = PoolController::initialize(&per_pool, enemy_specs());
    println!("   PerPool(50) over 3 subtypes: {} members", controller.total_members());

    let split = PoolConfiguration::new()
        .with_warmup_count(200)
        .with_warmup_strategy(WarmupStrategy::SplitAcrossPools)
        .with_shuffle_after_warmup(true);
    let controller = PoolController::initialize(&split, enemy_specs());
    println!(
        "   SplitAcrossPools(200) over 3 subtypes: {} members\n",
        controller.total_members()
    );
}

fn event_driven_scoring() {
    println!("2. Event-driven Scoring:");

    let mut bus = EventBus::new();
    let stats = Rc::new(RefCell::new(GameStats::new()));
    let score = Rc::new(RefCell::new(0i32));

    let stats_sink = Rc::clone(&stats);
    bus.subscribe(move |event| stats_sink.borrow_mut().observe(event));

    let score_sink = Rc::clone(&score);
    bus.subscribe(move |event| {
        if let GameEvent::EnemyDestroyed { .. } = event {
            *score_sink.borrow_mut() += 100;
        }
    });

    // Spawn a wave and shoot it down.
    let config = PoolConfiguration::new().with_warmup_count(10);
    let mut enemies = PoolController::initialize(&config, enemy_specs());
    for i in 0..5 {
        let enemy = enemies.acquire_random().unwrap();
        let mut enemy = enemy.borrow_mut();
        enemy.activate();
        enemy.set_position(Vec2::new(i as f32 * 60.0, 300.0));
        enemy.destroy(&mut bus);
    }

    // Collect a pickup too.
    let mut pickup = ScoreMultiplier::new(2);
    pickup.activate();
    pickup.collect(&mut bus);

    println!("   Score: {}", score.borrow());
    println!("   Enemies defeated: {}", stats.borrow().enemies_defeated);
    println!(
        "   Multipliers collected: {}\n",
        stats.borrow().score_multipliers_collected
    );
}

fn high_score_table() {
    println!("3. High-score Table:");

    let mut table = HighScoreTable::with_capacity(3);
    for (score, ship) in [(500, 0), (300, 1), (100, 2)] {
        table.record(score, ship);
    }
    table.record(400, 3);

    for entry in table.entries() {
        println!("   {}", entry);
    }
    println!("   Highest: {}\n", table.highest());
}

fn prometheus_export() {
    println!("4. Prometheus Export:");

    let config = PoolConfiguration::new().with_warmup_count(4);
    let mut enemies = PoolController::initialize(&config, enemy_specs());
    enemies.acquire("drone").unwrap().borrow_mut().activate();

    let mut tags = HashMap::new();
    tags.insert("level".to_string(), "asteroid_belt".to_string());

    for pool in enemies.pools() {
        let output = MetricsExporter::export_prometheus(&pool.metrics(), pool.kind(), Some(&tags));
        for line in output.lines().filter(|line| !line.starts_with('#')) {
            println!("   {}", line);
        }
    }
}
