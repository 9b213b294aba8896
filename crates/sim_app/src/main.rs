//! # sim_app — demo frame loop
//!
//! Drops a crate onto a floor and steps the simulation at a fixed timestep,
//! logging the collision pairs the broad phase reports. Exists to show the
//! wiring: spawn entities, attach components, register bodies, run
//! input → update → render once per tick, sweep removals at the end of the
//! frame.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sim_entity::{Collider, EntityStore, Health, Physics, Sprite, Transform2D};
use sim_math::{Alignment, Shape, Vec2};
use sim_physics::{PhysicsConfig, PhysicsEngine};

const TICK_RATE: f32 = 60.0;
const TICKS: u32 = 120;

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sim_app=info".parse()?))
        .init();

    info!("simulation demo starting");

    let mut store = EntityStore::new();
    let mut engine = PhysicsEngine::new(
        PhysicsConfig::default()
            .with_gravity(Vec2::new(0.0, 980.0))
            .with_max_speed(Vec2::new(500.0, 500.0)),
    );

    // A crate falling from above.
    let falling = store.spawn("crate", "prop");
    store.add_component(falling, Transform2D::from_position(Vec2::new(0.0, -200.0)))?;
    store.add_component(falling, Physics::new(true, 2.0))?;
    store.add_component(
        falling,
        Collider::new(Shape::aabb(Vec2::new(32.0, 32.0))).with_alignment(Alignment::Center),
    )?;
    store.add_component(falling, Sprite::new("crate", Vec2::new(32.0, 32.0)))?;
    store.add_component(falling, Health::new(3, 0.5))?;
    engine.register(falling);

    // A static floor slab. No gravity, infinite patience.
    let floor = store.spawn("floor", "level");
    store.add_component(floor, Transform2D::from_position(Vec2::new(-200.0, 0.0)))?;
    store.add_component(floor, Physics::new(false, 1.0))?;
    store.add_component(floor, Collider::new(Shape::aabb(Vec2::new(400.0, 32.0))))?;
    engine.register(floor);

    let dt = 1.0 / TICK_RATE;
    for tick in 0..TICKS {
        store.handle_input();
        engine.update(&mut store, dt);
        store.update(dt);
        store.render();

        for pair in engine.collision_pairs() {
            let a = store.name(pair.a).unwrap_or("?");
            let b = store.name(pair.b).unwrap_or("?");
            info!(tick, a, b, trigger = pair.trigger, "collision");
        }

        // End-of-frame compaction of anything marked during the tick.
        store.sweep();
    }

    if let Some(transform) = store.get_component::<Transform2D>(falling) {
        info!(
            x = transform.position.x,
            y = transform.position.y,
            "crate rest position"
        );
    }

    info!("simulation demo finished");
    Ok(())
}
