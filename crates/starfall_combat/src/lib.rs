//! STARFALL Combat Core
//!
//! Боевое ядро аркадного shoot-em-up на Bevy ECS 0.16:
//! - FireControl: гейт скорострельности + data-driven паттерны выстрелов
//! - Projectile: state machine InFlight → Exploding → Destroyed
//!   (отложенная детонация бомб)
//! - AreaDamage: радиальный линейный falloff
//! - Enemy: накопление урона, уничтожение ровно один раз
//!
//! Рендер, звук, ввод и collision detection — внешние collaborator'ы.
//! Внутрь приходят события (FireIntent, WeaponSwitchIntent,
//! ProjectileImpact), наружу уходят (WeaponFired, BombArmed,
//! BombDetonated, DamageDealt, EnemyDestroyed, PowerUpDropped).

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod bounds;
pub mod combat;
pub mod components;
pub mod logger;
pub mod movement;

// Re-export базовых типов для удобства
pub use bounds::PlayBounds;
pub use combat::{
    area_damage, BombArmed, BombDetonated, CombatPlugin, DamageDealt, DamageRequest,
    EnemyDestroyed, FireControl, FireIntent, FirePatterns, PatternShot, PowerUpDropped,
    Projectile, ProjectileImpact, ProjectileState, Velocity, WeaponCatalog, WeaponDefinition,
    WeaponFired, WeaponKind, WeaponSwitchIntent, EXPLOSION_DELAY,
};
pub use components::*;

/// Главный plugin симуляции
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Детерминистичный RNG (seed по умолчанию, не перетирает уже
            // вставленный)
            .init_resource::<DeterministicRng>()
            .add_plugins(CombatPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(42)
    }
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot компонентов мира для сравнения детерминизма
///
/// Сортировка по Entity ID, сериализация через Debug — достаточно для
/// побайтового сравнения прогонов.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
