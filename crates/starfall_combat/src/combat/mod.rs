//! Combat resolution module
//!
//! Ядро боя: кто стреляет, как летят и кончаются снаряды, как считается
//! area damage и как цели умирают ровно один раз.
//!
//! Внешние collaborator'ы (рендер, звук, input, collision detection,
//! scoring) общаются с ядром только событиями:
//! - inbound: FireIntent, WeaponSwitchIntent, ProjectileImpact
//! - outbound: WeaponFired, BombArmed, BombDetonated, DamageDealt,
//!   EnemyDestroyed, PowerUpDropped

use bevy::prelude::*;

pub mod area_damage;
pub mod catalog;
pub mod damage;
pub mod fire_control;
pub mod projectile;

// Re-export основных типов
pub use area_damage::area_damage;
pub use catalog::{FirePatterns, PatternShot, WeaponCatalog, WeaponDefinition, WeaponKind};
pub use damage::{apply_damage, DamageDealt, DamageRequest, EnemyDestroyed, PowerUpDropped};
pub use fire_control::{FireControl, FireIntent, WeaponFired, WeaponSwitchIntent};
pub use projectile::{
    BombArmed, BombDetonated, Projectile, ProjectileImpact, ProjectileState, Velocity,
    EXPLOSION_DELAY,
};

/// Combat Plugin
///
/// Регистрирует боевые системы в FixedUpdate, последовательной цепочкой —
/// один кооперативный шаг на тик, никакой параллельной мутации общего
/// состояния:
/// 1. motion: интеграция скоростей + снижение врагов (stand-in внешней
///    motion системы)
/// 2. bounds: on-screen гейт + уборка вылетевших entity
/// 3. смена оружия → обработка FireIntent
/// 4. impact события → детонация взведённых бомб
/// 5. применение урона → броски на дроп
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<FireIntent>()
            .add_event::<WeaponSwitchIntent>()
            .add_event::<WeaponFired>()
            .add_event::<ProjectileImpact>()
            .add_event::<BombArmed>()
            .add_event::<BombDetonated>()
            .add_event::<DamageRequest>()
            .add_event::<DamageDealt>()
            .add_event::<EnemyDestroyed>()
            .add_event::<PowerUpDropped>();

        // Read-only данные боя
        app.init_resource::<WeaponCatalog>()
            .init_resource::<FirePatterns>()
            .init_resource::<crate::bounds::PlayBounds>();

        app.add_systems(
            FixedUpdate,
            (
                crate::movement::integrate_projectiles,
                crate::movement::descend_enemies,
                crate::bounds::update_screen_state,
                crate::bounds::despawn_out_of_bounds,
                fire_control::process_weapon_switches,
                fire_control::process_fire_intents,
                projectile::process_projectile_impacts,
                projectile::detonate_bombs,
                damage::apply_damage,
                damage::roll_power_up_drops,
            )
                .chain(), // Последовательное выполнение
        );
    }
}
