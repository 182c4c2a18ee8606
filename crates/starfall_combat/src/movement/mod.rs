//! Интеграция движения — stand-in внешней motion/physics системы
//!
//! Ядро решает что происходит ПОСЛЕ касания; само движение здесь только
//! чтобы headless симуляция и интеграционные тесты летали по настоящим
//! траекториям. Прямолинейная интеграция, без ускорений.

use bevy::prelude::*;

use crate::combat::{Projectile, Velocity};
use crate::components::Enemy;

/// System: снаряды летят по своей скорости
pub fn integrate_projectiles(
    time: Res<Time>,
    mut projectiles: Query<(&Velocity, &mut Transform), With<Projectile>>,
) {
    let delta = time.delta_secs();

    for (velocity, mut transform) in projectiles.iter_mut() {
        transform.translation += velocity.0 * delta;
    }
}

/// System: враги снижаются по экрану со своей скоростью
pub fn descend_enemies(time: Res<Time>, mut enemies: Query<(&Enemy, &mut Transform)>) {
    let delta = time.delta_secs();

    for (enemy, mut transform) in enemies.iter_mut() {
        transform.translation.y -= enemy.speed * delta;
    }
}
