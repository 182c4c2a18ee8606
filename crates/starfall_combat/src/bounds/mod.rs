//! Play-area bounds — on-screen гейт и уборка вылетевших entity
//!
//! Stand-in внешнего bounds/visibility collaborator'а (isOnScreen):
//! пишет ScreenState целям каждый тик и убирает снаряды за верхней
//! границей / врагов за нижней. Само ядро читает только ScreenState.

use bevy::prelude::*;

use crate::combat::Projectile;
use crate::components::{Enemy, ScreenState};

/// Прямоугольник игровой зоны, центр в origin
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayBounds {
    pub half_width: f32,
    pub half_height: f32,
}

impl Default for PlayBounds {
    fn default() -> Self {
        // Примерно кадр ортографической камеры оригинальной аркады
        Self {
            half_width: 16.0,
            half_height: 10.0,
        }
    }
}

impl PlayBounds {
    pub fn contains(&self, position: Vec3) -> bool {
        position.x.abs() <= self.half_width && position.y.abs() <= self.half_height
    }
}

/// System: обновить ScreenState у целей по текущей позиции
pub fn update_screen_state(
    bounds: Res<PlayBounds>,
    mut targets: Query<(&Transform, &mut ScreenState)>,
) {
    for (transform, mut screen) in targets.iter_mut() {
        screen.on_screen = bounds.contains(transform.translation);
    }
}

/// System: despawn снарядов, вылетевших вверх, и врагов, ушедших вниз
///
/// Вылет врага вниз — уход без уничтожения: ни урона, ни EnemyDestroyed.
pub fn despawn_out_of_bounds(
    mut commands: Commands,
    bounds: Res<PlayBounds>,
    projectiles: Query<(Entity, &Transform), With<Projectile>>,
    enemies: Query<(Entity, &Transform), With<Enemy>>,
) {
    for (entity, transform) in projectiles.iter() {
        if transform.translation.y > bounds.half_height {
            commands.entity(entity).despawn();
        }
    }

    for (entity, transform) in enemies.iter() {
        if transform.translation.y < -bounds.half_height {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains() {
        let bounds = PlayBounds::default();
        assert!(bounds.contains(Vec3::ZERO));
        assert!(bounds.contains(Vec3::new(16.0, -10.0, 0.0)));
        assert!(!bounds.contains(Vec3::new(0.0, 10.5, 0.0)));
        assert!(!bounds.contains(Vec3::new(-17.0, 0.0, 0.0)));
    }
}
