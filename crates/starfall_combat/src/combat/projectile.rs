//! Projectile lifecycle — state machine с отложенной детонацией бомб
//!
//! InFlight → (не bomb) Destroyed при первом impact / вылете вверх
//! InFlight → (bomb) Exploding { detonate_at } → Destroyed после детонации
//!
//! Выход из InFlight — защёлка: повторные impact события по уже
//! взведённому/уничтоженному снаряду молча игнорируются (InvalidState,
//! не ошибка). Collision detection — внешний: сюда приходят только
//! ProjectileImpact события.

use bevy::prelude::*;

use crate::combat::area_damage::area_damage;
use crate::combat::catalog::{WeaponCatalog, WeaponKind};
use crate::combat::damage::DamageRequest;
use crate::components::Enemy;

/// Задержка детонации бомбы после первого касания (секунды)
pub const EXPLOSION_DELAY: f32 = 1.0;

/// Снаряд. kind копируется при спавне и далее неизменен.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Projectile {
    pub kind: WeaponKind,
}

/// Линейная скорость снаряда (m/s)
///
/// Интегрируется motion системой; у взведённой бомбы обнуляется.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Velocity(pub Vec3);

/// Состояние жизненного цикла снаряда
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub enum ProjectileState {
    #[default]
    InFlight,

    /// Бомба взведена, ждёт дедлайн (абсолютное игровое время).
    /// Отложенное продолжение: detonate_bombs поллит дедлайн на
    /// последующих тиках.
    Exploding { detonate_at: f32 },

    /// Терминальное состояние; entity despawn-ится тем же шагом.
    /// Нужен как защёлка внутри шага — despawn через Commands отложен.
    Destroyed,
}

/// Event (inbound, от внешнего collision detection): снаряд коснулся тела
#[derive(Event, Debug, Clone)]
pub struct ProjectileImpact {
    pub projectile: Entity,

    /// Цель, если коснулись damage target (None — стена, мусор и т.п.)
    pub target: Option<Entity>,
}

/// Event (outbound): бомба взведена — рендер может скрыть модель
#[derive(Event, Debug, Clone)]
pub struct BombArmed {
    pub projectile: Entity,
    pub detonate_at: f32,
}

/// Event (outbound, VFX sink): бомба сдетонировала
#[derive(Event, Debug, Clone)]
pub struct BombDetonated {
    pub position: Vec3,
    pub radius: f32,
}

/// System: обработка impact событий от внешней физики
///
/// Порядок обработки = порядок доставки событий. Прямое попадание наносит
/// damage_on_hit цели; снаряд уничтожается — кроме бомбы, которая взводится
/// и уничтожает себя сама через детонацию.
pub fn process_projectile_impacts(
    mut commands: Commands,
    mut impacts: EventReader<ProjectileImpact>,
    mut projectiles: Query<(&Projectile, &mut ProjectileState, &mut Velocity)>,
    catalog: Res<WeaponCatalog>,
    time: Res<Time>,
    mut damage: EventWriter<DamageRequest>,
    mut armed: EventWriter<BombArmed>,
) {
    let now = time.elapsed_secs();

    for impact in impacts.read() {
        let Ok((projectile, mut state, mut velocity)) = projectiles.get_mut(impact.projectile)
        else {
            // Снаряд уже удалён — InvalidState, молча пропускаем
            continue;
        };

        if *state != ProjectileState::InFlight {
            // Защёлка закрыта: повторный impact того же шага или после
            // взведения
            continue;
        }

        // Прямое попадание: урон из definition
        if let Some(target) = impact.target {
            match catalog.get(projectile.kind) {
                Some(def) => {
                    damage.write(DamageRequest {
                        target,
                        amount: def.damage_on_hit,
                        source: Some(impact.projectile),
                    });
                }
                None => {
                    crate::logger::log_error(&format!(
                        "WeaponDefinition for {:?} is missing in catalog, direct hit deals no damage",
                        projectile.kind
                    ));
                }
            }
        }

        if projectile.kind == WeaponKind::Bomb {
            // Бомба: гасим скорость, взводим; уничтожение — через детонацию
            velocity.0 = Vec3::ZERO;
            let detonate_at = now + EXPLOSION_DELAY;
            *state = ProjectileState::Exploding { detonate_at };
            armed.write(BombArmed {
                projectile: impact.projectile,
                detonate_at,
            });
        } else {
            *state = ProjectileState::Destroyed;
            commands.entity(impact.projectile).despawn();
        }
    }
}

/// System: отложенная детонация бомб
///
/// Поллит дедлайн каждый тик FixedUpdate. Force-despawn бомбы до дедлайна
/// просто убирает её из query — продолжение отбрасывается без side effects.
///
/// Area damage: snapshot overlap-сферы по целям, линейный falloff.
/// Off-screen гейт применяет apply_damage — правило одно на прямые и
/// area попадания.
pub fn detonate_bombs(
    mut commands: Commands,
    time: Res<Time>,
    mut bombs: Query<(Entity, &Projectile, &mut ProjectileState, &Transform)>,
    enemies: Query<(Entity, &Transform), With<Enemy>>,
    catalog: Res<WeaponCatalog>,
    mut damage: EventWriter<DamageRequest>,
    mut detonations: EventWriter<BombDetonated>,
) {
    let now = time.elapsed_secs();

    for (entity, projectile, mut state, transform) in bombs.iter_mut() {
        let ProjectileState::Exploding { detonate_at } = *state else {
            continue;
        };
        if now < detonate_at {
            continue;
        }

        let center = transform.translation;

        match catalog.get(projectile.kind) {
            None => {
                // ConfigurationError: детонация без урона, но не краш
                crate::logger::log_error(&format!(
                    "WeaponDefinition for {:?} is missing in catalog, bomb detonates for zero damage",
                    projectile.kind
                ));
            }
            Some(def) if def.explosion_radius <= 0.0 => {
                // Вырожденный взрыв — молча, без урона и без VFX
            }
            Some(def) => {
                for (target, target_transform) in enemies.iter() {
                    let distance = center.distance(target_transform.translation);
                    if distance >= def.explosion_radius {
                        continue;
                    }
                    let amount = area_damage(def.damage_on_hit, distance, def.explosion_radius);
                    if amount > 0.0 {
                        damage.write(DamageRequest {
                            target,
                            amount,
                            source: Some(entity),
                        });
                    }
                }
                detonations.write(BombDetonated {
                    position: center,
                    radius: def.explosion_radius,
                });
                crate::logger::log(&format!(
                    "💥 Bomb {:?} detonated at {:?} (radius {})",
                    entity, center, def.explosion_radius
                ));
            }
        }

        *state = ProjectileState::Destroyed;
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_state_default_in_flight() {
        assert_eq!(ProjectileState::default(), ProjectileState::InFlight);
    }

    #[test]
    fn test_exploding_state_holds_deadline() {
        let state = ProjectileState::Exploding { detonate_at: 2.5 };
        let ProjectileState::Exploding { detonate_at } = state else {
            panic!("expected Exploding");
        };
        assert_eq!(detonate_at, 2.5);
    }

    #[test]
    fn test_impact_event_without_target() {
        // Попадание в стену: target отсутствует
        let impact = ProjectileImpact {
            projectile: Entity::PLACEHOLDER,
            target: None,
        };
        assert!(impact.target.is_none());
    }
}
