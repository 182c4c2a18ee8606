//! Применение урона и уничтожение целей
//!
//! Все источники урона (прямые попадания, area damage) сходятся в один
//! DamageRequest поток → apply_damage. Это сериализует мутации Health
//! внутри шага и делает защёлку destroyed-once атомарной относительно
//! порядка обработки событий.

use bevy::prelude::*;
use rand::Rng;

use crate::combat::catalog::WeaponKind;
use crate::components::{DestructionLatch, Enemy, Health, ScreenState};
use crate::DeterministicRng;

/// Event (internal): запрос на урон по цели
#[derive(Event, Debug, Clone)]
pub struct DamageRequest {
    pub target: Entity,
    pub amount: f32,

    /// Снаряд-источник (для логов); None — внешний источник урона
    pub source: Option<Entity>,
}

/// Event (outbound): урон применён (UI, звук, hit-flash)
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub target: Entity,
    pub amount: f32,
    pub target_destroyed: bool,
}

/// Event (outbound, scoring/cleanup sink): цель уничтожена
///
/// Инвариант: ровно одно событие на цель за её жизнь — гасится
/// DestructionLatch, сколько бы damage событий ни пересекло ноль в одном
/// шаге.
#[derive(Event, Debug, Clone)]
pub struct EnemyDestroyed {
    pub entity: Entity,
    pub score: i32,
    pub position: Vec3,
    pub power_up_drop_chance: f32,
}

/// Event (outbound): дроп power-up для внешнего спавнера
#[derive(Event, Debug, Clone)]
pub struct PowerUpDropped {
    pub kind: WeaponKind,
    pub position: Vec3,
}

/// System: применение DamageRequest потока
///
/// 1. Off-screen цели неуязвимы (pre-entry kills запрещены)
/// 2. Health мутируется напрямую — минус внутри шага допустим
/// 3. Пересечение нуля + claim защёлки → одно EnemyDestroyed + despawn
pub fn apply_damage(
    mut commands: Commands,
    mut requests: EventReader<DamageRequest>,
    mut targets: Query<(
        &mut Health,
        &mut DestructionLatch,
        &Enemy,
        &ScreenState,
        &Transform,
    )>,
    mut dealt: EventWriter<DamageDealt>,
    mut destroyed: EventWriter<EnemyDestroyed>,
) {
    for request in requests.read() {
        let Ok((mut health, mut latch, enemy, screen, transform)) =
            targets.get_mut(request.target)
        else {
            // Цель уже удалена — урон в пустоту
            continue;
        };

        if !screen.on_screen {
            continue;
        }

        health.take_damage(request.amount);

        let crossed = !health.is_alive() && latch.claim();

        dealt.write(DamageDealt {
            target: request.target,
            amount: request.amount,
            target_destroyed: crossed,
        });

        if crossed {
            destroyed.write(EnemyDestroyed {
                entity: request.target,
                score: enemy.score,
                position: transform.translation,
                power_up_drop_chance: enemy.power_up_drop_chance,
            });
            commands.entity(request.target).despawn();

            crate::logger::log_info(&format!(
                "☠️ Enemy {:?} destroyed (+{} score)",
                request.target, enemy.score
            ));
        }
    }
}

// Kind'ы которые может выдать дроп (None/Laser в дропе не участвуют)
const DROPPABLE_KINDS: [WeaponKind; 5] = [
    WeaponKind::Blaster,
    WeaponKind::Spread,
    WeaponKind::Phaser,
    WeaponKind::Bomb,
    WeaponKind::Shield,
];

/// System: бросок на дроп power-up по уничтоженным целям
///
/// Seeded RNG → прогоны с одним seed детерминистичны.
pub fn roll_power_up_drops(
    mut destroyed: EventReader<EnemyDestroyed>,
    mut rng: ResMut<DeterministicRng>,
    mut drops: EventWriter<PowerUpDropped>,
) {
    for event in destroyed.read() {
        let chance = event.power_up_drop_chance.clamp(0.0, 1.0);
        if chance <= 0.0 {
            continue;
        }
        if rng.rng.gen_bool(f64::from(chance)) {
            let kind = DROPPABLE_KINDS[rng.rng.gen_range(0..DROPPABLE_KINDS.len())];
            drops.write(PowerUpDropped {
                kind,
                position: event.position,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_request_event() {
        let request = DamageRequest {
            target: Entity::PLACEHOLDER,
            amount: 5.0,
            source: None,
        };
        assert_eq!(request.amount, 5.0);
        assert!(request.source.is_none());
    }

    #[test]
    fn test_enemy_destroyed_event_payload() {
        let event = EnemyDestroyed {
            entity: Entity::PLACEHOLDER,
            score: 100,
            position: Vec3::ZERO,
            power_up_drop_chance: 1.0,
        };
        assert_eq!(event.score, 100);
    }

    #[test]
    fn test_drop_roll_deterministic_per_seed() {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let roll = |seed: u64| -> Vec<bool> {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..16).map(|_| rng.gen_bool(0.5)).collect()
        };

        assert_eq!(roll(42), roll(42));
    }
}
