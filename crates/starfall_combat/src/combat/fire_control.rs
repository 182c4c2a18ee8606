//! Fire control — гейт скорострельности и спавн снарядов по паттернам
//!
//! Поток: внешний input/AI шлёт FireIntent → process_fire_intents
//! проверяет cooldown gate → спавнит снаряды по FirePatterns → двигает
//! next_shot_time. Смена оружия — WeaponSwitchIntent через каталог.
//!
//! Ошибки не фатальны: catalog miss логируется, контрол деградирует до
//! WeaponKind::None (инертен, но жив).

use bevy::prelude::*;

use crate::combat::catalog::{FirePatterns, WeaponCatalog, WeaponDefinition, WeaponKind};
use crate::combat::projectile::{Projectile, ProjectileState, Velocity};

/// Контрол стрельбы на актёре-носителе оружия
///
/// Владеет текущим kind, копией определения из каталога и cooldown
/// гейтом. Мутируется только своими системами (fire + switch).
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct FireControl {
    /// Активный тип оружия (None = снято)
    pub kind: WeaponKind,

    /// Копия определения из каталога (каталог не мутируется)
    pub def: Option<WeaponDefinition>,

    /// Абсолютное игровое время следующего разрешённого выстрела
    ///
    /// Инвариант: монотонно не убывает
    pub next_shot_time: f32,
}

impl FireControl {
    /// Контрол инертен: оружие снято или определение не резолвится
    pub fn is_inert(&self) -> bool {
        self.kind == WeaponKind::None || self.def.is_none()
    }

    /// Готов стрелять в момент now (не инертен и cooldown истёк)
    pub fn is_ready(&self, now: f32) -> bool {
        !self.is_inert() && now >= self.next_shot_time
    }
}

/// Event (inbound): внешний триггер "огонь" (input или AI)
#[derive(Event, Debug, Clone)]
pub struct FireIntent {
    pub shooter: Entity,
}

/// Event (inbound): смена оружия (подбор power-up и т.п.)
#[derive(Event, Debug, Clone)]
pub struct WeaponSwitchIntent {
    pub entity: Entity,
    pub kind: WeaponKind,
}

/// Event (outbound, audio/VFX sink): выстрел состоялся
#[derive(Event, Debug, Clone)]
pub struct WeaponFired {
    pub shooter: Entity,
    pub kind: WeaponKind,
    pub projectiles: u32,
}

/// System: смена оружия через catalog lookup
///
/// - kind == None → контрол инертен, это не ошибка
/// - catalog miss → ConfigurationError в лог, контрол деградирует до None
pub fn process_weapon_switches(
    mut switches: EventReader<WeaponSwitchIntent>,
    mut controls: Query<&mut FireControl>,
    catalog: Res<WeaponCatalog>,
) {
    for switch in switches.read() {
        let Ok(mut control) = controls.get_mut(switch.entity) else {
            continue;
        };

        if switch.kind == WeaponKind::None {
            control.kind = WeaponKind::None;
            control.def = None;
            continue;
        }

        match catalog.get(switch.kind) {
            Some(def) => {
                control.kind = switch.kind;
                control.def = Some(*def);
            }
            None => {
                crate::logger::log_error(&format!(
                    "WeaponDefinition for {:?} is missing in catalog, disabling fire control",
                    switch.kind
                ));
                control.kind = WeaponKind::None;
                control.def = None;
            }
        }
    }
}

/// System: обработка FireIntent — cooldown gate + спавн паттерна
///
/// Спавн-точка: позиция стрелка, спроецированная на плоскость z = 0.
/// Каждый PatternShot = один снаряд: базовый up-вектор × velocity ×
/// speed_scale, повёрнутый на angle_deg вокруг Z.
pub fn process_fire_intents(
    mut commands: Commands,
    mut intents: EventReader<FireIntent>,
    mut shooters: Query<(&mut FireControl, &Transform)>,
    patterns: Res<FirePatterns>,
    time: Res<Time>,
    mut fired: EventWriter<WeaponFired>,
) {
    let now = time.elapsed_secs();

    for intent in intents.read() {
        let Ok((mut control, transform)) = shooters.get_mut(intent.shooter) else {
            continue;
        };

        if !control.is_ready(now) {
            continue;
        }
        let Some(def) = control.def else {
            continue;
        };

        let mut origin = transform.translation;
        origin.z = 0.0;

        let shots = patterns.shots(control.kind);
        for shot in shots {
            let rotation = Quat::from_rotation_z(shot.angle_deg.to_radians());
            let velocity = rotation * (Vec3::Y * def.velocity * shot.speed_scale);

            commands.spawn((
                Projectile { kind: control.kind },
                ProjectileState::InFlight,
                Velocity(velocity),
                Transform::from_translation(origin),
            ));
        }

        // Гейт двигаем и для kind без снарядов (laser) — скорострельность
        // одна на контрол
        control.next_shot_time = now + def.delay_between_shots;

        if !shots.is_empty() {
            fired.write(WeaponFired {
                shooter: intent.shooter,
                kind: control.kind,
                projectiles: shots.len() as u32,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::catalog::WeaponCatalog;

    fn blaster_control() -> FireControl {
        let catalog = WeaponCatalog::default();
        FireControl {
            kind: WeaponKind::Blaster,
            def: catalog.get(WeaponKind::Blaster).copied(),
            next_shot_time: 0.0,
        }
    }

    #[test]
    fn test_default_control_is_inert() {
        let control = FireControl::default();
        assert!(control.is_inert());
        assert!(!control.is_ready(100.0));
    }

    #[test]
    fn test_cooldown_gate() {
        let mut control = blaster_control();

        // t=0: готов, стреляем → гейт на 0.3
        assert!(control.is_ready(0.0));
        control.next_shot_time = 0.3;

        // t=0.2: ещё рано
        assert!(!control.is_ready(0.2));

        // t=0.31: снова готов
        assert!(control.is_ready(0.31));
    }

    #[test]
    fn test_next_shot_time_non_decreasing() {
        let mut control = blaster_control();
        let mut last = control.next_shot_time;

        for step in 1..=5 {
            let now = step as f32 * 0.5;
            assert!(control.is_ready(now));
            control.next_shot_time = now + 0.3;
            assert!(control.next_shot_time >= last);
            last = control.next_shot_time;
        }
    }

    #[test]
    fn test_switch_to_none_makes_inert() {
        let mut control = blaster_control();
        assert!(!control.is_inert());

        control.kind = WeaponKind::None;
        control.def = None;
        assert!(control.is_inert());
    }
}
