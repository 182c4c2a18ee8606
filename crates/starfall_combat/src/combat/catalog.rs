//! Weapon catalog — неизменяемый реестр характеристик оружия
//!
//! Каталог read-only после загрузки: системы только читают, конкурентные
//! чтения безопасны. Serde derive — таблица загружается из данных
//! (data-driven, код не знает конкретных цифр).
//!
//! Паттерны выстрелов — тоже данные (FirePatterns), не per-kind ветвление:
//! новое оружие = новая запись в таблице, O(1).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Тип оружия — закрытое перечисление
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect,
)]
pub enum WeaponKind {
    /// Оружие снято — контрол инертен
    #[default]
    None,
    Blaster,
    Spread,
    Phaser,
    Bomb,
    Laser,
    Shield,
}

/// Характеристики одного типа оружия (immutable record)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct WeaponDefinition {
    pub kind: WeaponKind,

    /// Урон при прямом попадании (и база для area damage)
    pub damage_on_hit: f32,

    /// Урон в секунду (laser; ядром резолюции не используется)
    pub damage_per_sec: f32,

    /// Минимальный интервал между выстрелами (секунды)
    pub delay_between_shots: f32,

    /// Скорость снаряда (m/s, вверх)
    pub velocity: f32,

    /// Радиус area damage (метры); <= 0 — взрыв вырожденный
    pub explosion_radius: f32,
}

/// Каталог определений оружия (external registry)
///
/// WeaponKind::None в таблице отсутствует намеренно — это "оружие снято",
/// а не определение.
#[derive(Resource, Debug, Clone)]
pub struct WeaponCatalog {
    defs: HashMap<WeaponKind, WeaponDefinition>,
}

impl Default for WeaponCatalog {
    fn default() -> Self {
        Self::from_definitions([
            WeaponDefinition {
                kind: WeaponKind::Blaster,
                damage_on_hit: 1.0,
                damage_per_sec: 0.0,
                delay_between_shots: 0.3,
                velocity: 20.0,
                explosion_radius: 0.0,
            },
            WeaponDefinition {
                kind: WeaponKind::Spread,
                damage_on_hit: 1.0,
                damage_per_sec: 0.0,
                delay_between_shots: 0.4,
                velocity: 20.0,
                explosion_radius: 0.0,
            },
            WeaponDefinition {
                kind: WeaponKind::Phaser,
                damage_on_hit: 1.0,
                damage_per_sec: 0.0,
                delay_between_shots: 0.4,
                velocity: 20.0,
                explosion_radius: 0.0,
            },
            WeaponDefinition {
                kind: WeaponKind::Bomb,
                damage_on_hit: 10.0,
                damage_per_sec: 0.0,
                delay_between_shots: 1.5,
                velocity: 12.0,
                explosion_radius: 5.0,
            },
            WeaponDefinition {
                kind: WeaponKind::Laser,
                damage_on_hit: 0.0,
                damage_per_sec: 2.0,
                delay_between_shots: 0.0,
                velocity: 0.0,
                explosion_radius: 0.0,
            },
            WeaponDefinition {
                kind: WeaponKind::Shield,
                damage_on_hit: 0.0,
                damage_per_sec: 0.0,
                delay_between_shots: 0.0,
                velocity: 0.0,
                explosion_radius: 0.0,
            },
        ])
    }
}

impl WeaponCatalog {
    /// Собрать каталог из таблицы определений (ключ — def.kind)
    pub fn from_definitions(defs: impl IntoIterator<Item = WeaponDefinition>) -> Self {
        Self {
            defs: defs.into_iter().map(|def| (def.kind, def)).collect(),
        }
    }

    /// Catalog lookup: None при отсутствующей записи (ConfigurationError
    /// решает вызывающий — ядро на miss не падает)
    pub fn get(&self, kind: WeaponKind) -> Option<&WeaponDefinition> {
        self.defs.get(&kind)
    }
}

/// Один выстрел паттерна: угловой offset от базового up-вектора + множитель скорости
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct PatternShot {
    pub angle_deg: f32,
    pub speed_scale: f32,
}

impl PatternShot {
    pub const fn straight() -> Self {
        Self {
            angle_deg: 0.0,
            speed_scale: 1.0,
        }
    }

    pub const fn angled(angle_deg: f32) -> Self {
        Self {
            angle_deg,
            speed_scale: 1.0,
        }
    }
}

/// Паттерны выстрелов: kind → список (offset, speed) пар
///
/// Kind без записи (или с пустым списком) снарядов не спавнит — laser и
/// shield резолвятся не снарядами.
#[derive(Resource, Debug, Clone)]
pub struct FirePatterns {
    patterns: HashMap<WeaponKind, Vec<PatternShot>>,
}

impl Default for FirePatterns {
    fn default() -> Self {
        let mut patterns = HashMap::new();
        patterns.insert(WeaponKind::Blaster, vec![PatternShot::straight()]);
        patterns.insert(
            WeaponKind::Spread,
            vec![
                PatternShot::straight(),
                PatternShot::angled(10.0),
                PatternShot::angled(-10.0),
            ],
        );
        patterns.insert(WeaponKind::Phaser, vec![PatternShot::straight()]);
        patterns.insert(WeaponKind::Bomb, vec![PatternShot::straight()]);
        Self { patterns }
    }
}

impl FirePatterns {
    pub fn shots(&self, kind: WeaponKind) -> &[PatternShot] {
        self.patterns.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_stock_table() {
        let catalog = WeaponCatalog::default();

        let blaster = catalog.get(WeaponKind::Blaster).unwrap();
        assert_eq!(blaster.damage_on_hit, 1.0);
        assert_eq!(blaster.delay_between_shots, 0.3);

        let bomb = catalog.get(WeaponKind::Bomb).unwrap();
        assert_eq!(bomb.explosion_radius, 5.0);
        assert_eq!(bomb.damage_on_hit, 10.0);

        // None — не определение
        assert!(catalog.get(WeaponKind::None).is_none());
    }

    #[test]
    fn test_catalog_miss_on_empty_table() {
        let catalog = WeaponCatalog::from_definitions(std::iter::empty());
        assert!(catalog.get(WeaponKind::Bomb).is_none());
    }

    #[test]
    fn test_spread_pattern_offsets() {
        let patterns = FirePatterns::default();
        let shots = patterns.shots(WeaponKind::Spread);

        assert_eq!(shots.len(), 3);
        let angles: Vec<f32> = shots.iter().map(|s| s.angle_deg).collect();
        assert!(angles.contains(&0.0));
        assert!(angles.contains(&10.0));
        assert!(angles.contains(&-10.0));
    }

    #[test]
    fn test_single_shot_patterns() {
        let patterns = FirePatterns::default();
        assert_eq!(patterns.shots(WeaponKind::Blaster).len(), 1);
        assert_eq!(patterns.shots(WeaponKind::Bomb).len(), 1);

        // Kind без паттерна — пустой слайс, не panic
        assert!(patterns.shots(WeaponKind::None).is_empty());
        assert!(patterns.shots(WeaponKind::Laser).is_empty());
    }
}
