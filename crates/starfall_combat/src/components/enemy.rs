//! Базовые компоненты целей: Enemy, Health, DestructionLatch, ScreenState

use bevy::prelude::*;

/// Враг (damage target) — всё что может копить урон и быть сбитым
///
/// Автоматически добавляет Health, DestructionLatch, ScreenState через Required Components.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(Health, DestructionLatch, ScreenState)]
pub struct Enemy {
    /// Очки за уничтожение (payload для scoring sink)
    pub score: i32,

    /// Скорость снижения по экрану (m/s, вниз)
    pub speed: f32,

    /// Шанс дропа power-up при уничтожении [0, 1]
    pub power_up_drop_chance: f32,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            score: 100,
            speed: 10.0,
            power_up_drop_chance: 1.0,
        }
    }
}

/// Здоровье цели
///
/// current — f32 и может транзиентно уйти в минус внутри одного шага
/// (несколько damage событий за тик). Наружу это не видно: цель
/// уничтожается на первом пересечении нуля, остальное гасит защёлка.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(10.0) // Стандартный враг: 10 HP
    }
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.current -= amount;
    }
}

/// Одноразовая защёлка "destroyed уже отправлен"
///
/// check-and-set: claim() возвращает true ровно один раз за жизнь цели.
/// Сколько бы damage событий ни пересекло ноль в одном шаге — scoring
/// sink получит ровно одно уведомление.
#[derive(Component, Debug, Default, Clone, Reflect)]
#[reflect(Component)]
pub struct DestructionLatch {
    reported: bool,
}

impl DestructionLatch {
    /// Закрыть защёлку. true — только первому вызывающему.
    pub fn claim(&mut self) -> bool {
        if self.reported {
            false
        } else {
            self.reported = true;
            true
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.reported
    }
}

/// Видимость в игровой зоне (bounds collaborator)
///
/// Пишется bounds системой каждый тик. Default = за экраном:
/// свежезаспавненная цель неуязвима, пока не войдёт в игровую зону
/// (запрет pre-spawn kills).
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ScreenState {
    pub on_screen: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_goes_negative_transiently() {
        let mut health = Health::new(10.0);
        health.take_damage(6.0);
        assert!(health.is_alive());

        health.take_damage(6.0);
        assert!(!health.is_alive());
        assert_eq!(health.current, -2.0); // Минус допустим внутри шага
    }

    #[test]
    fn test_latch_claims_exactly_once() {
        let mut latch = DestructionLatch::default();
        assert!(!latch.is_claimed());

        assert!(latch.claim());
        assert!(latch.is_claimed());

        // Повторные claim — всегда false
        assert!(!latch.claim());
        assert!(!latch.claim());
    }

    #[test]
    fn test_screen_state_default_off_screen() {
        // Неуязвимость до входа в игровую зону
        assert!(!ScreenState::default().on_screen);
    }
}
