//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - enemy: цели (Enemy, Health, DestructionLatch, ScreenState)
//!
//! Компоненты оружия и снарядов живут в crate::combat рядом со своими
//! системами (FireControl, Projectile, ProjectileState, Velocity).

pub mod enemy;

// Re-exports для удобного импорта
pub use enemy::*;
