//! Радиальный falloff урона от взрыва
//!
//! Чистая функция, без side effects — отдельно от систем, чтобы формула
//! тестировалась значениями, а не сценариями.

/// Урон цели на дистанции distance от центра взрыва
///
/// Формула: base_damage × max(0, 1 − distance/radius)
/// - distance = 0 → полный урон
/// - distance >= radius → 0 (никогда не отрицательный)
///
/// radius > 0 — ответственность вызывающего: вырожденный взрыв
/// (radius <= 0) пропускается до формулы.
pub fn area_damage(base_damage: f32, distance: f32, radius: f32) -> f32 {
    let damage_percent = (1.0 - distance / radius).max(0.0);
    base_damage * damage_percent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_damage_at_center() {
        assert_eq!(area_damage(100.0, 0.0, 5.0), 100.0);
    }

    #[test]
    fn test_zero_damage_at_radius() {
        assert_eq!(area_damage(100.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn test_never_negative_beyond_radius() {
        assert_eq!(area_damage(100.0, 10.0, 5.0), 0.0);
    }

    #[test]
    fn test_linear_falloff_midpoint() {
        assert_eq!(area_damage(100.0, 2.5, 5.0), 50.0);
    }

    #[test]
    fn test_scales_with_base_damage() {
        assert_eq!(area_damage(10.0, 2.5, 5.0), 5.0);
        assert_eq!(area_damage(0.0, 2.5, 5.0), 0.0);
    }
}
