//! График замедления спина и "истончение" хвоста.

use std::time::Duration;

/// Задержка первого шага — быстрая фаза до включения формулы.
pub const INITIAL_DELAY_SECS: f64 = 0.01;

/// Нижняя подпорка задержки: примерно один кадр при 60 Гц, анимация не замирает.
pub const FRAME_FLOOR_SECS: f64 = 1.0 / 60.0;

/// Сколько секунд задержки "стоит" одна срезанная запись хвоста.
pub const TRAIL_TRIM_UNIT_SECS: f64 = 0.02;

/// Больше стольких записей за шаг не срезаем.
pub const MAX_TRAIL_TRIM: usize = 5;

/// Задержка перед следующим шагом, когда до конца осталось `remaining_steps`.
///
/// `delay = 1 / remaining^1.5 + 1/60`. Чем меньше шагов осталось, тем дольше пауза.
/// `remaining_steps == 0` трактуем как 1: последний шаг самый медленный.
pub fn step_delay_secs(remaining_steps: u64) -> f64 {
    let remaining = remaining_steps.max(1) as f64;
    1.0 / remaining.powf(1.5) + FRAME_FLOOR_SECS
}

pub fn step_delay(remaining_steps: u64) -> Duration {
    Duration::from_secs_f64(step_delay_secs(remaining_steps))
}

/// Сколько самых старых записей хвоста срезать после шага с такой задержкой.
///
/// `floor(min(5, delay / 0.02))`: на разгоне почти ничего, к концу — по 5 за шаг.
pub fn trail_trim_count(delay_secs: f64) -> usize {
    if !delay_secs.is_finite() || delay_secs <= 0.0 {
        return 0;
    }
    let raw = (delay_secs / TRAIL_TRIM_UNIT_SECS).min(MAX_TRAIL_TRIM as f64);
    raw.floor() as usize
}
