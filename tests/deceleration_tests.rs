//! Deceleration tests for lucky-wheel
//!
//! Эти тесты проверяют:
//! - формулу паузы 1/remaining^1.5 + 1/60
//! - монотонное замедление
//! - срезание хвоста по величине паузы

use lucky_wheel::engine::deceleration::{
    step_delay, step_delay_secs, trail_trim_count, FRAME_FLOOR_SECS, MAX_TRAIL_TRIM,
};

//
// TEST 1 — последний шаг: секунда плюс кадр
//
#[test]
fn last_step_is_one_second_plus_frame() {
    let d = step_delay_secs(1);
    assert!((d - (1.0 + 1.0 / 60.0)).abs() < 1e-12);
}

//
// TEST 2 — ноль оставшихся шагов = один
//
#[test]
fn zero_remaining_is_treated_as_one() {
    assert_eq!(step_delay_secs(0), step_delay_secs(1));
}

//
// TEST 3 — паузы растут к концу спина
//
#[test]
fn delay_grows_as_remaining_shrinks() {
    let mut prev = step_delay_secs(1000);
    for remaining in (1..1000).rev() {
        let d = step_delay_secs(remaining);
        assert!(d >= prev, "remaining={remaining}: {d} < {prev}");
        prev = d;
    }
}

//
// TEST 4 — пауза не меньше одного кадра
//
#[test]
fn delay_never_drops_below_frame_floor() {
    assert!(step_delay_secs(u64::MAX) >= FRAME_FLOOR_SECS);
    assert!(step_delay_secs(100) > FRAME_FLOOR_SECS);
}

//
// TEST 5 — Duration совпадает с секундами
//
#[test]
fn duration_matches_seconds() {
    let d = step_delay(4);
    assert!((d.as_secs_f64() - (0.125 + 1.0 / 60.0)).abs() < 1e-9);
}

//
// TEST 6 — сколько срезать из хвоста
//
#[test]
fn trim_count_follows_delay() {
    assert_eq!(trail_trim_count(0.01), 0);
    assert_eq!(trail_trim_count(0.05), 2);
    assert_eq!(trail_trim_count(0.09), 4);
    assert_eq!(trail_trim_count(1.0), MAX_TRAIL_TRIM);
}

//
// TEST 7 — мусор на входе не срезает ничего
//
#[test]
fn trim_count_ignores_bad_input() {
    assert_eq!(trail_trim_count(f64::NAN), 0);
    assert_eq!(trail_trim_count(f64::INFINITY), 0);
    assert_eq!(trail_trim_count(-1.0), 0);
    assert_eq!(trail_trim_count(0.0), 0);
}
