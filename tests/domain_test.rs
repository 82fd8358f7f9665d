//! Domain tests for lucky-wheel
//!
//! Эти тесты проверяют:
//! - геометрию колеса и нормализацию угла
//! - хвост подсветки (вместимость, срезание, схлопывание)
//! - подписи кадра по фазам
//! - пустой набор пресетов

use lucky_wheel::domain::*;
use lucky_wheel::engine::EngineError;

//
// TEST 1 — колесо без сегментов не создаётся
//
#[test]
fn wheel_rejects_zero_segments() {
    let err = Wheel::new(0).unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfiguration(_)));
}

//
// TEST 2 — angle_per_segment * segment_count == 360
//
#[test]
fn wheel_angles_cover_full_turn() {
    for n in 1..=360usize {
        let wheel = Wheel::new(n).unwrap();
        let total = wheel.angle_per_segment() * n as f64;
        assert!((total - FULL_TURN_DEG).abs() < 1e-9, "n={n}: {total}");
    }
}

//
// TEST 3 — углы сегментов и сдвиг
//
#[test]
fn segment_angles_follow_index_and_offset() {
    let mut wheel = Wheel::new(20).unwrap();
    assert_eq!(wheel.angle_per_segment(), 18.0);
    assert_eq!(wheel.segment_start_angle(3, 0.0), 54.0);
    assert_eq!(wheel.segment_label_angle(3, 0.0), 63.0);

    wheel.current_angle = 10.0;
    assert_eq!(wheel.segment_start_angle(3, 5.0), 69.0);

    assert!(wheel.contains(19));
    assert!(!wheel.contains(20));
    assert_eq!(wheel.segment_after_steps(105), 5);
}

//
// TEST 4 — нормализация угла в [0, 360)
//
#[test]
fn normalize_angle_wraps_into_turn() {
    assert_eq!(normalize_angle(-30.0), 330.0);
    assert_eq!(normalize_angle(725.0), 5.0);
    assert_eq!(normalize_angle(0.0), 0.0);
    assert_eq!(normalize_angle(359.5), 359.5);
}

//
// TEST 5 — хвост не растёт выше вместимости
//
#[test]
fn trail_push_caps_at_capacity() {
    let mut trail = Trail::new(3);
    for s in 0..5 {
        trail.push(s);
    }
    assert_eq!(trail.snapshot(), vec![2, 3, 4]);
    assert_eq!(trail.len(), 3);
    assert_eq!(trail.head(), Some(4));
    assert_eq!(trail.position_of(3), Some(1));
    assert_eq!(trail.position_of(0), None);
}

//
// TEST 6 — срезание и схлопывание хвоста
//
#[test]
fn trail_trim_and_collapse() {
    let mut trail = Trail::new(10);
    for s in 0..6 {
        trail.push(s);
    }

    trail.trim_oldest(4);
    assert_eq!(trail.snapshot(), vec![4, 5]);

    // срезать больше, чем есть — просто пусто
    trail.trim_oldest(10);
    assert!(trail.is_empty());
    assert_eq!(trail.head(), None);

    trail.push(1);
    trail.push(2);
    trail.collapse_to(7);
    assert_eq!(trail.snapshot(), vec![7]);

    trail.clear();
    assert!(trail.is_empty());
    assert_eq!(trail.capacity(), 10);
}

//
// TEST 7 — подписи кадра по фазам
//
#[test]
fn frame_labels_depend_on_phase() {
    let mut frame = Frame {
        current_segment: 5,
        trail: vec![4, 5],
        angle: 90.0,
        phase: FramePhase::Resting,
    };
    assert_eq!(frame.label(), "Press [space]");

    frame.phase = FramePhase::Spinning;
    assert_eq!(frame.display_number(), 6);
    assert_eq!(frame.label(), "6");

    frame.phase = FramePhase::Settled;
    assert_eq!(frame.label(), "Item: 6");
}

//
// TEST 8 — пустой набор пресетов
//
#[test]
fn empty_preset_has_no_entries() {
    let preset = WinnerPreset::empty();
    assert!(preset.is_empty());
    assert_eq!(preset.get(0), None);
}
