//! Palette tests for lucky-wheel
//!
//! Эти тесты проверяют:
//! - разбор и печать hex-цветов
//! - осветление и затемнение хвоста
//! - подсветку головы хвоста и победителя

use lucky_wheel::domain::{Frame, FramePhase, Wheel};
use lucky_wheel::visual::{trail_dim_factor, ColorParseError, LabelEmphasis, Rgb, WheelPalette};

const BASE_A: Rgb = Rgb::new(0xF5, 0xEE, 0xDC);
const HIGHLIGHT: Rgb = Rgb::new(0xDD, 0x4A, 0x48);

fn spinning_frame(trail: Vec<usize>) -> Frame {
    let current = *trail.last().unwrap();
    Frame {
        current_segment: current,
        trail,
        angle: 0.0,
        phase: FramePhase::Spinning,
    }
}

//
// TEST 1 — hex-цвета
//
#[test]
fn hex_parsing_and_formatting() {
    assert_eq!(Rgb::from_hex("#F5EEDC").unwrap(), BASE_A);
    assert_eq!(Rgb::from_hex("dd4a48").unwrap(), HIGHLIGHT);
    assert_eq!(HIGHLIGHT.to_hex(), "#dd4a48");

    assert_eq!(
        Rgb::from_hex("#12345"),
        Err(ColorParseError("#12345".to_string()))
    );
    assert!(Rgb::from_hex("#zz0000").is_err());
}

//
// TEST 2 — осветление = среднее с подсветкой
//
#[test]
fn brighten_averages_with_highlight() {
    assert_eq!(BASE_A.brighten(HIGHLIGHT).to_hex(), "#e99c92");
}

//
// TEST 3 — затемнение с подъёмом и обрезкой
//
#[test]
fn dim_lifts_and_clamps() {
    let bright = BASE_A.brighten(HIGHLIGHT);
    assert_eq!(bright.dim(0.01, HIGHLIGHT), Rgb::new(32, 31, 31));

    let white = Rgb::new(255, 255, 255);
    assert_eq!(white.dim(5.0, white), white);
}

//
// TEST 4 — коэффициент затемнения по хвосту
//
#[test]
fn dim_factor_grows_along_trail_and_is_capped() {
    assert!((trail_dim_factor(0) - 0.01).abs() < 1e-12);
    assert!(trail_dim_factor(1) > trail_dim_factor(0));
    assert!(trail_dim_factor(10_000) <= 0.99);
}

//
// TEST 5 — голова хвоста и затемнённый хвост
//
#[test]
fn trail_head_gets_highlight_and_rest_is_dimmed() {
    let palette = WheelPalette::default();
    let frame = spinning_frame(vec![2, 3, 4]);

    let head = palette.segment_style(4, &frame);
    assert_eq!(head.fill, HIGHLIGHT);
    assert_eq!(head.emphasis, LabelEmphasis::Passing);
    assert_eq!(head.label_color, HIGHLIGHT);

    // сегмент 2 — самый старый в хвосте, база F5EEDC
    let oldest = palette.segment_style(2, &frame);
    assert_eq!(
        oldest.fill,
        BASE_A.brighten(HIGHLIGHT).dim(trail_dim_factor(0), HIGHLIGHT)
    );
    assert_eq!(oldest.emphasis, LabelEmphasis::Normal);

    // вне хвоста — базовый цвет по чётности
    let outside = palette.segment_style(9, &frame);
    assert_eq!(outside.fill, palette.base_colors[1]);
    assert_eq!(outside.label_color, palette.label_color);
}

//
// TEST 6 — победитель выделен после остановки
//
#[test]
fn settled_winner_is_emphasized() {
    let palette = WheelPalette::default();
    let wheel = Wheel::new(20).unwrap();
    let frame = Frame {
        current_segment: 7,
        trail: vec![7],
        angle: 126.0,
        phase: FramePhase::Settled,
    };

    let styles = palette.wheel_styles(&wheel, &frame);
    assert_eq!(styles.len(), 20);
    assert_eq!(styles[7].emphasis, LabelEmphasis::Winner);
    assert!(styles
        .iter()
        .filter(|s| s.segment != 7)
        .all(|s| s.emphasis == LabelEmphasis::Normal));

    assert_eq!(styles[7].label_size(200.0), 30.0);
    assert_eq!(styles[0].label_size(200.0), 15.0);
}
