//! Цвета сегментов и подписей для рендера.
//!
//! Рендер сам рисует дуги, а тут только решаем, каким цветом:
//! чередование базовых цветов, голова кометы, затухающий хвост, подсветка победителя.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Frame, FramePhase, SegmentIndex, Wheel};

/// Добавка к каждому каналу затемнённого цвета, чтобы хвост не уходил в чёрный.
const DIM_LIFT: f64 = 30.0;
/// Потолок коэффициента затемнения.
const MAX_DIM: f64 = 0.99;
/// Размер подписи относительно радиуса колеса.
const LABEL_SIZE_RATIO: f64 = 0.05;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Некорректный цвет: {0}")]
pub struct ColorParseError(pub String);

/// Цвет RGB.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` или `RRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorParseError(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Поканальное среднее с цветом подсветки.
    pub fn brighten(self, highlight: Rgb) -> Rgb {
        let avg = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
        Rgb::new(
            avg(self.r, highlight.r),
            avg(self.g, highlight.g),
            avg(self.b, highlight.b),
        )
    }

    /// Затемнение: `(c + h) * dim / 2 + 30` по каналу, с обрезкой до 255.
    pub fn dim(self, dim_factor: f64, highlight: Rgb) -> Rgb {
        let mix = |c: u8, h: u8| {
            let v = (c as f64 + h as f64) * dim_factor / 2.0 + DIM_LIFT;
            v.clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            mix(self.r, highlight.r),
            mix(self.g, highlight.g),
            mix(self.b, highlight.b),
        )
    }
}

/// Коэффициент затемнения для позиции в хвосте (0 — самый старый).
pub fn trail_dim_factor(position: usize) -> f64 {
    let exp = i32::try_from(position + 1).unwrap_or(i32::MAX);
    (1.0 - MAX_DIM.powi(exp)).min(MAX_DIM)
}

/// Насколько выделена подпись сегмента.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LabelEmphasis {
    Normal,
    /// Стрелка сейчас на этом сегменте.
    Passing,
    /// Победитель остановившегося колеса.
    Winner,
}

impl LabelEmphasis {
    pub fn scale(self) -> f64 {
        match self {
            LabelEmphasis::Normal => 1.5,
            LabelEmphasis::Passing => 2.0,
            LabelEmphasis::Winner => 3.0,
        }
    }
}

/// Как нарисовать один сегмент.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SegmentStyle {
    pub segment: SegmentIndex,
    pub fill: Rgb,
    pub label_color: Rgb,
    pub emphasis: LabelEmphasis,
}

impl SegmentStyle {
    /// Размер шрифта подписи для колеса радиуса `radius`.
    pub fn label_size(&self, radius: f64) -> f64 {
        radius * LABEL_SIZE_RATIO * self.emphasis.scale()
    }
}

/// Палитра колеса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WheelPalette {
    /// Чередуются по сегментам.
    pub base_colors: Vec<Rgb>,
    pub highlight: Rgb,
    pub label_color: Rgb,
}

impl Default for WheelPalette {
    fn default() -> Self {
        Self {
            base_colors: vec![Rgb::new(0xF5, 0xEE, 0xDC), Rgb::new(0xEC, 0xB3, 0x90)],
            highlight: Rgb::new(0xDD, 0x4A, 0x48),
            label_color: Rgb::new(0xBE, 0xBE, 0xBE),
        }
    }
}

impl WheelPalette {
    fn base_color(&self, segment: SegmentIndex) -> Rgb {
        if self.base_colors.is_empty() {
            return self.highlight;
        }
        self.base_colors[segment % self.base_colors.len()]
    }

    /// Стиль сегмента для данного кадра.
    pub fn segment_style(&self, segment: SegmentIndex, frame: &Frame) -> SegmentStyle {
        let base = self.base_color(segment);

        let mut fill = match frame.trail.iter().position(|&s| s == segment) {
            Some(position) => base
                .brighten(self.highlight)
                .dim(trail_dim_factor(position), self.highlight),
            None => base,
        };
        if frame.trail.last() == Some(&segment) {
            fill = self.highlight;
        }

        let is_current = frame.current_segment == segment;
        let emphasis = match frame.phase {
            FramePhase::Spinning if is_current => LabelEmphasis::Passing,
            FramePhase::Settled if is_current => LabelEmphasis::Winner,
            _ => LabelEmphasis::Normal,
        };
        let label_color = match emphasis {
            LabelEmphasis::Normal => self.label_color,
            LabelEmphasis::Passing | LabelEmphasis::Winner => self.highlight,
        };

        SegmentStyle {
            segment,
            fill,
            label_color,
            emphasis,
        }
    }

    /// Стили всех сегментов колеса по порядку.
    pub fn wheel_styles(&self, wheel: &Wheel, frame: &Frame) -> Vec<SegmentStyle> {
        (0..wheel.segment_count())
            .map(|segment| self.segment_style(segment, frame))
            .collect()
    }
}
