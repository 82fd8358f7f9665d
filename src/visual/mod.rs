//! Визуальные правила для рендера (цвета). Пикселей тут нет.

pub mod palette;

pub use palette::{trail_dim_factor, ColorParseError, LabelEmphasis, Rgb, SegmentStyle, WheelPalette};
