use serde::{Deserialize, Serialize};

use crate::domain::SegmentIndex;
use crate::engine::errors::EngineError;

/// Полный оборот колеса в градусах.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Геометрия колеса: количество сегментов и базовый угол поворота.
///
/// Колесо только описывает разметку. Кто сейчас подсвечен и куда
/// крутится стрелка — решает `SpinEngine`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Wheel {
    segment_count: usize,
    /// Базовый сдвиг всей разметки (градусы). Для отрисовки, на выбор победителя не влияет.
    pub current_angle: f64,
}

impl Wheel {
    /// Строгий конструктор: 0 сегментов — это ошибка конфигурации.
    pub fn new(segment_count: usize) -> Result<Self, EngineError> {
        if segment_count == 0 {
            return Err(EngineError::InvalidConfiguration(
                "segment_count должен быть > 0".to_string(),
            ));
        }
        Ok(Self {
            segment_count,
            current_angle: 0.0,
        })
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Угол одного сегмента, `angle_per_segment * segment_count == 360`.
    pub fn angle_per_segment(&self) -> f64 {
        FULL_TURN_DEG / self.segment_count as f64
    }

    pub fn contains(&self, segment: SegmentIndex) -> bool {
        segment < self.segment_count
    }

    /// Начальный угол дуги сегмента `i` с учётом сдвига `offset`.
    pub fn segment_start_angle(&self, segment: SegmentIndex, offset: f64) -> f64 {
        segment as f64 * self.angle_per_segment() + self.current_angle + offset
    }

    /// Угол середины сегмента — туда рендер ставит номер.
    pub fn segment_label_angle(&self, segment: SegmentIndex, offset: f64) -> f64 {
        self.segment_start_angle(segment, offset) + self.angle_per_segment() / 2.0
    }

    /// Какой сегмент окажется под стрелкой после `steps` шагов от нулевого.
    pub fn segment_after_steps(&self, steps: u64) -> SegmentIndex {
        (steps % self.segment_count as u64) as SegmentIndex
    }
}

/// Привести угол в диапазон `[0, 360)`.
pub fn normalize_angle(deg: f64) -> f64 {
    let wrapped = deg % FULL_TURN_DEG;
    if wrapped < 0.0 {
        wrapped + FULL_TURN_DEG
    } else {
        wrapped
    }
}
