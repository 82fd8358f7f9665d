use serde::{Deserialize, Serialize};

use crate::domain::SegmentIndex;

/// Фаза, в которой снят кадр.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FramePhase {
    /// Колесо ещё ни разу не крутили.
    Resting,
    /// Идёт спин, стрелка бежит по сегментам.
    Spinning,
    /// Спин закончился, подсвечен победитель.
    Settled,
}

/// Один кадр анимации колеса — то, что должен нарисовать рендер.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    /// Текущий подсвеченный сегмент (0-based).
    pub current_segment: SegmentIndex,
    /// Хвост подсветки, самый свежий — последний.
    pub trail: Vec<SegmentIndex>,
    /// Угол стрелки в `[0, 360)`.
    pub angle: f64,
    pub phase: FramePhase,
}

impl Frame {
    /// Номер сегмента для людей (1-based).
    pub fn display_number(&self) -> usize {
        self.current_segment + 1
    }

    /// Текст над колесом: во время спина — бегущий номер, после — "Item: N".
    pub fn label(&self) -> String {
        match self.phase {
            FramePhase::Resting => "Press [space]".to_string(),
            FramePhase::Spinning => self.display_number().to_string(),
            FramePhase::Settled => format!("Item: {}", self.display_number()),
        }
    }
}
