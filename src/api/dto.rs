use serde::{Deserialize, Serialize};

use crate::controller::Screen;
use crate::domain::FramePhase;
use crate::engine::ShuffleState;
use crate::visual::SegmentStyle;

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    ShuffleState {
        state: ShuffleState,
        chosen_number: Option<u32>,
    },
    ScreenChanged {
        screen: Screen,
    },
    SpinStarted {
        winner_number: u32,
        total_steps: u64,
    },
    /// Спин уже идёт, запрос проигнорирован.
    SpinRejected,
}

/// Колесо для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WheelViewDto {
    pub segment_count: usize,
    pub angle_per_segment: f64,
    /// Подсвеченный сегмент, 1-based.
    pub current_number: usize,
    /// Хвост, 1-based, самый свежий — последний.
    pub trail_numbers: Vec<usize>,
    pub angle: f64,
    pub phase: FramePhase,
    pub label: String,
    pub spinning: bool,
    pub styles: Vec<SegmentStyle>,
}

/// Шаффлер для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShuffleViewDto {
    pub state: ShuffleState,
    pub current: Option<u32>,
    pub chosen: Option<u32>,
    /// Что писать на кнопке.
    pub button_label: String,
}

/// Один раунд в истории.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummaryDto {
    pub round: u64,
    pub chosen_number: Option<u32>,
    pub winner_number: usize,
    pub from_preset: bool,
}

/// Всё состояние розыгрыша.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RaffleViewDto {
    pub screen: Screen,
    pub round: u64,
    pub play_count: u64,
    pub wheel: WheelViewDto,
    pub shuffle: ShuffleViewDto,
}
