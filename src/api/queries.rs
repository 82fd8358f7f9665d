use serde::{Deserialize, Serialize};

use crate::controller::RaffleController;
use crate::domain::{Frame, Wheel};
use crate::engine::{RandomSource, RoundSummary, ShuffleEngine, ShuffleState};
use crate::visual::WheelPalette;

use super::dto::{RaffleViewDto, RoundSummaryDto, ShuffleViewDto, WheelViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Всё состояние розыгрыша.
    GetRaffle,

    /// Только колесо (перерисовка, ресайз).
    GetWheel,

    /// Сыгранные раунды.
    GetRounds,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Raffle(RaffleViewDto),
    Wheel(WheelViewDto),
    Rounds(Vec<RoundSummaryDto>),
}

pub fn run_query<R: RandomSource>(
    controller: &RaffleController<R>,
    palette: &WheelPalette,
    query: &Query,
) -> QueryResponse {
    match query {
        Query::GetRaffle => QueryResponse::Raffle(build_raffle_view(controller, palette)),
        Query::GetWheel => QueryResponse::Wheel(build_wheel_view(
            controller.spin_engine().wheel(),
            &controller.wheel_frame(),
            controller.spin_engine().is_spinning(),
            palette,
        )),
        Query::GetRounds => QueryResponse::Rounds(
            controller
                .history()
                .rounds
                .iter()
                .map(build_round_summary)
                .collect(),
        ),
    }
}

/// Сформировать DTO колеса из кадра.
pub fn build_wheel_view(
    wheel: &Wheel,
    frame: &Frame,
    spinning: bool,
    palette: &WheelPalette,
) -> WheelViewDto {
    WheelViewDto {
        segment_count: wheel.segment_count(),
        angle_per_segment: wheel.angle_per_segment(),
        current_number: frame.display_number(),
        trail_numbers: frame.trail.iter().map(|s| s + 1).collect(),
        angle: frame.angle,
        phase: frame.phase,
        label: frame.label(),
        spinning,
        styles: palette.wheel_styles(wheel, frame),
    }
}

pub fn build_shuffle_view(shuffle: &ShuffleEngine<u32>) -> ShuffleViewDto {
    let button_label = match shuffle.state() {
        ShuffleState::Running => "STOP",
        ShuffleState::Idle | ShuffleState::Stopped => "START",
    };
    ShuffleViewDto {
        state: shuffle.state(),
        current: shuffle.current().copied(),
        chosen: shuffle.chosen().copied(),
        button_label: button_label.to_string(),
    }
}

pub fn build_round_summary(summary: &RoundSummary) -> RoundSummaryDto {
    RoundSummaryDto {
        round: summary.round,
        chosen_number: summary.chosen_number,
        winner_number: summary.winning_number(),
        from_preset: summary.from_preset,
    }
}

pub fn build_raffle_view<R: RandomSource>(
    controller: &RaffleController<R>,
    palette: &WheelPalette,
) -> RaffleViewDto {
    let spin = controller.spin_engine();
    RaffleViewDto {
        screen: controller.screen(),
        round: controller.round(),
        play_count: controller.sequencer().play_count(),
        wheel: build_wheel_view(spin.wheel(), &controller.wheel_frame(), spin.is_spinning(), palette),
        shuffle: build_shuffle_view(controller.shuffle_engine()),
    }
}
