use serde::{Deserialize, Serialize};

use crate::domain::{RoundIndex, SegmentIndex};

/// Тип события в розыгрыше.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum DrawEventKind {
    /// Запущен шаффл чисел.
    ShuffleStarted { round: RoundIndex, candidates: usize },

    /// Шаффл остановлен, число зафиксировано.
    NumberCommitted { round: RoundIndex, number: u32 },

    /// Спин начался.
    SpinStarted {
        round: RoundIndex,
        winning_segment: SegmentIndex,
        total_steps: u64,
        from_preset: bool,
    },

    /// Спин запрошен во время другого спина и проигнорирован.
    SpinRejected { round: RoundIndex },

    /// Спин прерван ошибкой хоста.
    SpinAborted { round: RoundIndex, reason: String },

    /// Колесо остановилось.
    SpinFinished {
        round: RoundIndex,
        winning_segment: SegmentIndex,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DrawEvent {
    pub index: u32,
    pub kind: DrawEventKind,
}

/// Итог одного раунда: число из шаффла + сегмент колеса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: RoundIndex,
    pub chosen_number: Option<u32>,
    pub winning_segment: SegmentIndex,
    pub from_preset: bool,
}

impl RoundSummary {
    /// Номер сегмента для людей (1-based).
    pub fn winning_number(&self) -> usize {
        self.winning_segment + 1
    }
}

/// Полная история розыгрыша.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DrawHistory {
    pub events: Vec<DrawEvent>,
    pub rounds: Vec<RoundSummary>,
}

impl DrawHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: DrawEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(DrawEvent { index: idx, kind });
    }

    pub fn push_round(&mut self, summary: RoundSummary) {
        self.rounds.push(summary);
    }

    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.rounds.last()
    }
}
