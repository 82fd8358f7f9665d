use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{SegmentIndex, WinnerPreset};
use crate::engine::RandomSource;

/// Что делать со счётчиком раундов, когда пресеты закончились.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlayCountPolicy {
    /// Дошли до конца списка — начинаем сначала (пресеты переиспользуются).
    #[default]
    Wrap,
    /// Остаёмся на длине списка: дальше всегда случайный победитель.
    Clamp,
    /// Просто растём. Тоже уходит в случайный выбор после конца списка.
    Unbounded,
}

/// Политика выбора победителя: сначала пресеты, потом случайно.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerSequencer {
    preset: WinnerPreset,
    play_count: u64,
    policy: PlayCountPolicy,
}

impl WinnerSequencer {
    pub fn new(preset: WinnerPreset, policy: PlayCountPolicy) -> Self {
        Self {
            preset,
            play_count: 0,
            policy,
        }
    }

    /// Сколько раундов уже сыграно (с учётом политики).
    pub fn play_count(&self) -> u64 {
        self.play_count
    }

    pub fn policy(&self) -> PlayCountPolicy {
        self.policy
    }

    pub fn preset(&self) -> &WinnerPreset {
        &self.preset
    }

    /// Пресет для текущего раунда, если он есть и не "случайно".
    pub fn preset_for_current(&self) -> Option<SegmentIndex> {
        usize::try_from(self.play_count)
            .ok()
            .and_then(|round| self.preset.get(round))
    }

    /// Победитель для текущего раунда в `[0, segment_count)`.
    ///
    /// `segment_count` должен быть > 0 (гарантирует `Wheel::new`).
    pub fn next_winner<R: RandomSource>(&self, segment_count: usize, rng: &mut R) -> SegmentIndex {
        match self.preset_for_current() {
            Some(index) if index < segment_count => index,
            _ => {
                let picked = rng.pick_index(segment_count);
                debug!(
                    "раунд {}: пресета нет, случайный сегмент {}",
                    self.play_count, picked
                );
                picked
            }
        }
    }

    /// Раунд сыгран. Вызывает только `SpinEngine` по завершении спина.
    pub fn advance(&mut self) {
        let len = self.preset.len() as u64;
        self.play_count = match self.policy {
            PlayCountPolicy::Wrap => {
                let next = self.play_count + 1;
                if len > 0 && next >= len {
                    0
                } else {
                    next
                }
            }
            PlayCountPolicy::Clamp => (self.play_count + 1).min(len),
            PlayCountPolicy::Unbounded => self.play_count.saturating_add(1),
        };
    }

    pub fn reset(&mut self) {
        self.play_count = 0;
    }
}
