//! Конфигурация розыгрыша.
//!
//! Только "правила": размеры колеса, частоты, пресеты. Без состояния.
//! Формат на диске — JSON, все поля необязательные.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Wheel, WinnerPreset};
use crate::engine::{
    EngineError, PlayCountPolicy, ShuffleCommitPolicy, DEFAULT_FAST_ROUNDS,
    DEFAULT_SHUFFLE_TICK_HZ,
};

pub const DEFAULT_SEGMENT_COUNT: usize = 20;
/// Больше стольких кандидатов шаффл не принимает (диапазон разворачивается в список).
pub const MAX_CANDIDATES: u64 = 100_000;

/// Ошибки загрузки конфигурации.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("Битый JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] EngineError),
}

/// Как шаффлер фиксирует число при остановке.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleCommitMode {
    /// Что выпало на экране.
    #[default]
    LastSample,
    /// Из `shuffle_presets[play_count]`.
    PresetIndexed,
}

/// Сырые настройки (как лежат в JSON).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RaffleConfig {
    /// Сколько сегментов на колесе.
    pub segment_count: usize,
    /// Сколько полных оборотов до остановки.
    pub fast_rounds: u32,
    /// Частота шаффла (Гц).
    pub shuffle_tick_hz: u32,
    /// Победители колеса по раундам, 1-based; 0 и меньше — "случайно".
    pub winner_presets: Vec<i64>,
    /// Кандидаты для шаффла.
    pub candidates: Vec<u32>,
    /// Диапазон кандидатов `[lo, hi]` включительно. Если задан — важнее `candidates`.
    pub candidate_range: Option<(u32, u32)>,
    pub play_count_policy: PlayCountPolicy,
    pub shuffle_commit: ShuffleCommitMode,
    /// Числа шаффла по раундам (для `preset_indexed`).
    pub shuffle_presets: Vec<u32>,
    /// После спина возвращаться на экран шаффла.
    pub return_to_shuffle: bool,
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl RaffleConfig {
    /// Стандартный профиль: 20 сегментов, 5 оборотов, шаффл 30 Гц, без пресетов.
    pub fn standard() -> Self {
        Self {
            segment_count: DEFAULT_SEGMENT_COUNT,
            fast_rounds: DEFAULT_FAST_ROUNDS,
            shuffle_tick_hz: DEFAULT_SHUFFLE_TICK_HZ,
            winner_presets: Vec::new(),
            candidates: vec![1, 2, 3, 4, 5],
            candidate_range: None,
            play_count_policy: PlayCountPolicy::Wrap,
            shuffle_commit: ShuffleCommitMode::LastSample,
            shuffle_presets: Vec::new(),
            return_to_shuffle: true,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Итоговый список кандидатов шаффла.
    pub fn resolved_candidates(&self) -> Result<Vec<u32>, EngineError> {
        let list: Vec<u32> = match self.candidate_range {
            Some((lo, hi)) if lo <= hi => {
                let len = u64::from(hi) - u64::from(lo) + 1;
                if len > MAX_CANDIDATES {
                    return Err(EngineError::InvalidConfiguration(format!(
                        "диапазон кандидатов [{lo}, {hi}] длиннее {MAX_CANDIDATES}"
                    )));
                }
                (lo..=hi).collect()
            }
            Some((lo, hi)) => {
                return Err(EngineError::InvalidConfiguration(format!(
                    "пустой диапазон кандидатов [{lo}, {hi}]"
                )))
            }
            None => self.candidates.clone(),
        };
        if list.is_empty() {
            return Err(EngineError::InvalidConfiguration(
                "список кандидатов для шаффла пуст".to_string(),
            ));
        }
        Ok(list)
    }

    /// Проверить всё сразу при загрузке, а не посреди анимации.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let wheel = Wheel::new(self.segment_count)?;
        if self.fast_rounds == 0 {
            return Err(EngineError::InvalidConfiguration(
                "fast_rounds должен быть > 0".to_string(),
            )
            .into());
        }
        if self.shuffle_tick_hz == 0 {
            return Err(EngineError::InvalidConfiguration(
                "shuffle_tick_hz должен быть > 0".to_string(),
            )
            .into());
        }
        let preset = WinnerPreset::from_one_based(&self.winner_presets, self.segment_count)?;
        let candidates = self.resolved_candidates()?;
        let shuffle_commit = match self.shuffle_commit {
            ShuffleCommitMode::LastSample => ShuffleCommitPolicy::LastSample,
            ShuffleCommitMode::PresetIndexed => {
                ShuffleCommitPolicy::PresetIndexed(self.shuffle_presets.clone())
            }
        };

        Ok(ValidatedConfig {
            wheel,
            fast_rounds: self.fast_rounds,
            shuffle_tick_hz: self.shuffle_tick_hz,
            preset,
            candidates,
            play_count_policy: self.play_count_policy,
            shuffle_commit,
            return_to_shuffle: self.return_to_shuffle,
        })
    }
}

/// Проверенная конфигурация, из которой собирается контроллер.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedConfig {
    pub wheel: Wheel,
    pub fast_rounds: u32,
    pub shuffle_tick_hz: u32,
    pub preset: WinnerPreset,
    pub candidates: Vec<u32>,
    pub play_count_policy: PlayCountPolicy,
    pub shuffle_commit: ShuffleCommitPolicy<u32>,
    pub return_to_shuffle: bool,
}
