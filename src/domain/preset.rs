use serde::{Deserialize, Serialize};

use crate::domain::SegmentIndex;
use crate::engine::errors::EngineError;

/// Заранее заданные победители по раундам.
///
/// На входе оператор пишет номера сегментов как на колесе (1-based),
/// `0` или отрицательное число — "в этом раунде случайно".
/// Внутри храним 0-based `Some(index)` / `None`, без числовых сентинелов.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerPreset {
    entries: Vec<Option<SegmentIndex>>,
}

impl WinnerPreset {
    /// Пустой список: каждый раунд — случайный победитель.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Нормализация 1-based списка с проверкой диапазона.
    ///
    /// Проверяем сразу при загрузке, чтобы не упасть посреди анимации.
    pub fn from_one_based(raw: &[i64], segment_count: usize) -> Result<Self, EngineError> {
        let mut entries = Vec::with_capacity(raw.len());
        for (round, &value) in raw.iter().enumerate() {
            if value <= 0 {
                entries.push(None);
                continue;
            }
            let index = (value - 1) as u64;
            if index >= segment_count as u64 {
                return Err(EngineError::InvalidConfiguration(format!(
                    "победитель раунда {} = {} вне диапазона 1..={}",
                    round + 1,
                    value,
                    segment_count
                )));
            }
            entries.push(Some(index as SegmentIndex));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Запись для раунда. `None` — либо раунд за пределами списка,
    /// либо в списке явно стоит "случайно".
    pub fn get(&self, round: usize) -> Option<SegmentIndex> {
        self.entries.get(round).copied().flatten()
    }

    pub fn entries(&self) -> &[Option<SegmentIndex>] {
        &self.entries
    }
}
