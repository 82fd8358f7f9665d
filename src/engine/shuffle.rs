use std::fmt::Debug;
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;
use crate::engine::host::ShuffleHost;
use crate::engine::winner::WinnerSequencer;
use crate::engine::RandomSource;

/// Частота смены чисел по умолчанию (Гц).
pub const DEFAULT_SHUFFLE_TICK_HZ: u32 = 30;

/// Состояние шаффлера. Вместо перепривязки обработчиков кнопки
/// UI смотрит сюда и сам решает, что показать ("START" / "STOP").
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ShuffleState {
    Idle,
    Running,
    /// Остановлен, число зафиксировано, ждём подтверждения.
    Stopped,
}

/// Какое значение фиксировать при остановке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleCommitPolicy<T> {
    /// То, что было на экране в момент остановки.
    LastSample,
    /// `list[play_count]`; если список кончился — последнее показанное.
    PresetIndexed(Vec<T>),
}

impl<T> Default for ShuffleCommitPolicy<T> {
    fn default() -> Self {
        ShuffleCommitPolicy::LastSample
    }
}

/// Шаффлер чисел: крутит случайные значения, пока его не остановят.
#[derive(Clone, Debug)]
pub struct ShuffleEngine<T> {
    candidates: Vec<T>,
    state: ShuffleState,
    current: Option<T>,
    chosen: Option<T>,
    tick_period: Duration,
    ticks: u64,
}

impl<T: Clone + Debug> ShuffleEngine<T> {
    pub fn new(tick_hz: u32) -> Result<Self, EngineError> {
        if tick_hz == 0 {
            return Err(EngineError::InvalidConfiguration(
                "частота шаффла должна быть > 0".to_string(),
            ));
        }
        Ok(Self {
            candidates: Vec::new(),
            state: ShuffleState::Idle,
            current: None,
            chosen: None,
            tick_period: Duration::from_secs_f64(1.0 / tick_hz as f64),
            ticks: 0,
        })
    }

    pub fn state(&self) -> ShuffleState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ShuffleState::Running
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Сколько тиков прошло в текущей сессии.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Что сейчас на экране.
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Зафиксированное число последней остановки.
    pub fn chosen(&self) -> Option<&T> {
        self.chosen.as_ref()
    }

    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    /// Запустить шаффл по списку кандидатов.
    ///
    /// Пустой список — ошибка конфигурации, состояние не меняется.
    /// Повторный `start` во время работы ничего не делает.
    pub fn start(&mut self, candidates: Vec<T>) -> Result<(), EngineError> {
        if candidates.is_empty() {
            return Err(EngineError::InvalidConfiguration(
                "список кандидатов для шаффла пуст".to_string(),
            ));
        }
        if self.state == ShuffleState::Running {
            debug!("шаффл уже крутится");
            return Ok(());
        }

        info!("шаффл запущен: {} кандидатов", candidates.len());
        self.candidates = candidates;
        self.state = ShuffleState::Running;
        self.current = None;
        self.chosen = None;
        self.ticks = 0;
        Ok(())
    }

    /// Один тик: выбрать случайного кандидата и показать его.
    ///
    /// Не в `Running` — `Ok(None)`, колбэк не вызывается.
    pub fn tick<R, H>(&mut self, rng: &mut R, host: &mut H) -> Result<Option<T>, EngineError>
    where
        R: RandomSource,
        H: ShuffleHost<T> + ?Sized,
    {
        if self.state != ShuffleState::Running {
            return Ok(None);
        }

        let index = rng.pick_index(self.candidates.len());
        let value = self
            .candidates
            .get(index)
            .cloned()
            .ok_or(EngineError::Internal("RNG вернул индекс за пределами списка"))?;

        host.display_shuffle_value(&value)?;
        self.current = Some(value.clone());
        self.ticks += 1;
        Ok(Some(value))
    }

    /// Остановить шаффл и зафиксировать число по политике.
    ///
    /// Если не успели сделать ни одного тика — берём первого кандидата.
    /// Не в `Running` — `None`, ничего не меняем.
    pub fn stop(
        &mut self,
        policy: &ShuffleCommitPolicy<T>,
        sequencer: &WinnerSequencer,
    ) -> Option<T> {
        if self.state != ShuffleState::Running {
            return None;
        }

        let last = self
            .current
            .clone()
            .or_else(|| self.candidates.first().cloned());

        let chosen = match policy {
            ShuffleCommitPolicy::LastSample => last,
            ShuffleCommitPolicy::PresetIndexed(list) => usize::try_from(sequencer.play_count())
                .ok()
                .and_then(|round| list.get(round).cloned())
                .or(last),
        };

        info!("шаффл остановлен после {} тиков: {:?}", self.ticks, chosen);
        self.state = ShuffleState::Stopped;
        self.current = chosen.clone();
        self.chosen = chosen.clone();
        chosen
    }

    /// Вернуть в исходное состояние (новый раунд).
    pub fn reset(&mut self) {
        self.state = ShuffleState::Idle;
        self.current = None;
        self.ticks = 0;
    }
}
