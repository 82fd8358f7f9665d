//! Контроллер сессии розыгрыша.
//!
//! Держит всё, что раньше было глобальным: экран, счётчик раундов, оба движка, RNG.
//! Поток: шаффл (start/stop/confirm) → колесо (spin) → снова шаффл.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Frame, RoundIndex, SegmentIndex};
use crate::driver::{self, Pacer};
use crate::engine::{
    DrawEventKind, DrawHistory, EngineError, RandomSource, RoundSummary, ShuffleCommitPolicy,
    ShuffleEngine, ShuffleHost, ShuffleState, SpinEngine, SpinHost, SpinProgress, SpinStart,
    WinnerSequencer,
};
use crate::infra::config::{ConfigError, RaffleConfig, ValidatedConfig};
use crate::infra::rng_seed::{RngSeed, STREAM_SHUFFLE, STREAM_SPIN};

/// Какой экран сейчас на сцене.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Screen {
    Shuffle,
    Wheel,
}

/// Ошибки уровня контроллера (над движками).
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Операция доступна только на экране {expected:?}, сейчас {actual:?}")]
    WrongScreen { expected: Screen, actual: Screen },

    #[error("Шаффл не остановлен — подтверждать нечего")]
    ShuffleNotStopped,

    #[error("Во время спина экран менять нельзя")]
    SpinInProgress,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Сессия розыгрыша: экраны, раунды, движки.
pub struct RaffleController<R> {
    screen: Screen,
    spin: SpinEngine,
    shuffle: ShuffleEngine<u32>,
    sequencer: WinnerSequencer,
    candidates: Vec<u32>,
    shuffle_commit: ShuffleCommitPolicy<u32>,
    return_to_shuffle: bool,
    rng: R,
    seed: Option<RngSeed>,
    /// Абсолютный номер раунда (не сбрасывается политикой пресетов).
    round: RoundIndex,
    chosen_number: Option<u32>,
    history: DrawHistory,
}

impl<R: RandomSource> RaffleController<R> {
    pub fn new(config: ValidatedConfig, rng: R) -> Result<Self, EngineError> {
        Ok(Self {
            screen: Screen::Shuffle,
            spin: SpinEngine::new(config.wheel, config.fast_rounds)?,
            shuffle: ShuffleEngine::new(config.shuffle_tick_hz)?,
            sequencer: WinnerSequencer::new(config.preset, config.play_count_policy),
            candidates: config.candidates,
            shuffle_commit: config.shuffle_commit,
            return_to_shuffle: config.return_to_shuffle,
            rng,
            seed: None,
            round: 0,
            chosen_number: None,
            history: DrawHistory::new(),
        })
    }

    /// Проверить сырой конфиг и собрать контроллер.
    pub fn from_config(config: &RaffleConfig, rng: R) -> Result<Self, ConfigError> {
        let validated = config.validate()?;
        Ok(Self::new(validated, rng)?)
    }

    /// Включить реплей: каждый раунд пересеивает RNG из `seed`.
    pub fn with_seed(mut self, seed: RngSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn round(&self) -> RoundIndex {
        self.round
    }

    pub fn chosen_number(&self) -> Option<u32> {
        self.chosen_number
    }

    pub fn spin_engine(&self) -> &SpinEngine {
        &self.spin
    }

    pub fn shuffle_engine(&self) -> &ShuffleEngine<u32> {
        &self.shuffle
    }

    pub fn sequencer(&self) -> &WinnerSequencer {
        &self.sequencer
    }

    pub fn history(&self) -> &DrawHistory {
        &self.history
    }

    /// Текущий кадр колеса (для перерисовки).
    pub fn wheel_frame(&self) -> Frame {
        self.spin.snapshot()
    }

    fn reseed(&mut self, stream: u64) {
        if let Some(seed) = &self.seed {
            self.rng.reseed(seed.derive(self.round, stream).bytes);
        }
    }

    fn require_screen(&self, expected: Screen) -> Result<(), ControllerError> {
        if self.screen != expected {
            return Err(ControllerError::WrongScreen {
                expected,
                actual: self.screen,
            });
        }
        Ok(())
    }

    /// Запустить шаффл. Из `Stopped` — перезапуск того же раунда.
    pub fn start_shuffle(&mut self) -> Result<(), ControllerError> {
        self.require_screen(Screen::Shuffle)?;
        if self.shuffle.is_running() {
            return Ok(());
        }
        self.shuffle.start(self.candidates.clone())?;
        self.reseed(STREAM_SHUFFLE);
        self.chosen_number = None;
        self.history.push(DrawEventKind::ShuffleStarted {
            round: self.round,
            candidates: self.candidates.len(),
        });
        Ok(())
    }

    /// Один тик шаффла (хост вызывает раз в `tick_period`).
    pub fn shuffle_tick<H>(&mut self, host: &mut H) -> Result<Option<u32>, ControllerError>
    where
        H: ShuffleHost<u32> + ?Sized,
    {
        Ok(self.shuffle.tick(&mut self.rng, host)?)
    }

    /// Остановить шаффл и зафиксировать число раунда.
    pub fn stop_shuffle(&mut self) -> Result<Option<u32>, ControllerError> {
        self.require_screen(Screen::Shuffle)?;
        let chosen = self.shuffle.stop(&self.shuffle_commit, &self.sequencer);
        if let Some(number) = chosen {
            self.chosen_number = Some(number);
            self.history.push(DrawEventKind::NumberCommitted {
                round: self.round,
                number,
            });
        }
        Ok(chosen)
    }

    /// Одна кнопка на старт/стоп: смотрим на состояние, а не перепривязываем обработчик.
    pub fn press_shuffle_button(&mut self) -> Result<ShuffleState, ControllerError> {
        if self.shuffle.is_running() {
            self.stop_shuffle()?;
        } else {
            self.start_shuffle()?;
        }
        Ok(self.shuffle.state())
    }

    /// Подтвердить число и перейти к колесу.
    pub fn confirm(&mut self) -> Result<(), ControllerError> {
        self.require_screen(Screen::Shuffle)?;
        if self.shuffle.state() != ShuffleState::Stopped {
            return Err(ControllerError::ShuffleNotStopped);
        }
        self.shuffle.reset();
        self.screen = Screen::Wheel;
        info!(
            "раунд {}: число {:?} подтверждено, переходим к колесу",
            self.round, self.chosen_number
        );
        Ok(())
    }

    /// Запросить спин колеса.
    pub fn spin(
        &mut self,
        winner_override: Option<SegmentIndex>,
    ) -> Result<SpinStart, ControllerError> {
        self.require_screen(Screen::Wheel)?;
        if !self.spin.is_spinning() {
            self.reseed(STREAM_SPIN);
        }
        let started = self.spin.spin(winner_override, &self.sequencer, &mut self.rng)?;
        match started {
            SpinStart::Started {
                winning_segment,
                total_steps,
            } => {
                let from_preset = self
                    .spin
                    .session()
                    .map(|s| s.from_preset)
                    .unwrap_or(false);
                self.history.push(DrawEventKind::SpinStarted {
                    round: self.round,
                    winning_segment,
                    total_steps,
                    from_preset,
                });
            }
            SpinStart::Rejected => {
                self.history
                    .push(DrawEventKind::SpinRejected { round: self.round });
            }
        }
        Ok(started)
    }

    /// Один шаг спина. На финише пишет итог раунда и (по настройке) возвращает шаффл.
    pub fn step_spin<H>(&mut self, host: &mut H) -> Result<SpinProgress, ControllerError>
    where
        H: SpinHost + ?Sized,
    {
        let from_preset = self.spin.session().map(|s| s.from_preset).unwrap_or(false);
        match self.spin.step(&mut self.sequencer, host) {
            Ok(SpinProgress::Finished { winning_segment }) => {
                self.finish_round(winning_segment, from_preset);
                Ok(SpinProgress::Finished { winning_segment })
            }
            Ok(progress) => Ok(progress),
            Err(err) => {
                warn!("раунд {}: спин прерван: {}", self.round, err);
                self.history.push(DrawEventKind::SpinAborted {
                    round: self.round,
                    reason: err.to_string(),
                });
                Err(err.into())
            }
        }
    }

    /// Докрутить спин до конца с заданным темпом.
    pub fn run_spin<H, P>(
        &mut self,
        host: &mut H,
        pacer: &mut P,
    ) -> Result<Option<SegmentIndex>, ControllerError>
    where
        H: SpinHost + ?Sized,
        P: Pacer + ?Sized,
    {
        loop {
            match self.step_spin(host)? {
                SpinProgress::Continue { delay } => pacer.wait(delay),
                SpinProgress::Finished { winning_segment } => return Ok(Some(winning_segment)),
                SpinProgress::Idle => return Ok(None),
            }
        }
    }

    /// Крутить шаффл `ticks` тиков и остановить его.
    pub fn run_shuffle_for<H, P>(
        &mut self,
        ticks: u64,
        host: &mut H,
        pacer: &mut P,
    ) -> Result<Option<u32>, ControllerError>
    where
        H: ShuffleHost<u32> + ?Sized,
        P: Pacer + ?Sized,
    {
        self.start_shuffle()?;
        driver::run_shuffle(&mut self.shuffle, &mut self.rng, host, pacer, |engine| {
            engine.ticks() >= ticks
        })?;
        self.stop_shuffle()
    }

    fn finish_round(&mut self, winning_segment: SegmentIndex, from_preset: bool) {
        self.history.push(DrawEventKind::SpinFinished {
            round: self.round,
            winning_segment,
        });
        self.history.push_round(RoundSummary {
            round: self.round,
            chosen_number: self.chosen_number,
            winning_segment,
            from_preset,
        });
        self.round += 1;
        if self.return_to_shuffle {
            self.screen = Screen::Shuffle;
        }
    }

    /// Вручную вернуться к шаффлу (если `return_to_shuffle` выключен).
    pub fn back_to_shuffle(&mut self) -> Result<(), ControllerError> {
        if self.spin.is_spinning() {
            return Err(ControllerError::SpinInProgress);
        }
        self.screen = Screen::Shuffle;
        Ok(())
    }
}
