use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{normalize_angle, Frame, FramePhase, SegmentIndex, Trail, Wheel};
use crate::engine::deceleration::{step_delay_secs, trail_trim_count, INITIAL_DELAY_SECS};
use crate::engine::errors::{EngineError, HostError};
use crate::engine::host::SpinHost;
use crate::engine::winner::WinnerSequencer;
use crate::engine::RandomSource;

/// Сколько полных быстрых оборотов колесо делает до остановки.
pub const DEFAULT_FAST_ROUNDS: u32 = 5;

/// Результат запроса на спин.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SpinStart {
    /// Сессия создана, победитель зафиксирован.
    Started {
        winning_segment: SegmentIndex,
        total_steps: u64,
    },
    /// Спин уже идёт — запрос проигнорирован (не ставится в очередь).
    Rejected,
}

/// Что произошло после одного шага.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpinProgress {
    /// Кадр нарисован, хост должен подождать `delay` и снова вызвать `step`.
    Continue { delay: Duration },
    /// Финальный кадр нарисован, раунд засчитан.
    Finished { winning_segment: SegmentIndex },
    /// Активного спина нет.
    Idle,
}

/// Активный спин. Живёт от `spin()` до финального кадра.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpinSession {
    pub winning_segment: SegmentIndex,
    pub total_steps: u64,
    pub step_index: u64,
    /// Сколько ждать после текущего шага (секунды).
    pub delay_secs: f64,
    /// Победитель взят из пресета (а не override / случайно).
    pub from_preset: bool,
}

impl SpinSession {
    pub fn remaining_steps(&self) -> u64 {
        self.total_steps.saturating_sub(self.step_index)
    }
}

/// Движок спина: шаги, замедление, хвост, фиксация победителя.
///
/// Основные операции:
///   - `spin` – создать сессию (или отказать, если спин уже идёт);
///   - `step` – один шаг анимации, хост вызывает его в своём цикле;
///   - `frames` – тот же спин как ленивый итератор кадров.
#[derive(Clone, Debug)]
pub struct SpinEngine {
    wheel: Wheel,
    fast_rounds: u32,
    trail: Trail,
    current_segment: SegmentIndex,
    /// Сколько градусов стрелка прошла с начала текущего спина (без заворота).
    /// `normalize_angle(cumulative_angle)` совпадает с углом кадра при нулевом `current_angle`.
    cumulative_angle: f64,
    session: Option<SpinSession>,
    completed_spins: u64,
    last_winner: Option<SegmentIndex>,
}

impl SpinEngine {
    pub fn new(wheel: Wheel, fast_rounds: u32) -> Result<Self, EngineError> {
        if fast_rounds == 0 {
            return Err(EngineError::InvalidConfiguration(
                "fast_rounds должен быть > 0".to_string(),
            ));
        }
        let capacity = wheel.segment_count();
        Ok(Self {
            wheel,
            fast_rounds,
            trail: Trail::new(capacity),
            current_segment: 0,
            cumulative_angle: 0.0,
            session: None,
            completed_spins: 0,
            last_winner: None,
        })
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn fast_rounds(&self) -> u32 {
        self.fast_rounds
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn current_segment(&self) -> SegmentIndex {
        self.current_segment
    }

    pub fn cumulative_angle(&self) -> f64 {
        self.cumulative_angle
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    pub fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    pub fn completed_spins(&self) -> u64 {
        self.completed_spins
    }

    pub fn last_winner(&self) -> Option<SegmentIndex> {
        self.last_winner
    }

    /// Подпись победителя последнего спина, как над колесом.
    pub fn winner_label(&self) -> Option<String> {
        self.last_winner.map(|w| format!("Item: {}", w + 1))
    }

    /// Сколько шагов займёт спин с таким победителем.
    pub fn total_steps_for(&self, winning_segment: SegmentIndex) -> u64 {
        self.wheel.segment_count() as u64 * self.fast_rounds as u64 + winning_segment as u64
    }

    /// Запросить спин.
    ///
    /// Победитель: `winner_override`, иначе пресет текущего раунда, иначе случайный.
    /// Пока идёт другой спин — `SpinStart::Rejected`, состояние не трогаем.
    pub fn spin<R: RandomSource>(
        &mut self,
        winner_override: Option<SegmentIndex>,
        sequencer: &WinnerSequencer,
        rng: &mut R,
    ) -> Result<SpinStart, EngineError> {
        if self.session.is_some() {
            warn!("спин уже идёт, повторный запрос проигнорирован");
            return Ok(SpinStart::Rejected);
        }

        let segment_count = self.wheel.segment_count();
        let (winning_segment, from_preset) = match winner_override {
            Some(segment) => {
                if !self.wheel.contains(segment) {
                    return Err(EngineError::SegmentOutOfRange {
                        segment,
                        segment_count,
                    });
                }
                (segment, false)
            }
            None => match sequencer.preset_for_current() {
                Some(preset) if !self.wheel.contains(preset) => {
                    return Err(EngineError::InvalidConfiguration(format!(
                        "пресет раунда {}: сегмент {} вне колеса из {} сегментов",
                        sequencer.play_count(),
                        preset + 1,
                        segment_count
                    )));
                }
                Some(preset) => (preset, true),
                None => (sequencer.next_winner(segment_count, rng), false),
            },
        };

        let total_steps = self.total_steps_for(winning_segment);
        self.cumulative_angle = 0.0;
        self.session = Some(SpinSession {
            winning_segment,
            total_steps,
            step_index: 0,
            delay_secs: INITIAL_DELAY_SECS,
            from_preset,
        });

        info!(
            "спин: раунд {}, победитель {} ({} шагов, пресет: {})",
            sequencer.play_count(),
            winning_segment + 1,
            total_steps,
            from_preset
        );

        Ok(SpinStart::Started {
            winning_segment,
            total_steps,
        })
    }

    /// Один шаг активного спина.
    ///
    /// Ошибка колбэка хоста прерывает спин на текущем шаге: сессия сбрасывается,
    /// раунд не засчитывается, хвост остаётся как был в момент сбоя.
    pub fn step<H: SpinHost + ?Sized>(
        &mut self,
        sequencer: &mut WinnerSequencer,
        host: &mut H,
    ) -> Result<SpinProgress, EngineError> {
        let Some(mut session) = self.session.take() else {
            return Ok(SpinProgress::Idle);
        };

        if session.step_index >= session.total_steps {
            return self.finish(session, sequencer, host);
        }

        // Шаг k подсвечивает сегмент k mod N: анимация начинается с нулевого,
        // последний шаг стоит на сегменте перед победителем, финальный кадр на нём самом.
        let segment = self.wheel.segment_after_steps(session.step_index);
        self.current_segment = segment;
        self.trail.push(segment);
        self.cumulative_angle = session.step_index as f64 * self.wheel.angle_per_segment();

        let frame = self.frame(FramePhase::Spinning);
        self.draw(&frame, host)?;
        host.play_tick();

        let wait = session.delay_secs;

        session.delay_secs = step_delay_secs(session.remaining_steps());
        self.trail.trim_oldest(trail_trim_count(session.delay_secs));
        session.step_index += 1;

        debug!(
            "шаг {}/{}: сегмент {}, пауза {:.4}s, хвост {}",
            session.step_index,
            session.total_steps,
            segment,
            wait,
            self.trail.len()
        );

        self.session = Some(session);
        Ok(SpinProgress::Continue {
            delay: Duration::from_secs_f64(wait),
        })
    }

    fn finish<H: SpinHost + ?Sized>(
        &mut self,
        session: SpinSession,
        sequencer: &mut WinnerSequencer,
        host: &mut H,
    ) -> Result<SpinProgress, EngineError> {
        let winning_segment = session.winning_segment;

        self.trail.collapse_to(winning_segment);
        self.current_segment = winning_segment;
        self.cumulative_angle = session.total_steps as f64 * self.wheel.angle_per_segment();

        let frame = self.frame(FramePhase::Settled);
        self.draw(&frame, host)?;

        sequencer.advance();
        self.completed_spins += 1;
        self.last_winner = Some(winning_segment);

        info!(
            "спин завершён: победитель {}, сыграно раундов {}",
            winning_segment + 1,
            sequencer.play_count()
        );

        host.on_spin_complete(winning_segment);
        Ok(SpinProgress::Finished { winning_segment })
    }

    fn draw<H: SpinHost + ?Sized>(&self, frame: &Frame, host: &mut H) -> Result<(), EngineError> {
        if let Err(err) = host.draw_frame(frame) {
            warn!("спин прерван на сегменте {}: {}", frame.current_segment, err);
            // Сессия уже вынута из self.session — просто не кладём её обратно.
            return Err(EngineError::Host(err));
        }
        Ok(())
    }

    fn frame(&self, phase: FramePhase) -> Frame {
        Frame {
            current_segment: self.current_segment,
            trail: self.trail.snapshot(),
            angle: normalize_angle(self.wheel.segment_start_angle(self.current_segment, 0.0)),
            phase,
        }
    }

    /// Текущее визуальное состояние (для перерисовки, например при ресайзе).
    pub fn snapshot(&self) -> Frame {
        let phase = if self.session.is_some() {
            FramePhase::Spinning
        } else if self.completed_spins > 0 {
            FramePhase::Settled
        } else {
            FramePhase::Resting
        };
        self.frame(phase)
    }

    /// Тот же спин как ленивый итератор кадров (без колбэков).
    pub fn frames<'a>(&'a mut self, sequencer: &'a mut WinnerSequencer) -> SpinFrames<'a> {
        SpinFrames {
            engine: self,
            sequencer,
        }
    }
}

/// Кадр плюс пауза до следующего.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinStep {
    pub frame: Frame,
    /// Для финального кадра — ноль.
    pub delay: Duration,
}

/// Итератор по шагам активного спина. Конечный и не перезапускаемый.
pub struct SpinFrames<'a> {
    engine: &'a mut SpinEngine,
    sequencer: &'a mut WinnerSequencer,
}

/// Хост, который только запоминает последний кадр.
#[derive(Default)]
struct CaptureHost {
    frame: Option<Frame>,
}

impl SpinHost for CaptureHost {
    fn draw_frame(&mut self, frame: &Frame) -> Result<(), HostError> {
        self.frame = Some(frame.clone());
        Ok(())
    }
}

impl Iterator for SpinFrames<'_> {
    type Item = SpinStep;

    fn next(&mut self) -> Option<Self::Item> {
        let mut capture = CaptureHost::default();
        let delay = match self.engine.step(self.sequencer, &mut capture).ok()? {
            SpinProgress::Continue { delay } => delay,
            SpinProgress::Finished { .. } => Duration::ZERO,
            SpinProgress::Idle => return None,
        };
        capture.frame.map(|frame| SpinStep { frame, delay })
    }
}
