//! Цикл хоста: "прокачивает" движки с нужным темпом.
//!
//! Движки сами не спят. Они отдают кадр и паузу, а ждёт `Pacer`:
//! в бою — `ThreadPacer` (обычный sleep), в тестах — `RecordingPacer`.

use std::fmt::Debug;
use std::thread;
use std::time::Duration;

use crate::domain::SegmentIndex;
use crate::engine::{
    EngineError, RandomSource, ShuffleEngine, ShuffleHost, SpinEngine, SpinHost, SpinProgress,
    WinnerSequencer,
};

/// Кто-то, кто умеет ждать.
pub trait Pacer {
    fn wait(&mut self, delay: Duration);
}

/// Обычный `thread::sleep`, с ускорением/замедлением (`speed = 2.0` — вдвое быстрее).
#[derive(Clone, Debug)]
pub struct ThreadPacer {
    pub speed: f64,
}

impl ThreadPacer {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }
}

impl Default for ThreadPacer {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

impl Pacer for ThreadPacer {
    fn wait(&mut self, delay: Duration) {
        if self.speed <= 0.0 || !self.speed.is_finite() {
            return;
        }
        thread::sleep(delay.div_f64(self.speed));
    }
}

/// Ничего не ждёт, только записывает паузы.
#[derive(Clone, Debug, Default)]
pub struct RecordingPacer {
    pub waits: Vec<Duration>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Duration {
        self.waits.iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn wait(&mut self, delay: Duration) {
        self.waits.push(delay);
    }
}

/// Докрутить активный спин до конца.
///
/// `Ok(None)` — спина не было. Ошибка хоста прерывает спин (см. `SpinEngine::step`).
pub fn run_spin<H, P>(
    engine: &mut SpinEngine,
    sequencer: &mut WinnerSequencer,
    host: &mut H,
    pacer: &mut P,
) -> Result<Option<SegmentIndex>, EngineError>
where
    H: SpinHost + ?Sized,
    P: Pacer + ?Sized,
{
    loop {
        match engine.step(sequencer, host)? {
            SpinProgress::Continue { delay } => pacer.wait(delay),
            SpinProgress::Finished { winning_segment } => return Ok(Some(winning_segment)),
            SpinProgress::Idle => return Ok(None),
        }
    }
}

/// Крутить шаффл, пока `should_stop` не скажет "хватит".
///
/// Условие проверяется перед каждым тиком: остановка срабатывает на границе тика,
/// а не посреди него. Возвращает количество сделанных тиков.
pub fn run_shuffle<T, R, H, P, F>(
    engine: &mut ShuffleEngine<T>,
    rng: &mut R,
    host: &mut H,
    pacer: &mut P,
    mut should_stop: F,
) -> Result<u64, EngineError>
where
    T: Clone + Debug,
    R: RandomSource,
    H: ShuffleHost<T> + ?Sized,
    P: Pacer + ?Sized,
    F: FnMut(&ShuffleEngine<T>) -> bool,
{
    let mut ticks = 0;
    while engine.is_running() && !should_stop(engine) {
        if engine.tick(rng, host)?.is_some() {
            ticks += 1;
        }
        pacer.wait(engine.tick_period());
    }
    Ok(ticks)
}
