//! Движок розыгрыша: спин колеса с замедлением, выбор победителя, шаффл чисел.
//!
//! Высокоуровневые объекты:
//!   - `SpinEngine` – шаги спина, хвост подсветки, финальный кадр;
//!   - `WinnerSequencer` – пресеты по раундам, потом случайный выбор;
//!   - `ShuffleEngine` – случайные числа с фиксированной частотой до остановки.

pub mod deceleration;
pub mod draw_history;
pub mod errors;
pub mod host;
pub mod shuffle;
pub mod spin;
pub mod winner;

pub use draw_history::{DrawEvent, DrawEventKind, DrawHistory, RoundSummary};
pub use errors::{EngineError, HostError};
pub use host::{NoopHost, RecordingHost, ShuffleHost, SpinHost};
pub use shuffle::{ShuffleCommitPolicy, ShuffleEngine, ShuffleState, DEFAULT_SHUFFLE_TICK_HZ};
pub use spin::{SpinEngine, SpinFrames, SpinProgress, SpinSession, SpinStart, SpinStep, DEFAULT_FAST_ROUNDS};
pub use winner::{PlayCountPolicy, WinnerSequencer};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерный индекс в `[0, len)`. `len` всегда > 0.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Пересеять генератор (реплей раундов). Недетерминированные RNG игнорируют.
    fn reseed(&mut self, _seed: [u8; 32]) {}
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn reseed(&mut self, seed: [u8; 32]) {
        (**self).reseed(seed)
    }
}
