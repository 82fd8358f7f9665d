//! Колесо удачи для живого розыгрыша.
//!
//! Ядро не рисует пиксели и не играет звук: оно выдаёт последовательность
//! кадров (сегмент, хвост, угол) и дёргает колбэки хоста.
//!
//! - `domain` — колесо, хвост, кадр, пресеты победителей;
//! - `engine` — спин с замедлением, выбор победителя, шаффл чисел;
//! - `controller` — сессия розыгрыша (экраны, раунды) вместо глобального состояния;
//! - `driver` — цикл хоста с паузами между шагами;
//! - `visual` — цвета сегментов для рендера;
//! - `api` — команды/запросы/DTO для фронта;
//! - `infra` — RNG, seed, конфиг, логирование.

pub mod api;
pub mod controller;
pub mod domain;
pub mod driver;
pub mod engine;
pub mod infra;
pub mod visual;

pub use controller::{ControllerError, RaffleController, Screen};
pub use domain::{Frame, FramePhase, SegmentIndex, Trail, Wheel, WinnerPreset};
pub use engine::{
    EngineError, RandomSource, ShuffleEngine, SpinEngine, SpinProgress, SpinStart, WinnerSequencer,
};
pub use infra::{RaffleConfig, ValidatedConfig};
