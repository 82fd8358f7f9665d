//! Инфраструктурный слой вокруг движка розыгрыша:
//! - RNG-реализации для движка;
//! - seed и реплей раундов;
//! - загрузка конфигурации;
//! - логирование для бинарников.

pub mod config;
pub mod logging;
pub mod rng;
pub mod rng_seed;

pub use config::*;
pub use logging::init_logging;
pub use rng::*;
pub use rng_seed::{RngSeed, STREAM_SHUFFLE, STREAM_SPIN};
