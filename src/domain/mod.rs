//! Доменная модель розыгрыша: колесо, хвост подсветки, кадр, пресеты победителей.

pub mod frame;
pub mod preset;
pub mod trail;
pub mod wheel;

// Базовые идентификаторы
pub type SegmentIndex = usize;
pub type RoundIndex = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Wheel и т.п.
pub use frame::*;
pub use preset::*;
pub use trail::*;
pub use wheel::*;
