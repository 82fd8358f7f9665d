//! RngSeed — доменный seed для RNG розыгрыша.
//!
//! Позволяет:
//!   - хранить базовый seed (u64 или [u8;32])
//!   - делать детерминированное hash-reseeding на каждый раунд:
//!         new = H(domain || old || round || stream)
//!   - создавать DeterministicRng из seed
//!
//! С одним и тем же базовым seed весь розыгрыш воспроизводится раунд в раунд.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::RoundIndex;
use crate::infra::rng::DeterministicRng;

const DOMAIN_TAG: &[u8] = b"LUCKY_WHEEL_RNG_V1";

/// Поток случайности для шаффла чисел.
pub const STREAM_SHUFFLE: u64 = 0;
/// Поток случайности для выбора победителя колеса.
pub const STREAM_SPIN: u64 = 1;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed конкретного раунда и потока.
    ///
    /// Шаффл и спин берут разные потоки, чтобы количество тиков шаффла
    /// не влияло на случайного победителя колеса.
    pub fn derive(&self, round: RoundIndex, stream: u64) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(DOMAIN_TAG);

        // Старый seed
        hasher.update(self.bytes);

        hasher.update(round.to_le_bytes());
        hasher.update(stream.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }

    /// Hex-представление (для логов и реплея).
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}
