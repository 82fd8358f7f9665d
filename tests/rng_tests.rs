//! RNG tests for lucky-wheel
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие последовательностей
//! - диапазон pick_index
//! - стабильность hash-reseeding по раунду и потоку
//! - reseed через RandomSource
//! - ScriptedRng для сценарных тестов

use lucky_wheel::engine::RandomSource;
use lucky_wheel::infra::{
    DeterministicRng, RngSeed, ScriptedRng, SystemRng, STREAM_SHUFFLE, STREAM_SPIN,
};

fn make_u64_seed(a: u64) -> [u8; 32] {
    let mut s = [0u8; 32];
    s[..8].copy_from_slice(&a.to_le_bytes());
    s
}

fn draw<R: RandomSource>(rng: &mut R, n: usize) -> Vec<usize> {
    (0..n).map(|_| rng.pick_index(20)).collect()
}

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_sequence() {
    let mut r1 = DeterministicRng::from_seed(make_u64_seed(123));
    let mut r2 = DeterministicRng::from_seed(make_u64_seed(123));

    assert_eq!(draw(&mut r1, 64), draw(&mut r2, 64), "Same seed must produce identical draws");
}

//
// TEST 2 — different seeds produce different sequences
//
#[test]
fn deterministic_rng_different_seeds_different_sequence() {
    let mut r1 = DeterministicRng::from_seed(make_u64_seed(111));
    let mut r2 = DeterministicRng::from_seed(make_u64_seed(222));

    assert_ne!(draw(&mut r1, 64), draw(&mut r2, 64), "Different seeds must differ");
}

//
// TEST 3 — pick_index stays in range
//
#[test]
fn pick_index_stays_in_range() {
    let mut det = DeterministicRng::from_u64(555);
    let mut sys = SystemRng;

    for len in 1..50 {
        for _ in 0..20 {
            assert!(det.pick_index(len) < len);
            assert!(sys.pick_index(len) < len);
        }
    }
}

//
// TEST 4 — RngSeed.derive depends on round and stream
//
#[test]
fn rngseed_derive_depends_on_round_and_stream() {
    let base = RngSeed::from_u64(777);

    let s1 = base.derive(1, STREAM_SPIN);
    let s2 = base.derive(2, STREAM_SPIN);
    assert_ne!(s1, s2, "Different rounds must produce different seeds");

    let s3 = base.derive(1, STREAM_SHUFFLE);
    assert_ne!(s1, s3, "Different streams must produce different seeds");

    assert_eq!(s1, base.derive(1, STREAM_SPIN), "derive must be stable");
    assert_ne!(s1, base);
}

//
// TEST 5 — RngSeed → DeterministicRng is deterministic
//
#[test]
fn rngseed_to_rng_is_deterministic() {
    let seed = RngSeed::from_u64(123);

    let mut r1 = seed.to_rng();
    let mut r2 = seed.to_rng();

    assert_eq!(draw(&mut r1, 32), draw(&mut r2, 32));
}

//
// TEST 6 — reseed restarts the sequence
//
#[test]
fn reseed_restarts_sequence() {
    let seed = RngSeed::from_u64(9).derive(0, STREAM_SPIN);

    let mut rng = DeterministicRng::from_u64(1);
    draw(&mut rng, 10);
    rng.reseed(seed.bytes);
    let after = draw(&mut rng, 16);

    assert_eq!(after, draw(&mut seed.to_rng(), 16));
}

//
// TEST 7 — reseed through &mut reference reaches the inner RNG
//
#[test]
fn reseed_through_reference() {
    let seed = make_u64_seed(4);
    let mut rng = DeterministicRng::from_u64(1);
    {
        let mut by_ref = &mut rng;
        RandomSource::reseed(&mut by_ref, seed);
    }
    assert_eq!(draw(&mut rng, 8), draw(&mut DeterministicRng::from_seed(seed), 8));
}

//
// TEST 8 — ScriptedRng cycles through its script modulo len
//
#[test]
fn scripted_rng_cycles() {
    let mut rng = ScriptedRng::new(vec![3, 25, 0]);

    assert_eq!(rng.pick_index(20), 3);
    assert_eq!(rng.pick_index(20), 5);
    assert_eq!(rng.pick_index(20), 0);
    assert_eq!(rng.pick_index(2), 1);

    let mut empty = ScriptedRng::new(vec![]);
    assert_eq!(empty.pick_index(7), 0);
}

//
// TEST 9 — hex representation
//
#[test]
fn rngseed_hex_is_64_chars() {
    let seed = RngSeed::from_u64(0xff);
    let hex = seed.to_hex();

    assert_eq!(hex.len(), 64);
    assert!(hex.starts_with("ff00"));
}
