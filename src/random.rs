//! The random source every stochastic operation draws from. A single seeded [WyRng] owned by
//! the simulation keeps whole runs reproducible.

use core::cmp::min;
use rand::{RngCore, SeedableRng};
use std::{
    fs::File,
    io::{self, Read},
};

/// wyrand: small, fast, and good enough for evolutionary noise
#[derive(Debug, Clone)]
pub struct WyRng {
    state: u64,
}

impl WyRng {
    pub fn seeded(state: u64) -> Self {
        Self { state }
    }
}

impl RngCore for WyRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        const WY_CONST_0: u64 = 0x2d35_8dcc_aa6c_78a5;
        const WY_CONST_1: u64 = 0x8bb8_4b93_962e_acc9;
        self.state = self.state.wrapping_add(WY_CONST_0);
        let t = u128::from(self.state) * u128::from(self.state ^ WY_CONST_1);
        (t as u64) ^ (t >> 64) as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let mut idx = 0;
        while idx < dst.len() {
            let lim = min(8, dst.len() - idx);
            dst[idx..idx + lim].copy_from_slice(&self.next_u64().to_le_bytes()[..lim]);
            idx += lim;
        }
    }
}

impl SeedableRng for WyRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seeded(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}

pub fn seed_urandom() -> io::Result<u64> {
    let mut file = File::open("/dev/urandom")?;
    let mut buffer = [0u8; 8];
    file.read_exact(&mut buffer)?;
    Ok(u64::from_le_bytes(buffer))
}

/// An rng seeded from the os, or from thread entropy where `/dev/urandom` is unavailable
pub fn default_rng() -> WyRng {
    WyRng::seeded(seed_urandom().unwrap_or_else(|_| rand::random()))
}

/// An rng seeded with `seed` if given, otherwise a [default_rng]
pub fn rng_from(seed: Option<u64>) -> WyRng {
    seed.map_or_else(default_rng, WyRng::seeded)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut l = WyRng::seeded(42);
        let mut r = WyRng::seed_from_u64(42);
        for _ in 0..1_000 {
            assert_eq!(l.next_u64(), r.next_u64());
        }
    }

    #[test]
    fn test_fill_bytes_partial_word() {
        let mut l = WyRng::seeded(7);
        let mut r = WyRng::seeded(7);
        let mut buf = [0u8; 13];
        l.fill_bytes(&mut buf);

        let first = r.next_u64().to_le_bytes();
        let second = r.next_u64().to_le_bytes();
        assert_eq!(buf[..8], first);
        assert_eq!(buf[8..], second[..5]);
    }

    #[test]
    fn test_unit_interval() {
        let mut rng = WyRng::seeded(3);
        let samples = 10_000;
        let mut sum = 0.;
        for _ in 0..samples {
            let v = rng.random::<f64>();
            assert!((0. ..1.).contains(&v));
            sum += v;
        }
        let mean = sum / samples as f64;
        assert!((mean - 0.5).abs() < 0.02, "mean {mean} too far from 0.5");
    }
}
