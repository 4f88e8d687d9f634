//! Random choices consumed by the session: which variant to create and
//! which numeric suffix to give its id.
//!
//! [`RngSource`] is the real thing; [`FixedRandom`] replays queued choices
//! so sessions can be scripted.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SessionConfig;
use crate::object::ObjectKind;

pub trait RandomSource {
    /// Uniform choice among the three variants.
    fn pick_kind(&mut self) -> ObjectKind;

    /// Uniform suffix in `min..=max`.
    fn id_suffix(&mut self, min: u32, max: u32) -> u32;
}

/// Draw a fresh id according to `config`.
pub fn generate_id(config: &SessionConfig, random: &mut dyn RandomSource) -> String {
    let suffix = random.id_suffix(config.id_min, config.id_max);
    config.format_id(suffix)
}

pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded if the config carries a seed, entropy otherwise.
    pub fn from_config(config: &SessionConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_kind(&mut self) -> ObjectKind {
        let kinds = ObjectKind::all();
        kinds[self.rng.gen_range(0..kinds.len())]
    }

    fn id_suffix(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Deterministic stand-in: hands out queued choices in order.
///
/// Once a queue runs dry it falls back to [`ObjectKind::DataPacket`] and to
/// the lower bound of the suffix range.
#[derive(Debug, Clone, Default)]
pub struct FixedRandom {
    kinds: VecDeque<ObjectKind>,
    suffixes: VecDeque<u32>,
}

impl FixedRandom {
    pub fn new(
        kinds: impl IntoIterator<Item = ObjectKind>,
        suffixes: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
            suffixes: suffixes.into_iter().collect(),
        }
    }
}

impl RandomSource for FixedRandom {
    fn pick_kind(&mut self) -> ObjectKind {
        self.kinds.pop_front().unwrap_or(ObjectKind::DataPacket)
    }

    fn id_suffix(&mut self, min: u32, _max: u32) -> u32 {
        self.suffixes.pop_front().unwrap_or(min)
    }
}
