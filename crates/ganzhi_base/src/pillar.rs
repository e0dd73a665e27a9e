//! Stem-branch pillars and the 60-pillar sexagenary cycle.
//!
//! A pillar is only valid when stem and branch share polarity, which
//! leaves 60 of the 120 possible pairs. Position `n` in the cycle (0 = 甲子)
//! has stem `n mod 10` and branch `n mod 12`.

use crate::branch::{BRANCH_COUNT, EarthlyBranch};
use crate::error::BaziError;
use crate::stem::{HeavenlyStem, STEM_COUNT};
use crate::util::floor_mod;

/// Length of the sexagenary cycle.
pub const CYCLE_LENGTH: i64 = 60;

/// An ordered (stem, branch) pair with matching polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

impl Pillar {
    /// Build a pillar from a caller-supplied pair, rejecting mixed polarity.
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, BaziError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(BaziError::PillarParity { stem, branch });
        }
        Ok(Self { stem, branch })
    }

    /// Build from raw stem and branch indices, each wrapped into range.
    ///
    /// Callers must advance both indices by the same step from a valid
    /// pillar; every derivation rule in this crate does.
    pub(crate) const fn from_indices(stem: i64, branch: i64) -> Self {
        debug_assert!(floor_mod(stem, 2) == floor_mod(branch, 2));
        Self {
            stem: HeavenlyStem::from_index(stem),
            branch: EarthlyBranch::from_index(branch),
        }
    }

    /// Pillar at a position in the 60-cycle (wrapped, 0 = 甲子).
    pub const fn from_cycle_index(n: i64) -> Self {
        Self::from_indices(n, n)
    }

    /// Parse a two-character pillar such as `"甲子"`.
    pub fn from_chars(s: &str) -> Result<Self, BaziError> {
        let mut chars = s.chars();
        let (Some(stem_ch), Some(branch_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(BaziError::InvalidIndex("pillar must be two characters"));
        };
        let stem = HeavenlyStem::from_char(&stem_ch.to_string())
            .ok_or(BaziError::InvalidIndex("unknown stem character"))?;
        let branch = EarthlyBranch::from_char(&branch_ch.to_string())
            .ok_or(BaziError::InvalidIndex("unknown branch character"))?;
        Self::new(stem, branch)
    }

    pub const fn stem(&self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(&self) -> EarthlyBranch {
        self.branch
    }

    /// 0-based position in the 60-cycle (甲子 = 0 .. 癸亥 = 59).
    pub const fn cycle_index(&self) -> u8 {
        // n ≡ s (mod 10), n ≡ b (mod 12)  ⇒  n ≡ 6s − 5b (mod 60)
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        floor_mod(6 * s - 5 * b, CYCLE_LENGTH) as u8
    }

    /// Pillar `steps` positions further along the cycle (negative goes back).
    ///
    /// Stem and branch advance by the same step, preserving polarity.
    pub const fn step(&self, steps: i64) -> Self {
        Self::from_indices(
            self.stem.index() as i64 + steps,
            self.branch.index() as i64 + steps,
        )
    }

    /// The pillar's two Chinese characters.
    pub fn name(&self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

const _: () = assert!(STEM_COUNT % 2 == 0 && BRANCH_COUNT % 2 == 0);
