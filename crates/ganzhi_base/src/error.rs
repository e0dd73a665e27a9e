//! Error types for sexagenary calculations.
//!
//! The calculators themselves are total; these errors only arise from
//! checked constructors that accept caller-supplied stem/branch pairs.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// Errors from sexagenary base types.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaziError {
    /// Stem and branch polarities differ, so the pair is not in the 60-cycle.
    PillarParity {
        stem: HeavenlyStem,
        branch: EarthlyBranch,
    },
    /// An index or symbol lay outside its table.
    InvalidIndex(&'static str),
}

impl Display for BaziError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PillarParity { stem, branch } => write!(
                f,
                "{stem}{branch} is not a sexagenary pair (stem and branch polarity differ)"
            ),
            Self::InvalidIndex(msg) => write!(f, "invalid index: {msg}"),
        }
    }
}

impl Error for BaziError {}
