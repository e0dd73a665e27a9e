//! Heavenly Stems (tiangan), the 10-cycle.
//!
//! Stems pair up by element (甲乙 Wood, 丙丁 Fire, 戊己 Earth, 庚辛 Metal,
//! 壬癸 Water); within each pair the first is Yang, the second Yin.

use crate::element::{Element, Polarity};
use crate::util::floor_mod;

/// The 10 Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

/// Length of the stem cycle.
pub const STEM_COUNT: i64 = 10;

const STEM_CHARS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl HeavenlyStem {
    /// Stem for any integer index, wrapped with floored modulo.
    pub const fn from_index(index: i64) -> Self {
        ALL_STEMS[floor_mod(index, STEM_COUNT) as usize]
    }

    /// Checked constructor from a 0-based index.
    pub fn from_u8(v: u8) -> Option<Self> {
        ALL_STEMS.get(v as usize).copied()
    }

    /// Look up a stem by its Chinese character.
    pub fn from_char(s: &str) -> Option<Self> {
        STEM_CHARS
            .iter()
            .position(|c| *c == s)
            .map(|i| ALL_STEMS[i])
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Chinese character.
    pub const fn name(self) -> &'static str {
        STEM_CHARS[self.index() as usize]
    }

    /// Pinyin transliteration.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    pub const fn element(self) -> Element {
        match self.index() / 2 {
            0 => Element::Wood,
            1 => Element::Fire,
            2 => Element::Earth,
            3 => Element::Metal,
            _ => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Stem `offset` places further along the cycle (negative goes back).
    pub const fn offset(self, offset: i64) -> Self {
        Self::from_index(self.index() as i64 + offset)
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
