//! Earthly Branches (dizhi), the 12-cycle, with zodiac animals and
//! double-hour windows.
//!
//! Branch `b` (b ≠ 0) covers civil hours `[2b-1, 2b+1)`. Branch 0 (Zi)
//! covers `[23:00, 01:00)` and therefore wraps midnight.

use crate::element::{Element, Polarity};
use crate::util::floor_mod;

/// The 12 Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

/// Length of the branch cycle.
pub const BRANCH_COUNT: i64 = 12;

const BRANCH_CHARS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

impl EarthlyBranch {
    /// Branch for any integer index, wrapped with floored modulo.
    pub const fn from_index(index: i64) -> Self {
        ALL_BRANCHES[floor_mod(index, BRANCH_COUNT) as usize]
    }

    /// Checked constructor from a 0-based index.
    pub fn from_u8(v: u8) -> Option<Self> {
        ALL_BRANCHES.get(v as usize).copied()
    }

    /// Look up a branch by its Chinese character.
    pub fn from_char(s: &str) -> Option<Self> {
        BRANCH_CHARS
            .iter()
            .position(|c| *c == s)
            .map(|i| ALL_BRANCHES[i])
    }

    /// Branch ruling a civil hour.
    ///
    /// 23 and 0 map to Zi; otherwise `floor((hour + 1) / 2)`. Total over
    /// any input: hour 24 wraps to Zi as well.
    pub const fn from_hour(hour: u32) -> Self {
        Self::from_index((hour as i64 + 1) / 2)
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Chinese character.
    pub const fn name(self) -> &'static str {
        BRANCH_CHARS[self.index() as usize]
    }

    /// Pinyin transliteration.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index() as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    pub const fn zodiac(self) -> Zodiac {
        ALL_ZODIACS[self.index() as usize]
    }

    /// Civil hour window `[start, end)` covered by this branch.
    ///
    /// For Zi the window wraps midnight and is returned as `(23, 1)`.
    pub const fn hour_window(self) -> (u32, u32) {
        let b = self.index() as u32;
        if b == 0 { (23, 1) } else { (2 * b - 1, 2 * b + 1) }
    }

    /// Branch `offset` places further along the cycle (negative goes back).
    pub const fn offset(self, offset: i64) -> Self {
        Self::from_index(self.index() as i64 + offset)
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The 12 zodiac animals, aligned with the branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 zodiac animals in branch order (index 0 = Rat).
pub const ALL_ZODIACS: [Zodiac; 12] = [
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
];

impl Zodiac {
    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龙",
            Self::Snake => "蛇",
            Self::Horse => "马",
            Self::Goat => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "鸡",
            Self::Dog => "狗",
            Self::Pig => "猪",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}
