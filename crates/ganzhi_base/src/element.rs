//! The five elements (wuxing) and yin/yang polarity.
//!
//! Every stem and branch maps to exactly one element. The generating
//! cycle runs Wood → Fire → Earth → Metal → Water → Wood; the controlling
//! cycle skips one step (Wood → Earth → Water → Fire → Metal → Wood).

/// The five elements in generating-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Chinese character for the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Create from a 0-based index.
    pub fn from_u8(v: u8) -> Option<Self> {
        ALL_ELEMENTS.get(v as usize).copied()
    }

    /// The element this one generates (Wood generates Fire).
    pub const fn generates(self) -> Self {
        ALL_ELEMENTS[(self.index() as usize + 1) % 5]
    }

    /// The element this one controls (Wood controls Earth).
    pub const fn controls(self) -> Self {
        ALL_ELEMENTS[(self.index() as usize + 2) % 5]
    }
}

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity from a cyclic index: even is Yang, odd is Yin.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }
}
