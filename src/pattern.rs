//! Keyboard halves and the fixed alternating-hand patterns.
//!
//! The tables here decide both the generated passwords and the
//! permutation counts, so their contents and ordering are frozen.

use std::sync::OnceLock;

/// Number of slots in each pattern, and the unit a password is built in.
pub const PATTERN_LEN: usize = 8;

/// Characters that are easy to misread (`1lI0O`) or to reach for with
/// the wrong hand (`6b`).
pub const AMBIGUOUS: &[char] = &['1', 'l', 'I', '0', 'O', '6', 'b'];

const LEFT_DIGITS: &[char] = &['1', '2', '3', '4', '5'];
const RIGHT_DIGITS: &[char] = &['6', '7', '8', '9', '0'];

// qwert asdfg zxcvb
const LEFT_LOWER: &[char] = &[
    'q', 'w', 'e', 'r', 't', 'a', 's', 'd', 'f', 'g', 'z', 'x', 'c', 'v', 'b',
];

// yuiop hjkl nm
const RIGHT_LOWER: &[char] = &['y', 'u', 'i', 'o', 'p', 'h', 'j', 'k', 'l', 'n', 'm'];

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Lower,
    Upper,
    Digit,
}

/// One of the six base character sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetId {
    LeftLower,
    RightLower,
    LeftUpper,
    RightUpper,
    LeftDigit,
    RightDigit,
}

use SetId::{
    LeftDigit as LN, LeftLower as LL, LeftUpper as LU, RightDigit as RN, RightLower as RL,
    RightUpper as RU,
};

impl SetId {
    pub const ALL: [SetId; 6] = [LL, RL, LU, RU, LN, RN];

    pub fn hand(self) -> Hand {
        match self {
            LL | LU | LN => Hand::Left,
            RL | RU | RN => Hand::Right,
        }
    }

    pub fn kind(self) -> Kind {
        match self {
            LL | RL => Kind::Lower,
            LU | RU => Kind::Upper,
            LN | RN => Kind::Digit,
        }
    }

    pub fn chars(self) -> &'static [char] {
        let upper = upper_sets();
        match self {
            LL => LEFT_LOWER,
            RL => RIGHT_LOWER,
            LU => &upper.left,
            RU => &upper.right,
            LN => LEFT_DIGITS,
            RN => RIGHT_DIGITS,
        }
    }
}

struct UpperSets {
    left: Vec<char>,
    right: Vec<char>,
}

fn capitalize(set: &[char]) -> Vec<char> {
    set.iter().map(char::to_ascii_uppercase).collect()
}

fn upper_sets() -> &'static UpperSets {
    static UPPER: OnceLock<UpperSets> = OnceLock::new();
    UPPER.get_or_init(|| UpperSets {
        left: capitalize(LEFT_LOWER),
        right: capitalize(RIGHT_LOWER),
    })
}

/// A pattern position and the sets it may draw from. The first
/// alternative is the one used in memorizable mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot(&'static [SetId]);

impl Slot {
    pub fn alternatives(&self) -> &'static [SetId] {
        self.0
    }

    pub fn first(&self) -> SetId {
        self.0[0]
    }
}

// Memorizable rhythm for even lengths is RL LU RU LN RL LL RN LL; the
// last slot always lands on the left hand.
const EVEN: [Slot; PATTERN_LEN] = [
    Slot(&[RL]),
    Slot(&[LU, LN, LL]),
    Slot(&[RU, RN, RL]),
    Slot(&[LN, LL, LU]),
    Slot(&[RL, RU, RN]),
    Slot(&[LL, LU, LN]),
    Slot(&[RN, RL, RU]),
    Slot(&[LL]),
];

const ODD: [Slot; PATTERN_LEN] = [
    Slot(&[LL]),
    Slot(&[RU, RN, RL]),
    Slot(&[LU, LN, LL]),
    Slot(&[RN, RL, RU]),
    Slot(&[LL, LU, LN]),
    Slot(&[RL, RU, RN]),
    Slot(&[LN, LL, LU]),
    Slot(&[RL]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Even,
    Odd,
}

impl Pattern {
    /// Pick the pattern matching the parity of `length`.
    pub fn for_length(length: usize) -> Self {
        if length % 2 == 0 {
            Pattern::Even
        } else {
            Pattern::Odd
        }
    }

    pub fn slots(self) -> &'static [Slot; PATTERN_LEN] {
        match self {
            Pattern::Even => &EVEN,
            Pattern::Odd => &ODD,
        }
    }
}
