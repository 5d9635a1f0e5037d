use super::color::Color;
use crate::N_PATTERN;
use crate::N_SEQUENCES;

/// a player's pre-committed 3-card betting pattern.
///
/// stored as 3 bits with the first card in the MSB, so the u8 value
/// doubles as the pattern's row/column index in the result matrices,
/// in the conventional BBB..RRR (000..111) order. color-inversion of
/// the whole pattern is a bitwise complement of the low bits, which
/// makes inverted indices sum to N_SEQUENCES - 1.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sequence(u8);

impl Sequence {
    const MASK: u8 = (N_SEQUENCES - 1) as u8;

    /// all patterns in index order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N_SEQUENCES as u8).map(Self)
    }
    /// swap every card for its opposite color
    pub const fn invert(&self) -> Self {
        Self(self.0 ^ Self::MASK)
    }
    /// position in the result matrices
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
    /// color of the k-th card, 0-indexed from the front
    pub const fn color(&self, k: usize) -> Color {
        match self.0 >> (N_PATTERN - 1 - k) & 1 {
            0 => Color::Black,
            _ => Color::Red,
        }
    }
}

impl From<u8> for Sequence {
    fn from(n: u8) -> Self {
        assert!(n & !Self::MASK == 0);
        Self(n)
    }
}
impl From<Sequence> for u8 {
    fn from(s: Sequence) -> u8 {
        s.0
    }
}

impl TryFrom<&str> for Sequence {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        anyhow::ensure!(
            s.chars().count() == N_PATTERN,
            "sequence must be {} cards: {}",
            N_PATTERN,
            s
        );
        s.chars()
            .map(Color::try_from)
            .try_fold(0u8, |bits, c| Ok(bits << 1 | u8::from(c?)))
            .map(Self)
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        (0..N_PATTERN).try_for_each(|k| write!(f, "{}", self.color(k)))
    }
}
