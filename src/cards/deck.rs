use super::color::Color;
use super::sequence::Sequence;
use crate::N_CARDS;
use crate::N_PATTERN;
use crate::N_PER_COLOR;

/// one shuffled arrangement of 26 black and 26 red cards.
///
/// stored as the 52 LSBs of a u64, bit i holding the color at deal
/// position i. immutable once constructed; the fallible constructors
/// enforce the exact 26/26 composition, so downstream scoring never
/// re-validates.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deck(u64);

impl Deck {
    const fn mask() -> u64 {
        (1 << N_CARDS) - 1
    }

    /// color at deal position i
    pub const fn color(&self, i: usize) -> Color {
        match self.0 >> i & 1 {
            0 => Color::Black,
            _ => Color::Red,
        }
    }
    /// the N_PATTERN-card window starting at position i, as a Sequence.
    /// this is the scan window the scorer compares against both players.
    pub fn window(&self, i: usize) -> Sequence {
        assert!(i + N_PATTERN <= N_CARDS);
        Sequence::from(
            (0..N_PATTERN).fold(0u8, |bits, k| bits << 1 | (self.0 >> (i + k) & 1) as u8),
        )
    }
    /// swap every card for its opposite color
    pub const fn invert(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
}

impl From<[Color; N_CARDS]> for Deck {
    fn from(cards: [Color; N_CARDS]) -> Self {
        let reds = cards.iter().filter(|&&c| c == Color::Red).count();
        assert!(reds == N_PER_COLOR);
        Self(
            cards
                .iter()
                .enumerate()
                .fold(0u64, |bits, (i, &c)| bits | (u8::from(c) as u64) << i),
        )
    }
}

/// wire format used by the deck data files: 52 chars of '0'/'1',
/// position 0 first. a malformed deck fails here, fast, because one
/// corrupt deck invalidates the whole statistical aggregate.
impl TryFrom<&str> for Deck {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        anyhow::ensure!(
            s.chars().count() == N_CARDS,
            "deck must be {} cards: got {}",
            N_CARDS,
            s.chars().count()
        );
        let bits = s
            .chars()
            .map(Color::try_from)
            .enumerate()
            .try_fold(0u64, |bits, (i, c)| {
                anyhow::Ok(bits | (u8::from(c?) as u64) << i)
            })?;
        anyhow::ensure!(
            bits.count_ones() as usize == N_PER_COLOR,
            "deck must hold {} cards of each color: {}",
            N_PER_COLOR,
            s
        );
        Ok(Self(bits))
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        (0..N_CARDS).try_for_each(|i| write!(f, "{}", self.0 >> i & 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split() -> String {
        format!("{}{}", "0".repeat(26), "1".repeat(26))
    }

    #[test]
    fn wire_round_trip() {
        let deck = Deck::try_from(split().as_str()).unwrap();
        assert_eq!(deck.to_string(), split());
    }

    #[test]
    fn windows_follow_deal_order() {
        let deck = Deck::try_from(split().as_str()).unwrap();
        assert_eq!(deck.window(0), Sequence::try_from("000").unwrap());
        assert_eq!(deck.window(24), Sequence::try_from("001").unwrap());
        assert_eq!(deck.window(25), Sequence::try_from("011").unwrap());
        assert_eq!(deck.window(49), Sequence::try_from("111").unwrap());
    }

    #[test]
    fn inversion_flips_every_card() {
        let deck = Deck::try_from(split().as_str()).unwrap();
        let inv = deck.invert();
        assert_eq!(inv.to_string(), format!("{}{}", "1".repeat(26), "0".repeat(26)));
        assert_eq!(inv.invert(), deck);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Deck::try_from("0101").is_err());
    }

    #[test]
    fn rejects_wrong_alphabet() {
        let mut s = split();
        s.replace_range(0..1, "x");
        assert!(Deck::try_from(s.as_str()).is_err());
    }

    #[test]
    fn rejects_wrong_composition() {
        let s = format!("{}{}", "0".repeat(25), "1".repeat(27));
        assert!(Deck::try_from(s.as_str()).is_err());
    }
}
