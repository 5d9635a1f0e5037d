use super::score::Score;
use std::cmp::Ordering;

/// who took a scoring rule: the row player (p1), the column player
/// (p2), or neither
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Verdict {
    P1,
    P2,
    Tie,
}

impl From<Ordering> for Verdict {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Verdict::P1,
            Ordering::Less => Verdict::P2,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

/// the winner classifier: one verdict per scoring rule. strictly more
/// wins, equal ties. pure; the two rules are judged independently and
/// routinely disagree on the same deck.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Outcome {
    pub cards: Verdict,
    pub tricks: Verdict,
}

impl From<Score> for Outcome {
    fn from(score: Score) -> Self {
        Self {
            cards: Verdict::from(score.p1_cards.cmp(&score.p2_cards)),
            tricks: Verdict::from(score.p1_tricks.cmp(&score.p2_tricks)),
        }
    }
}
