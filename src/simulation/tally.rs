use crate::Count;
use crate::N_SEQUENCES;
use crate::cards::pair::Pair;
use crate::game::outcome::Outcome;
use crate::game::outcome::Verdict;

type Grid = [[Count; N_SEQUENCES]; N_SEQUENCES];

/// raw outcome counts across decks: four 8x8 grids plus the number of
/// decks absorbed. zero-initialized, accumulate-only, and mergeable,
/// which is what lets chunks tally in isolation and reduce at the end.
/// the "column player wins" count is never stored; it is implied as
/// n - wins - ties.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    n: Count,
    cards_wins: Grid,
    cards_ties: Grid,
    tricks_wins: Grid,
    tricks_ties: Grid,
}

impl Tally {
    /// record one matchup's outcome on one deck
    pub fn witness(&mut self, pair: Pair, outcome: Outcome) {
        let row = pair.row().index();
        let col = pair.col().index();
        match outcome.cards {
            Verdict::P1 => self.cards_wins[row][col] += 1,
            Verdict::Tie => self.cards_ties[row][col] += 1,
            Verdict::P2 => {}
        }
        match outcome.tricks {
            Verdict::P1 => self.tricks_wins[row][col] += 1,
            Verdict::Tie => self.tricks_ties[row][col] += 1,
            Verdict::P2 => {}
        }
    }
    /// mark one deck fully absorbed across all its matchups
    pub fn count(&mut self) {
        self.n += 1;
    }
    /// decks absorbed so far
    pub fn n(&self) -> Count {
        self.n
    }
    pub fn cards_wins(&self, row: usize, col: usize) -> Count {
        self.cards_wins[row][col]
    }
    pub fn cards_ties(&self, row: usize, col: usize) -> Count {
        self.cards_ties[row][col]
    }
    pub fn tricks_wins(&self, row: usize, col: usize) -> Count {
        self.tricks_wins[row][col]
    }
    pub fn tricks_ties(&self, row: usize, col: usize) -> Count {
        self.tricks_ties[row][col]
    }
}

/// elementwise merge of chunk-local tallies. associative and
/// commutative, so any reduction tree yields identical counts.
impl std::ops::Add for Tally {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self.n += rhs.n;
        for i in 0..N_SEQUENCES {
            for j in 0..N_SEQUENCES {
                self.cards_wins[i][j] += rhs.cards_wins[i][j];
                self.cards_ties[i][j] += rhs.cards_ties[i][j];
                self.tricks_wins[i][j] += rhs.tricks_wins[i][j];
                self.tricks_ties[i][j] += rhs.tricks_ties[i][j];
            }
        }
        self
    }
}
