use super::sequence::Sequence;

/// an ordered matchup: row is "me", col is "opponent".
///
/// construction fails fast on equal sequences, since scanning a deck
/// against the same pattern twice is ill-defined for this game. the
/// pure scorer downstream therefore never has to re-check.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pair {
    row: Sequence,
    col: Sequence,
}

impl Pair {
    pub fn row(&self) -> Sequence {
        self.row
    }
    pub fn col(&self) -> Sequence {
        self.col
    }
    /// the reverse matchup
    pub fn swap(&self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }
    /// color-invert both patterns, preserving order. over uniformly
    /// shuffled decks this matchup's outcome distribution is identical
    /// to the original's, which is what lets half the matrix be derived
    /// instead of simulated.
    pub fn invert(&self) -> Self {
        Self {
            row: self.row.invert(),
            col: self.col.invert(),
        }
    }
    /// direction-free representative, lower index first
    pub fn canonical(&self) -> Self {
        match self.row <= self.col {
            true => *self,
            false => self.swap(),
        }
    }

    /// the minimal set of matchups that must be simulated directly.
    ///
    /// of the 28 unordered pairs over 8 sequences, a pair and its
    /// color-inverted counterpart are statistically interchangeable, so
    /// each inversion class contributes one representative: 4 pairs are
    /// their own inversion and 24 collapse into 12, leaving 16. kept in
    /// ascending canonical order so the simulated set is deterministic.
    pub fn unique() -> Vec<Self> {
        let mut kept = Vec::new();
        for row in Sequence::all() {
            for col in Sequence::all().filter(|&col| row < col) {
                let pair = Self { row, col };
                if !kept.contains(&pair.invert().canonical()) {
                    kept.push(pair);
                }
            }
        }
        kept
    }
}

impl TryFrom<(Sequence, Sequence)> for Pair {
    type Error = anyhow::Error;
    fn try_from((row, col): (Sequence, Sequence)) -> Result<Self, Self::Error> {
        anyhow::ensure!(row != col, "players must choose distinct sequences: {}", row);
        Ok(Self { row, col })
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {}", self.row, self.col)
    }
}
