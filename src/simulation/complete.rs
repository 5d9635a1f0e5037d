use super::report::Report;
use crate::N_SEQUENCES;
use crate::cards::pair::Pair;
use std::collections::HashSet;

/// fills the matrix cells that were not simulated directly.
///
/// two identities make the full 8x8 derivable from the 16 simulated
/// matchups: color-inversion (over uniformly shuffled decks, a matchup
/// and its all-colors-swapped counterpart share one outcome
/// distribution) and the transpose complement
/// (P(row beats col) = 1 - P(col beats row) - P(tie), ties being
/// direction-symmetric). the inversion identity is what justifies
/// simulating only half the unordered pairs; it does NOT hold for
/// non-uniform deck distributions, so a different shuffler voids this
/// shortcut.
impl Report {
    /// derive every unsimulated cell from the simulated set. pass the
    /// exact set the aggregator ran with; a cell that can be reached
    /// from no simulated pair is an error, never a silent zero.
    pub fn complete(mut self, pairs: &[Pair]) -> anyhow::Result<Self> {
        let simulated = pairs
            .iter()
            .map(|p| p.canonical())
            .map(|p| (p.row().index(), p.col().index()))
            .collect::<HashSet<_>>();
        // unsimulated upper cells come from their inverted matchup:
        // win[i][j] = win[7-i][7-j], whose value sits across the
        // transpose of the simulated cell [7-j][7-i]
        for i in 0..N_SEQUENCES {
            for j in (i + 1..N_SEQUENCES).filter(|&j| !simulated.contains(&(i, j))) {
                let (a, b) = (N_SEQUENCES - 1 - j, N_SEQUENCES - 1 - i);
                anyhow::ensure!(
                    simulated.contains(&(a, b)),
                    "cell [{}][{}] underivable: neither it nor its inversion was simulated",
                    i,
                    j
                );
                self.cards.set(i, j, 1. - self.cards.get(a, b) - self.cards_ties.get(a, b));
                self.tricks.set(i, j, 1. - self.tricks.get(a, b) - self.tricks_ties.get(a, b));
                self.cards_ties.set(i, j, self.cards_ties.get(a, b));
                self.tricks_ties.set(i, j, self.tricks_ties.get(a, b));
            }
        }
        // the lower triangle is the transpose complement of the now
        // fully populated upper triangle
        for i in 0..N_SEQUENCES {
            for j in 0..i {
                self.cards.set(i, j, 1. - self.cards.get(j, i) - self.cards_ties.get(j, i));
                self.tricks.set(i, j, 1. - self.tricks.get(j, i) - self.tricks_ties.get(j, i));
                self.cards_ties.set(i, j, self.cards_ties.get(j, i));
                self.tricks_ties.set(i, j, self.tricks_ties.get(j, i));
            }
        }
        Ok(self)
    }
}
