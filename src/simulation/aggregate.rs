use super::report::Report;
use super::tally::Tally;
use crate::cards::deck::Deck;
use crate::cards::pair::Pair;
use crate::cards::shuffle::Shuffler;
use crate::game::outcome::Outcome;
use crate::game::score::Score;
use rayon::prelude::*;

/// the matrix aggregator: runs scorer and classifier over every deck
/// and every simulated matchup, accumulating counts.
///
/// decks are independent, so the collection is split into chunks, each
/// chunk tallies into its own accumulator, and the chunk tallies merge
/// only after all chunks finish. no shared mutable state, no locks;
/// the merge is associative and commutative, so chunking cannot change
/// the counts.
pub struct Aggregator {
    pairs: Vec<Pair>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::from(Pair::unique())
    }
}
impl From<Vec<Pair>> for Aggregator {
    fn from(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }
}

impl Aggregator {
    const CHUNK: usize = 1 << 10;

    /// the matchups this run simulates directly
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// one deck's contribution across all simulated matchups
    fn play(&self, deck: Deck, tally: &mut Tally) {
        for &pair in self.pairs.iter() {
            tally.witness(pair, Outcome::from(Score::from((deck, pair))));
        }
        tally.count();
    }

    /// tally a stored deck collection, chunk-parallel. the collection
    /// is read-only; only one chunk's decks are in flight per worker.
    pub fn aggregate(&self, decks: &[Deck]) -> anyhow::Result<Tally> {
        anyhow::ensure!(!decks.is_empty(), "aggregation over zero decks is undefined");
        log::info!("{:<32}{:<16}", "tallying decks", decks.len());
        Ok(decks
            .par_chunks(Self::CHUNK)
            .map(|chunk| self.tally(chunk))
            .reduce(Tally::default, |a, b| a + b))
    }

    /// tally n seeded decks without ever materializing the collection;
    /// rayon folds worker-locally and reduces at the join.
    pub fn simulate(&self, seed: u64, n: usize) -> anyhow::Result<Tally> {
        anyhow::ensure!(n > 0, "aggregation over zero decks is undefined");
        log::info!("{:<32}{:<16}", "simulating decks", n);
        Ok((0..n as u64)
            .into_par_iter()
            .map(|i| Shuffler::deck(seed + i))
            .fold(Tally::default, |mut tally, deck| {
                self.play(deck, &mut tally);
                tally
            })
            .reduce(Tally::default, |a, b| a + b))
    }

    /// full pipeline: tally, normalize, complete
    pub fn report(&self, decks: &[Deck]) -> anyhow::Result<Report> {
        Report::try_from(&self.aggregate(decks)?)?.complete(&self.pairs)
    }

    fn tally(&self, decks: &[Deck]) -> Tally {
        decks.iter().fold(Tally::default(), |mut tally, &deck| {
            self.play(deck, &mut tally);
            tally
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_fails() {
        assert!(Aggregator::default().aggregate(&[]).is_err());
        assert!(Aggregator::default().simulate(1, 0).is_err());
    }

    #[test]
    fn chunking_cannot_change_counts() {
        let aggregator = Aggregator::default();
        let decks = Shuffler::decks(1, 64).map(|(_, d)| d).collect::<Vec<_>>();
        let whole = aggregator.tally(&decks);
        let halves = aggregator.tally(&decks[..32]) + aggregator.tally(&decks[32..]);
        let singles = decks
            .iter()
            .map(|d| aggregator.tally(std::slice::from_ref(d)))
            .fold(Tally::default(), |a, b| a + b);
        assert_eq!(whole, halves);
        assert_eq!(whole, singles);
        assert_eq!(whole, aggregator.aggregate(&decks).unwrap());
    }

    #[test]
    fn streaming_matches_stored() {
        let aggregator = Aggregator::default();
        let decks = Shuffler::decks(5, 40).map(|(_, d)| d).collect::<Vec<_>>();
        assert_eq!(
            aggregator.aggregate(&decks).unwrap(),
            aggregator.simulate(5, 40).unwrap()
        );
    }

    #[test]
    fn deck_count_is_tracked() {
        let tally = Aggregator::default().simulate(1, 25).unwrap();
        assert_eq!(tally.n(), 25);
    }

    #[test]
    fn symmetry_invariant_on_a_real_run() {
        // end to end over seeded decks: every off-diagonal pair of
        // cells must complement to 1 and ties must be symmetric, for
        // both scoring rules
        let aggregator = Aggregator::default();
        let tally = aggregator.simulate(1, 500).unwrap();
        let report = Report::try_from(&tally)
            .unwrap()
            .complete(aggregator.pairs())
            .unwrap();
        for i in 0..crate::N_SEQUENCES {
            for j in (0..crate::N_SEQUENCES).filter(|&j| j != i) {
                for (wins, ties) in [
                    (&report.cards, &report.cards_ties),
                    (&report.tricks, &report.tricks_ties),
                ] {
                    let sum = wins.get(i, j) + wins.get(j, i) + ties.get(i, j);
                    assert!((sum - 1.).abs() < 1e-9, "cell [{}][{}]", i, j);
                    assert!((ties.get(i, j) - ties.get(j, i)).abs() < 1e-9);
                }
            }
        }
    }
}
